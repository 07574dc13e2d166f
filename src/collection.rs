use itertools::Itertools;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SimulatorError};
use crate::model::{Match, MatchList};
use crate::simulation::SimulationEngine;
use crate::view::MatchRow;

/// Display layer notified when the list changes.
///
/// Both methods default to doing nothing, so an implementor only overrides
/// what it renders.
pub trait MatchListObserver {
    /// The whole list was replaced.
    fn on_list_changed(&mut self) {}

    /// Only the match at `index` changed.
    fn on_item_changed(&mut self, _index: usize) {}

    /// A refresh failed and the current list was kept.
    fn on_fetch_failed(&mut self, _error: &SimulatorError) {}
}

impl MatchListObserver for () {}

/// Identifier handed out by a [`MatchCollection`] when a match enters it.
///
/// Unlike a position, it stays attached to the same match until the list is
/// replaced, and is never reused by the same collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MatchId(u64);

impl MatchId {
    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: MatchId,
    fixture: Match,
}

/// Ordered matches backing the list screen.
#[derive(Debug)]
pub struct MatchCollection<O = ()> {
    entries: Vec<Entry>,
    next_id: u64,
    observer: O,
}

impl Default for MatchCollection<()> {
    fn default() -> Self {
        Self::new(())
    }
}

impl<O: MatchListObserver> MatchCollection<O> {
    /// Empty collection reporting changes to `observer`.
    pub fn new(observer: O) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            observer,
        }
    }

    /// Drop the current contents and store `matches` in their given order.
    pub fn replace_all(&mut self, matches: MatchList) {
        let first_id = self.next_id;
        self.entries = matches
            .into_iter()
            .zip(first_id..)
            .map(|(fixture, id)| Entry {
                id: MatchId(id),
                fixture,
            })
            .collect_vec();
        self.next_id = first_id + self.entries.len() as u64;
        debug!(count = self.entries.len(), "replaced match list");
        self.observer.on_list_changed();
    }

    /// The match at `index`, in display order.
    pub fn get(&self, index: usize) -> Result<&Match> {
        self.entries
            .get(index)
            .map(|e| &e.fixture)
            .ok_or(SimulatorError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// The match carrying `id`, if it is still in the list.
    pub fn get_by_id(&self, id: MatchId) -> Option<&Match> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.fixture)
    }

    /// Current position of the match carrying `id`.
    pub fn position_of(&self, id: MatchId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Id of the match at `index`.
    pub fn id_at(&self, index: usize) -> Result<MatchId> {
        self.entries
            .get(index)
            .map(|e| e.id)
            .ok_or(SimulatorError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<MatchId> {
        self.entries.iter().map(|e| e.id).collect_vec()
    }

    /// Give every match new scores, notifying one item change per position.
    ///
    /// Returns how many matches were simulated.
    pub fn simulate_all<R: Rng>(&mut self, engine: &mut SimulationEngine<R>) -> usize {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            engine.apply(&mut entry.fixture);
            self.observer.on_item_changed(index);
        }
        debug!(count = self.entries.len(), "simulated matches");
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.entries.iter().map(|e| &e.fixture)
    }

    /// Row bindings for the list screen, in display order.
    pub fn rows(&self) -> Vec<MatchRow> {
        self.iter().map(MatchRow::from).collect_vec()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
