use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use strum_macros::Display;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use crate::client::MatchSource;
use crate::collection::{MatchCollection, MatchListObserver};
use crate::error::{Result, SimulatorError};
use crate::model::{Match, MatchList};
use crate::simulation::SimulationEngine;
use crate::view::MatchDetail;

/// Identifies one refresh request. Later requests get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

/// What happened to a fetch result when it reached the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RefreshStatus {
    /// The list was replaced with `count` matches.
    Applied { count: usize },
    /// The fetch failed; the previous list is still shown.
    Failed,
    /// A newer refresh was requested after this one.
    Stale,
    /// The board was disposed before the result arrived.
    Ignored,
}

#[derive(Debug)]
pub(crate) struct FetchOutcome {
    ticket: RefreshTicket,
    result: Result<MatchList>,
}

/// Controller for the match list screen.
///
/// Owns the collection, the simulation engine and the match source. Fetches
/// run as Tokio tasks and report back through a channel; only the result of
/// the most recent request is ever applied, and nothing is applied once the
/// board is disposed. All mutation goes through `&mut self`.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use match_simulator::{MatchBoard, MatchClient, RefreshStatus, SimulationEngine};
///
/// let mut board = MatchBoard::new(MatchClient::new(), SimulationEngine::from_entropy(), ());
/// if let RefreshStatus::Applied { count } = board.refresh().await {
///     println!("{count} matches");
///     board.simulate();
/// }
/// # }
/// ```
pub struct MatchBoard<S, O = (), R = StdRng> {
    source: Arc<S>,
    engine: SimulationEngine<R>,
    matches: MatchCollection<O>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    last_refreshed: Option<DateTime<Utc>>,
    disposed: bool,
}

impl<S, O, R> MatchBoard<S, O, R>
where
    S: MatchSource + Send + Sync + 'static,
    O: MatchListObserver,
    R: Rng,
{
    /// Build an empty board around `source`, `engine` and the display layer.
    ///
    /// Nothing is fetched until [`MatchBoard::request_refresh`] or
    /// [`MatchBoard::refresh`] is called.
    pub fn new(source: S, engine: SimulationEngine<R>, observer: O) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            source: Arc::new(source),
            engine,
            matches: MatchCollection::new(observer),
            generation: 0,
            in_flight: None,
            outcome_tx,
            outcome_rx,
            last_refreshed: None,
            disposed: false,
        }
    }

    /// Start fetching the match list in the background.
    ///
    /// Any fetch still running is aborted. Fails with
    /// [`SimulatorError::NoRuntime`] outside a Tokio runtime.
    pub fn request_refresh(&mut self) -> Result<RefreshTicket> {
        let runtime = tokio::runtime::Handle::try_current()?;
        self.abort_in_flight();
        self.generation += 1;
        let ticket = RefreshTicket(self.generation);
        if self.disposed {
            return Ok(ticket);
        }

        let source = Arc::clone(&self.source);
        let tx = self.outcome_tx.clone();
        self.in_flight = Some(runtime.spawn(async move {
            let result = source.fetch_matches().await;
            let _ = tx.send(FetchOutcome { ticket, result });
        }));
        debug!(ticket = ticket.0, "refresh requested");
        Ok(ticket)
    }

    /// Wait for the next fetch result and apply it.
    ///
    /// Returns `None` when no fetch is running and no result is queued.
    pub async fn next_outcome(&mut self) -> Option<RefreshStatus> {
        if let Ok(outcome) = self.outcome_rx.try_recv() {
            return Some(self.apply_outcome(outcome));
        }

        let handle = self.in_flight.as_mut()?;
        let joined = handle.await;
        self.in_flight = None;
        if let Err(e) = joined {
            return Some(self.report_failure(SimulatorError::FetchTask(e.to_string())));
        }

        let outcome = self.outcome_rx.try_recv().ok()?;
        Some(self.apply_outcome(outcome))
    }

    /// Fetch the match list and wait until the result is applied.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> RefreshStatus {
        if let Err(error) = self.request_refresh() {
            return self.report_failure(error);
        }
        loop {
            match self.next_outcome().await {
                Some(RefreshStatus::Stale) => continue,
                Some(status) => return status,
                None => return RefreshStatus::Ignored,
            }
        }
    }

    pub(crate) fn apply_outcome(&mut self, outcome: FetchOutcome) -> RefreshStatus {
        let FetchOutcome { ticket, result } = outcome;
        if self.disposed {
            debug!(ticket = ticket.0, "board disposed, dropping fetch result");
            return RefreshStatus::Ignored;
        }
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "dropping superseded fetch result"
            );
            return RefreshStatus::Stale;
        }

        self.in_flight = None;
        match result {
            Ok(matches) => {
                let count = matches.len();
                self.matches.replace_all(matches);
                self.last_refreshed = Some(Utc::now());
                RefreshStatus::Applied { count }
            }
            Err(error) => self.report_failure(error),
        }
    }

    fn report_failure(&mut self, error: SimulatorError) -> RefreshStatus {
        warn!(error = %error, "refresh failed, keeping current matches");
        self.matches.observer_mut().on_fetch_failed(&error);
        RefreshStatus::Failed
    }

    /// Give every match fresh random scores. Returns how many were simulated.
    pub fn simulate(&mut self) -> usize {
        if self.disposed {
            return 0;
        }
        self.matches.simulate_all(&mut self.engine)
    }

    /// Copy of the match at `index`, for handing to the detail screen.
    pub fn select(&self, index: usize) -> Result<Match> {
        self.matches.get(index).cloned()
    }

    /// Detail screen binding for the match at `index`.
    pub fn detail(&self, index: usize) -> Result<MatchDetail> {
        self.matches.get(index).map(MatchDetail::from)
    }

    /// Stop accepting fetch results. The running fetch, if any, is aborted.
    pub fn dispose(&mut self) {
        self.abort_in_flight();
        self.disposed = true;
        debug!("board disposed");
    }
}

impl<S, O, R> MatchBoard<S, O, R> {
    /// The matches currently shown, with their observer.
    pub fn matches(&self) -> &MatchCollection<O> {
        &self.matches
    }

    /// True while a requested fetch has not been applied yet.
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// When a fetch result was last applied.
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    /// True once [`MatchBoard::dispose`] has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl<S, O, R> Drop for MatchBoard<S, O, R> {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}
