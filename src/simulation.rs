use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::model::{Match, Side, Team};

/// Scores produced for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedScore {
    pub home: u32,
    pub visitor: u32,
}

/// Draws random scores bounded by each team's star rating.
///
/// The generator is owned by the engine, so tests can hand in a seeded or
/// mock [`Rng`] and production code can use [`SimulationEngine::from_entropy`].
#[derive(Debug, Clone)]
pub struct SimulationEngine<R = StdRng> {
    rng: R,
}

impl SimulationEngine<StdRng> {
    /// Engine backed by an OS-seeded [`StdRng`].
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible engine: the same seed yields the same scores.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for SimulationEngine<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> SimulationEngine<R> {
    /// Engine drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform score in `0..=team.stars`.
    ///
    /// The upper bound is inclusive: a five star team can score five.
    pub fn simulate(&mut self, team: &Team) -> u32 {
        self.rng.gen_range(0..=team.stars)
    }

    /// Scores for both sides of `fixture`, home first.
    pub fn simulate_match(&mut self, fixture: &Match) -> SimulatedScore {
        let home = self.simulate(fixture.team(Side::Home));
        let visitor = self.simulate(fixture.team(Side::Visitor));
        trace!(home, visitor, place = %fixture.place.name, "simulated match");
        SimulatedScore { home, visitor }
    }

    /// Draw fresh scores for `fixture` and store them on both teams.
    pub fn apply(&mut self, fixture: &mut Match) -> SimulatedScore {
        let score = self.simulate_match(fixture);
        fixture.team_mut(Side::Home).score = Some(score.home);
        fixture.team_mut(Side::Visitor).score = Some(score.visitor);
        score
    }
}
