use serde::{Deserialize, Serialize};

use super::place::Place;
use super::team::{Side, Team};

/// A list of matches, in the order the server returned them.
pub type MatchList = Vec<Match>;

/// One fixture between two teams at a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub place: Place,
    pub description: String,
    pub home_team: Team,
    pub visitor_team: Team,
}

impl Match {
    /// The team playing on `side`.
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home_team,
            Side::Visitor => &self.visitor_team,
        }
    }

    /// Mutable access to the team playing on `side`.
    pub fn team_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::Home => &mut self.home_team,
            Side::Visitor => &mut self.visitor_team,
        }
    }

    /// Both scores, if the match has been simulated.
    pub fn scores(&self) -> Option<(u32, u32)> {
        self.home_team.score.zip(self.visitor_team.score)
    }
}
