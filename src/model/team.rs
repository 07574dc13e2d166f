use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// A competing side in a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub image: String,
    /// Skill rating. Simulated scores never exceed it.
    pub stars: u32,
    /// `None` until the match has been simulated.
    #[serde(default)]
    pub score: Option<u32>,
}

/// Which side of a match a team plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Visitor,
}
