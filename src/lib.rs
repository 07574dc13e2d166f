//! Fetch a published list of football matches, keep it as an ordered list for
//! display, and simulate scores bounded by each team's star rating.
//!
//! [`MatchClient`] fetches the list, [`MatchBoard`] drives the list screen
//! (refresh, simulate, select) and [`SimulationEngine`] draws the scores.

pub(crate) mod api;
pub mod board;
pub mod client;
pub mod collection;
pub mod error;
pub mod model;
pub mod simulation;
pub mod view;

pub use board::{MatchBoard, RefreshStatus, RefreshTicket};
pub use client::{MatchClient, MatchSource, MATCHES_URL};
pub use collection::{MatchCollection, MatchId, MatchListObserver};
pub use error::{Result, SimulatorError};
pub use model::*;
pub use simulation::{SimulatedScore, SimulationEngine};
pub use view::{MatchDetail, MatchRow, TeamDetail};
