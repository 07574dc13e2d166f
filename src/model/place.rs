use serde::{Deserialize, Serialize};

/// The venue a match is played at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub image: String,
}
