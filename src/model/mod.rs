mod r#match;
mod place;
mod team;

pub use place::*;
pub use r#match::*;
pub use team::*;
