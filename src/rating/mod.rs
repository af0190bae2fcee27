pub mod elo;
pub mod engine;
pub mod types;

pub use engine::RatingEngine;
pub use types::{PlayerName, RatingMap, RatingValue};
