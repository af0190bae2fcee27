use std::collections::HashMap;

/// Canonical player display name, the merge key for all rating work.
pub type PlayerName = String;
/// Ratings live as whole points; every update is rounded before storage.
pub type RatingValue = i32;
pub type RatingMap = HashMap<PlayerName, RatingValue>;
