use std::collections::HashMap;

use log::debug;

use super::elo;
use super::types::{RatingMap, RatingValue};
use crate::config::settings::RatingSettings;
use crate::domain::models::Match;

/// Elo ratings replayed over one complete, chronologically ordered history
///
/// Each instance owns its map outright. Snapshots over sub-histories are
/// built as fresh engines rather than by mutating an existing one, so two
/// engines never share state.
pub struct RatingEngine {
    default_rating: RatingValue,
    ratings: RatingMap,
}

impl RatingEngine {
    /// Replay `matches` (already sorted by date) into one rating per player.
    ///
    /// Ratings are path dependent: the same matches in a different order may
    /// produce different values, which is why callers pass complete ordered
    /// histories instead of incremental updates.
    pub fn from_matches(matches: &[Match], config: &RatingSettings) -> Self {
        let mut ratings = seed_ratings(matches, config.default_rating);

        for m in matches {
            let (new_winner, new_loser) =
                elo::apply_match(ratings[&m.winner], ratings[&m.loser], config.k_factor);
            ratings.insert(m.winner.clone(), new_winner);
            ratings.insert(m.loser.clone(), new_loser);
        }

        debug!(
            "Replayed {} matches into ratings for {} players",
            matches.len(),
            ratings.len()
        );

        Self {
            default_rating: config.default_rating,
            ratings,
        }
    }

    /// Current rating, falling back to the configured default for players
    /// with no history here.
    pub fn rating(&self, player: &str) -> RatingValue {
        self.ratings
            .get(player)
            .copied()
            .unwrap_or(self.default_rating)
    }

    pub fn ratings(&self) -> &RatingMap {
        &self.ratings
    }
}

fn seed_ratings(matches: &[Match], default_rating: RatingValue) -> RatingMap {
    let mut ratings = HashMap::new();
    for m in matches {
        ratings.entry(m.winner.clone()).or_insert(default_rating);
        ratings.entry(m.loser.clone()).or_insert(default_rating);
    }
    ratings
}
