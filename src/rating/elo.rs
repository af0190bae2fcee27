use super::types::RatingValue;

/// Logistic scale: a 400-point gap makes the stronger player a 10:1
/// favourite.
const RATING_SCALE: f64 = 400.0;

/// Probability that `rating` beats `opponent`.
pub fn expected_win(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) / RATING_SCALE))
}

/// Points transferred from loser to winner for one match, before rounding.
/// The transfer is symmetric, so pre-rounding the pair sum is preserved.
pub fn exchange(winner: RatingValue, loser: RatingValue, k_factor: f64) -> f64 {
    k_factor * (1.0 - expected_win(winner as f64, loser as f64))
}

/// New (winner, loser) ratings after one match.
///
/// Each side is rounded to the nearest whole point immediately. The
/// quantization is applied after every single match, and later updates
/// compound on the rounded values.
pub fn apply_match(
    winner: RatingValue,
    loser: RatingValue,
    k_factor: f64,
) -> (RatingValue, RatingValue) {
    let delta = exchange(winner, loser, k_factor);
    let new_winner = (winner as f64 + delta).round() as RatingValue;
    let new_loser = (loser as f64 - delta).round() as RatingValue;
    (new_winner, new_loser)
}
