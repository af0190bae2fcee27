use std::collections::HashMap;

use ndarray::Array2;

use crate::domain::models::Match;
use crate::domain::period::PeriodWindow;

/// Pairwise results over a sorted player axis
///
/// `wins[[i, j]]` counts wins of player `i` over player `j`, and
/// `losses[[j, i]]` mirrors every increment, so the two matrices stay
/// transposes of each other by construction.
#[derive(Debug, Clone)]
pub struct HeadToHeadMatrix {
    pub players: Vec<String>,
    pub wins: Array2<u32>,
    pub losses: Array2<u32>,
}

impl HeadToHeadMatrix {
    pub fn index_of(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|name| name == player)
    }

    /// Total matches played between axis positions `i` and `j`.
    pub fn total_between(&self, i: usize, j: usize) -> u32 {
        self.wins[[i, j]] + self.wins[[j, i]]
    }
}

/// Build win and loss matrices for the window, or `None` when fewer than
/// two players appear in it.
pub fn build(matches: &[Match], window: &PeriodWindow) -> Option<HeadToHeadMatrix> {
    let in_window: Vec<&Match> = matches
        .iter()
        .filter(|m| window.contains(m.date))
        .collect();

    let players = sorted_players(&in_window);
    if players.len() < 2 {
        return None;
    }

    let player_to_idx: HashMap<&str, usize> = players
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.as_str(), idx))
        .collect();

    let n_players = players.len();
    let mut wins = Array2::<u32>::zeros((n_players, n_players));
    let mut losses = Array2::<u32>::zeros((n_players, n_players));

    for m in &in_window {
        let i = player_to_idx[m.winner.as_str()];
        let j = player_to_idx[m.loser.as_str()];
        wins[[i, j]] += 1;
        losses[[j, i]] += 1;
    }

    Some(HeadToHeadMatrix {
        players,
        wins,
        losses,
    })
}

fn sorted_players(matches: &[&Match]) -> Vec<String> {
    let mut players: Vec<String> = matches
        .iter()
        .flat_map(|m| [m.winner.clone(), m.loser.clone()])
        .collect();
    players.sort();
    players.dedup();
    players
}
