//! Team produced by the allocator.

use crate::models::player::Player;
use crate::models::sport::Position;
use serde::{Deserialize, Serialize};

/// One allocated team: a captain, starters grouped by position, and a bench.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// 1-based team number; doubles as the team's bracket identity.
    pub id: u32,
    /// Default "Team N"; display naming and renaming belong to the UI.
    pub name: String,
    /// Picked uniformly at random from the starters; `None` when the team
    /// received no starters at all.
    pub captain: Option<Player>,
    /// Starter groups in the sport's priority order. Positions that ended up
    /// with nobody are omitted, never stored as empty groups.
    pub starters_by_position: Vec<(Position, Vec<Player>)>,
    /// Bench, in assignment order. Grows when the formation has no room for
    /// a starter-pool player; never shrinks after allocation.
    pub substitutes: Vec<Player>,
}

impl Team {
    /// All starters, flattened in position-priority order.
    pub fn starters(&self) -> Vec<&Player> {
        self.starters_by_position
            .iter()
            .flat_map(|(_, players)| players.iter())
            .collect()
    }

    /// Sum of starter level values; the quantity the balance bound is about.
    pub fn level_sum(&self) -> u32 {
        self.starters_by_position
            .iter()
            .flat_map(|(_, players)| players)
            .map(|p| p.level.value())
            .sum()
    }

    /// Starters plus substitutes.
    pub fn player_count(&self) -> usize {
        self.starters().len() + self.substitutes.len()
    }
}
