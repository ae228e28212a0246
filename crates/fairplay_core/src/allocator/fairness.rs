//! Fairness rating over a finished allocation.

use crate::models::Team;
use serde::{Deserialize, Serialize};

/// Spread between the strongest and weakest team by starter level-sum.
pub fn fairness_skew(teams: &[Team]) -> u32 {
    let sums: Vec<u32> = teams.iter().map(Team::level_sum).collect();
    match (sums.iter().max(), sums.iter().min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    }
}

/// Coarse allocation quality the organizer sees on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FairnessRating {
    VeryBalanced,
    QuiteBalanced,
    NeedsSwap,
}

impl FairnessRating {
    /// Rate an allocation by its level-sum skew.
    pub fn rate(teams: &[Team]) -> FairnessRating {
        match fairness_skew(teams) {
            0 | 1 => FairnessRating::VeryBalanced,
            2 => FairnessRating::QuiteBalanced,
            _ => FairnessRating::NeedsSwap,
        }
    }
}
