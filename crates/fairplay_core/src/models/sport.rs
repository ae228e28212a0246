//! Sports and their position vocabularies.

use serde::{Deserialize, Serialize};

/// The four sports the allocator can build lineups for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Football,
    Basketball,
    Volleyball,
    Handball,
}

/// Every playing position across the four sports.
///
/// A single enum keeps `Player` one concrete type; a player's position is
/// only meaningful for the sport their roster was entered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    // Football
    Goalkeeper,
    Defense,
    Midfield,
    Attack,
    /// Utility player, slotted wherever a lineup comes up short.
    Joker,
    // Basketball
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
    // Volleyball
    Setter,
    OutsideHitter,
    MiddleBlocker,
    OppositeHitter,
    Libero,
    // Handball
    HandballGoalkeeper,
    LeftWing,
    LeftBack,
    CentreBack,
    RightBack,
    RightWing,
    Pivot,
}

impl Sport {
    /// Positions of this sport, in priority order.
    ///
    /// The order is load-bearing: formation slots are filled position by
    /// position in exactly this order, and team lineups are reported in it.
    pub fn positions(&self) -> &'static [Position] {
        match self {
            Sport::Football => &[
                Position::Goalkeeper,
                Position::Defense,
                Position::Midfield,
                Position::Attack,
                Position::Joker,
            ],
            Sport::Basketball => &[
                Position::PointGuard,
                Position::ShootingGuard,
                Position::SmallForward,
                Position::PowerForward,
                Position::Center,
            ],
            Sport::Volleyball => &[
                Position::Setter,
                Position::OutsideHitter,
                Position::MiddleBlocker,
                Position::OppositeHitter,
                Position::Libero,
            ],
            Sport::Handball => &[
                Position::HandballGoalkeeper,
                Position::LeftWing,
                Position::LeftBack,
                Position::CentreBack,
                Position::RightBack,
                Position::RightWing,
                Position::Pivot,
            ],
        }
    }
}
