//! Per-sport formations: how many starters each position demands.

use crate::models::{Position, Sport};

/// Ordered starter requirements for one team's lineup.
///
/// Entries follow the sport's position priority order and never carry a
/// zero count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formation {
    slots: Vec<(Position, usize)>,
}

impl Formation {
    /// Formation for `sport` given the number of starters actually fielded.
    ///
    /// Basketball, volleyball and handball use fixed formations; football
    /// scales with headcount through a lookup keyed on `starter_count`.
    pub fn for_sport(sport: Sport, starter_count: usize) -> Formation {
        let slots = match sport {
            Sport::Football => football(starter_count),
            Sport::Basketball => vec![
                (Position::PointGuard, 1),
                (Position::ShootingGuard, 1),
                (Position::SmallForward, 1),
                (Position::PowerForward, 1),
                (Position::Center, 1),
            ],
            // Six on court; the libero rotates in from the bench and holds
            // no formation slot of its own.
            Sport::Volleyball => vec![
                (Position::Setter, 1),
                (Position::OutsideHitter, 2),
                (Position::MiddleBlocker, 2),
                (Position::OppositeHitter, 1),
            ],
            Sport::Handball => vec![
                (Position::HandballGoalkeeper, 1),
                (Position::LeftWing, 1),
                (Position::LeftBack, 1),
                (Position::CentreBack, 1),
                (Position::RightBack, 1),
                (Position::RightWing, 1),
                (Position::Pivot, 1),
            ],
        };
        Formation { slots }
    }

    /// Required starter count for `position`; zero when the formation has no
    /// slot for it.
    pub fn required(&self, position: Position) -> usize {
        self.slots
            .iter()
            .find(|(p, _)| *p == position)
            .map_or(0, |(_, n)| *n)
    }

    pub fn slots(&self) -> &[(Position, usize)] {
        &self.slots
    }

    /// Total starters the formation calls for.
    pub fn total(&self) -> usize {
        self.slots.iter().map(|(_, n)| n).sum()
    }
}

/// Football formation by starter headcount: goalkeeper-defense-midfield-attack.
fn football(starter_count: usize) -> Vec<(Position, usize)> {
    use Position::*;
    match starter_count {
        0 => Vec::new(),
        1 => vec![(Goalkeeper, 1)],
        2 | 3 => vec![(Goalkeeper, 1), (Defense, starter_count - 1)],
        4 => vec![(Goalkeeper, 1), (Defense, 1), (Midfield, 1), (Attack, 1)],
        5 => vec![(Goalkeeper, 1), (Defense, 2), (Midfield, 1), (Attack, 1)],
        6 => vec![(Goalkeeper, 1), (Defense, 2), (Midfield, 2), (Attack, 1)],
        7 => vec![(Goalkeeper, 1), (Defense, 3), (Midfield, 2), (Attack, 1)],
        8 => vec![(Goalkeeper, 1), (Defense, 3), (Midfield, 3), (Attack, 1)],
        9 => vec![(Goalkeeper, 1), (Defense, 3), (Midfield, 3), (Attack, 2)],
        10 => vec![(Goalkeeper, 1), (Defense, 4), (Midfield, 3), (Attack, 2)],
        _ => vec![(Goalkeeper, 1), (Defense, 4), (Midfield, 4), (Attack, 2)],
    }
}
