//! Bracket building blocks: participant slots and matches.

use serde::{Deserialize, Serialize};

use super::entrant::Entrant;

/// One participant slot of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot<T> {
    /// Waiting on an earlier match to produce a winner.
    Empty,
    /// Automatic-advance placeholder; rendered as "BYE".
    Bye,
    Taken(T),
}

impl<T: Entrant> Slot<T> {
    pub fn entrant(&self) -> Option<&T> {
        match self {
            Slot::Taken(entrant) => Some(entrant),
            _ => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    /// Whether this slot holds the entrant with `id`.
    pub fn holds(&self, id: &T::Id) -> bool {
        self.entrant().map_or(false, |e| e.id() == *id)
    }
}

/// A single pairing within a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch<T> {
    /// Stable display id, `r{round}m{index}` with 1-based rounds.
    pub id: String,
    pub participants: [Slot<T>; 2],
    pub winner: Option<T>,
}

impl<T: Entrant> BracketMatch<T> {
    pub(super) fn new(round: usize, index: usize, participants: [Slot<T>; 2]) -> Self {
        Self {
            id: format!("r{}m{}", round + 1, index),
            participants,
            winner: None,
        }
    }

    /// A bye pairing: `entrant` advances without playing.
    pub(super) fn bye(round: usize, index: usize, entrant: T) -> Self {
        Self {
            id: format!("r{}m{}", round + 1, index),
            participants: [Slot::Taken(entrant.clone()), Slot::Bye],
            winner: Some(entrant),
        }
    }

    pub fn is_bye_match(&self) -> bool {
        self.participants.iter().any(Slot::is_bye)
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    pub fn has_participant(&self, id: &T::Id) -> bool {
        self.participants.iter().any(|slot| slot.holds(id))
    }

    /// The non-winning participant, once the match is decided.
    pub fn loser(&self) -> Option<&T> {
        let winner = self.winner.as_ref()?;
        self.participants
            .iter()
            .filter_map(Slot::entrant)
            .find(|entrant| entrant.id() != winner.id())
    }
}
