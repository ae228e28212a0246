//! Single-elimination bracket engine.
//!
//! Builds a bracket from shuffled entrants, seeds byes, and propagates match
//! winners round to round; the golden-chance secondary draw has its own
//! submodule. A bracket is an immutable snapshot: every transition
//! returns a fresh `Bracket` and leaves its input untouched, so a rejected
//! call can never corrupt the caller's state.

mod entrant;
mod golden_chance;
mod types;

pub use entrant::Entrant;
pub use golden_chance::GoldenChance;
pub use types::{BracketMatch, Slot};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{BracketError, Result};

/// Ordered rounds of matches. Round 0 is seeded from the shuffled entrants;
/// the last round is the final with exactly one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bracket<T> {
    rounds: Vec<Vec<BracketMatch<T>>>,
    golden_chance: GoldenChance<T>,
}

impl<T: Entrant> Bracket<T> {
    /// Build a bracket over `entrants`, shuffling for seeding.
    ///
    /// With `n` entrants, `next_power_of_two(n) - n` of them draw a bye and
    /// auto-advance; the rest are paired off in shuffled order. Fewer than
    /// two entrants yields an empty bracket (no rounds) — refusing to start
    /// such a tournament is the caller's job.
    pub fn build(mut entrants: Vec<T>, rng: &mut impl Rng) -> Self {
        if entrants.len() < 2 {
            return Self {
                rounds: Vec::new(),
                golden_chance: GoldenChance::Unavailable,
            };
        }
        entrants.shuffle(rng);

        let n = entrants.len();
        let byes = n.next_power_of_two() - n;

        // The front of the shuffled order absorbs the byes.
        let paired = entrants.split_off(byes);
        let mut first_round: Vec<BracketMatch<T>> = entrants
            .into_iter()
            .enumerate()
            .map(|(i, e)| BracketMatch::bye(0, i, e))
            .collect();
        // `paired` has even length: 2n - next_power_of_two(n) for n >= 2.
        let mut pairs = paired.into_iter();
        while let (Some(a), Some(b)) = (pairs.next(), pairs.next()) {
            let index = first_round.len();
            first_round.push(BracketMatch::new(
                0,
                index,
                [Slot::Taken(a), Slot::Taken(b)],
            ));
        }

        let mut rounds = vec![first_round];
        loop {
            let prev = &rounds[rounds.len() - 1];
            if prev.len() <= 1 {
                break;
            }
            let round_idx = rounds.len();
            let next: Vec<BracketMatch<T>> = prev
                .chunks(2)
                .enumerate()
                .map(|(i, pair)| {
                    let feed = |m: Option<&BracketMatch<T>>| {
                        m.and_then(|m| m.winner.clone())
                            .map_or(Slot::Empty, Slot::Taken)
                    };
                    BracketMatch::new(
                        round_idx,
                        i,
                        [feed(pair.first()), feed(pair.get(1))],
                    )
                })
                .collect();
            rounds.push(next);
        }

        log::debug!(
            "built bracket: {} entrants, {} byes, {} rounds",
            n,
            byes,
            rounds.len()
        );
        Self {
            rounds,
            golden_chance: if byes > 0 {
                GoldenChance::Pending
            } else {
                GoldenChance::Unavailable
            },
        }
    }

    /// Rounds, first round first; empty when built from fewer than two
    /// entrants.
    pub fn rounds(&self) -> &[Vec<BracketMatch<T>>] {
        &self.rounds
    }

    /// Where the golden chance stands for this snapshot.
    pub fn golden_chance(&self) -> &GoldenChance<T> {
        &self.golden_chance
    }

    /// The tournament winner, once the final is decided.
    pub fn champion(&self) -> Option<&T> {
        self.rounds.last()?.first()?.winner.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.champion().is_some()
    }

    /// Redraw policy: a fresh draw over the same entrants is only allowed
    /// while no real (non-bye) first-round match has been decided.
    pub fn can_redraw(&self) -> bool {
        self.rounds.first().map_or(true, |r0| {
            !r0.iter().any(|m| !m.is_bye_match() && m.is_decided())
        })
    }

    /// Number of entrants seeded into the first round.
    pub fn entrant_count(&self) -> usize {
        self.rounds.first().map_or(0, |r0| {
            r0.iter()
                .flat_map(|m| m.participants.iter())
                .filter(|slot| slot.entrant().is_some())
                .count()
        })
    }

    /// Declare `winner` for the match at (`round_idx`, `match_idx`).
    ///
    /// Returns the advanced snapshot: the match gains its winner, and —
    /// below the final — the winner is fed into round `round_idx + 1`,
    /// match `match_idx / 2`, side `match_idx % 2`. Everything else is a
    /// structural copy of `self`.
    pub fn advance(&self, round_idx: usize, match_idx: usize, winner: &T) -> Result<Self> {
        if self.is_complete() {
            return Err(BracketError::TournamentComplete);
        }
        let target = self
            .rounds
            .get(round_idx)
            .and_then(|round| round.get(match_idx))
            .ok_or(BracketError::MatchOutOfRange {
                round: round_idx,
                index: match_idx,
            })?;
        if target.is_bye_match() {
            return Err(BracketError::ByeMatch {
                round: round_idx,
                index: match_idx,
            });
        }
        if target.is_decided() {
            return Err(BracketError::MatchAlreadyDecided {
                round: round_idx,
                index: match_idx,
            });
        }
        if !target.has_participant(&winner.id()) {
            return Err(BracketError::NotAParticipant {
                name: winner.name().to_string(),
            });
        }

        let mut next = self.clone();
        next.rounds[round_idx][match_idx].winner = Some(winner.clone());
        if round_idx + 1 < next.rounds.len() {
            let side = match_idx % 2;
            next.rounds[round_idx + 1][match_idx / 2].participants[side] =
                Slot::Taken(winner.clone());
        }
        Ok(next)
    }
}
