//! Golden chance: a second life for one first-round loser.
//!
//! When the entrant count is not a power of two, one entrant reaches the
//! second round without playing. Once every real first-round match is
//! decided, the organizer may draw one of the losers at random and stage an
//! out-of-bracket match between the drawn loser and the bye entrant; the
//! result is applied back with [`Bracket::resolve_golden_chance`], which
//! overwrites the bye entrant's second-round slot with whoever won.
//!
//! This override is the only place an already-placed participant can be
//! replaced; winner propagation everywhere else only fills empty slots.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Bracket, Entrant, Slot};
use crate::error::{BracketError, Result};

/// Where the golden chance stands for a bracket snapshot.
///
/// The draw consumes the loser pool, so the phase has to travel with the
/// snapshot: a second draw must be refused even if the caller re-reads the
/// rounds and finds the same losers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoldenChance<T> {
    /// The entrant count was a power of two; nobody drew a bye.
    Unavailable,
    /// A bye exists and no loser has been drawn yet.
    Pending,
    /// A loser has been drawn; the out-of-bracket match is in the
    /// organizer's hands.
    Drawn { lucky_loser: T },
    /// The override has been applied.
    Resolved,
}

impl<T: Entrant> Bracket<T> {
    /// The entrant whose first-round opponent is the bye placeholder.
    ///
    /// With several byes this is the first one drawn; the golden chance
    /// only ever contests a single slot.
    pub fn bye_entrant(&self) -> Option<&T> {
        self.rounds()
            .first()?
            .iter()
            .find(|m| m.is_bye_match())
            .and_then(|m| m.participants[0].entrant())
    }

    /// Losers of the real first-round matches.
    ///
    /// Empty until every real first-round match is decided; the pool only
    /// forms whole.
    pub fn first_round_losers(&self) -> Vec<&T> {
        let Some(r0) = self.rounds().first() else {
            return Vec::new();
        };
        let real: Vec<_> = r0.iter().filter(|m| !m.is_bye_match()).collect();
        if real.is_empty() || !real.iter().all(|m| m.is_decided()) {
            return Vec::new();
        }
        real.into_iter().filter_map(|m| m.loser()).collect()
    }

    /// Draw the lucky loser.
    ///
    /// Returns the snapshot with the draw recorded (rounds untouched) and
    /// the drawn entrant. Requires a bye, a finished first round, and that
    /// no draw has happened yet.
    pub fn draw_golden_chance(&self, rng: &mut impl Rng) -> Result<(Self, T)> {
        match self.golden_chance() {
            GoldenChance::Unavailable => return Err(BracketError::NoByeEntrant),
            GoldenChance::Drawn { .. } | GoldenChance::Resolved => {
                return Err(BracketError::GoldenChanceAlreadyDrawn)
            }
            GoldenChance::Pending => {}
        }
        let losers = self.first_round_losers();
        let lucky = losers
            .choose(rng)
            .copied()
            .cloned()
            .ok_or(BracketError::FirstRoundIncomplete)?;

        let mut next = self.clone();
        next.golden_chance = GoldenChance::Drawn {
            lucky_loser: lucky.clone(),
        };
        log::debug!("golden chance drawn: {}", lucky.name());
        Ok((next, lucky))
    }

    /// Apply the out-of-bracket match result.
    ///
    /// `winner` — the bye entrant defending the slot, or the lucky loser
    /// taking it over — replaces the bye entrant in their second-round
    /// match. Only valid while that match is still undecided; the rest of
    /// the bracket is untouched.
    pub fn resolve_golden_chance(&self, winner: &T) -> Result<Self> {
        let lucky = match self.golden_chance() {
            GoldenChance::Unavailable => return Err(BracketError::NoByeEntrant),
            GoldenChance::Pending => return Err(BracketError::GoldenChanceNotDrawn),
            GoldenChance::Resolved => return Err(BracketError::GoldenChanceAlreadyResolved),
            GoldenChance::Drawn { lucky_loser } => lucky_loser,
        };
        let bye = self.bye_entrant().ok_or(BracketError::NoByeEntrant)?;
        if winner.id() != bye.id() && winner.id() != lucky.id() {
            return Err(BracketError::NotAParticipant {
                name: winner.name().to_string(),
            });
        }

        let bye_id = bye.id();
        let placement = self.rounds().get(1).and_then(|round| {
            round.iter().enumerate().find_map(|(i, m)| {
                m.participants
                    .iter()
                    .position(|slot| slot.holds(&bye_id))
                    .map(|side| (i, side, m.is_decided()))
            })
        });
        let (match_idx, side, decided) =
            placement.ok_or(BracketError::OverrideWindowClosed)?;
        if decided {
            return Err(BracketError::OverrideWindowClosed);
        }

        let mut next = self.clone();
        next.rounds[1][match_idx].participants[side] = Slot::Taken(winner.clone());
        next.golden_chance = GoldenChance::Resolved;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, Player, Position};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn players(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| {
                Player::with_id(
                    format!("p{i}"),
                    format!("Player {i}"),
                    Level::Medium,
                    Position::Joker,
                )
            })
            .collect()
    }

    /// Three entrants: one bye match, one real match, one final. Decides the
    /// real match in favor of side 0 and returns the snapshot plus the
    /// real-match loser.
    fn three_entrant_setup(seed: u64) -> (Bracket<Player>, Player) {
        let bracket = Bracket::build(players(3), &mut rng(seed));
        let (idx, real) = bracket.rounds()[0]
            .iter()
            .enumerate()
            .find(|(_, m)| !m.is_bye_match())
            .map(|(i, m)| (i, m.clone()))
            .expect("one real match");
        let winner = real.participants[0].entrant().unwrap().clone();
        let loser = real.participants[1].entrant().unwrap().clone();
        (bracket.advance(0, idx, &winner).unwrap(), loser)
    }

    #[test]
    fn no_losers_before_the_first_round_finishes() {
        let bracket = Bracket::build(players(5), &mut rng(1));
        assert!(bracket.bye_entrant().is_some());
        assert!(bracket.first_round_losers().is_empty());

        let err = bracket.draw_golden_chance(&mut rng(2)).unwrap_err();
        assert_eq!(err, BracketError::FirstRoundIncomplete);
    }

    #[test]
    fn full_field_has_no_golden_chance() {
        let bracket = Bracket::build(players(4), &mut rng(3));
        assert!(bracket.bye_entrant().is_none());
        assert_eq!(
            bracket.draw_golden_chance(&mut rng(4)).unwrap_err(),
            BracketError::NoByeEntrant
        );
        assert_eq!(
            bracket
                .resolve_golden_chance(&players(1)[0])
                .unwrap_err(),
            BracketError::NoByeEntrant
        );
    }

    #[test]
    fn draw_picks_a_first_round_loser_once() {
        let (bracket, loser) = three_entrant_setup(5);
        let (drawn, lucky) = bracket.draw_golden_chance(&mut rng(6)).unwrap();
        assert_eq!(lucky.id, loser.id);
        assert_eq!(
            *drawn.golden_chance(),
            GoldenChance::Drawn {
                lucky_loser: lucky.clone()
            }
        );
        // The draw changes no match anywhere.
        assert_eq!(bracket.rounds(), drawn.rounds());

        // The pool is consumed; a second draw is refused.
        assert_eq!(
            drawn.draw_golden_chance(&mut rng(7)).unwrap_err(),
            BracketError::GoldenChanceAlreadyDrawn
        );
    }

    #[test]
    fn resolve_requires_a_draw_first() {
        let (bracket, loser) = three_entrant_setup(8);
        assert_eq!(
            bracket.resolve_golden_chance(&loser).unwrap_err(),
            BracketError::GoldenChanceNotDrawn
        );
    }

    #[test]
    fn lucky_loser_takes_over_exactly_one_slot() {
        let (bracket, _) = three_entrant_setup(9);
        let bye = bracket.bye_entrant().unwrap().clone();
        let (drawn, lucky) = bracket.draw_golden_chance(&mut rng(10)).unwrap();

        let resolved = drawn.resolve_golden_chance(&lucky).unwrap();
        assert_eq!(*resolved.golden_chance(), GoldenChance::Resolved);

        // Exactly one participant slot differs across the whole bracket,
        // and it is the one that held the bye entrant.
        let mut changed = Vec::new();
        for (r, round) in drawn.rounds().iter().enumerate() {
            for (m, before) in round.iter().enumerate() {
                for side in 0..2 {
                    let after = &resolved.rounds()[r][m].participants[side];
                    if *after != before.participants[side] {
                        changed.push((r, m, side, before.participants[side].clone()));
                    }
                }
            }
        }
        assert_eq!(changed.len(), 1);
        let (r, _, _, ref was) = changed[0];
        assert_eq!(r, 1);
        assert!(was.holds(&bye.id));
        assert!(resolved.rounds()[1][changed[0].1].participants[changed[0].2].holds(&lucky.id));
    }

    #[test]
    fn bye_entrant_can_defend_the_slot() {
        let (bracket, _) = three_entrant_setup(11);
        let bye = bracket.bye_entrant().unwrap().clone();
        let (drawn, _) = bracket.draw_golden_chance(&mut rng(12)).unwrap();

        let resolved = drawn.resolve_golden_chance(&bye).unwrap();
        // The slot occupant is unchanged; only the phase moved on.
        assert_eq!(drawn.rounds(), resolved.rounds());
        assert_eq!(*resolved.golden_chance(), GoldenChance::Resolved);
        assert_eq!(
            resolved.resolve_golden_chance(&bye).unwrap_err(),
            BracketError::GoldenChanceAlreadyResolved
        );
    }

    #[test]
    fn outsiders_cannot_win_the_golden_chance() {
        let (bracket, _) = three_entrant_setup(13);
        let (drawn, _) = bracket.draw_golden_chance(&mut rng(14)).unwrap();
        let outsider = Player::with_id("zz", "Outsider", Level::Strong, Position::Joker);
        assert_eq!(
            drawn.resolve_golden_chance(&outsider).unwrap_err(),
            BracketError::NotAParticipant {
                name: "Outsider".to_string()
            }
        );
    }

    #[test]
    fn override_window_closes_once_round_two_is_decided() {
        let (bracket, _) = three_entrant_setup(15);
        let bye = bracket.bye_entrant().unwrap().clone();
        let (drawn, lucky) = bracket.draw_golden_chance(&mut rng(16)).unwrap();

        // The final (the bye entrant's second-round match) gets decided
        // before the golden chance is played out.
        let finished = drawn.advance(1, 0, &bye).unwrap();
        assert_eq!(
            finished.resolve_golden_chance(&lucky).unwrap_err(),
            BracketError::OverrideWindowClosed
        );
    }
}
