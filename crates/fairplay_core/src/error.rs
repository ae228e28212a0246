//! Failure modes of bracket transitions.
//!
//! Every variant is a caller contract violation. Transition operations
//! return the error without touching the snapshot they were called on, so
//! the caller's prior state is always still valid.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BracketError {
    #[error("no match at round {round}, index {index}")]
    MatchOutOfRange { round: usize, index: usize },

    #[error("match {index} of round {round} is a bye and advances automatically")]
    ByeMatch { round: usize, index: usize },

    #[error("match {index} of round {round} already has a winner")]
    MatchAlreadyDecided { round: usize, index: usize },

    #[error("{name} is not a participant of this match")]
    NotAParticipant { name: String },

    #[error("the champion is decided; the bracket accepts no further results")]
    TournamentComplete,

    #[error("no entrant received a bye in this bracket")]
    NoByeEntrant,

    #[error("the first round is not finished; losers cannot be drawn yet")]
    FirstRoundIncomplete,

    #[error("the golden chance loser has already been drawn")]
    GoldenChanceAlreadyDrawn,

    #[error("no golden chance loser has been drawn yet")]
    GoldenChanceNotDrawn,

    #[error("the golden chance has already been resolved")]
    GoldenChanceAlreadyResolved,

    #[error("the bye entrant's second-round match is already decided")]
    OverrideWindowClosed,
}

pub type Result<T> = std::result::Result<T, BracketError>;
