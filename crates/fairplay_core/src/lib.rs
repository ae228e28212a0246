//! # fairplay_core - Fair Team Allocation and Tournament Brackets
//!
//! Pure computation engines behind an organizer-facing UI:
//! - the **allocator** partitions a roster into teams of bounded strength
//!   skew while honoring per-sport position formations;
//! - the **bracket engine** builds single-elimination brackets with bye
//!   seeding, propagates winners round to round, and runs the golden-chance
//!   secondary draw.
//!
//! ## Features
//! - Deterministic: every operation is a function of its inputs plus an
//!   injected [`rand::Rng`] (seed a `ChaCha8Rng` to reproduce a draw)
//! - Snapshot semantics: transitions return new values, never mutate
//! - Generic brackets: teams and individual players share one engine
//! - Serde-serializable model for UI consumption

pub mod allocator;
pub mod bracket;
pub mod error;
pub mod models;

// Re-export the main API surface
pub use allocator::{allocate, fairness_skew, FairnessRating, Formation};
pub use bracket::{Bracket, BracketMatch, Entrant, GoldenChance, Slot};
pub use error::{BracketError, Result};
pub use models::{Level, Player, Position, Sport, Team};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
