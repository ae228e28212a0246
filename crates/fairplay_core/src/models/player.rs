//! Player entity: identity, skill level and native position.

use crate::models::sport::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordinal skill rating used to balance teams.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Weak,
    Medium,
    Strong,
}

impl Level {
    /// Numeric strength: weak = 1, medium = 2, strong = 3.
    pub fn value(&self) -> u32 {
        match self {
            Level::Weak => 1,
            Level::Medium => 2,
            Level::Strong => 3,
        }
    }
}

/// A roster entry. Names are validated (non-empty, unique) by the caller
/// before they reach the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub level: Level,
    pub position: Position,
}

impl Player {
    /// New player with a freshly generated id.
    pub fn new(name: impl Into<String>, level: Level, position: Position) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            level,
            position,
        }
    }

    /// New player with a caller-supplied id. The UI layer owns id assignment
    /// for roster entries it keeps across edits.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        level: Level,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            position,
        }
    }
}
