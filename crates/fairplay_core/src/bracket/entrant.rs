//! Minimal capability the bracket engine requires of a competitor.

use crate::models::{Player, Team};

/// Anything that can occupy a bracket slot: a unique identity and a display
/// name.
///
/// The engine compares participants by [`Entrant::id`] alone and never
/// inspects any other state, so team tournaments and individual
/// competitions run through the same code.
pub trait Entrant: Clone {
    /// Identity type; equality on it defines "same entrant".
    type Id: Clone + Eq;

    fn id(&self) -> Self::Id;
    fn name(&self) -> &str;
}

impl Entrant for Player {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entrant for Team {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
