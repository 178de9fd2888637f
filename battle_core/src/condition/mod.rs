//! Conditions - stateful status effects attached to a monster

mod registry;

pub use registry::{ConditionDef, ConditionRegistry};

use crate::types::{MonsterId, Phase, SessionId};
use serde::{Deserialize, Serialize};

/// A status effect instance attached to exactly one monster
///
/// Only the identity and the persistent counters are serialized; `phase`
/// is set by the driver before every invocation and `session` is rebound
/// when the condition is attached to a combat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Identity of the effect type
    pub slug: String,
    /// Display name
    pub name: String,
    /// Phase currently being evaluated
    #[serde(skip)]
    pub phase: Option<Phase>,
    /// Monster that caused or carries this condition
    #[serde(default)]
    pub link: Option<MonsterId>,
    /// Replacement technique slug used when the condition forces an action
    #[serde(default)]
    pub repl_tech: Option<String>,
    /// Replacement slug used when the forced action is an item
    #[serde(default)]
    pub repl_item: Option<String>,
    /// Step counter copied from the afflicting player
    #[serde(default)]
    pub steps: u64,
    /// Combat session the condition is bound to
    #[serde(skip)]
    pub session: Option<SessionId>,
}

impl Condition {
    /// Create a bare condition with no links or replacements
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Condition {
            name: slug.clone(),
            slug,
            phase: None,
            link: None,
            repl_tech: None,
            repl_item: None,
            steps: 0,
            session: None,
        }
    }

    pub fn with_link(mut self, link: MonsterId) -> Self {
        self.link = Some(link);
        self
    }

    pub fn with_repl_tech(mut self, slug: impl Into<String>) -> Self {
        self.repl_tech = Some(slug.into());
        self
    }

    pub fn with_repl_item(mut self, slug: impl Into<String>) -> Self {
        self.repl_item = Some(slug.into());
        self
    }

    /// Whether the driver has put this condition in the given phase
    pub fn in_phase(&self, phase: Phase) -> bool {
        self.phase == Some(phase)
    }
}
