//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::condition::{Condition, ConditionRegistry};
pub use crate::monster::{Monster, Player};
pub use crate::types::{MonsterId, Phase, PlayerId, SessionId};

// Effects
pub use crate::effect::{Effect, EffectResult};
pub use crate::{ConditionConfigError, EffectError};

// Combat
pub use crate::combat::{resolve_phase, Action, CombatSession, PhaseReport};

// Messages
pub use crate::message::{Message, MessageFormatter, Templates};

// Config
pub use crate::config::{
    init_constants, init_constants_default, load_condition_configs, parse_condition_configs,
};
