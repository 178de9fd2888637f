//! battle_core - Condition and status-effect resolution for monster battles
//!
//! This library provides:
//! - Condition: a status effect attached to one monster, evaluated per phase
//! - Effect: the closed set of behaviours a condition can carry
//! - CombatSession: roster, action log and per-turn flags of one battle
//! - resolve_phase: runs every active condition for one phase of a turn
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use battle_core::prelude::*;
//! use content_core::TechniqueDb;
//!
//! init_constants_default().unwrap();
//! let techniques = TechniqueDb::load(Path::new("content/techniques"))?;
//! let conditions = load_condition_configs(Path::new("content/conditions.toml"))?;
//!
//! let mut session = CombatSession::new(SessionId(1));
//! session.roster.add_monster(Monster::new(MonsterId(1), "rockitten", 5, 40));
//! session.attach(MonsterId(1), conditions.create("poisoned")?)?;
//!
//! let mut rng = rand::thread_rng();
//! for phase in Phase::all() {
//!     let report = resolve_phase(&mut session, *phase, &techniques, &conditions, &mut rng)?;
//!     for message in &report.messages {
//!         println!("{}", templates.format(message));
//!     }
//! }
//! session.next_turn();
//! ```

pub mod combat;
pub mod condition;
pub mod config;
pub mod effect;
pub mod formula;
pub mod message;
pub mod monster;
pub mod prelude;
pub mod types;

use content_core::ContentError;
use thiserror::Error;

// Core API
pub use combat::{resolve_phase, CombatSession, PhaseReport};
pub use condition::{Condition, ConditionDef, ConditionRegistry};
pub use effect::{Effect, EffectResult};
pub use monster::{Monster, Player, StatusList};
pub use types::{MonsterId, Phase, PlayerId, SessionId};

// Configuration
pub use config::{init_constants, init_constants_default, load_condition_configs};

/// Bad condition content, surfaced when an effect is loaded or applied
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConditionConfigError {
    #[error("{effect}: chance {chance} is outside [0, 1]")]
    InvalidChance { effect: &'static str, chance: f64 },
    #[error("{effect}: divisor must be positive")]
    ZeroDivisor { effect: &'static str },
    #[error("{effect}: hp must be positive")]
    ZeroHp { effect: &'static str },
    #[error("Unknown condition: {0}")]
    UnknownCondition(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Error applying an effect
///
/// Both variants are authoring or wiring bugs; the driver aborts the phase
/// and returns them to its caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EffectError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConditionConfigError),
    #[error("Missing combat context: {0}")]
    MissingContext(String),
}
