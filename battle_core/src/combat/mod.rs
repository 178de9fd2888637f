//! Combat - the action log, the session and the phase driver

mod action_log;
mod driver;
mod session;

pub use action_log::{Action, ActionLog, Actor, Method, Role};
pub use driver::{resolve_phase, PhaseReport, Substitution};
pub use session::{CombatSession, Roster, TurnFlags};
