//! Identifiers and the combat phase enumeration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instance identifier of a monster taking part in combat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u64);

/// Identifier of a player or NPC controlling monsters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

/// Identifier of a combat session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "monster#{}", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

/// Named stage of a combat turn during which conditions are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// A monster has just been sent out
    AddMonsterIntoPlay,
    /// Before actions are chosen for the turn
    PreChecking,
    /// An item is being queued as the monster's action
    EnqueueItem,
    /// A technique is being queued as the monster's action
    EnqueueTech,
    /// The monster is performing a technique
    PerformActionTech,
    /// The monster is using an item
    PerformActionItem,
    /// Status effects resolve after the actions of the turn
    PerformActionStatus,
    /// Party HP is checked for faints
    CheckPartyHp,
}

impl Phase {
    /// Get all phases in turn order
    pub fn all() -> &'static [Phase] {
        &[
            Phase::AddMonsterIntoPlay,
            Phase::PreChecking,
            Phase::EnqueueItem,
            Phase::EnqueueTech,
            Phase::PerformActionTech,
            Phase::PerformActionItem,
            Phase::PerformActionStatus,
            Phase::CheckPartyHp,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AddMonsterIntoPlay => "add_monster_into_play",
            Phase::PreChecking => "pre_checking",
            Phase::EnqueueItem => "enqueue_item",
            Phase::EnqueueTech => "enqueue_tech",
            Phase::PerformActionTech => "perform_action_tech",
            Phase::PerformActionItem => "perform_action_item",
            Phase::PerformActionStatus => "perform_action_status",
            Phase::CheckPartyHp => "check_party_hp",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown phase '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names_round_trip() {
        for phase in Phase::all() {
            assert_eq!(phase.as_str().parse::<Phase>(), Ok(*phase));
        }
        assert!("housekeeping".parse::<Phase>().is_err());
    }
}
