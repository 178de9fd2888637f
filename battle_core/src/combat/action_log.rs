//! Action log - append-only record of the actions executed in combat

use crate::types::{MonsterId, PlayerId};
use content_core::Technique;
use serde::{Deserialize, Serialize};

/// Who performed an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    Monster(MonsterId),
    /// A trainer acting directly (items, swaps)
    Player(PlayerId),
}

/// What was used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Method {
    Technique(Technique),
    /// Item slug
    Item(String),
}

/// Which side of an action to match a monster against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Target,
    User,
}

/// An executed combat action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub turn: u32,
    pub user: Actor,
    pub target: MonsterId,
    pub method: Method,
    /// Whether the action connected
    pub hit: bool,
}

impl Action {
    /// A technique used by one monster on another
    pub fn technique(
        turn: u32,
        user: MonsterId,
        target: MonsterId,
        technique: Technique,
        hit: bool,
    ) -> Self {
        Action {
            turn,
            user: Actor::Monster(user),
            target,
            method: Method::Technique(technique),
            hit,
        }
    }

    /// An item used by a player on a monster
    pub fn item(turn: u32, user: PlayerId, target: MonsterId, item: impl Into<String>) -> Self {
        Action {
            turn,
            user: Actor::Player(user),
            target,
            method: Method::Item(item.into()),
            hit: true,
        }
    }

    fn matches(&self, monster: MonsterId, role: Role) -> bool {
        match role {
            Role::Target => self.target == monster,
            Role::User => self.user == Actor::Monster(monster),
        }
    }
}

/// Ordered, append-only log of actions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Most recent action of `turn` where `monster` plays `role`
    pub fn last_action(&self, turn: u32, monster: MonsterId, role: Role) -> Option<&Action> {
        self.actions
            .iter()
            .rev()
            .find(|a| a.turn == turn && a.matches(monster, role))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_core::Range;

    fn tech(slug: &str) -> Technique {
        Technique::new(slug, Range::Melee)
    }

    #[test]
    fn test_last_action_prefers_latest() {
        let mut log = ActionLog::new();
        log.push(Action::technique(1, MonsterId(1), MonsterId(2), tech("ram"), true));
        log.push(Action::technique(1, MonsterId(3), MonsterId(2), tech("claw"), false));

        let action = log.last_action(1, MonsterId(2), Role::Target).unwrap();
        assert_eq!(action.user, Actor::Monster(MonsterId(3)));
    }

    #[test]
    fn test_last_action_scoped_to_turn() {
        let mut log = ActionLog::new();
        log.push(Action::technique(1, MonsterId(1), MonsterId(2), tech("ram"), true));

        assert!(log.last_action(1, MonsterId(2), Role::Target).is_some());
        assert!(log.last_action(2, MonsterId(2), Role::Target).is_none());
    }

    #[test]
    fn test_last_action_by_role() {
        let mut log = ActionLog::new();
        log.push(Action::technique(1, MonsterId(1), MonsterId(2), tech("ram"), true));
        log.push(Action::item(1, PlayerId(9), MonsterId(1), "potion"));

        let as_user = log.last_action(1, MonsterId(1), Role::User).unwrap();
        assert_eq!(as_user.target, MonsterId(2));

        let as_target = log.last_action(1, MonsterId(1), Role::Target).unwrap();
        assert_eq!(as_target.method, Method::Item("potion".to_string()));

        assert!(log.last_action(1, MonsterId(2), Role::User).is_none());
    }

    #[test]
    fn test_last_action_tracks_each_turn() {
        let mut log = ActionLog::new();
        log.push(Action::technique(1, MonsterId(1), MonsterId(2), tech("ram"), true));
        log.push(Action::technique(2, MonsterId(2), MonsterId(1), tech("claw"), true));
        log.push(Action::technique(2, MonsterId(1), MonsterId(2), tech("ram"), false));

        let first = log.last_action(1, MonsterId(2), Role::Target).unwrap();
        assert!(first.hit);
        let second = log.last_action(2, MonsterId(2), Role::Target).unwrap();
        assert!(!second.hit);
        assert!(log.last_action(3, MonsterId(2), Role::Target).is_none());
        assert_eq!(log.len(), 3);
    }
}
