//! Monsters, their status lists and the players controlling them

use crate::condition::Condition;
use crate::types::{MonsterId, PlayerId};
use content_core::{ElementType, Technique};
use serde::{Deserialize, Serialize};

/// Ordered collection of the conditions active on one monster
///
/// Holds at most one condition per slug. Attaching a slug that is already
/// active is rejected and leaves the existing instance untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusList {
    conditions: Vec<Condition>,
}

impl StatusList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a condition, returning false if the slug is already active
    pub fn attach(&mut self, condition: Condition) -> bool {
        if self.contains(&condition.slug) {
            return false;
        }
        self.conditions.push(condition);
        true
    }

    /// Remove the condition with this slug, leaving the others in order
    pub fn remove(&mut self, slug: &str) -> Option<Condition> {
        let index = self.conditions.iter().position(|c| c.slug == slug)?;
        Some(self.conditions.remove(index))
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.conditions.iter().any(|c| c.slug == slug)
    }

    pub fn get(&self, slug: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.slug == slug)
    }

    pub fn get_mut(&mut self, slug: &str) -> Option<&mut Condition> {
        self.conditions.iter_mut().find(|c| c.slug == slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }

    /// Slugs of the active conditions in attachment order
    pub fn slugs(&self) -> Vec<String> {
        self.conditions.iter().map(|c| c.slug.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// A monster taking part in combat
#[derive(Debug, Clone)]
pub struct Monster {
    pub instance_id: MonsterId,
    /// Species slug
    pub slug: String,
    /// Display name
    pub name: String,
    pub level: u32,
    /// Maximum HP
    pub hp: u32,
    pub current_hp: u32,
    pub armour: u32,
    pub dodge: u32,
    pub melee: u32,
    pub ranged: u32,
    pub speed: u32,
    pub types: Vec<ElementType>,
    pub moves: Vec<Technique>,
    pub status: StatusList,
    /// Player controlling this monster
    pub owner: Option<PlayerId>,
}

impl Monster {
    /// Create a monster at full HP with flat stats of 1
    pub fn new(instance_id: MonsterId, slug: impl Into<String>, level: u32, hp: u32) -> Self {
        let slug = slug.into();
        Monster {
            instance_id,
            name: slug.clone(),
            slug,
            level,
            hp,
            current_hp: hp,
            armour: 1,
            dodge: 1,
            melee: 1,
            ranged: 1,
            speed: 1,
            types: Vec::new(),
            moves: Vec::new(),
            status: StatusList::new(),
            owner: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_stats(
        mut self,
        melee: u32,
        ranged: u32,
        armour: u32,
        dodge: u32,
        speed: u32,
    ) -> Self {
        self.melee = melee;
        self.ranged = ranged;
        self.armour = armour;
        self.dodge = dodge;
        self.speed = speed;
        self
    }

    pub fn with_types(mut self, types: Vec<ElementType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_moves(mut self, moves: Vec<Technique>) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Lower current HP, never below zero. Returns the HP actually lost.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_sub(amount);
        before - self.current_hp
    }

    /// Raise current HP, never above max HP. Returns the HP actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.hp.min(self.current_hp.saturating_add(amount));
        self.current_hp.saturating_sub(before)
    }

    /// Set current HP directly, clamped to max HP
    pub fn set_current_hp(&mut self, value: u32) {
        self.current_hp = value.min(self.hp);
    }

    /// Moves that could be picked as a random substitute action
    ///
    /// Excludes recharging moves and moves that inflict `excluded_condition`.
    pub fn substitutable_moves(&self, excluded_condition: &str) -> Vec<&Technique> {
        self.moves
            .iter()
            .filter(|m| !m.is_recharging() && !m.gives_condition(excluded_condition))
            .collect()
    }
}

/// A player or NPC that owns monsters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Step counter copied onto conditions this player's monsters spawn
    pub steps: u64,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            steps: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_core::{Range, TechniqueEffect};

    fn monster() -> Monster {
        Monster::new(MonsterId(1), "rockitten", 10, 50)
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut m = monster();
        assert_eq!(m.damage(20), 20);
        assert_eq!(m.current_hp, 30);
        assert_eq!(m.damage(100), 30);
        assert_eq!(m.current_hp, 0);
        assert!(m.is_fainted());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut m = monster();
        m.current_hp = 45;
        assert_eq!(m.heal(20), 5);
        assert_eq!(m.current_hp, 50);
        assert_eq!(m.heal(u32::MAX), 0);
        assert_eq!(m.current_hp, 50);
    }

    #[test]
    fn test_set_current_hp_clamped() {
        let mut m = monster();
        m.set_current_hp(500);
        assert_eq!(m.current_hp, 50);
    }

    #[test]
    fn test_status_attach_rejects_duplicates() {
        let mut status = StatusList::new();
        let mut first = Condition::new("poisoned");
        first.steps = 3;
        assert!(status.attach(first));
        assert!(!status.attach(Condition::new("poisoned")));
        assert_eq!(status.len(), 1);
        // Original instance kept
        assert_eq!(status.get("poisoned").map(|c| c.steps), Some(3));
    }

    #[test]
    fn test_status_remove_keeps_others() {
        let mut status = StatusList::new();
        status.attach(Condition::new("poisoned"));
        status.attach(Condition::new("diehard"));
        status.attach(Condition::new("lockdown"));

        let removed = status.remove("diehard");
        assert_eq!(removed.map(|c| c.slug), Some("diehard".to_string()));
        assert_eq!(status.slugs(), vec!["poisoned", "lockdown"]);
        assert!(status.remove("diehard").is_none());
    }

    #[test]
    fn test_substitutable_moves() {
        let mut recharging = Technique::new("hyper_beam", Range::Ranged).with_recharge(2);
        recharging.mark_used();
        let befuddle =
            Technique::new("befuddle", Range::Special).with_effect(TechniqueEffect::Give {
                condition: "confused".to_string(),
            });
        let ram = Technique::new("ram", Range::Melee);

        let m = monster().with_moves(vec![recharging, befuddle, ram]);
        let moves: Vec<&str> = m
            .substitutable_moves("confused")
            .iter()
            .map(|t| t.slug.as_str())
            .collect();
        assert_eq!(moves, vec!["ram"]);
    }
}
