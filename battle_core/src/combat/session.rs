//! Combat session - roster, action log and per-turn scratch state

use super::action_log::{Action, ActionLog};
use crate::condition::{Condition, ConditionRegistry};
use crate::effect::EffectContext;
use crate::monster::{Monster, Player};
use crate::types::{MonsterId, PlayerId, SessionId};
use crate::EffectError;
use content_core::TechniqueDb;
use rand::RngCore;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Monsters and players taking part in a combat, resolved by id
#[derive(Debug, Clone, Default)]
pub struct Roster {
    monsters: Vec<Monster>,
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_monster(&mut self, monster: Monster) {
        self.monsters.push(monster);
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Monster ids in roster order
    pub fn monster_ids(&self) -> Vec<MonsterId> {
        self.monsters.iter().map(|m| m.instance_id).collect()
    }

    pub fn monster(&self, id: MonsterId) -> Result<&Monster, EffectError> {
        self.monsters
            .iter()
            .find(|m| m.instance_id == id)
            .ok_or_else(|| EffectError::MissingContext(format!("{} is not in combat", id)))
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Result<&mut Monster, EffectError> {
        self.monsters
            .iter_mut()
            .find(|m| m.instance_id == id)
            .ok_or_else(|| EffectError::MissingContext(format!("{} is not in combat", id)))
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, EffectError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EffectError::MissingContext(format!("{} is not in combat", id)))
    }
}

/// Scratch flags shared between the phases of one turn
#[derive(Debug, Clone, Default)]
pub struct TurnFlags {
    confused: HashSet<MonsterId>,
    /// Technique each monster actually performs this turn after substitutions
    action_tech: HashMap<MonsterId, String>,
}

impl TurnFlags {
    pub fn set_confused(&mut self, monster: MonsterId, confused: bool) {
        if confused {
            self.confused.insert(monster);
        } else {
            self.confused.remove(&monster);
        }
    }

    pub fn is_confused(&self, monster: MonsterId) -> bool {
        self.confused.contains(&monster)
    }

    pub fn set_action_tech(&mut self, monster: MonsterId, slug: impl Into<String>) {
        self.action_tech.insert(monster, slug.into());
    }

    pub fn action_tech(&self, monster: MonsterId) -> Option<&str> {
        self.action_tech.get(&monster).map(|s| s.as_str())
    }

    pub fn reset(&mut self) {
        self.confused.clear();
        self.action_tech.clear();
    }
}

/// An active battle
#[derive(Debug, Clone)]
pub struct CombatSession {
    pub id: SessionId,
    /// Current turn, starting at 1
    pub turn: u32,
    pub roster: Roster,
    pub log: ActionLog,
    pub flags: TurnFlags,
}

impl CombatSession {
    pub fn new(id: SessionId) -> Self {
        CombatSession {
            id,
            turn: 1,
            roster: Roster::new(),
            log: ActionLog::new(),
            flags: TurnFlags::default(),
        }
    }

    /// Advance to the next turn, dropping the previous turn's flags and
    /// moving every recharging technique one turn closer to ready
    pub fn next_turn(&mut self) {
        self.turn += 1;
        self.flags.reset();
        for monster in &mut self.roster.monsters {
            for technique in &mut monster.moves {
                technique.tick_recharge();
            }
        }
    }

    /// Record an executed action
    pub fn record(&mut self, action: Action) {
        self.log.push(action);
    }

    /// Attach a condition to a monster and bind it to this session
    ///
    /// Returns false when the monster already carries a condition with the
    /// same slug; the existing instance is kept.
    pub fn attach(
        &mut self,
        target: MonsterId,
        mut condition: Condition,
    ) -> Result<bool, EffectError> {
        condition.session = Some(self.id);
        condition.phase = None;
        let slug = condition.slug.clone();

        let monster = self.roster.monster_mut(target)?;
        let attached = monster.status.attach(condition);
        if !attached {
            warn!(monster = %target, condition = %slug, "condition already active, not attached");
        }
        Ok(attached)
    }

    /// Remove a condition from a monster
    pub fn detach(
        &mut self,
        target: MonsterId,
        slug: &str,
    ) -> Result<Option<Condition>, EffectError> {
        Ok(self.roster.monster_mut(target)?.status.remove(slug))
    }

    /// Borrow the session as the context for one effect invocation
    pub fn effect_context<'a>(
        &'a mut self,
        techniques: &'a TechniqueDb,
        conditions: &'a ConditionRegistry,
        rng: &'a mut dyn RngCore,
    ) -> EffectContext<'a> {
        EffectContext {
            session: self.id,
            turn: self.turn,
            log: &self.log,
            roster: &mut self.roster,
            flags: &mut self.flags,
            techniques,
            conditions,
            rng,
        }
    }
}
