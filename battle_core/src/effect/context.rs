use crate::combat::{Actor, ActionLog, Method, Role, Roster, TurnFlags};
use crate::condition::{Condition, ConditionRegistry};
use crate::types::{MonsterId, SessionId};
use crate::EffectError;
use content_core::{Technique, TechniqueDb};
use rand::RngCore;

/// Everything an effect may read or mutate during one invocation
pub struct EffectContext<'a> {
    pub session: SessionId,
    pub turn: u32,
    pub log: &'a ActionLog,
    pub roster: &'a mut Roster,
    pub flags: &'a mut TurnFlags,
    pub techniques: &'a TechniqueDb,
    pub conditions: &'a ConditionRegistry,
    pub rng: &'a mut dyn RngCore,
}

/// A technique that connected with the target this turn
#[derive(Debug, Clone)]
pub struct LastHit {
    pub attacker: MonsterId,
    pub technique: Technique,
}

impl EffectContext<'_> {
    /// Fail unless the condition was attached in this session
    pub fn require_session(&self, condition: &Condition) -> Result<(), EffectError> {
        match condition.session {
            Some(id) if id == self.session => Ok(()),
            Some(id) => Err(EffectError::MissingContext(format!(
                "condition '{}' is bound to {}, not {}",
                condition.slug, id, self.session
            ))),
            None => Err(EffectError::MissingContext(format!(
                "condition '{}' is not bound to a combat session",
                condition.slug
            ))),
        }
    }

    /// Last technique of this turn that hit `target`, if its user can still act
    ///
    /// Actions by players, item uses, misses and fainted attackers all
    /// yield `None`.
    pub fn last_hit_against(&self, target: MonsterId) -> Result<Option<LastHit>, EffectError> {
        let Some(action) = self.log.last_action(self.turn, target, Role::Target) else {
            return Ok(None);
        };
        let (Actor::Monster(attacker), Method::Technique(technique)) =
            (&action.user, &action.method)
        else {
            return Ok(None);
        };
        if !action.hit || action.target != target {
            return Ok(None);
        }
        if self.roster.monster(*attacker)?.is_fainted() {
            return Ok(None);
        }

        Ok(Some(LastHit {
            attacker: *attacker,
            technique: technique.clone(),
        }))
    }
}
