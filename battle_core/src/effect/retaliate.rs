use super::{EffectContext, EffectResult};
use crate::condition::Condition;
use crate::formula::simple_damage_calculate;
use crate::types::{MonsterId, Phase};
use crate::EffectError;
use content_core::Range;
use tracing::debug;

/// Retaliate: the last attacker takes the damage its move dealt
pub(super) fn apply(
    condition: &Condition,
    target: MonsterId,
    ctx: &mut EffectContext<'_>,
) -> Result<EffectResult, EffectError> {
    ctx.require_session(condition)?;
    let mut result = EffectResult::new(&condition.slug);
    if !condition.in_phase(Phase::PerformActionStatus) {
        return Ok(result);
    }

    if let Some(returned) = returned_damage(target, ctx)? {
        debug!(
            monster = %target,
            attacker = %returned.attacker,
            damage = returned.amount,
            "retaliated"
        );
        result.success = true;
    }
    Ok(result)
}

/// Damage sent back to the last attacker of `target`
pub(super) struct Returned {
    pub attacker: MonsterId,
    pub amount: u32,
}

/// Deal the last non-special hit against `target` back to its attacker
///
/// Shared with revenge. Returns `None` when nothing qualifies.
pub(super) fn returned_damage(
    target: MonsterId,
    ctx: &mut EffectContext<'_>,
) -> Result<Option<Returned>, EffectError> {
    let Some(hit) = ctx.last_hit_against(target)? else {
        return Ok(None);
    };
    if hit.technique.range == Range::Special {
        return Ok(None);
    }

    let (amount, _) = simple_damage_calculate(
        &hit.technique,
        ctx.roster.monster(hit.attacker)?,
        ctx.roster.monster(target)?,
    );
    ctx.roster.monster_mut(hit.attacker)?.damage(amount);

    Ok(Some(Returned {
        attacker: hit.attacker,
        amount,
    }))
}
