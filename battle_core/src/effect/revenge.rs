use super::retaliate::returned_damage;
use super::{EffectContext, EffectResult};
use crate::condition::Condition;
use crate::types::{MonsterId, Phase};
use crate::EffectError;
use tracing::debug;

/// Revenge: retaliate, then heal by the damage returned
///
/// Stays attached after triggering; removal is up to whoever inflicted it.
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
        let healed = ctx.roster.monster_mut(target)?.heal(returned.amount);
        debug!(
            monster = %target,
            attacker = %returned.attacker,
            damage = returned.amount,
            healed,
            "revenge"
        );
        result.success = true;
    }
    Ok(result)
}
