use super::{EffectContext, EffectResult};
use crate::condition::Condition;
use crate::types::{MonsterId, Phase};
use crate::EffectError;
use tracing::debug;

/// Poisoned: lose `max_hp / divisor` HP in every status phase
pub(super) fn apply(
    divisor: u32,
    condition: &Condition,
    target: MonsterId,
    ctx: &mut EffectContext<'_>,
) -> Result<EffectResult, EffectError> {
    let mut result = EffectResult::new(&condition.slug);
    if !condition.in_phase(Phase::PerformActionStatus) {
        return Ok(result);
    }

    let monster = ctx.roster.monster_mut(target)?;
    let damage = monster.hp / divisor;
    let lost = monster.damage(damage);
    debug!(monster = %target, damage, lost, "poison damage");

    result.success = true;
    Ok(result)
}
