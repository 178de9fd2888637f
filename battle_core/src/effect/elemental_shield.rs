use super::{EffectContext, EffectResult};
use crate::condition::Condition;
use crate::types::{MonsterId, Phase};
use crate::EffectError;
use content_core::Range;
use tracing::debug;

/// Elemental shield: an attacker whose move range is listed loses
/// `target_max_hp / divisor`
pub(super) fn apply(
    divisor: u32,
    ranges: &[Range],
    condition: &Condition,
    target: MonsterId,
    ctx: &mut EffectContext<'_>,
) -> Result<EffectResult, EffectError> {
    ctx.require_session(condition)?;
    let mut result = EffectResult::new(&condition.slug);
    if !condition.in_phase(Phase::PerformActionStatus) {
        return Ok(result);
    }

    let Some(hit) = ctx.last_hit_against(target)? else {
        return Ok(result);
    };
    if !ranges.contains(&hit.technique.range) {
        return Ok(result);
    }

    let damage = ctx.roster.monster(target)?.hp / divisor;
    let lost = ctx.roster.monster_mut(hit.attacker)?.damage(damage);
    debug!(monster = %target, attacker = %hit.attacker, damage, lost, "shield strikes back");

    result.success = true;
    Ok(result)
}
