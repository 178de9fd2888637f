use super::{EffectContext, EffectResult};
use crate::condition::Condition;
use crate::types::{MonsterId, Phase};
use crate::EffectError;
use tracing::debug;

/// Charging: when the charged action fires, drop this condition and attach
/// the configured follow-up condition
pub(super) fn apply(
    condition: &Condition,
    target: MonsterId,
    ctx: &mut EffectContext<'_>,
) -> Result<EffectResult, EffectError> {
    let mut result = EffectResult::new(&condition.slug);
    let replacement = match condition.phase {
        Some(Phase::PerformActionTech) => condition.repl_tech.as_deref(),
        Some(Phase::PerformActionItem) => condition.repl_item.as_deref(),
        _ => return Ok(result),
    };

    let owner = ctx.roster.monster(target)?.owner.ok_or_else(|| {
        EffectError::MissingContext(format!("{} charging without an owner", target))
    })?;
    let steps = ctx.roster.player(owner)?.steps;

    if let Some(slug) = replacement {
        let mut next = ctx.conditions.create(slug)?;
        next.steps = steps;
        next.link = Some(target);
        debug!(monster = %target, from = %condition.slug, to = %next.slug, "charge released");
        result.conditions.push(next);
    }

    ctx.roster.monster_mut(target)?.status.remove(&condition.slug);

    result.success = true;
    Ok(result)
}
