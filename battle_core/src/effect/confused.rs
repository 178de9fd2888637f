use super::{EffectContext, EffectResult};
use crate::condition::Condition;
use crate::message::{Message, CONFUSED_TECH};
use crate::types::{MonsterId, Phase};
use crate::{ConditionConfigError, EffectError};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

const CONFUSED: &str = "confused";
const DEFAULT_ACTION_TECH: &str = "skip";

/// Confused: the monster sometimes uses a random technique instead of the
/// one it chose
///
/// In `pre_checking` the flag for this monster is cleared and re-armed when
/// the roll lands above `chance`. In `perform_action_tech` an armed flag
/// produces the message naming the technique actually used.
pub(super) fn apply(
    chance: f64,
    condition: &Condition,
    target: MonsterId,
    ctx: &mut EffectContext<'_>,
) -> Result<EffectResult, EffectError> {
    ctx.require_session(condition)?;
    let mut result = EffectResult::new(&condition.slug);

    match condition.phase {
        Some(Phase::PreChecking) => {
            ctx.flags.set_confused(target, false);
            let roll: f64 = ctx.rng.gen();
            if roll <= chance {
                return Ok(result);
            }

            let user = condition.link.ok_or_else(|| {
                EffectError::MissingContext(format!(
                    "condition '{}' has no linked monster",
                    condition.slug
                ))
            })?;
            ctx.flags.set_confused(target, true);

            let candidates = ctx.roster.monster(user)?.substitutable_moves(CONFUSED);
            let substitute = match candidates.choose(&mut *ctx.rng) {
                Some(technique) => Some((*technique).clone()),
                None => match &condition.repl_tech {
                    Some(slug) => Some(
                        ctx.techniques
                            .create(slug)
                            .map_err(ConditionConfigError::from)?,
                    ),
                    None => None,
                },
            };

            if let Some(technique) = substitute {
                debug!(
                    monster = %target,
                    technique = %technique.slug,
                    "confused into a random technique"
                );
                result.techniques.push(technique);
            }
            result.success = true;
        }
        Some(Phase::PerformActionTech) if ctx.flags.is_confused(target) => {
            let slug = ctx.flags.action_tech(target).unwrap_or(DEFAULT_ACTION_TECH);
            let technique = ctx
                .techniques
                .create(slug)
                .map_err(ConditionConfigError::from)?;
            let monster = ctx.roster.monster(target)?;

            result.extras.push(
                Message::new(CONFUSED_TECH)
                    .with("target", monster.name.to_uppercase())
                    .with("name", technique.name.to_uppercase()),
            );
            result.success = true;
        }
        _ => {}
    }

    Ok(result)
}
