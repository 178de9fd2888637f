use super::{EffectContext, EffectResult};
use crate::condition::Condition;
use crate::message::{Message, DIEHARD_END, DIEHARD_TECH};
use crate::types::{MonsterId, Phase};
use crate::EffectError;
use tracing::debug;

/// DieHard: a monster that faints is brought back to `hp` once
///
/// A monster already sitting at exactly `hp` loses the condition without
/// being saved, so it cannot be used to chain saves.
pub(super) fn apply(
    hp: u32,
    condition: &Condition,
    target: MonsterId,
    ctx: &mut EffectContext<'_>,
) -> Result<EffectResult, EffectError> {
    let mut result = EffectResult::new(&condition.slug);
    if !condition.in_phase(Phase::CheckPartyHp) {
        return Ok(result);
    }

    let monster = ctx.roster.monster_mut(target)?;
    let key = if monster.is_fainted() {
        monster.set_current_hp(hp);
        debug!(monster = %target, hp = monster.current_hp, "diehard save");
        DIEHARD_TECH
    } else if monster.current_hp == hp.min(monster.hp) {
        DIEHARD_END
    } else {
        return Ok(result);
    };

    monster.status.remove(&condition.slug);
    result
        .extras
        .push(Message::new(key).with("target", monster.name.to_uppercase()));
    result.success = true;
    Ok(result)
}
