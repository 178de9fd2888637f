use super::{EffectContext, EffectResult};
use crate::condition::Condition;
use crate::message::{Message, LOCKDOWN_ITEM};
use crate::types::{MonsterId, Phase};
use crate::EffectError;

/// Lockdown: warn when an item is queued for the monster
pub(super) fn apply(
    condition: &Condition,
    target: MonsterId,
    ctx: &mut EffectContext<'_>,
) -> Result<EffectResult, EffectError> {
    let mut result = EffectResult::new(&condition.slug);
    if condition.in_phase(Phase::EnqueueItem) {
        let monster = ctx.roster.monster(target)?;
        result
            .extras
            .push(Message::new(LOCKDOWN_ITEM).with("target", monster.name.to_uppercase()));
        result.success = true;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::super::Effect;
    use crate::condition::Condition;
    use crate::message::LOCKDOWN_ITEM;
    use crate::types::Phase;

    #[test]
    fn test_lockdown_warns_on_item() {
        let mut fx = Fixture::new();
        fx.attach(FOE, Condition::new("lockdown"));

        let result = fx.apply(&Effect::Lockdown, FOE, "lockdown", Phase::EnqueueItem).unwrap();
        assert!(result.success);
        assert_eq!(result.extras[0].key, LOCKDOWN_ITEM);
        assert_eq!(result.extras[0].param("target"), Some("NUT"));

        // Message only
        assert_eq!(fx.monster(FOE).current_hp, 80);
        assert!(fx.monster(FOE).status.contains("lockdown"));
    }

    #[test]
    fn test_lockdown_silent_elsewhere() {
        let mut fx = Fixture::new();
        fx.attach(FOE, Condition::new("lockdown"));

        let result = fx
            .apply(&Effect::Lockdown, FOE, "lockdown", Phase::EnqueueTech)
            .unwrap();
        assert!(result.is_noop());
    }
}
