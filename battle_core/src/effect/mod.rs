//! Effects - the behaviour bound to a condition, evaluated per phase
//!
//! Every effect follows the same contract:
//! - It reads `condition.phase` and does nothing outside its trigger phases
//! - HP only moves through `Monster::damage` / `Monster::heal`, which clamp
//!   to `[0, hp]`
//! - Configuration is validated before anything else, so a bad divisor or
//!   chance fails the call instead of producing a wrong outcome
//! - Anything besides HP/status mutation is reported through `EffectResult`

mod charging;
mod confused;
mod context;
mod diehard;
mod elemental_shield;
mod lockdown;
mod poisoned;
mod retaliate;
mod revenge;

pub use context::{EffectContext, LastHit};

use crate::condition::Condition;
use crate::message::Message;
use crate::types::MonsterId;
use crate::{ConditionConfigError, EffectError};
use content_core::{Range, Technique};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Configured effect kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Swaps itself for a follow-up condition when the charged action fires
    Charging,
    /// Replaces the chosen technique with a random one when `roll > chance`
    Confused { chance: f64 },
    /// Survives one faint at `hp` HP
    #[serde(rename = "diehard")]
    DieHard { hp: u32 },
    /// Hurts attackers whose move range is listed by `max_hp / divisor`
    #[serde(rename = "elemental_shield")]
    ElementalShieldBack { divisor: u32, ranges: Vec<Range> },
    /// Warns that items cannot be used
    Lockdown,
    /// Loses `max_hp / divisor` every status phase
    Poisoned { divisor: u32 },
    /// Returns the damage of the last non-special hit to the attacker
    Retaliate,
    /// As retaliate, and heals the same amount
    Revenge,
}

impl Effect {
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Charging => "charging",
            Effect::Confused { .. } => "confused",
            Effect::DieHard { .. } => "diehard",
            Effect::ElementalShieldBack { .. } => "elemental_shield",
            Effect::Lockdown => "lockdown",
            Effect::Poisoned { .. } => "poisoned",
            Effect::Retaliate => "retaliate",
            Effect::Revenge => "revenge",
        }
    }

    /// Check the configured parameters
    pub fn validate(&self) -> Result<(), ConditionConfigError> {
        match self {
            Effect::Confused { chance } if !(0.0..=1.0).contains(chance) => {
                Err(ConditionConfigError::InvalidChance {
                    effect: self.name(),
                    chance: *chance,
                })
            }
            Effect::Poisoned { divisor: 0 } | Effect::ElementalShieldBack { divisor: 0, .. } => {
                Err(ConditionConfigError::ZeroDivisor { effect: self.name() })
            }
            Effect::DieHard { hp: 0 } => Err(ConditionConfigError::ZeroHp { effect: self.name() }),
            _ => Ok(()),
        }
    }

    /// Apply this effect of `condition` to the monster carrying it
    pub fn apply(
        &self,
        condition: &Condition,
        target: MonsterId,
        ctx: &mut EffectContext<'_>,
    ) -> Result<EffectResult, EffectError> {
        self.validate()?;
        trace!(
            effect = self.name(),
            condition = %condition.slug,
            monster = %target,
            phase = ?condition.phase,
            "applying effect"
        );

        match self {
            Effect::Charging => charging::apply(condition, target, ctx),
            Effect::Confused { chance } => confused::apply(*chance, condition, target, ctx),
            Effect::DieHard { hp } => diehard::apply(*hp, condition, target, ctx),
            Effect::ElementalShieldBack { divisor, ranges } => {
                elemental_shield::apply(*divisor, ranges, condition, target, ctx)
            }
            Effect::Lockdown => lockdown::apply(condition, target, ctx),
            Effect::Poisoned { divisor } => poisoned::apply(*divisor, condition, target, ctx),
            Effect::Retaliate => retaliate::apply(condition, target, ctx),
            Effect::Revenge => revenge::apply(condition, target, ctx),
        }
    }
}

/// Outcome of one effect invocation
#[derive(Debug, Clone, PartialEq)]
pub struct EffectResult {
    /// Slug of the condition the effect belongs to
    pub name: String,
    /// Whether the effect triggered on this call
    pub success: bool,
    /// New conditions to attach to the monster
    pub conditions: Vec<Condition>,
    /// Techniques replacing the monster's chosen action
    pub techniques: Vec<Technique>,
    /// Messages for the player
    pub extras: Vec<Message>,
}

impl EffectResult {
    /// An empty result that did not trigger
    pub fn new(name: impl Into<String>) -> Self {
        EffectResult {
            name: name.into(),
            success: false,
            conditions: Vec::new(),
            techniques: Vec::new(),
            extras: Vec::new(),
        }
    }

    /// Whether the call had no outcome at all
    pub fn is_noop(&self) -> bool {
        !self.success
            && self.conditions.is_empty()
            && self.techniques.is_empty()
            && self.extras.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::types::Phase;

    #[test]
    fn test_validate() {
        assert!(Effect::Confused { chance: 0.0 }.validate().is_ok());
        assert!(Effect::Confused { chance: 1.0 }.validate().is_ok());
        assert!(Effect::Confused { chance: -0.1 }.validate().is_err());
        assert!(Effect::Confused { chance: f64::NAN }.validate().is_err());
        assert!(Effect::Poisoned { divisor: 0 }.validate().is_err());
        assert!(Effect::ElementalShieldBack {
            divisor: 0,
            ranges: vec![Range::Special]
        }
        .validate()
        .is_err());
        assert!(Effect::DieHard { hp: 0 }.validate().is_err());
        assert!(Effect::Revenge.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_fails_in_any_phase() {
        let mut fx = Fixture::new();
        fx.attach(HERO, Condition::new("poisoned"));

        for phase in Phase::all() {
            let result = fx.apply(&Effect::Poisoned { divisor: 0 }, HERO, "poisoned", *phase);
            assert_eq!(
                result,
                Err(EffectError::Config(ConditionConfigError::ZeroDivisor {
                    effect: "poisoned"
                }))
            );
        }
        assert_eq!(fx.monster(HERO).current_hp, 100);
    }

    #[test]
    fn test_unrecognized_phase_is_noop() {
        let effects = [
            Effect::Charging,
            Effect::DieHard { hp: 1 },
            Effect::ElementalShieldBack {
                divisor: 8,
                ranges: vec![Range::Melee],
            },
            Effect::Lockdown,
            Effect::Poisoned { divisor: 8 },
            Effect::Retaliate,
            Effect::Revenge,
        ];

        for effect in &effects {
            let mut fx = Fixture::new();
            fx.attach(HERO, Condition::new("cond"));
            fx.hit(FOE, HERO, "ram", true);

            let result = fx.apply(effect, HERO, "cond", Phase::AddMonsterIntoPlay).unwrap();
            assert!(result.is_noop(), "{} triggered outside its phase", effect.name());
            assert_eq!(fx.monster(HERO).current_hp, 100);
            assert_eq!(fx.monster(FOE).current_hp, 80);
            assert!(fx.monster(HERO).status.contains("cond"));
        }
    }

    #[test]
    fn test_serde_tags() {
        let effect: Effect = toml::from_str(r#"type = "diehard"
hp = 1"#)
        .unwrap();
        assert_eq!(effect, Effect::DieHard { hp: 1 });

        let effect: Effect = toml::from_str(r#"type = "charging""#).unwrap();
        assert_eq!(effect, Effect::Charging);
    }
}
