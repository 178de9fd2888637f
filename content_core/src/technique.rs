//! Techniques - moves a monster can use in combat

use crate::config::TechniqueConfig;
use crate::types::{ElementType, Range};
use serde::{Deserialize, Serialize};

/// Effect a technique has when it lands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TechniqueEffect {
    /// Inflicts a condition on the target
    Give { condition: String },
}

/// A technique instance owned by a monster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technique {
    pub slug: String,
    /// Display name
    pub name: String,
    pub range: Range,
    /// Power multiplier fed into the damage formula
    pub power: f64,
    pub types: Vec<ElementType>,
    /// Turns the technique is unusable after being used
    pub recharge_length: u32,
    /// Turns until the technique can be used again (0 = ready)
    pub next_use: u32,
    pub effects: Vec<TechniqueEffect>,
}

impl Technique {
    /// Create a ready-to-use technique with default power and no effects
    pub fn new(slug: impl Into<String>, range: Range) -> Self {
        let slug = slug.into();
        Technique {
            name: slug.clone(),
            slug,
            range,
            power: 1.0,
            types: Vec::new(),
            recharge_length: 0,
            next_use: 0,
            effects: Vec::new(),
        }
    }

    pub(crate) fn from_config(config: &TechniqueConfig) -> Self {
        Technique {
            slug: config.slug.clone(),
            name: config.name.clone().unwrap_or_else(|| config.slug.clone()),
            range: config.range,
            power: config.power,
            types: config.types.clone(),
            recharge_length: config.recharge,
            next_use: 0,
            effects: config.effects.clone(),
        }
    }

    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    pub fn with_types(mut self, types: Vec<ElementType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_recharge(mut self, recharge_length: u32) -> Self {
        self.recharge_length = recharge_length;
        self
    }

    pub fn with_effect(mut self, effect: TechniqueEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Whether the technique is still recharging from a previous use
    pub fn is_recharging(&self) -> bool {
        self.next_use > 0
    }

    /// Whether this technique inflicts the given condition
    pub fn gives_condition(&self, condition: &str) -> bool {
        self.effects.iter().any(|e| {
            matches!(e, TechniqueEffect::Give { condition: c } if c == condition)
        })
    }

    /// Mark the technique as used, starting its recharge
    pub fn mark_used(&mut self) {
        self.next_use = self.recharge_length;
    }

    /// Advance recharge by one turn
    pub fn tick_recharge(&mut self) {
        self.next_use = self.next_use.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recharge_cycle() {
        let mut tech = Technique::new("hyper_beam", Range::Ranged).with_recharge(2);
        assert!(!tech.is_recharging());

        tech.mark_used();
        assert!(tech.is_recharging());
        tech.tick_recharge();
        assert!(tech.is_recharging());
        tech.tick_recharge();
        assert!(!tech.is_recharging());

        // Never underflows
        tech.tick_recharge();
        assert_eq!(tech.next_use, 0);
    }

    #[test]
    fn test_gives_condition() {
        let tech = Technique::new("befuddle", Range::Special).with_effect(TechniqueEffect::Give {
            condition: "confused".to_string(),
        });
        assert!(tech.gives_condition("confused"));
        assert!(!tech.gives_condition("poisoned"));

        let ram = Technique::new("ram", Range::Melee);
        assert!(!ram.gives_condition("confused"));
    }

    #[test]
    fn test_parse_effects() {
        let toml = r#"
effects = [
    { type = "give", condition = "confused" },
    { type = "give", condition = "poisoned" },
]
"#;
        #[derive(Deserialize)]
        struct Wrapper {
            effects: Vec<TechniqueEffect>,
        }

        let parsed: Wrapper = toml::from_str(toml).unwrap();
        assert_eq!(parsed.effects.len(), 2);
        assert_eq!(
            parsed.effects[1],
            TechniqueEffect::Give {
                condition: "poisoned".to_string()
            }
        );
    }
}
