use super::Condition;
use crate::effect::Effect;
use crate::ConditionConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Content definition of a condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDef {
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Effects evaluated, in order, every phase the condition is active
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub repl_tech: Option<String>,
    #[serde(default)]
    pub repl_item: Option<String>,
}

impl ConditionDef {
    pub fn new(slug: impl Into<String>, effects: Vec<Effect>) -> Self {
        ConditionDef {
            slug: slug.into(),
            name: None,
            effects,
            repl_tech: None,
            repl_item: None,
        }
    }

    pub fn with_repl_tech(mut self, slug: impl Into<String>) -> Self {
        self.repl_tech = Some(slug.into());
        self
    }

    pub fn with_repl_item(mut self, slug: impl Into<String>) -> Self {
        self.repl_item = Some(slug.into());
        self
    }

    /// Whether the replacement slugs name conditions rather than techniques
    pub fn spawns_conditions(&self) -> bool {
        self.effects.iter().any(|e| matches!(e, Effect::Charging))
    }
}

/// Condition registry: slug to definition and effects
#[derive(Debug, Clone, Default)]
pub struct ConditionRegistry {
    defs: HashMap<String, ConditionDef>,
}

impl ConditionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConditionRegistry {
            defs: HashMap::new(),
        }
    }

    /// Register a condition definition, replacing any with the same slug
    pub fn register(&mut self, def: ConditionDef) {
        self.defs.insert(def.slug.clone(), def);
    }

    pub fn get(&self, slug: &str) -> Option<&ConditionDef> {
        self.defs.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.defs.contains_key(slug)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.defs.keys().map(|s| s.as_str())
    }

    pub(crate) fn defs(&self) -> impl Iterator<Item = &ConditionDef> {
        self.defs.values()
    }

    /// Effects bound to a condition slug
    pub fn effects(&self, slug: &str) -> Result<&[Effect], ConditionConfigError> {
        self.get(slug)
            .map(|d| d.effects.as_slice())
            .ok_or_else(|| ConditionConfigError::UnknownCondition(slug.to_string()))
    }

    /// Instantiate an unattached condition from its definition
    pub fn create(&self, slug: &str) -> Result<Condition, ConditionConfigError> {
        let def = self
            .get(slug)
            .ok_or_else(|| ConditionConfigError::UnknownCondition(slug.to_string()))?;

        let mut condition = Condition::new(&def.slug);
        if let Some(name) = &def.name {
            condition.name = name.clone();
        }
        condition.repl_tech = def.repl_tech.clone();
        condition.repl_item = def.repl_item.clone();
        Ok(condition)
    }
}
