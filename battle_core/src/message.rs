//! User-facing message keys emitted by effects
//!
//! Effects never render text. They return a template key plus parameters and
//! the caller renders them through a `MessageFormatter`.

use crate::config::{ConfigError, load_toml, parse_toml};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub const CONFUSED_TECH: &str = "combat_state_confused_tech";
pub const DIEHARD_TECH: &str = "combat_state_diehard_tech";
pub const DIEHARD_END: &str = "combat_state_diehard_end";
pub const LOCKDOWN_ITEM: &str = "combat_state_lockdown_item";

/// A template key and its parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub key: String,
    pub params: BTreeMap<String, String>,
}

impl Message {
    pub fn new(key: impl Into<String>) -> Self {
        Message {
            key: key.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a parameter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }
}

/// Renders messages into display text
pub trait MessageFormatter {
    fn format(&self, message: &Message) -> String;
}

/// Flat key to template table, `{name}` placeholders substituted from params
///
/// Unknown keys render as the key itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Templates {
    templates: HashMap<String, String>,
}

impl Templates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load templates from a TOML file of `key = "text"` pairs
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_toml(path)
    }

    /// Parse templates from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        parse_toml(toml)
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(|s| s.as_str())
    }
}

impl MessageFormatter for Templates {
    fn format(&self, message: &Message) -> String {
        let Some(template) = self.get(&message.key) else {
            return message.key.clone();
        };

        let mut text = template.to_string();
        for (name, value) in &message.params {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}
