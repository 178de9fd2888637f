use crate::config::{TechniqueConfig, TechniqueFileConfig};
use crate::technique::Technique;
use crate::{ConfigError, ContentError};
use std::collections::HashMap;
use std::path::Path;

/// Lookup-by-slug database of techniques, loaded from TOML files
#[derive(Debug, Default)]
pub struct TechniqueDb {
    techniques: HashMap<String, TechniqueConfig>,
}

impl TechniqueDb {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all technique files from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut db = Self::new();
        db.load_dir(dir)?;
        Ok(db)
    }

    /// Parse techniques from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut db = Self::new();
        db.insert_file(content, Path::new("<inline>"))?;
        Ok(db)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;
        self.insert_file(&content, path)
    }

    fn insert_file(&mut self, content: &str, path: &Path) -> Result<(), ConfigError> {
        let config: TechniqueFileConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.to_path_buf(),
        })?;

        for technique in config.techniques {
            if technique.power < 0.0 {
                return Err(ConfigError::Validation {
                    message: format!("technique '{}' has negative power", technique.slug),
                    path: path.to_path_buf(),
                });
            }
            if self.techniques.contains_key(&technique.slug) {
                return Err(ConfigError::Validation {
                    message: format!("duplicate technique slug '{}'", technique.slug),
                    path: path.to_path_buf(),
                });
            }
            self.techniques.insert(technique.slug.clone(), technique);
        }

        Ok(())
    }

    /// Check if a technique exists
    pub fn contains(&self, slug: &str) -> bool {
        self.techniques.contains_key(slug)
    }

    /// List all technique slugs
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.techniques.keys().map(|s| s.as_str())
    }

    /// Build a fresh technique instance by slug
    pub fn create(&self, slug: &str) -> Result<Technique, ContentError> {
        self.techniques
            .get(slug)
            .map(Technique::from_config)
            .ok_or_else(|| ContentError::UnknownTechnique(slug.to_string()))
    }
}
