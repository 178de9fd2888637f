//! content_core - Static battle content shared by the combat engine
//!
//! This library provides:
//! - Range / ElementType: move categories and elements
//! - Technique: a runtime technique instance with recharge state
//! - TechniqueDb: lookup-by-slug database loaded from TOML files

mod config;
mod registry;
pub mod technique;
pub mod types;

pub use registry::TechniqueDb;
pub use technique::{Technique, TechniqueEffect};
pub use types::{ElementType, Range};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading content configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error looking up content by slug
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("Unknown technique: {0}")]
    UnknownTechnique(String),
}
