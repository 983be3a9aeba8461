//! Error types for configuration and session setup.
//!
//! The simulation itself never fails; these only come out of loading
//! settings and checking that the course fits the field.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading settings or starting a session.
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// Settings file is not valid JSON for `Settings`.
    Parse { path: PathBuf, source: serde_json::Error },
    /// A setting is outside its allowed range.
    InvalidValue { name: &'static str, reason: String },
    /// An entity cannot be placed with a margin of its own size.
    FieldTooSmall {
        entity: &'static str,
        field: (u32, u32),
        size: (u32, u32),
    },
    /// The course leaves no clear spot for an entity.
    CourseTooCrowded {
        entity: &'static str,
        obstacles: usize,
        field: (u32, u32),
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            SettingsError::Parse { path, source } => {
                write!(f, "cannot parse {}: {}", path.display(), source)
            }
            SettingsError::InvalidValue { name, reason } => {
                write!(f, "invalid setting `{}`: {}", name, reason)
            }
            SettingsError::FieldTooSmall { entity, field, size } => write!(
                f,
                "{}x{} field too small to place {} of size {}x{}",
                field.0, field.1, entity, size.0, size.1
            ),
            SettingsError::CourseTooCrowded {
                entity,
                obstacles,
                field,
            } => write!(
                f,
                "{}x{} field too crowded to place {} among {} obstacles",
                field.0, field.1, entity, obstacles
            ),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
