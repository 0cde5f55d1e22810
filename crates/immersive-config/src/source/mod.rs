//! Where settings come from.
//!
//! The loader never touches the filesystem directly; it asks a
//! [`SettingsSource`] for raw content. The bundled resource, an explicit
//! path, and in-memory documents are all just sources.

mod filesystem;


pub use filesystem::{BundleSource, FileSource};

use immersive_common::ConfigError;
use std::path::Path;

/// Serialization format of a settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Toml,
    Json,
    /// Apple property list, XML or binary.
    Plist,
}

impl SettingsFormat {
    /// `.json` and `.plist` are recognized; everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            Some(ext) if ext.eq_ignore_ascii_case("plist") => Self::Plist,
            _ => Self::Toml,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Plist => "plist",
        }
    }
}

/// Unparsed settings document plus a description of where it came from.
#[derive(Debug, Clone)]
pub struct RawSettings {
    pub format: SettingsFormat,
    /// Document bytes. Text formats must be UTF-8.
    pub content: Vec<u8>,
    pub origin: String,
}

/// Capability to fetch the settings document.
pub trait SettingsSource: Send + Sync {
    /// `Ok(None)` when the resource does not exist.
    fn fetch(&self) -> Result<Option<RawSettings>, ConfigError>;

    /// Human-readable location, used in diagnostics.
    fn describe(&self) -> String;
}

/// Settings held in memory. Useful in tests and for embedded defaults.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    document: Option<(SettingsFormat, Vec<u8>)>,
}

impl InMemorySource {
    pub fn toml(content: impl Into<String>) -> Self {
        Self {
            document: Some((SettingsFormat::Toml, content.into().into_bytes())),
        }
    }

    pub fn json(content: impl Into<String>) -> Self {
        Self {
            document: Some((SettingsFormat::Json, content.into().into_bytes())),
        }
    }

    pub fn plist(content: impl Into<Vec<u8>>) -> Self {
        Self {
            document: Some((SettingsFormat::Plist, content.into())),
        }
    }

    /// A source with no document at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl SettingsSource for InMemorySource {
    fn fetch(&self) -> Result<Option<RawSettings>, ConfigError> {
        Ok(self.document.as_ref().map(|(format, content)| RawSettings {
            format: *format,
            content: content.clone(),
            origin: self.describe(),
        }))
    }

    fn describe(&self) -> String {
        "in-memory settings".into()
    }
}
