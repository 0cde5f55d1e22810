//! Filesystem-backed settings sources.

use immersive_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{RawSettings, SettingsFormat, SettingsSource};
use crate::schema::SETTINGS_RESOURCE_NAME;

/// Settings file at an explicit path.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsSource for FileSource {
    fn fetch(&self) -> Result<Option<RawSettings>, ConfigError> {
        read_optional(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The `openimmersive` resource shipped alongside the application.
///
/// Looks for `openimmersive.toml`, then `openimmersive.json`, then
/// `openimmersive.plist`.
#[derive(Debug, Clone)]
pub struct BundleSource {
    resource_dir: PathBuf,
}

impl BundleSource {
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
        }
    }

    /// Resource directory of the running executable.
    pub fn beside_executable() -> Result<Self, ConfigError> {
        let exe = std::env::current_exe()
            .map_err(|e| ConfigError::ReadError(format!("could not locate executable: {e}")))?;
        let dir = exe.parent().ok_or_else(|| {
            ConfigError::ReadError(format!("executable has no parent: {}", exe.display()))
        })?;
        Ok(Self::new(dir))
    }

    /// Candidate resource paths in lookup order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        [
            SettingsFormat::Toml,
            SettingsFormat::Json,
            SettingsFormat::Plist,
        ]
            .iter()
            .map(|format| {
                self.resource_dir
                    .join(format!("{SETTINGS_RESOURCE_NAME}.{}", format.extension()))
            })
            .collect()
    }
}

impl SettingsSource for BundleSource {
    fn fetch(&self) -> Result<Option<RawSettings>, ConfigError> {
        for path in self.candidates() {
            if let Some(raw) = read_optional(&path)? {
                return Ok(Some(raw));
            }
            debug!("no settings resource at {}", path.display());
        }
        Ok(None)
    }

    fn describe(&self) -> String {
        format!(
            "{}/{SETTINGS_RESOURCE_NAME}.{{toml,json,plist}}",
            self.resource_dir.display()
        )
    }
}

/// Read a settings file, mapping "not found" to `Ok(None)`.
fn read_optional(path: &Path) -> Result<Option<RawSettings>, ConfigError> {
    match std::fs::read(path) {
        Ok(content) => Ok(Some(RawSettings {
            format: SettingsFormat::from_path(path),
            content,
            origin: path.display().to_string(),
        })),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::ReadError(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}
