use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("settings file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("settings read error: {0}")]
    ReadError(String),

    #[error("settings parse error: {0}")]
    ParseError(String),

    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("video source closed")]
    SourceClosed,

    #[error("mesh generation failed: {0}")]
    GenerationFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ImmersiveError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Screen(#[from] ScreenError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
