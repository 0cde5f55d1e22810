//! Process-wide configuration accessor.
//!
//! Prefer passing an [`ImmersiveConfig`] explicitly. This exists for hosts
//! that need one value reachable from code they do not control.

use std::sync::OnceLock;

use crate::loader;
use crate::schema::ImmersiveConfig;
use crate::source::SettingsSource;

static SHARED: OnceLock<ImmersiveConfig> = OnceLock::new();

/// Load from `source` on the first call. Later calls return the first value
/// and never read `source`.
pub fn init(source: &dyn SettingsSource) -> &'static ImmersiveConfig {
    SHARED.get_or_init(|| loader::load(source))
}

/// The shared configuration, if [`init`] has run.
pub fn get() -> Option<&'static ImmersiveConfig> {
    SHARED.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemorySource;

    #[test]
    fn init_is_idempotent() {
        let first = init(&InMemorySource::toml("projectionQuality = \"high\""));
        let second = init(&InMemorySource::toml("projectionQuality = \"low\""));
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, get().unwrap());
        assert_eq!(second.projection_quality, first.projection_quality);
    }
}
