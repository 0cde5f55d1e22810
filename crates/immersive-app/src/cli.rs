use clap::Parser;
use immersive_common::FieldOfView;
use immersive_config::ProjectionQuality;
use std::path::PathBuf;

/// OpenImmersive: project 360°/180° video onto a sphere surface.
#[derive(Parser, Debug)]
#[command(name = "openimmersive", version, about)]
pub struct Args {
    /// Settings file path override (.toml or .json).
    #[arg(long, conflicts_with = "resources")]
    pub config: Option<PathBuf>,

    /// Directory holding the bundled openimmersive.toml/.json.
    #[arg(long)]
    pub resources: Option<PathBuf>,

    /// Log level override (debug, info, warn, error, or a full directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Field of view published to the video source, as HxV in degrees.
    /// Repeat to simulate a sequence of changes.
    #[arg(long = "fov", value_parser = parse_fov)]
    pub fovs: Vec<FieldOfView>,

    /// Projection quality override (low, medium, high).
    #[arg(long)]
    pub quality: Option<ProjectionQuality>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Parse `"360x180"` into a field of view. Range checking is left to the
/// mesh generator, which clamps.
fn parse_fov(value: &str) -> Result<FieldOfView, String> {
    let (h, v) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected HxV, got '{value}'"))?;
    let horizontal = h
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("bad horizontal extent '{h}': {e}"))?;
    let vertical = v
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("bad vertical extent '{v}': {e}"))?;
    Ok(FieldOfView::new(horizontal, vertical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fov() {
        assert_eq!(parse_fov("360x180"), Ok(FieldOfView::FULL_SPHERE));
        assert_eq!(parse_fov("90.5X45"), Ok(FieldOfView::new(90.5, 45.0)));
    }

    #[test]
    fn rejects_malformed_fov() {
        assert!(parse_fov("360").is_err());
        assert!(parse_fov("widex180").is_err());
        assert!(parse_fov("360x").is_err());
    }

    #[test]
    fn repeated_fov_flags_keep_order() {
        let args = Args::parse_from([
            "openimmersive",
            "--fov",
            "180x180",
            "--fov",
            "360x180",
            "--quality",
            "HIGH",
        ]);
        assert_eq!(
            args.fovs,
            vec![FieldOfView::HALF_SPHERE, FieldOfView::FULL_SPHERE]
        );
        assert_eq!(args.quality, Some(ProjectionQuality::High));
    }

    #[test]
    fn config_and_resources_conflict() {
        let result = Args::try_parse_from([
            "openimmersive",
            "--config",
            "a.toml",
            "--resources",
            "dir",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
