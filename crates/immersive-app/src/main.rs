mod cli;
mod session;

use immersive_common::ImmersiveError;
use immersive_config::{shared, BundleSource, FileSource, InMemorySource, SettingsSource};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "immersive=info";

/// Pick where settings come from: an explicit file, a resource directory,
/// or the directory beside the executable.
fn settings_source(args: &cli::Args) -> Box<dyn SettingsSource> {
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
        return Box::new(FileSource::new(path));
    }
    if let Some(dir) = &args.resources {
        return Box::new(BundleSource::new(dir));
    }
    match BundleSource::beside_executable() {
        Ok(source) => Box::new(source),
        Err(e) => {
            tracing::warn!("Cannot locate bundled resources: {e}");
            Box::new(InMemorySource::empty())
        }
    }
}

fn run(args: cli::Args) -> Result<(), ImmersiveError> {
    let source = settings_source(&args);
    let mut config = shared::init(source.as_ref()).clone();
    if let Some(quality) = args.quality {
        tracing::info!("Projection quality override: {quality}");
        config.projection_quality = quality;
    }
    tracing::debug!(
        "Effective config: {}",
        immersive_config::config_to_json(&config)
    );
    tracing::info!(
        "Config loaded (scrubber tint: {}, quality: {})",
        config.scrubber_tint.to_hex(),
        config.projection_quality
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let snapshot = runtime.block_on(session::run(&config, &args.fovs))?;

    let Some(model) = snapshot.model.as_ref() else {
        return Err(ImmersiveError::Other("screen has no model".into()));
    };
    let fov = model.mesh.field_of_view;
    println!(
        "screen:        {} (generation {})",
        immersive_screen::SCREEN_ENTITY_NAME,
        snapshot.generation
    );
    println!("field of view: {fov}");
    println!(
        "mesh:          {} vertices, {} triangles ({} x {} segments)",
        model.mesh.vertex_count(),
        model.mesh.triangle_count(),
        model.mesh.columns,
        model.mesh.rows
    );
    println!("yaw:           {:.1}°", snapshot.transform.yaw.to_degrees());
    println!("texture:       {}", model.material.texture);
    println!("scrubber tint: {}", config.scrubber_tint.to_hex());
    Ok(())
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(log_directive).unwrap_or_else(|e| {
                eprintln!("invalid log directive '{log_directive}': {e}");
                EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
            }),
        )
        .init();

    tracing::info!("OpenImmersive v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
