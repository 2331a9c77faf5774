use anyhow::Context;
use takeoff_tracker::{GeneratorConfig, generate};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GeneratorConfig::default();
    let path = generate(&config)
        .inspect_err(|e| tracing::error!("Failed to generate tracker: {}", e))
        .with_context(|| format!("writing {}", config.output_path.display()))?;

    println!("Created: {}", path.display());
    Ok(())
}
