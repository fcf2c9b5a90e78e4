use anyhow::Result;

use satchel_cli::config::DemoConfig;

fn main() -> Result<()> {
    satchel_observability::init();

    let config = DemoConfig::from_env();
    let inventory = satchel_cli::demo::run(&mut std::io::stdout().lock(), &config)?;

    tracing::info!(items = inventory.len(), total = inventory.total(), "demo finished");
    Ok(())
}
