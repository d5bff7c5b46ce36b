//! Magecraft headless client binary.
//!
//! Composition root: loads `.env`, initializes logging, loads content from
//! `MAGECRAFT_DATA_DIR` (default `data`) and plays the demo script. The final
//! character status is printed to stdout as JSON.
//!
//! ```bash
//! RUST_LOG=debug MAGECRAFT_DATA_DIR=data cargo run -p magecraft
//! ```

use anyhow::Result;
use magecraft::{Client, logging, script};
use runtime::RuntimeConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = RuntimeConfig::from_env();
    logging::setup_logging()?;

    tracing::info!("Starting magecraft");
    tracing::info!("Data directory: {}", config.data_dir.display());

    let mut client = Client::builder().config(config).build()?;
    let status = client.run(script::demo())?;

    tracing::info!(
        level = status.level,
        hp = status.hp,
        mp = status.mp,
        gold = status.gold,
        exp_ratio = status.exp_ratio(),
        "Session finished"
    );
    println!("{}", serde_json::to_string_pretty(&status)?);

    Ok(())
}
