//! Headless inventory player.
//!
//! Plays a scripted scenario and prints the final inventory as JSON.
//! See [`ClientConfig::from_env`] for the environment variables it reads.
use anyhow::Result;
use inventory_client::{ClientConfig, Session, setup_logging};

fn main() -> Result<()> {
    // Load .env file if it exists (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let log_path = setup_logging(config.log_dir.as_deref())?;
    tracing::info!(
        scenario = %config.scenario,
        data_dir = %config.data_dir.display(),
        "logging to {}",
        log_path.display()
    );

    let mut session = Session::from_config(&config)?;
    let summary = session.play()?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
