use anyhow::Result;
use clap::Parser;
use cloud_storage_config::AppConfig;

mod args;
mod logger;
mod replay;

use args::Args;

fn main() -> Result<()> {
    logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load(),
    };
    log::debug!("Using config: {:?}", config);

    let actions = replay::load_actions(&args.actions)?;
    log::info!("Loaded {} actions from {:?}", actions.len(), args.actions);

    let state = replay::replay(actions, &config);
    println!("{}", serde_json::to_string_pretty(&state)?);

    Ok(())
}
