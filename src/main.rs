mod cli;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use userstore_db::UserStore;

fn main() -> Result<()> {
    Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "userstore=info,userstore_db=info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let config = config::load_config_or_default()?;
    tracing::debug!("Using database at {:?}", config.db_path);

    UserStore::from_config(&config).ensure_schema();

    Ok(())
}
