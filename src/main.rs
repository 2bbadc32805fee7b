//! Elder Scrolls Legends card browser - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Elder Scrolls Legends card browser - TUI for the public card catalog
#[derive(Parser, Debug)]
#[command(name = "eslcards")]
#[command(version)]
#[command(about = "Browse and search Elder Scrolls Legends cards in the terminal")]
pub struct Args {
    /// Start with this name filter applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Catalog endpoint (overrides config file and ESLCARDS_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Cards requested per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = eslcards::config::load_config_with_precedence(args.config.clone())?;
        let merged = eslcards::config::merge_config(config_file);
        let with_env = eslcards::config::apply_env_overrides(merged);
        eslcards::config::apply_cli_overrides(with_env, args.base_url.clone(), args.page_size)
    };

    eslcards::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let launch = eslcards::view::LaunchOptions {
        initial_search: args.search,
        no_color: args.no_color,
    };
    eslcards::view::run_with_config(&config, launch)?;

    Ok(())
}
