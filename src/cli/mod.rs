pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

use crate::config;

/// Run the command-line interface
pub async fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            return;
        }
    };

    match &cli.command {
        Some(command @ types::Commands::Render { .. }) => {
            commands::handle_render_command(command, config).await;
        }
        Some(command @ types::Commands::Feed { .. }) => {
            commands::handle_feed_command(command, config);
        }
        None => {
            // Default to rendering with the configured options
            commands::render::render_fragment(config, None).await;
        }
    }
}
