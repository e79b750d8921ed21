use tokio;

// Module declarations
mod cli;
mod config;
mod dom;
mod feed;
mod loader;
mod manifest;
mod utils;

#[tokio::main]
async fn main() {
    // Run the CLI
    cli::run().await;
}
