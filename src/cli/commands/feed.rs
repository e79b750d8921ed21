use std::fs;
use std::path::Path;

use chrono::Utc;
use log::{error, info};

use crate::cli::types::Commands;
use crate::config::Config;
use crate::feed;
use crate::manifest::PostManifest;
use crate::utils::error::{BoxResult, PostlistError};

/// Handle the feed command
pub fn handle_feed_command(command: &Commands, config: Config) {
    if let Commands::Feed {
        posts_path,
        feed_path,
    } = command
    {
        match generate_feed_file(posts_path, feed_path, &config) {
            Ok(count) => info!("Wrote feed with {} items to {}", count, feed_path.display()),
            Err(e) => error!("Failed to generate feed: {}", e),
        }
    }
}

/// Read a local manifest and write the RSS feed next to it
fn generate_feed_file(posts_path: &Path, feed_path: &Path, config: &Config) -> BoxResult<usize> {
    let content = fs::read_to_string(posts_path).map_err(|e| {
        PostlistError::Feed(format!(
            "Posts manifest not found at {}: {}",
            posts_path.display(),
            e
        ))
    })?;

    let manifest: PostManifest = serde_json::from_str(&content).map_err(|e| {
        PostlistError::Feed(format!(
            "Could not decode posts manifest {}: {}",
            posts_path.display(),
            e
        ))
    })?;

    let xml = feed::generate_feed(&manifest, &config.site, Utc::now());
    fs::write(feed_path, xml)?;

    Ok(manifest.posts.len())
}
