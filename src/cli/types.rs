use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::loader::transform::SortMode;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "postlist")]
#[command(about = "Post list fetcher, renderer and feed generator for static blogs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (defaults to ./postlist.yml)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the posts manifest and render the post list fragment
    #[command(alias = "r")]
    Render {
        /// Full manifest URL (overrides base-url and the manifest path)
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Base URL the manifest path is resolved against
        #[arg(short, long, value_name = "URL")]
        base_url: Option<String>,

        /// Id of the container element posts are rendered into
        #[arg(long, value_name = "ID")]
        container_id: Option<String>,

        /// Maximum number of posts to render
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,

        /// Ordering applied to posts before rendering
        #[arg(short, long, value_enum)]
        sort: Option<SortMode>,

        /// Render recent dates relative to today
        #[arg(long, value_name = "BOOL")]
        relative_dates: Option<bool>,

        /// Output file for the rendered fragment (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Generate an RSS feed from a local posts manifest
    #[command(alias = "f")]
    Feed {
        /// Path to the posts.json file
        #[arg(long, value_name = "FILE", default_value = "out/posts/posts.json")]
        posts_path: PathBuf,

        /// Path to the output RSS feed file
        #[arg(long, value_name = "FILE", default_value = "out/feed.xml")]
        feed_path: PathBuf,
    },
}
