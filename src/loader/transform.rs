use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::manifest::Post;

/// Ordering policy applied to posts before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recent posts first
    Newest,
    /// Oldest posts first
    Oldest,
    /// Keep the manifest order
    None,
}

/// Sort and truncate a post list
///
/// The sort is stable, so posts sharing a date keep their manifest order.
/// A `limit` of zero yields an empty list; `None` means no truncation.
pub fn transform(posts: &[Post], sort: SortMode, limit: Option<usize>) -> Vec<Post> {
    let mut sorted: Vec<Post> = posts.to_vec();

    match sort {
        SortMode::Newest => sorted.sort_by(|a, b| sort_date(b).cmp(&sort_date(a))),
        SortMode::Oldest => sorted.sort_by(|a, b| sort_date(a).cmp(&sort_date(b))),
        SortMode::None => {}
    }

    if let Some(limit) = limit {
        sorted.truncate(limit);
    }

    sorted
}

// Unparseable dates sort as the earliest representable instant
fn sort_date(post: &Post) -> DateTime<Utc> {
    post.parsed_date().unwrap_or(DateTime::<Utc>::MIN_UTC)
}
