use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One blog entry's metadata as listed in the posts manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Relative link target for the post
    pub path: String,

    /// Short description shown under the title
    #[serde(default)]
    pub description: String,

    /// Publication date, an ISO-8601 string
    pub date: String,

    /// Thumbnail image URL
    #[serde(rename = "imagePath", default)]
    pub image_path: Option<String>,

    /// Absolute URL of the post on the live site
    #[serde(default)]
    pub url: Option<String>,
}

impl Post {
    /// Parse the post's date string, if it is in a recognized format
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        parse_date_string(&self.date)
    }
}

/// The JSON document listing all posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostManifest {
    pub posts: Vec<Post>,
}

/// Parse a date string into a DateTime<Utc>
pub fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    // Try RFC3339 format first
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date_str) {
        return Some(parsed.with_timezone(&Utc));
    }

    // Try ISO 8601 format (YYYY-MM-DD HH:MM:SS)
    if let Ok(parsed) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }

    // Try date only (YYYY-MM-DD)
    if let Ok(parsed) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return parsed.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}
