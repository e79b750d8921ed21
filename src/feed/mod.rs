use chrono::{DateTime, NaiveDate, Utc};
use sha2::{Digest, Sha256};

use crate::config::SiteMeta;
use crate::manifest::{parse_date_string, Post, PostManifest};

/// RFC 2822 style timestamp used by RSS pubDate fields
const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S +0000";

/// Render the posts manifest as an RSS 2.0 document
///
/// Items appear in reverse manifest order, so a manifest kept
/// oldest-first produces a newest-first feed.
pub fn generate_feed(manifest: &PostManifest, meta: &SiteMeta, now: DateTime<Utc>) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    xml.push_str("<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n");
    xml.push_str("<channel>\n");

    push_tag(&mut xml, "title", &meta.title);
    push_tag(&mut xml, "link", &meta.link);
    push_tag(&mut xml, "description", &meta.description);
    push_tag(&mut xml, "language", &meta.language);
    push_tag(&mut xml, "pubDate", &now.format(PUB_DATE_FORMAT).to_string());
    xml.push_str(&format!(
        "<atom:link rel=\"self\" href=\"{}\"/>\n",
        html_escape::encode_double_quoted_attribute(&feed_url(meta))
    ));

    for post in manifest.posts.iter().rev() {
        xml.push_str(&feed_item(post, meta));
    }

    xml.push_str("</channel>\n</rss>\n");
    xml
}

fn feed_item(post: &Post, meta: &SiteMeta) -> String {
    let link = post_link(post, meta);

    let mut item = String::from("<item>\n");
    push_tag(&mut item, "title", &post.title);
    push_tag(&mut item, "link", &link);
    push_tag(&mut item, "description", &post.description);
    push_tag(&mut item, "pubDate", &item_pub_date(&post.date));
    push_tag(&mut item, "guid", &item_guid(post, &link));
    item.push_str("</item>\n");
    item
}

/// Absolute link for a post, preferring the manifest's own url field
fn post_link(post: &Post, meta: &SiteMeta) -> String {
    if let Some(url) = &post.url {
        if !url.is_empty() {
            return url.clone();
        }
    }

    format!(
        "{}/{}",
        meta.link.trim_end_matches('/'),
        post.path.trim_start_matches('/')
    )
}

fn feed_url(meta: &SiteMeta) -> String {
    format!("{}/feed.xml", meta.link.trim_end_matches('/'))
}

// Unparseable post dates fall back to the epoch
fn item_pub_date(date: &str) -> String {
    let parsed = parse_date_string(date).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
    });

    parsed.format(PUB_DATE_FORMAT).to_string()
}

/// Deterministic item guid from title, date and link
fn item_guid(post: &Post, link: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(post.title.as_bytes());
    hasher.update(post.date.as_bytes());
    hasher.update(link.as_bytes());
    hex::encode(hasher.finalize())
}

fn push_tag(xml: &mut String, tag: &str, value: &str) {
    xml.push_str(&format!(
        "<{}>{}</{}>\n",
        tag,
        html_escape::encode_text(value),
        tag
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> SiteMeta {
        SiteMeta {
            title: "A blog".to_string(),
            link: "https://blog.example.com/".to_string(),
            description: "notes".to_string(),
            language: "en-us".to_string(),
        }
    }

    fn manifest(json: &str) -> PostManifest {
        serde_json::from_str(json).unwrap()
    }

    fn now() -> DateTime<Utc> {
        parse_date_string("2024-09-01 12:00:00").unwrap()
    }

    #[test]
    fn test_feed_contains_channel_metadata() {
        let feed = generate_feed(&manifest(r#"{"posts":[]}"#), &meta(), now());

        assert!(feed.contains("<title>A blog</title>"));
        assert!(feed.contains("<link>https://blog.example.com/</link>"));
        assert!(feed.contains("<language>en-us</language>"));
        assert!(feed.contains("href=\"https://blog.example.com/feed.xml\""));
    }

    #[test]
    fn test_items_appear_in_reverse_manifest_order() {
        let feed = generate_feed(
            &manifest(
                r#"{"posts":[
                    {"title":"Oldest","path":"/old","date":"2024-01-01"},
                    {"title":"Newest","path":"/new","date":"2024-06-01"}
                ]}"#,
            ),
            &meta(),
            now(),
        );

        let newest_at = feed.find("<title>Newest</title>").unwrap();
        let oldest_at = feed.find("<title>Oldest</title>").unwrap();
        assert!(newest_at < oldest_at);
    }

    #[test]
    fn test_item_link_falls_back_to_site_link_and_path() {
        let feed = generate_feed(
            &manifest(r#"{"posts":[{"title":"A","path":"/a","date":"2024-01-01"}]}"#),
            &meta(),
            now(),
        );

        assert!(feed.contains("<link>https://blog.example.com/a</link>"));
    }

    #[test]
    fn test_item_link_prefers_manifest_url() {
        let feed = generate_feed(
            &manifest(
                r#"{"posts":[{"title":"A","path":"/a","date":"2024-01-01","url":"https://elsewhere.example.com/a"}]}"#,
            ),
            &meta(),
            now(),
        );

        assert!(feed.contains("<link>https://elsewhere.example.com/a</link>"));
    }

    #[test]
    fn test_guid_is_deterministic() {
        let source = r#"{"posts":[{"title":"A","path":"/a","date":"2024-01-01"}]}"#;

        let first = generate_feed(&manifest(source), &meta(), now());
        let second = generate_feed(&manifest(source), &meta(), now());

        assert_eq!(first, second);
        assert!(first.contains("<guid>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let feed = generate_feed(
            &manifest(
                r#"{"posts":[{"title":"Tips & <tricks>","path":"/t","date":"2024-01-01"}]}"#,
            ),
            &meta(),
            now(),
        );

        assert!(feed.contains("Tips &amp; &lt;tricks&gt;"));
        assert!(!feed.contains("<tricks>"));
    }

    #[test]
    fn test_unparseable_date_falls_back_to_epoch() {
        let feed = generate_feed(
            &manifest(r#"{"posts":[{"title":"A","path":"/a","date":"someday"}]}"#),
            &meta(),
            now(),
        );

        assert!(feed.contains("<pubDate>Thu, 01 Jan 1970 00:00:00 +0000</pubDate>"));
    }
}
