use std::error::Error;
use std::fmt;

use log::debug;

use crate::manifest::model::PostManifest;

/// Error types for manifest fetching
#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a response
    Request(reqwest::Error),
    /// The server answered with a non-success status
    HttpStatus(u16),
    /// The response body was not a valid posts manifest
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(err) => write!(f, "request failed: {}", err),
            FetchError::HttpStatus(code) => write!(f, "server returned HTTP status {}", code),
            FetchError::Decode(msg) => write!(f, "could not decode posts manifest: {}", msg),
        }
    }
}

impl Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err)
    }
}

/// HTTP client for the posts manifest
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Fetcher {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch and decode the posts manifest from the given URL
    ///
    /// A single GET, no retries. Non-success statuses and undecodable
    /// bodies come back as errors instead of panics.
    pub async fn fetch(&self, url: &str) -> Result<PostManifest, FetchError> {
        debug!("Fetching posts manifest from {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        debug!("Fetch response received: HTTP {}", status);
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        response
            .json::<PostManifest>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Fetcher::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a loopback port
    async fn serve_response(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.flush().await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    #[tokio::test]
    async fn test_fetch_decodes_manifest() {
        let body = r#"{"posts":[{"title":"A","path":"/a","description":"d","date":"2024-01-01"}]}"#;
        let url = serve_response(http_response("200 OK", body)).await;

        let manifest = Fetcher::new().fetch(&url).await.unwrap();

        assert_eq!(manifest.posts.len(), 1);
        assert_eq!(manifest.posts[0].title, "A");
    }

    #[tokio::test]
    async fn test_fetch_maps_non_success_status() {
        let url = serve_response(http_response("404 Not Found", "gone")).await;

        let err = Fetcher::new().fetch(&url).await.unwrap_err();

        assert!(matches!(err, FetchError::HttpStatus(404)));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_maps_undecodable_body() {
        let url = serve_response(http_response("200 OK", "not json at all")).await;

        let err = Fetcher::new().fetch(&url).await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }
}
