pub mod dates;
pub mod render;
pub mod status;
pub mod transform;

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use log::{debug, error};

use crate::config::Config;
use crate::dom::Element;
use crate::loader::render::RenderOptions;
use crate::manifest::{FetchError, Fetcher, PostManifest};

/// Error types for a fetch-render cycle
#[derive(Debug)]
pub enum LoaderError {
    /// Target container element absent from the page tree
    MissingContainer(String),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::MissingContainer(id) => {
                write!(f, "container element #{} not found", id)
            }
        }
    }
}

impl Error for LoaderError {}

/// What a settled cycle did to the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Posts (or the empty state) were rendered
    Rendered(usize),
    /// The fetch failed and the error state was rendered
    Failed,
    /// A newer cycle started first; this one applied nothing
    Superseded,
}

/// Fetches the posts manifest and renders it into a container element
///
/// One loader drives any number of fetch-render cycles against a page
/// tree. Cycles are sequence-numbered so a completion that has been
/// overtaken by a newer cycle is discarded instead of rendering stale
/// content.
pub struct PostListLoader {
    config: Config,
    fetcher: Fetcher,
    cycles: AtomicU64,
}

impl PostListLoader {
    pub fn new(config: Config) -> Self {
        PostListLoader {
            config,
            fetcher: Fetcher::new(),
            cycles: AtomicU64::new(0),
        }
    }

    /// Run one full fetch-render cycle against the given page tree
    pub async fn run(&self, page: &mut Element) -> Result<CycleOutcome, LoaderError> {
        // Resolve the container up front; a missing container short-circuits
        // before any network traffic
        let token = {
            let container = self.container(page)?;
            let token = self.begin_cycle();
            status::show_loading(container);
            token
        };

        let url = self.config.manifest_url();
        let result = self.fetcher.fetch(&url).await;

        let container = self.container(page)?;
        Ok(self.apply(token, result, container))
    }

    /// Start a new cycle, superseding any cycle still in flight
    pub fn begin_cycle(&self) -> u64 {
        self.cycles.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply a settled fetch result to the container, unless superseded
    pub fn apply(
        &self,
        token: u64,
        result: Result<PostManifest, FetchError>,
        container: &mut Element,
    ) -> CycleOutcome {
        if !self.is_current(token) {
            debug!("Discarding superseded fetch cycle {}", token);
            return CycleOutcome::Superseded;
        }

        match result {
            Ok(manifest) => {
                let posts =
                    transform::transform(&manifest.posts, self.config.sort, self.config.limit);
                status::clear(container);
                render::render(&posts, container, &self.render_options(), Utc::now());
                debug!("Rendered {} posts", posts.len());
                CycleOutcome::Rendered(posts.len())
            }
            Err(err) => {
                error!("Error fetching posts: {}", err);
                status::show_error(container, &err.to_string());
                CycleOutcome::Failed
            }
        }
    }

    fn container<'a>(&self, page: &'a mut Element) -> Result<&'a mut Element, LoaderError> {
        page.find_by_id_mut(&self.config.container_id)
            .ok_or_else(|| LoaderError::MissingContainer(self.config.container_id.clone()))
    }

    fn is_current(&self, token: u64) -> bool {
        self.cycles.load(Ordering::SeqCst) == token
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            fallback_image: self.config.fallback_image.clone(),
            relative_dates: self.config.relative_dates,
        }
    }
}
