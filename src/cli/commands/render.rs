use std::fs;
use std::path::Path;

use log::{error, info};

use crate::cli::types::Commands;
use crate::config::Config;
use crate::dom::Element;
use crate::loader::{CycleOutcome, PostListLoader};

/// Handle the render command
pub async fn handle_render_command(command: &Commands, mut config: Config) {
    if let Commands::Render {
        url,
        base_url,
        container_id,
        limit,
        sort,
        relative_dates,
        output,
    } = command
    {
        // Command line arguments take precedence over the config file
        if let Some(base) = base_url {
            config.base_url = base.clone();
        }
        if let Some(url) = url {
            config.base_url = String::new();
            config.manifest_path = url.clone();
        }
        if let Some(id) = container_id {
            config.container_id = id.clone();
        }
        if limit.is_some() {
            config.limit = *limit;
        }
        if let Some(sort) = sort {
            config.sort = *sort;
        }
        if let Some(relative) = relative_dates {
            config.relative_dates = *relative;
        }

        render_fragment(config, output.as_deref()).await;
    }
}

/// Fetch the manifest and write the rendered container fragment
pub async fn render_fragment(config: Config, output: Option<&Path>) {
    let container_id = config.container_id.clone();
    let loader = PostListLoader::new(config);

    // The page tree holds just the target container
    let mut page = Element::new("ul").with_id(&container_id);

    match loader.run(&mut page).await {
        Ok(CycleOutcome::Rendered(count)) => info!("Rendered {} posts", count),
        Ok(CycleOutcome::Failed) => error!("Fetch failed, rendered the error state instead"),
        Ok(CycleOutcome::Superseded) => return,
        Err(e) => {
            error!("Failed to render posts: {}", e);
            return;
        }
    }

    // Error and empty states are part of the fragment, so write it either way
    let html = page.to_html();
    match output {
        Some(path) => match fs::write(path, &html) {
            Ok(_) => info!("Wrote fragment to {}", path.display()),
            Err(e) => error!("Failed to write fragment to {}: {}", path.display(), e),
        },
        None => println!("{}", html),
    }
}
