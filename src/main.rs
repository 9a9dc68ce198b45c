use crate::config::Config;
use crate::domain::Catalog;
use crate::router::{handle, App};
use anyhow::{Context, Result};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod presenter;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,six_cities=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(?config, "configuration loaded");

    // 2️⃣ Catalog, loaded once before any page is composed
    let catalog = match &config.seed_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load seed data from {}", path.display()))?,
        None => Catalog::builtin().context("Failed to load bundled seed data")?,
    };
    tracing::info!(offers = catalog.len(), "catalog ready");

    let app = App {
        catalog,
        is_authorized: config.is_authorized,
    };

    // 3️⃣ Start the server
    tracing::info!("Starting server at http://{}", config.addr);
    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::debug!(%err, "request failed");
            responses::html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
        return Err(e).context("Server error");
    }

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
