use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod http;

use common::{catalog::Catalog, config::read_config};
use http::svc::{AppState, serve_http};

const DEFAULT_FILTER: &str = "amber_server=info,server=info,common=info,webapp=info,tower_http=info";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "/etc/amber/config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("amber server starting up, processing config file");

    let config = read_config(PathBuf::from(args.config)).await?;

    info!("loading catalog");

    let catalog = Catalog::load(config.catalog.path.clone())
        .await
        .with_context(|| format!("failed to load catalog from {}", config.catalog.path.display()))?;

    info!(
        movies = catalog.movies().len(),
        watchlists = catalog.watchlists().len(),
        "catalog loaded"
    );

    let state = Arc::new(AppState::new(catalog, &config.site));

    serve_http(config, state).await
}
