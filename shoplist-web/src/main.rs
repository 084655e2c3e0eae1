//! Shopping list server - renders the list and applies form submissions.

mod error;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shoplist::io::config::{CONFIG_FILE_NAME, load_config};
use shoplist::io::list_store::ListStore;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::render::PageRenderer;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "shoplist-web")]
#[command(about = "Single-user shopping list web UI")]
struct Args {
    /// Path to the config file
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Address to bind the server to (overrides server.bind)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(long)]
    port: Option<u16>,

    /// JSON list file (overrides list_path)
    #[arg(long)]
    list_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shoplist_web=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut cfg = load_config(&args.config)?;
    if let Some(bind) = args.bind {
        cfg.server.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.server.port = port;
    }
    cfg.validate()?;

    // A list path given on the command line is taken as-is, not relative to the config.
    let list_path = args
        .list_path
        .unwrap_or_else(|| cfg.resolved_list_path(&args.config));
    let store = ListStore::new(list_path, cfg.on_corrupt);
    info!(list_path = %store.path().display(), on_corrupt = ?cfg.on_corrupt, "starting shoplist-web");

    // Refuse to serve a list that cannot be read.
    let list = store
        .load()
        .with_context(|| format!("load {}", store.path().display()))?;
    info!(items = list.len(), "list loaded");

    let renderer = PageRenderer::new().context("compile page template")?;
    let state = AppState::new(store, renderer, cfg.server.title.clone());

    let app = routes::app_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.bind, cfg.server.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let args = Args::parse_from(["shoplist-web"]);
        assert_eq!(args.config, PathBuf::from(CONFIG_FILE_NAME));
        assert!(args.bind.is_none());
        assert!(args.port.is_none());
        assert!(args.list_path.is_none());
    }

    #[test]
    fn parse_overrides() {
        let args = Args::parse_from([
            "shoplist-web",
            "--port",
            "8080",
            "--bind",
            "0.0.0.0",
            "--list-path",
            "/tmp/list.json",
        ]);
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.bind.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.list_path, Some(PathBuf::from("/tmp/list.json")));
    }
}
