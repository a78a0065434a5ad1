use std::path::PathBuf;

use clap::Parser;
use groupie_server::{
    build_app, cors_layer, SnapshotStore, Upstream, DEFAULT_ALLOW_ORIGINS, DEFAULT_UPSTREAM_URL,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "groupie-server")]
struct Args {
    /// Base URL of the upstream catalogue API.
    #[arg(long, default_value = DEFAULT_UPSTREAM_URL, env = "GROUPIE_UPSTREAM_URL")]
    upstream_url: String,

    /// Directory holding the JSON snapshot.
    #[arg(long, default_value = "data", env = "GROUPIE_DATA_DIR")]
    data_dir: PathBuf,

    /// Refetch from upstream even when a snapshot exists.
    #[arg(long)]
    refresh: bool,

    /// Port to listen on.
    #[arg(long, default_value = "8080", env = "GROUPIE_PORT")]
    port: u16,

    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0", env = "GROUPIE_BIND")]
    bind: String,

    /// Path to the built groupie-web dist directory. The API moves under /api.
    #[arg(long, env = "GROUPIE_WEB_DIR")]
    web_dir: Option<PathBuf>,

    /// Comma-separated CORS origins. Defaults to the usual local dev servers.
    #[arg(long, env = "GROUPIE_ALLOW_ORIGINS", value_delimiter = ',')]
    allow_origins: Vec<String>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = Args::parse();

    let upstream = Upstream::new(&args.upstream_url).unwrap_or_else(|e| {
        error!("invalid upstream URL: {e}");
        std::process::exit(1);
    });

    let store = SnapshotStore::new(&args.data_dir);
    info!(
        "using snapshot in {} (upstream {})",
        store.dir().display(),
        upstream.base_url()
    );
    let catalog = store
        .load_or_fetch(&upstream, args.refresh)
        .await
        .unwrap_or_else(|e| {
            error!("failed to load catalogue: {e}");
            std::process::exit(1);
        });
    info!("serving {} artists", catalog.artists.len());

    let cors = if args.allow_origins.is_empty() {
        cors_layer(&DEFAULT_ALLOW_ORIGINS)
    } else {
        cors_layer(&args.allow_origins)
    }
    .unwrap_or_else(|e| {
        error!("invalid CORS origin: {e}");
        std::process::exit(1);
    });

    let app = build_app(catalog, cors, args.web_dir.as_deref());

    let addr = format!("{}:{}", args.bind, args.port);

    info!("binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("groupie-server listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
