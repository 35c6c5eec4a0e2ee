// src/main.rs

use dotenvy::dotenv;
use lingoquiz::config::Config;
use lingoquiz::routes;
use lingoquiz::state::AppState;
use lingoquiz::store::FileStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Prepare the data directory, seeding missing collection files
    let store = FileStore::new(&config.data_dir);
    if let Err(e) = store.ensure_collections().await {
        panic!(
            "Failed to prepare data directory '{}': {}",
            config.data_dir, e
        );
    }

    tracing::info!("Data directory ready at {}", config.data_dir);

    let port = config.port;

    // Create AppState
    let state = AppState {
        store: Arc::new(store),
        config,
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}
