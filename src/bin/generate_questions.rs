// src/bin/generate_questions.rs
//
// Offline batch job: appends synthetic practice questions to the seed
// question set under the configured data directory.

use dotenvy::dotenv;
use lingoquiz::config::Config;
use lingoquiz::generator;
use lingoquiz::models::question::Question;
use lingoquiz::store::{self, Collection, FileStore};

const TARGET_COUNT: usize = 300;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with_target(false)
        .init();

    let file_store = FileStore::new(&config.data_dir);
    if let Err(e) = file_store.ensure_collections().await {
        tracing::error!("Failed to prepare data directory: {}", e);
        std::process::exit(1);
    }

    let base: Vec<Question> = store::load(&file_store, Collection::Questions).await;
    let extras = generator::generate(&base, TARGET_COUNT);
    let generated = extras.len();

    let mut merged = base;
    merged.extend(extras);

    if let Err(e) = store::save(&file_store, Collection::Questions, &merged).await {
        tracing::error!("Failed to write question seed: {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "Generated {} questions into {}/questions.json",
        generated,
        config.data_dir
    );
}
