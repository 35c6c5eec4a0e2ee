// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub port: u16,
    pub data_dir: String,
    pub static_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| "dev_secret".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(4000);

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "web/dist".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            jwt_secret,
            port,
            data_dir,
            static_dir,
            rust_log,
        }
    }
}
