// src/handlers/mod.rs

pub mod auth;
pub mod import;
pub mod questions;
pub mod scores;
