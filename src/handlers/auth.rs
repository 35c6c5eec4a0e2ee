// src/handlers/auth.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{CredentialsRequest, User},
    store::{self, Collection, Store},
    utils::{
        hash::{hash_password, verify_password},
        jwt::sign_jwt,
    },
};

/// Registers a new user and returns a signed token.
///
/// Hashes the password using Argon2 before storing it.
/// Fails with 400 "exists" when the username is already taken.
pub async fn signup(
    State(store): State<Arc<dyn Store>>,
    State(config): State<Config>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let mut users: Vec<User> = store::load(store.as_ref(), Collection::Users).await;

    if users.iter().any(|u| u.username == payload.username) {
        return Err(AppError::BadRequest("exists".to_string()));
    }

    let user = User {
        id: chrono::Utc::now().timestamp_millis(),
        username: payload.username,
        password: hash_password(&payload.password)?,
    };

    let token = sign_jwt(user.id, &user.username, &config.jwt_secret)?;

    tracing::info!("New user signed up: {}", user.username);

    users.push(user);
    store::save(store.as_ref(), Collection::Users, &users).await?;

    Ok(Json(json!({ "token": token })))
}

/// Authenticates a user and returns a signed token.
///
/// An unknown username and a wrong password are rejected with the same
/// terse 401 "no" payload.
pub async fn login(
    State(store): State<Arc<dyn Store>>,
    State(config): State<Config>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let users: Vec<User> = store::load(store.as_ref(), Collection::Users).await;

    let user = users
        .iter()
        .find(|u| u.username == payload.username)
        .ok_or_else(|| AppError::AuthError("no".to_string()))?;

    if !verify_password(&payload.password, &user.password)? {
        return Err(AppError::AuthError("no".to_string()));
    }

    let token = sign_jwt(user.id, &user.username, &config.jwt_secret)?;

    Ok(Json(json!({ "token": token })))
}
