// src/models/user.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One record of the users collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Epoch-millis id assigned at signup.
    pub id: i64,

    /// Unique username (case-sensitive).
    pub username: String,

    /// Argon2 password hash. Persisted with the record; the API never
    /// returns user objects, only tokens.
    pub password: String,
}

/// DTO for signup and login.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Username length must be between 1 and 64 characters."
    ))]
    pub username: String,
    #[validate(length(
        min = 1,
        max = 128,
        message = "Password length must be between 1 and 128 characters."
    ))]
    pub password: String,
}
