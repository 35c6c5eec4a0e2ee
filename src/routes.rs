// src/routes.rs

use axum::{
    Router,
    http::Method,
    middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    handlers::{auth, import, questions, scores},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, questions, scores, import).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store + config).
/// * Falls back to the static application shell for unmatched paths.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login));

    let question_routes = Router::new()
        .route("/", get(questions::list_questions))
        .route("/export", get(questions::export_questions));

    let score_routes = Router::new()
        .route("/anon", post(scores::submit_score_anon))
        // Protected score route
        .merge(
            Router::new()
                .route("/", post(scores::submit_score))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    let import_routes = Router::new()
        .route("/", post(import::import_questions))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Static application shell; unmatched paths fall back to index.html
    let static_shell = ServeDir::new(&state.config.static_dir).fallback(ServeFile::new(
        format!("{}/index.html", state.config.static_dir),
    ));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/questions", question_routes)
        .nest("/api/scores", score_routes)
        .nest("/api/import", import_routes)
        .route("/api/leaderboard", get(scores::get_leaderboard))
        .fallback_service(static_shell)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
