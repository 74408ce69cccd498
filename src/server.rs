//! The HTTP control plane: a thin `axum` layer over [`crate::Filter`].
//! Routes and wire format mirror the original Go service's `gin` routes
//! (spec §6); none of this participates in the core engine's invariants.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::{Filter, SensitiveError};

#[derive(Clone)]
struct AppState {
    filter: Arc<Filter>,
}

pub fn app(filter: Arc<Filter>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/add-word", post(add_word))
        .route("/remove-word", post(remove_word))
        .route("/filter", post(filter_all))
        .layer(middleware::from_fn(require_json_utf8))
        .with_state(AppState { filter })
}

/// Rejects any request whose `Content-Type` isn't `application/json` with
/// a UTF-8 charset, mirroring the original's `CheckAndPrint` gin
/// middleware, which Gin applies blanket-wide ahead of route registration
/// (`server.go`'s `r.Use(CheckAndPrint())`), `GET /ping` included.
async fn require_json_utf8(
    request: axum::extract::Request,
    next: Next,
) -> Response {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.contains("application/json") && content_type.contains("charset=utf-8") {
        next.run(request).await
    } else {
        warn!(content_type, "rejected request with bad content type");
        bad_request("Content-Type must be application/json charset=utf-8")
    }
}

#[derive(Deserialize)]
struct WordRequest {
    word: String,
}

#[derive(Deserialize)]
struct FilterRequest {
    content: String,
}

#[derive(Serialize)]
struct MatchResponse {
    start: usize,
    matched: String,
    origin: Option<String>,
}

fn ok(body: serde_json::Value) -> Response {
    Json(body).into_response()
}

fn bad_request(message: impl std::fmt::Display) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": message.to_string() })),
    )
        .into_response()
}

async fn ping() -> Response {
    ok(json!({ "message": "pong" }))
}

async fn add_word(
    State(state): State<AppState>,
    body: Result<Json<WordRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(json) => json,
        Err(err) => return bad_request(SensitiveError::InvalidRequest(err.to_string())),
    };
    state.filter.add(&req.word);
    info!(word_len = req.word.chars().count(), "word added");
    ok(json!({ "message": "ok" }))
}

async fn remove_word(
    State(state): State<AppState>,
    body: Result<Json<WordRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(json) => json,
        Err(err) => return bad_request(SensitiveError::InvalidRequest(err.to_string())),
    };
    state.filter.remove(&req.word);
    info!(word_len = req.word.chars().count(), "word removed");
    ok(json!({ "message": "ok" }))
}

async fn filter_all(
    State(state): State<AppState>,
    body: Result<Json<FilterRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(json) => json,
        Err(err) => return bad_request(SensitiveError::InvalidRequest(err.to_string())),
    };
    let matches = state.filter.find_all(&req.content);
    info!(matches = matches.len(), "content filtered");
    let data: Vec<MatchResponse> = matches
        .into_iter()
        .map(|m| MatchResponse {
            start: m.start,
            matched: m.matched,
            origin: m.origin,
        })
        .collect();
    ok(json!({ "message": "ok", "data": data }))
}
