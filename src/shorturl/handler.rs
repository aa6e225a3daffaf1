//! HTTP request handlers for the URL shortener
//!
//! - `POST /shorten` allocates a short identifier and stores the link
//! - `GET /{short_id}` redirects to the stored destination
//! - `GET /stats/{short_id}` returns what is stored for an identifier
//! - `GET /` answers with a service banner

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::AppError;
use crate::shorturl::database::{self, AppState};
use crate::shorturl::id::is_valid_short_id;
use crate::shorturl::model::{LinkStats, ShortLink, ShortenRequest, ShortenResponse};

const NOT_FOUND: &str = "Short URL not found";

/// Creates a new short link
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/url" }
/// ```
///
/// # Response
///
/// - **201 Created** with `{short_id, short_url, full_url}`
/// - **4xx** when the body is missing or has no `url` string (axum rejection)
///
/// The URL is stored as given; it is not parsed or normalized.
pub async fn shorten_url(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Allocate an identifier and persist the link in one transaction
    let link = database::create_link(&state.db, &payload.url)?;

    // Prepare the response with the created link details
    let response = ShortenResponse {
        short_url: state.short_url(&link.short_id),
        short_id: link.short_id,
        full_url: link.full_url,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Redirects a short identifier to its destination
///
/// # Response
///
/// - **302 Found** with the stored URL in `Location`, byte for byte
/// - **404 Not Found** when the identifier is unknown
pub async fn redirect_url(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect(&state, &short_id)
}

/// `GET /shorten`
///
/// The static `/shorten` route shadows `/{short_id}` for every method, so
/// the redirect lookup is wired here too and answers like any unknown id.
pub async fn redirect_shorten(State(state): State<AppState>) -> Result<Response, AppError> {
    redirect(&state, "shorten")
}

/// Returns the stored record for a short identifier
///
/// # Response
///
/// - **200 OK** with `{short_id, full_url, created_at}`
/// - **404 Not Found** when the identifier is unknown
pub async fn link_stats(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkStats>, AppError> {
    let link = lookup(&state, &short_id)?;
    Ok(Json(link.into()))
}

/// Service banner
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "URL Shortener Service API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn redirect(state: &AppState, short_id: &str) -> Result<Response, AppError> {
    let link = lookup(state, short_id)?;

    // axum's Redirect only offers 303/307/308
    Ok((StatusCode::FOUND, [(header::LOCATION, link.full_url)]).into_response())
}

fn lookup(state: &AppState, short_id: &str) -> Result<ShortLink, AppError> {
    // Nothing of another shape was ever stored
    if !is_valid_short_id(short_id) {
        return Err(AppError::NotFound(NOT_FOUND));
    }

    database::find_link(&state.db, short_id)?.ok_or(AppError::NotFound(NOT_FOUND))
}
