//! Data models for the URL shortener
//!
//! Request/response bodies and the record stored in the database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short link as stored in the database
///
/// Never mutated after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShortLink {
    /// Six-character identifier, unique across the table
    pub short_id: String,

    /// Destination exactly as submitted
    pub full_url: String,

    pub created_at: DateTime<Utc>,
}

/// Request payload for `POST /shorten`
///
/// # Example
/// ```json
/// { "url": "https://example.com/very/long/url" }
/// ```
#[derive(Deserialize, Debug)]
pub struct ShortenRequest {
    pub url: String,
}

/// Response returned after creating a short link
///
/// # Example
/// ```json
/// {
///   "short_id": "aB3x9Z",
///   "short_url": "/aB3x9Z",
///   "full_url": "https://example.com/very/long/url"
/// }
/// ```
#[derive(Serialize, Debug)]
pub struct ShortenResponse {
    pub short_id: String,

    /// Relative path, or absolute when a public URL is configured
    pub short_url: String,

    pub full_url: String,
}

/// Response for `GET /stats/{short_id}`
#[derive(Serialize, Debug)]
pub struct LinkStats {
    pub short_id: String,
    pub full_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkStats {
    fn from(link: ShortLink) -> Self {
        Self {
            short_id: link.short_id,
            full_url: link.full_url,
            created_at: link.created_at,
        }
    }
}
