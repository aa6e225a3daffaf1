//! Route definitions for the URL shortener

use axum::routing::get;
use axum::Router;

use crate::shorturl::database::AppState;
use crate::shorturl::handler::{link_stats, redirect_shorten, redirect_url, root, shorten_url};

/// Creates the shortener router
///
/// - `GET /` - Service banner
/// - `POST /shorten` - Creates a short link
/// - `GET /shorten` - 404, like any id that was never allocated
/// - `GET /stats/{short_id}` - Stored record for a short link
/// - `GET /{short_id}` - 302 redirect to the stored URL
///
/// ```no_run
/// # use pocket_services::shorturl::database::{init_db, AppState};
/// # use pocket_services::shorturl::route::create_app;
/// let db = init_db("data/shorturl.db").unwrap();
/// let app = create_app(AppState::new(db, None));
/// // axum::serve(listener, app).await.unwrap();
/// ```
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/shorten", get(redirect_shorten).post(shorten_url))
        .route("/stats/{short_id}", get(link_stats))
        .route("/{short_id}", get(redirect_url))
        .with_state(state)
}
