//! URL shortener entry point
//!
//! Environment (a `.env` file is honoured):
//!
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Server port (default: 8080)
//! - `DATABASE_URL` - Database file (default: "data/shorturl.db")
//! - `URL` - Public base for returned short links (default: relative links)

use anyhow::Context;
use dotenvy::dotenv;

use pocket_services::config::{ServiceConfig, SHORTURL_DEFAULTS};
use pocket_services::server::{init_tracing, serve};
use pocket_services::shorturl::database::{init_db, AppState};
use pocket_services::shorturl::route::create_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = ServiceConfig::from_env(SHORTURL_DEFAULTS);

    let db = init_db(&config.database_path).with_context(|| {
        format!(
            "failed to initialize database at {}",
            config.database_path.display()
        )
    })?;

    let app = create_app(AppState::new(db, config.public_url.clone()));

    serve(app, &config, "shorturl")
        .await
        .context("shortener server failed")
}
