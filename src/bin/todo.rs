//! To-do service entry point
//!
//! Environment (a `.env` file is honoured):
//!
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Server port (default: 8081)
//! - `DATABASE_URL` - Database file (default: "data/todo.db")

use anyhow::Context;
use dotenvy::dotenv;

use pocket_services::config::{ServiceConfig, TODO_DEFAULTS};
use pocket_services::server::{init_tracing, serve};
use pocket_services::todo::database::{init_db, AppState};
use pocket_services::todo::route::create_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = ServiceConfig::from_env(TODO_DEFAULTS);

    let db = init_db(&config.database_path).with_context(|| {
        format!(
            "failed to initialize database at {}",
            config.database_path.display()
        )
    })?;

    serve(create_app(AppState::new(db)), &config, "todo")
        .await
        .context("to-do server failed")
}
