//! Opening the embedded database file

use std::fs;
use std::path::Path;

use redb::Database;

use crate::error::StoreError;

/// Creates or opens the database file at `path`
///
/// Missing parent directories are created first. Table creation is left to
/// each service's `init_db`.
pub fn open_database(path: &Path) -> Result<Database, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    Ok(Database::create(path)?)
}
