//! Database initialization and storage access for the URL shortener
//!
//! Every function here opens its own transaction and lets it go before
//! returning, so a request never shares a transaction with another one.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::shorturl::id::{allocate, SHORT_ID_LEN};
use crate::shorturl::model::ShortLink;
use crate::storage::open_database;

/// Main table for short links
///
/// Key: short identifier. The key doubles as the uniqueness constraint.
/// Value: JSON-serialized [`ShortLink`]
///
/// Example:
/// - Key: "aB3x9Z"
/// - Value: '{"short_id":"aB3x9Z","full_url":"https://example.com",...}'
pub const TABLE_LINKS: TableDefinition<&str, &str> = TableDefinition::new("links_v1");

/// Application state shared across all shortener handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,

    /// Prefix for `short_url` in responses, without trailing slash
    pub public_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(db: Database, public_url: Option<String>) -> Self {
        Self {
            db: Arc::new(db),
            public_url: public_url.map(Arc::from),
        }
    }

    /// Builds the link handed back to clients for `short_id`
    pub fn short_url(&self, short_id: &str) -> String {
        match &self.public_url {
            Some(base) => format!("{}/{}", base, short_id),
            None => format!("/{}", short_id),
        }
    }
}

/// Opens the database file and makes sure the links table exists
///
/// Safe to call on every startup.
pub fn init_db(db_path: impl AsRef<Path>) -> Result<Database, StoreError> {
    let db = open_database(db_path.as_ref())?;

    let write_txn = db.begin_write()?;
    {
        write_txn.open_table(TABLE_LINKS)?;
    }
    write_txn.commit()?;

    Ok(db)
}

/// Allocates a fresh short identifier for `full_url` and stores the link
///
/// Allocation and insert share one write transaction. redb runs write
/// transactions one at a time, so the identifier is still free when it is
/// inserted.
///
/// # Arguments
///
/// * `db` - Shared database handle
/// * `full_url` - Destination to store, kept exactly as given
///
/// # Returns
///
/// * `Ok(ShortLink)` - The committed record
/// * `Err(StoreError)` - Transaction, table or serialization failure
///
/// # Database Operations
///
/// 1. Probes `TABLE_LINKS` for each candidate identifier
/// 2. Inserts the JSON record under the first free identifier
pub fn create_link(db: &Database, full_url: &str) -> Result<ShortLink, StoreError> {
    // Begin a write transaction; it also holds off every other writer
    let write_txn = db.begin_write()?;
    let link = {
        // Open the links table
        let mut table = write_txn.open_table(TABLE_LINKS)?;

        // Draw identifiers until one is not in the table yet
        let mut rng = rand::rng();
        let short_id = allocate(
            &mut rng,
            SHORT_ID_LEN,
            |candidate: &str| -> Result<bool, StoreError> { Ok(table.get(candidate)?.is_some()) },
        )?;

        let link = ShortLink {
            short_id,
            full_url: full_url.to_string(),
            created_at: Utc::now(),
        };

        // Serialize the record to JSON for storage
        let record_json = serde_json::to_string(&link)?;
        table.insert(link.short_id.as_str(), record_json.as_str())?;

        link
    };

    // Commit the transaction to persist the link
    write_txn.commit()?;

    info!(short_id = %link.short_id, "short link created");
    Ok(link)
}

/// Looks up the link stored under `short_id`
///
/// Returns `Ok(None)` when nothing is stored under that identifier.
pub fn find_link(db: &Database, short_id: &str) -> Result<Option<ShortLink>, StoreError> {
    // Begin a read-only transaction
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(TABLE_LINKS)?;

    // Deserialize the JSON record if the identifier exists
    let link = match table.get(short_id)? {
        Some(value) => Some(serde_json::from_str::<ShortLink>(value.value())?),
        None => None,
    };

    debug!(short_id, found = link.is_some(), "short link lookup");
    Ok(link)
}

/// Number of stored links
pub fn count_links(db: &Database) -> Result<u64, StoreError> {
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(TABLE_LINKS)?;
    Ok(table.len()?)
}
