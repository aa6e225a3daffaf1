//! Database initialization and storage access for the to-do service
//!
//! Items live in [`TABLE_ITEMS`] keyed by id. Ids come from a counter in
//! [`TABLE_SEQUENCES`] that only ever grows, so a deleted id is never handed
//! out again.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::storage::open_database;
use crate::todo::model::{CreateItem, ItemUpdate, TodoItem};

/// Items table
///
/// Key: item id
/// Value: JSON-serialized [`TodoItem`]
pub const TABLE_ITEMS: TableDefinition<u64, &str> = TableDefinition::new("items_v1");

/// Last issued id per table
///
/// Key: table name (currently only `"items"`)
/// Value: highest id ever assigned
pub const TABLE_SEQUENCES: TableDefinition<&str, u64> = TableDefinition::new("sequences_v1");

const ITEMS_SEQUENCE: &str = "items";

/// Application state shared across all to-do handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }
}

/// Opens the database file and makes sure both tables exist
pub fn init_db(db_path: impl AsRef<Path>) -> Result<Database, StoreError> {
    let db = open_database(db_path.as_ref())?;

    let write_txn = db.begin_write()?;
    {
        write_txn.open_table(TABLE_ITEMS)?;
        write_txn.open_table(TABLE_SEQUENCES)?;
    }
    write_txn.commit()?;

    Ok(db)
}

/// Stores a new item under the next id
///
/// # Arguments
///
/// * `db` - Shared database handle
/// * `new_item` - Validated request body
///
/// # Returns
///
/// * `Ok(TodoItem)` - The committed item, id included
/// * `Err(StoreError)` - Transaction, table or serialization failure
///
/// # Database Operations
///
/// Writes to two tables in one transaction:
/// 1. `TABLE_SEQUENCES` - Bumps the `"items"` counter
/// 2. `TABLE_ITEMS` - Inserts the item under the new id
pub fn insert_item(db: &Database, new_item: CreateItem) -> Result<TodoItem, StoreError> {
    // Begin a write transaction
    let write_txn = db.begin_write()?;
    let item = {
        // Next id is one past the highest ever issued, even if that item is gone
        let mut sequences = write_txn.open_table(TABLE_SEQUENCES)?;
        let last_id = sequences
            .get(ITEMS_SEQUENCE)?
            .map(|value| value.value())
            .unwrap_or(0);
        let id = last_id + 1;
        sequences.insert(ITEMS_SEQUENCE, id)?;

        // Insert the JSON record into the items table
        let item = new_item.into_item(id);
        let mut items = write_txn.open_table(TABLE_ITEMS)?;
        items.insert(id, serde_json::to_string(&item)?.as_str())?;

        item
    };

    // Commit the transaction so counter and item land together
    write_txn.commit()?;

    info!(id = item.id, "item created");
    Ok(item)
}

/// All items in ascending id order
pub fn list_items(db: &Database) -> Result<Vec<TodoItem>, StoreError> {
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(TABLE_ITEMS)?;

    let mut items = Vec::new();
    for entry in table.iter()? {
        let (_, value) = entry?;
        items.push(serde_json::from_str::<TodoItem>(value.value())?);
    }

    debug!(count = items.len(), "items listed");
    Ok(items)
}

pub fn find_item(db: &Database, id: u64) -> Result<Option<TodoItem>, StoreError> {
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(TABLE_ITEMS)?;

    let item = match table.get(id)? {
        Some(value) => Some(serde_json::from_str::<TodoItem>(value.value())?),
        None => None,
    };

    debug!(id, found = item.is_some(), "item lookup");
    Ok(item)
}

/// Applies the fields present in `update` to item `id`
///
/// # Arguments
///
/// * `db` - Shared database handle
/// * `id` - Item to update
/// * `update` - Request body; only the fields it carries are applied
///
/// # Returns
///
/// * `Ok(Some(TodoItem))` - The item after the update
/// * `Ok(None)` - No item with that id
/// * `Err(StoreError)` - Transaction, table or serialization failure
///
/// # Database Operations
///
/// With no fields present the stored item is read and returned as is;
/// nothing is written. Otherwise the record is read, changed and written
/// back within one write transaction.
pub fn update_item(
    db: &Database,
    id: u64,
    update: ItemUpdate,
) -> Result<Option<TodoItem>, StoreError> {
    // Turn the body into the list of field assignments it asks for
    let changes = update.changes();
    if changes.is_empty() {
        return find_item(db, id);
    }

    // Begin a write transaction
    let write_txn = db.begin_write()?;
    let item = {
        let mut table = write_txn.open_table(TABLE_ITEMS)?;

        // Load the current record, if any
        let current = match table.get(id)? {
            Some(value) => Some(serde_json::from_str::<TodoItem>(value.value())?),
            None => None,
        };

        match current {
            Some(mut item) => {
                // Apply each change and write the record back
                for change in changes {
                    change.apply(&mut item);
                }
                table.insert(id, serde_json::to_string(&item)?.as_str())?;
                Some(item)
            }
            None => None,
        }
    };

    // Nothing to persist for a missing item
    let Some(item) = item else {
        write_txn.abort()?;
        return Ok(None);
    };

    // Commit the transaction to persist the update
    write_txn.commit()?;

    info!(id, "item updated");
    Ok(Some(item))
}

/// Removes item `id`
///
/// # Returns
///
/// * `Ok(true)` - The item existed and is gone
/// * `Ok(false)` - No item with that id; nothing was written
/// * `Err(StoreError)` - Transaction or table failure
///
/// # Database Operations
///
/// Deletes from `TABLE_ITEMS` only. The sequence counter is left alone so
/// the id is never issued again.
pub fn delete_item(db: &Database, id: u64) -> Result<bool, StoreError> {
    // Begin a write transaction
    let write_txn = db.begin_write()?;

    // Delete from the items table, noting whether anything was there
    let removed = write_txn.open_table(TABLE_ITEMS)?.remove(id)?.is_some();

    if !removed {
        write_txn.abort()?;
        return Ok(false);
    }

    // Commit the transaction to persist the deletion
    write_txn.commit()?;
    info!(id, "item deleted");
    Ok(true)
}
