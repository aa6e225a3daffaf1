//! Data models for the to-do service

use serde::{Deserialize, Serialize};

/// A to-do item as stored and as returned by every endpoint
///
/// `description` serializes as `null` when absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Auto-assigned, never reused
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Request payload for `POST /items`
///
/// # Example
/// ```json
/// { "title": "Buy milk", "description": "2 liters", "completed": false }
/// ```
#[derive(Deserialize, Debug, Clone)]
pub struct CreateItem {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub completed: bool,
}

impl CreateItem {
    pub fn into_item(self, id: u64) -> TodoItem {
        TodoItem {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }
}

/// Request payload for `PUT /items/{id}`
///
/// Every field is optional; absent and `null` fields are left untouched.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ItemUpdate {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub completed: Option<bool>,
}

/// One field assignment carried by an [`ItemUpdate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemChange {
    Title(String),
    Description(String),
    Completed(bool),
}

impl ItemUpdate {
    /// The assignments this update asks for, in field order
    pub fn changes(self) -> Vec<ItemChange> {
        let mut changes = Vec::with_capacity(3);
        if let Some(title) = self.title {
            changes.push(ItemChange::Title(title));
        }
        if let Some(description) = self.description {
            changes.push(ItemChange::Description(description));
        }
        if let Some(completed) = self.completed {
            changes.push(ItemChange::Completed(completed));
        }
        changes
    }
}

impl ItemChange {
    pub fn apply(self, item: &mut TodoItem) {
        match self {
            ItemChange::Title(title) => item.title = title,
            ItemChange::Description(description) => item.description = Some(description),
            ItemChange::Completed(completed) => item.completed = completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> TodoItem {
        TodoItem {
            id: 1,
            title: "write report".to_string(),
            description: Some("quarterly".to_string()),
            completed: false,
        }
    }

    #[test]
    fn empty_update_has_no_changes() {
        assert!(ItemUpdate::default().changes().is_empty());

        let parsed: ItemUpdate = serde_json::from_str("{}").unwrap();
        assert!(parsed.changes().is_empty());
    }

    #[test]
    fn null_fields_count_as_absent() {
        let parsed: ItemUpdate =
            serde_json::from_str(r#"{"title":null,"description":null,"completed":true}"#).unwrap();
        assert_eq!(parsed.changes(), vec![ItemChange::Completed(true)]);
    }

    #[test]
    fn changes_touch_only_their_field() {
        let mut target = item();
        ItemChange::Completed(true).apply(&mut target);

        assert!(target.completed);
        assert_eq!(target.title, "write report");
        assert_eq!(target.description.as_deref(), Some("quarterly"));
    }

    #[test]
    fn full_update_applies_every_field() {
        let update = ItemUpdate {
            title: Some("send report".to_string()),
            description: Some("to finance".to_string()),
            completed: Some(true),
        };

        let mut target = item();
        for change in update.changes() {
            change.apply(&mut target);
        }

        assert_eq!(
            target,
            TodoItem {
                id: 1,
                title: "send report".to_string(),
                description: Some("to finance".to_string()),
                completed: true,
            }
        );
    }

    #[test]
    fn create_defaults() {
        let parsed: CreateItem = serde_json::from_str(r#"{"title":"a"}"#).unwrap();
        let item = parsed.into_item(3);
        assert_eq!(item.description, None);
        assert!(!item.completed);

        let json = serde_json::to_value(&item).unwrap();
        assert!(json["description"].is_null());
    }
}
