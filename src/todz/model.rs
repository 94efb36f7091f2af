use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One to-do entry. The collection is an ordered `Vec<Item>`; insertion
/// order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub key: Uuid,
    pub text: String,
    pub complete: bool,
    /// Transient edit-mode flag. It rides along in the persisted record
    /// for round-trip parity with existing data files; older files may
    /// omit it.
    #[serde(default)]
    pub editing: bool,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            key: Uuid::new_v4(),
            text: text.into(),
            complete: false,
            editing: false,
            created_at: Utc::now(),
        }
    }
}
