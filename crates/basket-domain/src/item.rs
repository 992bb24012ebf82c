use basket_core::{BasketError, BasketResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ItemId = Uuid;

/// One shopping-list entry. List position is implicit: items live in a
/// `Vec` whose order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new incomplete item. `name` must already be validated via
    /// [`validate_name`].
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
        self.updated_at = Utc::now();
    }
}

/// Trim a submitted name and reject it when nothing is left.
///
/// This is the only user-input validation in the system: every add and
/// rename goes through it.
pub fn validate_name(raw: &str) -> BasketResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BasketError::Validation(
            "item name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
