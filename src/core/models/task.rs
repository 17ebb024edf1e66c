use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Id,
    pub column_id: Id,
    pub content: String,
}

impl Task {
    pub fn new(column_id: Id, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            column_id,
            content,
        }
    }

    pub fn update_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn move_to(&mut self, column_id: Id) {
        self.column_id = column_id;
    }
}
