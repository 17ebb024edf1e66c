use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: Id,
    pub title: String,
}

impl Column {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }
}
