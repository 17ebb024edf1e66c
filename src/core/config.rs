//! Board configuration, provided to the component tree through context.

/// Tunables for the board widget.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Pixels the pointer must travel before a press turns into a drag.
    pub activation_distance: f64,
    /// New columns are titled `"{prefix} {n}"`.
    pub column_title_prefix: String,
    /// New tasks are named `"{prefix} {n}"`.
    pub task_content_prefix: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            activation_distance: 3.0,
            column_title_prefix: "Column".to_string(),
            task_content_prefix: "Task".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn column_title(&self, ordinal: usize) -> String {
        format!("{} {}", self.column_title_prefix, ordinal)
    }

    pub fn task_content(&self, ordinal: usize) -> String {
        format!("{} {}", self.task_content_prefix, ordinal)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
