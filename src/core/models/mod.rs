pub mod column;
pub mod task;

pub use column::Column;
pub use task::Task;

/// Identifier shared by columns and tasks. Drag targets are looked up by it.
pub type Id = String;

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;
