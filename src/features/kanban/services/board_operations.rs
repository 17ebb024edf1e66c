use leptos::prelude::*;
use crate::core::dnd::{DragEndEvent, DragOverEvent, DragStartEvent};
use crate::core::models::Id;
use super::Board;

// Add a column at the end of the board
pub fn add_column(board_signal: RwSignal<Board>) {
    board_signal.update(|board| {
        let id = board.add_column();
        log::debug!("Added column {}", id);
    });
}

// Rename a column; called on every keystroke of the title editor
pub fn rename_column(column_id: Id, title: String, board_signal: RwSignal<Board>) {
    board_signal.update(|board| {
        if let Err(e) = board.rename_column(&column_id, title) {
            log::warn!("Failed to rename column: {}", e);
        }
    });
}

// Delete a column and all of its tasks
pub fn delete_column(column_id: Id, board_signal: RwSignal<Board>) {
    board_signal.update(|board| match board.delete_column(&column_id) {
        Ok(column) => log::debug!("Deleted column {} ({})", column.id, column.title),
        Err(e) => log::warn!("Failed to delete column: {}", e),
    });
}

// Append a task to a column
pub fn add_task(column_id: Id, board_signal: RwSignal<Board>) {
    board_signal.update(|board| match board.add_task(&column_id) {
        Ok(id) => log::debug!("Added task {} to column {}", id, column_id),
        Err(e) => log::warn!("Failed to add task: {}", e),
    });
}

// Replace task content
pub fn rename_task(task_id: Id, content: String, board_signal: RwSignal<Board>) {
    board_signal.update(|board| {
        if let Err(e) = board.rename_task(&task_id, content) {
            log::warn!("Failed to update task: {}", e);
        }
    });
}

// Delete a task
pub fn delete_task(task_id: Id, board_signal: RwSignal<Board>) {
    board_signal.update(|board| {
        if let Err(e) = board.delete_task(&task_id) {
            log::warn!("Failed to delete task: {}", e);
        }
    });
}

pub fn drag_start(event: DragStartEvent, board_signal: RwSignal<Board>) {
    board_signal.update(|board| {
        board.drag_start(&event);
        if let Some(column) = board.active_column() {
            log::debug!("Drag start: column {} ({})", column.id, column.title);
        } else if let Some(task) = board.active_task() {
            log::debug!("Drag start: task {} ({})", task.id, task.content);
        }
    });
}

// Only notify subscribers when the task list actually moved
pub fn drag_over(event: DragOverEvent, board_signal: RwSignal<Board>) {
    board_signal.maybe_update(|board| board.drag_over(&event));
}

pub fn drag_end(event: DragEndEvent, board_signal: RwSignal<Board>) {
    log::debug!("Drag end: {:?} over {:?}", event.active, event.over);
    board_signal.update(|board| {
        board.drag_end(&event);
    });
}

pub fn drag_cancel(board_signal: RwSignal<Board>) {
    log::debug!("Drag cancelled");
    board_signal.update(|board| board.drag_cancel());
}
