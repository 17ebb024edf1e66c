//! Board store: the column and task lists plus the drag reconciliation that
//! reorders them.
//!
//! Tasks live in one flat list in board order. A column shows the tasks whose
//! `column_id` matches, in that order, so moving a task between columns is a
//! `column_id` change plus an array move within the flat list.

use crate::core::config::BoardConfig;
use crate::core::dnd::{array_move, DragEndEvent, DragItem, DragKind, DragOverEvent, DragStartEvent};
use crate::core::error::{BoardError, Result};
use crate::core::models::{Column, Id, Task};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
    /// Item currently being dragged, rendered by the overlay.
    pub active: Option<DragItem>,
    config: BoardConfig,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn column_ids(&self) -> Vec<Id> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    pub fn tasks_in<'a>(&'a self, column_id: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| t.column_id == column_id)
    }

    pub fn task_ids_in(&self, column_id: &str) -> Vec<Id> {
        self.tasks_in(column_id).map(|t| t.id.clone()).collect()
    }

    // Column operations

    pub fn add_column(&mut self) -> Id {
        let column = Column::new(self.config.column_title(self.columns.len() + 1));
        let id = column.id.clone();
        self.columns.push(column);
        id
    }

    pub fn rename_column(&mut self, id: &str, title: String) -> Result<()> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| BoardError::UnknownColumn(id.to_string()))?;
        column.set_title(title);
        Ok(())
    }

    /// Removes the column together with every task it holds.
    pub fn delete_column(&mut self, id: &str) -> Result<Column> {
        let index = self
            .columns
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| BoardError::UnknownColumn(id.to_string()))?;
        let column = self.columns.remove(index);

        let removed: Vec<Id> = self.task_ids_in(id);
        self.tasks.retain(|t| t.column_id != id);

        if self.active.as_ref().is_some_and(|a| a.id == id || removed.contains(&a.id)) {
            self.active = None;
        }
        Ok(column)
    }

    // Task operations

    /// Appends a task to `column_id`. Naming counts every task on the board.
    pub fn add_task(&mut self, column_id: &str) -> Result<Id> {
        if self.column(column_id).is_none() {
            return Err(BoardError::UnknownColumn(column_id.to_string()));
        }
        let task = Task::new(column_id.to_string(), self.config.task_content(self.tasks.len() + 1));
        let id = task.id.clone();
        self.tasks.push(task);
        Ok(id)
    }

    pub fn rename_task(&mut self, id: &str, content: String) -> Result<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| BoardError::UnknownTask(id.to_string()))?;
        task.update_content(content);
        Ok(())
    }

    pub fn delete_task(&mut self, id: &str) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| BoardError::UnknownTask(id.to_string()))?;
        if self.active.as_ref().is_some_and(|a| a.id == id) {
            self.active = None;
        }
        Ok(self.tasks.remove(index))
    }

    // Drag reconciliation

    pub fn active_column(&self) -> Option<&Column> {
        match &self.active {
            Some(DragItem { id, kind: DragKind::Column }) => self.column(id),
            _ => None,
        }
    }

    pub fn active_task(&self) -> Option<&Task> {
        match &self.active {
            Some(DragItem { id, kind: DragKind::Task }) => self.task(id),
            _ => None,
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_ref().is_some_and(|a| a.id == id)
    }

    pub fn drag_start(&mut self, event: &DragStartEvent) {
        let known = match event.active.kind {
            DragKind::Column => self.column(&event.active.id).is_some(),
            DragKind::Task => self.task(&event.active.id).is_some(),
        };
        if known {
            self.active = Some(event.active.clone());
        }
    }

    /// Moves a dragged task live while it hovers other tasks or columns.
    ///
    /// Returns `true` when the task list changed.
    pub fn drag_over(&mut self, event: &DragOverEvent) -> bool {
        let Some(over) = &event.over else {
            return false;
        };
        let active = &event.active;
        if active.id == over.id || !active.is_task() {
            return false;
        }

        let Some(active_index) = self.tasks.iter().position(|t| t.id == active.id) else {
            return false;
        };

        match over.kind {
            DragKind::Task => {
                let Some(over_index) = self.tasks.iter().position(|t| t.id == over.id) else {
                    return false;
                };
                let target_column = self.tasks[over_index].column_id.clone();
                let changed_column = self.tasks[active_index].column_id != target_column;
                self.tasks[active_index].move_to(target_column);
                array_move(&mut self.tasks, active_index, over_index) || changed_column
            }
            DragKind::Column => {
                if self.column(&over.id).is_none() || self.tasks[active_index].column_id == over.id {
                    return false;
                }
                self.tasks[active_index].move_to(over.id.clone());
                true
            }
        }
    }

    /// Finishes a drag. Columns are reordered here; tasks were already placed
    /// by [`Board::drag_over`].
    ///
    /// Returns `true` when the column list changed.
    pub fn drag_end(&mut self, event: &DragEndEvent) -> bool {
        self.active = None;

        let Some(over) = &event.over else {
            return false;
        };
        let active = &event.active;
        if active.id == over.id || !active.is_column() {
            return false;
        }

        let target_column = match over.kind {
            DragKind::Column => Some(over.id.as_str()),
            DragKind::Task => self.task(&over.id).map(|t| t.column_id.as_str()),
        };
        let Some(target_column) = target_column else {
            return false;
        };

        let from = self.columns.iter().position(|c| c.id == active.id);
        let to = self.columns.iter().position(|c| c.id == target_column);
        match (from, to) {
            (Some(from), Some(to)) => array_move(&mut self.columns, from, to),
            _ => false,
        }
    }

    pub fn drag_cancel(&mut self) {
        self.active = None;
    }

    /// Column list as JSON, for debug logging.
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.columns)?)
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;
