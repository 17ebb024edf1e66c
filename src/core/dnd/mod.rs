//! Drag-and-drop primitive for sortable lists.
//!
//! DESIGN
//! ======
//! Nothing in here touches the DOM. Draggables and droppables are identified
//! by a [`DragItem`] (id plus kind), the [`PointerSensor`] turns raw pointer
//! input into an activated drag, and the resulting events are handed to
//! whatever store owns the lists. The browser side renders each sortable with
//! `data-dnd-id` / `data-dnd-kind` attributes and resolves the droppable under
//! the pointer from those.

pub mod sensor;

pub use sensor::{ActivationConstraint, PointerSensor, SensorEvent};

use crate::core::models::Id;

pub const ID_ATTR: &str = "data-dnd-id";
pub const KIND_ATTR: &str = "data-dnd-kind";

/// The `type` tag carried by every draggable and droppable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Column,
    Task,
}

impl DragKind {
    pub fn as_attr(&self) -> &'static str {
        match self {
            DragKind::Column => "column",
            DragKind::Task => "task",
        }
    }

    pub fn from_attr(value: &str) -> Option<DragKind> {
        match value {
            "column" => Some(DragKind::Column),
            "task" => Some(DragKind::Task),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragItem {
    pub id: Id,
    pub kind: DragKind,
}

impl DragItem {
    pub fn column(id: impl Into<Id>) -> Self {
        Self { id: id.into(), kind: DragKind::Column }
    }

    pub fn task(id: impl Into<Id>) -> Self {
        Self { id: id.into(), kind: DragKind::Task }
    }

    pub fn is_task(&self) -> bool {
        self.kind == DragKind::Task
    }

    pub fn is_column(&self) -> bool {
        self.kind == DragKind::Column
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragStartEvent {
    pub active: DragItem,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragOverEvent {
    pub active: DragItem,
    pub over: Option<DragItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragEndEvent {
    pub active: DragItem,
    pub over: Option<DragItem>,
}

/// Viewport coordinates in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset_by(&self, delta: Point) -> Point {
        Point::new(self.x - delta.x, self.y - delta.y)
    }
}

/// Removes the element at `from` and reinserts it at `to`.
///
/// Returns `false` and leaves the list alone when either index is out of
/// range or both are equal.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

#[cfg(test)]
#[path = "dnd_test.rs"]
mod dnd_test;
