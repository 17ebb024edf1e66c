use leptos::prelude::*;
use crate::core::dnd::{DragKind, Point};
use crate::features::kanban::hooks::{BoardHook, DragHook};
use super::{KanbanColumn, TaskCard};

/// Floating copy of the active column or task that follows the pointer.
#[component]
pub fn DragOverlay() -> impl IntoView {
    let board = expect_context::<BoardHook>();
    let drag = expect_context::<DragHook>();
    let active = Memo::new(move |_| board.board.with(|b| b.active.clone()));

    move || {
        active.get().map(|active| {
            let content = match active.kind {
                DragKind::Column => view! { <KanbanColumn column_id=active.id overlay=true /> }.into_any(),
                DragKind::Task => view! { <TaskCard task_id=active.id overlay=true /> }.into_any(),
            };
            view! {
                <div class="drag-overlay" style=move || overlay_style(drag.overlay_position.get())>
                    {content}
                </div>
            }
        })
    }
}

fn overlay_style(position: Option<Point>) -> String {
    match position {
        Some(p) => format!("transform: translate({}px, {}px);", p.x, p.y),
        None => "display: none;".to_string(),
    }
}
