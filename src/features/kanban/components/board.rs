use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::features::kanban::hooks::{use_board, use_drag_and_drop};
use super::{DragOverlay, KanbanColumn};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let board = use_board(config.clone());
    let drag = use_drag_and_drop(board.board, &config);

    provide_context(board);
    provide_context(drag);

    view! {
        <div class="kanban-board" class:dragging=move || drag.dragging.get()>
            <div class="kanban-columns">
                <For
                    each=move || board.column_ids()
                    key=|column_id| column_id.clone()
                    let:column_id
                >
                    <KanbanColumn column_id=column_id />
                </For>
            </div>
            <button class="add-column-btn" on:click=move |_| board.add_column.run(())>
                "🞦 Add Column"
            </button>
            <DragOverlay />
        </div>
    }
}
