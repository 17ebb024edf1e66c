use leptos::html::Input;
use leptos::prelude::*;
use crate::core::dnd::{DragItem, DragKind};
use crate::core::models::Id;
use crate::features::kanban::hooks::{BoardHook, DragHook, PointerDown};
use super::TaskCard;

/// A sortable column. The header is the drag handle; the whole column is a
/// drop target. `overlay` renders an inert copy for the drag overlay.
#[component]
pub fn KanbanColumn(
    #[prop(into)] column_id: Id,
    #[prop(optional)] overlay: bool,
) -> impl IntoView {
    let board = expect_context::<BoardHook>();
    let drag = expect_context::<DragHook>();
    let (edit_mode, set_edit_mode) = signal(false);
    let input_ref: NodeRef<Input> = NodeRef::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let title = {
        let column_id = column_id.clone();
        move || board.column(&column_id).map(|c| c.title).unwrap_or_default()
    };

    let task_count = {
        let column_id = column_id.clone();
        move || board.board.with(|b| b.tasks_in(&column_id).count())
    };

    let is_placeholder = {
        let column_id = column_id.clone();
        move || !overlay && board.is_active(&column_id)
    };

    let start_drag = {
        let column_id = column_id.clone();
        move |ev: web_sys::PointerEvent| {
            if overlay || edit_mode.get_untracked() {
                return;
            }
            if let Some(down) = PointerDown::from_event(DragItem::column(column_id.clone()), &ev) {
                drag.begin.run(down);
            }
        }
    };

    let title_view = {
        let column_id = column_id.clone();
        move || {
            if edit_mode.get() {
                let column_id = column_id.clone();
                let title = title.clone();
                view! {
                    <input
                        node_ref=input_ref
                        class="column-title-input"
                        prop:value=title
                        on:input=move |ev| board.rename_column.run((column_id.clone(), event_target_value(&ev)))
                        on:blur=move |_| set_edit_mode.set(false)
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                set_edit_mode.set(false);
                            }
                        }
                    />
                }
                .into_any()
            } else {
                let title = title.clone();
                view! { <h3 class="column-title">{title}</h3> }.into_any()
            }
        }
    };

    let delete_column = {
        let column_id = column_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            board.delete_column.run(column_id.clone());
        }
    };

    let add_task = {
        let column_id = column_id.clone();
        move |_| board.add_task.run(column_id.clone())
    };

    let task_ids = {
        let column_id = column_id.clone();
        move || board.task_ids_in(&column_id)
    };

    view! {
        <div
            class="kanban-column"
            class:drag-placeholder=is_placeholder
            data-dnd-id=(!overlay).then(|| column_id.clone())
            data-dnd-kind=(!overlay).then(|| DragKind::Column.as_attr())
        >
            <div
                class="column-header"
                on:pointerdown=start_drag
                on:click=move |_| {
                    if !overlay && !drag.click_suppressed() {
                        set_edit_mode.set(true);
                    }
                }
            >
                <div class="column-header-left">
                    <span class="task-count">{task_count}</span>
                    {title_view}
                </div>
                <button
                    class="column-delete-btn"
                    title="Delete column"
                    on:pointerdown=|ev| ev.stop_propagation()
                    on:click=delete_column
                >"🞮"</button>
            </div>
            <div class="column-content">
                <For each=task_ids key=|task_id| task_id.clone() let:task_id>
                    <TaskCard task_id=task_id overlay=overlay />
                </For>
            </div>
            <button
                class="add-task-btn"
                on:pointerdown=|ev| ev.stop_propagation()
                on:click=add_task
            >"🞦 Add task"</button>
        </div>
    }
}
