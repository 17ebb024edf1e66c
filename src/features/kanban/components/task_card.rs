use leptos::html::Textarea;
use leptos::prelude::*;
use crate::core::dnd::{DragItem, DragKind};
use crate::core::models::Id;
use crate::features::kanban::hooks::{BoardHook, DragHook, PointerDown};

/// A sortable task card. Click toggles the inline editor; dragging is off
/// while editing.
#[component]
pub fn TaskCard(
    #[prop(into)] task_id: Id,
    #[prop(optional)] overlay: bool,
) -> impl IntoView {
    let board = expect_context::<BoardHook>();
    let drag = expect_context::<DragHook>();
    let (edit_mode, set_edit_mode) = signal(false);
    let (mouse_over, set_mouse_over) = signal(false);
    let textarea_ref: NodeRef<Textarea> = NodeRef::new();

    Effect::new(move |_| {
        if let Some(textarea) = textarea_ref.get() {
            let _ = textarea.focus();
        }
    });

    let content = {
        let task_id = task_id.clone();
        move || board.board.with(|b| b.task(&task_id).map(|t| t.content.clone()).unwrap_or_default())
    };

    let is_placeholder = {
        let task_id = task_id.clone();
        move || !overlay && board.is_active(&task_id)
    };

    let start_drag = {
        let task_id = task_id.clone();
        move |ev: web_sys::PointerEvent| {
            if overlay || edit_mode.get_untracked() {
                return;
            }
            // Keep the enclosing column from arming a column drag
            ev.stop_propagation();
            if let Some(down) = PointerDown::from_event(DragItem::task(task_id.clone()), &ev) {
                drag.begin.run(down);
            }
        }
    };

    let toggle_edit_mode = move |_| {
        if overlay || drag.click_suppressed() {
            return;
        }
        set_edit_mode.update(|editing| *editing = !*editing);
        set_mouse_over.set(false);
    };

    let body = {
        let task_id = task_id.clone();
        move || {
            if edit_mode.get() {
                let task_id = task_id.clone();
                let content = content.clone();
                view! {
                    <textarea
                        node_ref=textarea_ref
                        class="task-content-input"
                        placeholder="Task content here"
                        prop:value=content
                        on:click=|ev| ev.stop_propagation()
                        on:input=move |ev| board.rename_task.run((task_id.clone(), event_target_value(&ev)))
                        on:blur=move |_| set_edit_mode.set(false)
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                set_edit_mode.set(false);
                            }
                        }
                    ></textarea>
                }
                .into_any()
            } else {
                let task_id = task_id.clone();
                let content = content.clone();
                view! {
                    <p class="task-content">{content}</p>
                    {move || (mouse_over.get() && !overlay).then(|| {
                        let task_id = task_id.clone();
                        view! {
                            <button
                                class="task-delete-btn"
                                title="Delete task"
                                on:pointerdown=|ev| ev.stop_propagation()
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    board.delete_task.run(task_id.clone());
                                }
                            >"🞮"</button>
                        }
                    })}
                }
                .into_any()
            }
        }
    };

    view! {
        <div
            class="task-card"
            class:editing=move || edit_mode.get()
            class:drag-placeholder=is_placeholder
            data-dnd-id=(!overlay).then(|| task_id.clone())
            data-dnd-kind=(!overlay).then(|| DragKind::Task.as_attr())
            on:pointerdown=start_drag
            on:mouseenter=move |_| set_mouse_over.set(true)
            on:mouseleave=move |_| set_mouse_over.set(false)
            on:click=toggle_edit_mode
        >
            {body}
        </div>
    }
}
