use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::features::kanban::KanbanBoard;

#[component]
pub fn App() -> impl IntoView {
    provide_context(BoardConfig::default());

    view! {
        <main class="app">
            <KanbanBoard />
        </main>
    }
}
