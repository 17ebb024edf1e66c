use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::core::models::{Column, Id};
use crate::features::kanban::services::{
    add_column, add_task, delete_column, delete_task, rename_column, rename_task, Board,
};

/// Board store plus its mutation callbacks, shared with the component tree
/// through context.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: RwSignal<Board>,
    pub add_column: Callback<()>,
    pub rename_column: Callback<(Id, String)>,
    pub delete_column: Callback<Id>,
    pub add_task: Callback<Id>,
    pub rename_task: Callback<(Id, String)>,
    pub delete_task: Callback<Id>,
}

pub fn use_board(config: BoardConfig) -> BoardHook {
    let board = RwSignal::new(Board::new(config));

    // Log the column list whenever it changes
    let columns = Memo::new(move |_| board.with(|b| b.columns.clone()));
    Effect::new(move |_| {
        columns.track();
        board.with_untracked(|b| match b.snapshot_json() {
            Ok(json) => log::debug!("Columns: {}", json),
            Err(e) => log::warn!("Failed to snapshot columns: {}", e),
        });
    });

    BoardHook {
        board,
        add_column: Callback::new(move |_: ()| add_column(board)),
        rename_column: Callback::new(move |(column_id, title): (Id, String)| {
            rename_column(column_id, title, board)
        }),
        delete_column: Callback::new(move |column_id: Id| delete_column(column_id, board)),
        add_task: Callback::new(move |column_id: Id| add_task(column_id, board)),
        rename_task: Callback::new(move |(task_id, content): (Id, String)| {
            rename_task(task_id, content, board)
        }),
        delete_task: Callback::new(move |task_id: Id| delete_task(task_id, board)),
    }
}

impl BoardHook {
    pub fn column_ids(&self) -> Vec<Id> {
        self.board.with(|b| b.column_ids())
    }

    pub fn column(&self, column_id: &str) -> Option<Column> {
        self.board.with(|b| b.column(column_id).cloned())
    }

    pub fn task_ids_in(&self, column_id: &str) -> Vec<Id> {
        self.board.with(|b| b.task_ids_in(column_id))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.board.with(|b| b.is_active(id))
    }
}
