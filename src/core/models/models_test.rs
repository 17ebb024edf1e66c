use super::*;

#[test]
fn column_new_allocates_distinct_ids() {
    let a = Column::new("Column 1".to_string());
    let b = Column::new("Column 1".to_string());
    assert_ne!(a.id, b.id);
    assert_eq!(a.title, "Column 1");
}

#[test]
fn column_set_title_keeps_id() {
    let mut column = Column::new("Backlog".to_string());
    let id = column.id.clone();
    column.set_title("Doing".to_string());
    assert_eq!(column.id, id);
    assert_eq!(column.title, "Doing");
}

#[test]
fn task_new_belongs_to_column() {
    let task = Task::new("col-1".to_string(), "Task 1".to_string());
    assert_eq!(task.column_id, "col-1");
    assert_eq!(task.content, "Task 1");
    assert!(!task.id.is_empty());
}

#[test]
fn task_move_to_changes_column_only() {
    let mut task = Task::new("col-1".to_string(), "Write docs".to_string());
    task.move_to("col-2".to_string());
    assert_eq!(task.column_id, "col-2");
    assert_eq!(task.content, "Write docs");
}

#[test]
fn task_serializes_with_snake_case_fields() {
    let task = Task {
        id: "t1".to_string(),
        column_id: "c1".to_string(),
        content: "Ship it".to_string(),
    };
    let value = serde_json::to_value(&task).unwrap();
    assert_eq!(value["column_id"], "c1");
    let back: Task = serde_json::from_value(value).unwrap();
    assert_eq!(back, task);
}
