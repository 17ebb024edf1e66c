use super::*;

#[test]
fn default_activation_distance_is_three_pixels() {
    assert_eq!(BoardConfig::default().activation_distance, 3.0);
}

#[test]
fn default_titles_use_column_and_task_prefixes() {
    let config = BoardConfig::default();
    assert_eq!(config.column_title(1), "Column 1");
    assert_eq!(config.task_content(7), "Task 7");
}

#[test]
fn custom_prefixes_are_used() {
    let config = BoardConfig {
        column_title_prefix: "Lane".to_string(),
        task_content_prefix: "Card".to_string(),
        ..BoardConfig::default()
    };
    assert_eq!(config.column_title(2), "Lane 2");
    assert_eq!(config.task_content(3), "Card 3");
}
