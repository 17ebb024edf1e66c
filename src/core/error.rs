use thiserror::Error;

use crate::core::models::Id;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("column {0} does not exist")]
    UnknownColumn(Id),
    #[error("task {0} does not exist")]
    UnknownTask(Id),
    #[error("failed to serialize board: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T, E = BoardError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_item() {
        assert_eq!(
            BoardError::UnknownColumn("c1".to_string()).to_string(),
            "column c1 does not exist"
        );
        assert_eq!(
            BoardError::UnknownTask("t9".to_string()).to_string(),
            "task t9 does not exist"
        );
    }

    #[test]
    fn serde_errors_convert() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: BoardError = err.into();
        assert!(matches!(err, BoardError::Serialize(_)));
    }
}
