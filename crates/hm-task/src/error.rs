use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task tuning error: {0}")]
    Config(String),
}

pub type TaskResult<T> = Result<T, TaskError>;
