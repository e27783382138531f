use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, OrderError>;
