use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Failed to write greeting: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GreeterError>;
