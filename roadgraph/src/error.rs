use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),
  #[error("Corrupted search state: {0}")]
  CorruptedState(String),
}

pub type Result<T> = std::result::Result<T, Error>;
