use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Variable not found under [`crate::MissingPolicy::Error`]
    #[error("Variable not found: {0}")]
    MissingVar(String),
}
