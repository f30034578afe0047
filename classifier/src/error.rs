use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("invalid input: expected a string, got {found}")]
    InvalidInput { found: &'static str },
}
