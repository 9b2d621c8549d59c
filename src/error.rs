#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Division by zero error")]
    DivisionByZero,
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}
