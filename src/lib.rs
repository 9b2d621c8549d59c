use log::debug;

mod error;
mod operation;

pub use error::Error;
pub use operation::Operation;

pub type Result<T> = std::result::Result<T, Error>;

/// Applies the operation named by `operation` to `first` and `second`.
///
/// Selectors outside the four known operations yield `Ok(0.0)` rather than
/// an error. Callers that want strict selector handling should parse an
/// [`Operation`] themselves and call [`Operation::apply`].
pub fn calculate(first: f64, second: f64, operation: &str) -> Result<f64> {
    let Ok(operation) = operation.parse::<Operation>() else {
        debug!("falling back to zero for selector {operation:?}");
        return Ok(0.0);
    };
    operation.apply(first, second)
}
