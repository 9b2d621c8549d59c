use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    fn as_str(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
        }
    }

    /// Apply the operation to `first` and `second`.
    ///
    /// The division-by-zero check runs before any arithmetic is attempted.
    pub fn apply(self, first: f64, second: f64) -> Result<f64, Error> {
        if matches!(self, Operation::Division) && second == 0.0 {
            return Err(Error::DivisionByZero);
        }
        let result = match self {
            Operation::Addition => first + second,
            Operation::Subtraction => first - second,
            Operation::Multiplication => first * second,
            Operation::Division => first / second,
        };
        Ok(result)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addition" => Ok(Operation::Addition),
            "subtraction" => Ok(Operation::Subtraction),
            "multiplication" => Ok(Operation::Multiplication),
            "division" => Ok(Operation::Division),
            _ => Err(Error::UnknownOperation(s.to_owned())),
        }
    }
}
