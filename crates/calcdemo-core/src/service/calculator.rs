//! Calculator with result history.

use std::fmt;
use std::str::FromStr;

use crate::math;

/// Arithmetic operation understood by [`Calculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Integer division, zero on a zero divisor.
    Divide,
}

impl Operation {
    /// All supported operations.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the tag used to name this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Applies the operation to `a` and `b`.
    #[must_use]
    pub const fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Self::Add => math::add(a, b),
            Self::Subtract => math::subtract(a, b),
            Self::Multiply => math::multiply(a, b),
            Self::Divide => math::divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag names no known [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(
    /// The unrecognized tag.
    pub String,
);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// A calculator that records every result it produces.
///
/// The history length always equals the number of [`calculate`] calls since
/// construction or the last [`clear_history`].
///
/// [`calculate`]: Calculator::calculate
/// [`clear_history`]: Calculator::clear_history
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    history: Vec<i64>,
}

impl Calculator {
    /// Create a calculator with an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Performs the operation named by `operation` and records the result.
    ///
    /// Unrecognized tags produce 0, which is recorded like any other result.
    pub fn calculate(&mut self, a: i64, b: i64, operation: &str) -> i64 {
        let result = operation.parse::<Operation>().map_or_else(
            |err| {
                tracing::debug!(%err, a, b, "falling back to 0");
                0
            },
            |op| op.apply(a, b),
        );
        self.record(result)
    }

    /// Performs a typed operation and records the result.
    pub fn calculate_with(&mut self, a: i64, b: i64, operation: Operation) -> i64 {
        self.record(operation.apply(a, b))
    }

    fn record(&mut self, result: i64) -> i64 {
        self.history.push(result);
        result
    }

    /// Returns the recorded results, oldest first.
    #[must_use]
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    /// Discards the history, replacing it with fresh storage.
    pub fn clear_history(&mut self) {
        self.history = Vec::new();
    }

    /// Returns the most recent result, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<i64> {
        self.history.last().copied()
    }

    /// Returns the mean of all recorded results, `0.0` when empty.
    #[must_use]
    pub fn average_result(&self) -> f64 {
        math::average(&self.history)
    }
}
