//! Scenario step definitions.

use serde::{Deserialize, Serialize};

/// Operands for the standalone addition shown at the top of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArithmeticConfig {
    /// Left operand.
    #[serde(default = "default_add_a")]
    pub a: i64,
    /// Right operand.
    #[serde(default = "default_add_b")]
    pub b: i64,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            a: default_add_a(),
            b: default_add_b(),
        }
    }
}

const fn default_add_a() -> i64 {
    5
}

const fn default_add_b() -> i64 {
    3
}

/// A person registered with the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonSeed {
    /// Registry key and display name.
    pub name: String,
    /// Initial age.
    pub age: i64,
}

impl PersonSeed {
    /// Create a seed with the given name and age.
    #[must_use]
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// A single calculator invocation.
///
/// `operation` is kept as the raw tag so that unknown operations reach the
/// calculator and exercise its zero fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculationStep {
    /// Left operand.
    pub a: i64,
    /// Right operand.
    pub b: i64,
    /// Operation tag: "add", "subtract", "multiply" or "divide".
    pub operation: String,
}

impl CalculationStep {
    /// Create a step for the given operands and tag.
    #[must_use]
    pub fn new(a: i64, b: i64, operation: impl Into<String>) -> Self {
        Self {
            a,
            b,
            operation: operation.into(),
        }
    }
}

/// An age change applied through the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgeUpdate {
    /// Name of the user to update.
    pub name: String,
    /// New age.
    pub age: i64,
}

impl AgeUpdate {
    /// Create an update for the given name and age.
    #[must_use]
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}
