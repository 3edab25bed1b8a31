//! Stateless integer arithmetic.
//!
//! None of these functions can fail. Overflow wraps in two's complement and
//! the two undefined cases (division by zero, average of nothing) produce
//! a degraded result of zero.

/// Returns the sum of two integers.
#[must_use]
pub const fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Returns the difference of two integers.
#[must_use]
pub const fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Returns the product of two integers.
#[must_use]
pub const fn multiply(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// Returns the truncating quotient of two integers.
///
/// Returns 0 if the divisor is zero.
#[must_use]
pub const fn divide(a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    a.wrapping_div(b)
}

/// Returns the arithmetic mean of `numbers`, or `0.0` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(numbers: &[i64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    let sum: i128 = numbers.iter().map(|&n| i128::from(n)).sum();
    sum as f64 / numbers.len() as f64
}
