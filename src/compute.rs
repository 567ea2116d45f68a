//! Pure numeric computations backing the HTTP endpoints.
//!
//! No I/O and no validation here; callers pass already-validated input.

use num_bigint::BigUint;

/// Exact factorial of `n`.
///
/// Arbitrary precision: the result outgrows u64 at n = 21, so this is a
/// correctness requirement rather than an optimization.
pub fn factorial(n: u64) -> BigUint {
    let mut acc = BigUint::from(1u8);
    for i in 2..=n {
        acc *= i;
    }
    acc
}

/// The n-th Fibonacci number, 0-indexed: fib(0) = 0, fib(1) = 1.
///
/// Iterative, no recursion. fib grows past u64 near n = 93.
pub fn fibonacci(n: u64) -> BigUint {
    let mut a = BigUint::from(0u8);
    let mut b = BigUint::from(1u8);
    for _ in 0..n {
        let next = &a + &b;
        a = b;
        b = next;
    }
    a
}

/// Arithmetic mean of a non-empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small() {
        assert_eq!(factorial(0), BigUint::from(1u8));
        assert_eq!(factorial(1), BigUint::from(1u8));
        assert_eq!(factorial(5), BigUint::from(120u8));
        assert_eq!(factorial(20), BigUint::from(2_432_902_008_176_640_000u64));
    }

    #[test]
    fn test_factorial_exceeds_u64() {
        // 25! has 26 digits, well past u64::MAX
        assert_eq!(
            factorial(25).to_string(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(fibonacci(0), BigUint::from(0u8));
        assert_eq!(fibonacci(1), BigUint::from(1u8));
        assert_eq!(fibonacci(10), BigUint::from(55u8));
    }

    #[test]
    fn test_fibonacci_recurrence() {
        for n in 2..50u64 {
            assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2));
        }
    }

    #[test]
    fn test_fibonacci_exceeds_u64() {
        assert_eq!(
            fibonacci(100).to_string(),
            "354224848179261915075"
        );
    }

    #[test]
    fn test_mean() {
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < f64::EPSILON);
        assert!((mean(&[5.0]) - 5.0).abs() < f64::EPSILON);
        assert!((mean(&[1.5, 2.5]) - 2.0).abs() < f64::EPSILON);
    }
}
