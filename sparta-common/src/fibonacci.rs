//! The Fibonacci calculator.
//!
//! [`fibonacci`] is the textbook doubly recursive definition and runs in exponential time.
//! Callers bound the input with [`FibonacciInput`] instead of altering the algorithm.

use thiserror::Error;

/// Largest input the calculator accepts.
pub const MAX_FIBONACCI_INPUT: u32 = 35;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Error)]
pub enum FibonacciInputError {
    #[error("Please enter a valid non-negative number")]
    Invalid,
    #[error("Please enter a number no greater than {}", MAX_FIBONACCI_INPUT)]
    TooLarge,
}

/// A validated, non-negative input no greater than [`MAX_FIBONACCI_INPUT`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct FibonacciInput(u32);

impl FibonacciInput {
    #[must_use]
    pub fn new(n: u32) -> Option<Self> {
        (n <= MAX_FIBONACCI_INPUT).then_some(Self(n))
    }

    /// Parses raw form input by reading the leading integer, the way a browser-side `parseInt`
    /// would: `"12abc"` is 12 and `"1.5"` is 1. Leading whitespace and one sign are allowed.
    /// Input without leading digits is invalid.
    pub fn parse(raw: &str) -> Result<Self, FibonacciInputError> {
        let trimmed = raw.trim_start();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let digits_len = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..digits_len];

        if digits.is_empty() {
            return Err(FibonacciInputError::Invalid);
        }
        if negative {
            // "-0" is zero, not a negative number.
            return if digits.bytes().all(|digit| digit == b'0') {
                Ok(Self(0))
            } else {
                Err(FibonacciInputError::Invalid)
            };
        }

        let n: u32 = digits
            .parse()
            .map_err(|_| FibonacciInputError::TooLarge)?;
        Self::new(n).ok_or(FibonacciInputError::TooLarge)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

#[must_use]
pub fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}
