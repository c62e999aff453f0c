//! Error types of the prime field arithmetic.

use std::fmt;

use num_bigint::BigUint;
use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, FieldError>;

/// The binary field operations that require both operands to live in the same field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Comparison,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
            Operation::Comparison => "Comparison",
        };
        f.write_str(name)
    }
}

/// Errors raised by field construction and element arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The operands of a binary operation belong to fields with different moduli.
    #[error("{operation} not in the same field (moduli {left} and {right})")]
    FieldMismatch {
        /// The operation that was attempted.
        operation: Operation,
        /// Modulus of the left operand.
        left: BigUint,
        /// Modulus of the right operand.
        right: BigUint,
    },

    /// The residue shares a factor with the modulus, so no multiplicative inverse exists.
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NotInvertible { value: BigUint, modulus: BigUint },

    /// The modulus given to a checked field constructor cannot define a prime field.
    #[error("invalid modulus {modulus}: {reason}")]
    InvalidModulus {
        modulus: BigUint,
        reason: &'static str,
    },
}
