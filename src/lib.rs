//! Arithmetic in finite fields of prime order, built on arbitrary-precision integers.
//!
//! A [`PrimeField`] is created from its modulus and mints [`FieldElement`]s. Elements carry the modulus of their field
//! and every binary operation on them fails with a [`FieldError`] instead of mixing elements of different fields.
//!
//! ```
//! use galois::PrimeField;
//!
//! let field = PrimeField::new(1021u32);
//! let x = field.element_of(3);
//! let y = field.element_of(10);
//!
//! assert_eq!(field.element_of(1014), x.sub(&y)?);
//! assert_eq!(x, x.div(&y)?.mul(&y)?);
//! assert_eq!(field.one(), field.element_of(2).pow(1020)?);
//! # Ok::<(), galois::FieldError>(())
//! ```

#![allow(clippy::should_implement_trait)]

pub mod element;
pub mod error;
pub mod prime;

pub use num_bigint::{BigInt, BigUint};

pub use crate::element::FieldElement;
pub use crate::error::{FieldError, Operation, Result};
pub use crate::prime::{Field, PrimeField};
