//! Elements of a prime field and their arithmetic.
//!
//! Every element carries its own copy of the field modulus. Binary operations check that both operands agree on the
//! modulus and return [`FieldError::FieldMismatch`] otherwise, so elements of different fields are never mixed
//! silently.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::trace;
use num::{Integer, One, Zero};
use num_bigint::{BigInt, BigUint, Sign};

use crate::error::{FieldError, Operation, Result};

/// A residue modulo the prime of the field it was created in. The value always lies in `[0, modulus)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

impl FieldElement {
    /// Wrap a residue that is already reduced modulo `modulus`.
    pub(crate) fn from_residue(value: BigUint, modulus: BigUint) -> Self {
        debug_assert!(modulus.is_zero() || value < modulus);
        FieldElement { value, modulus }
    }

    /// The canonical representative of this element in `[0, modulus)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The modulus of the field this element belongs to.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Add two elements of the same field.
    pub fn add(&self, rhs: &FieldElement) -> Result<FieldElement> {
        self.ensure_same_field(rhs, Operation::Addition)?;
        Ok(self.reduce(&self.value + &rhs.value))
    }

    /// Subtract `rhs` from this element. A difference that would be negative wraps around the modulus.
    pub fn sub(&self, rhs: &FieldElement) -> Result<FieldElement> {
        self.ensure_same_field(rhs, Operation::Subtraction)?;

        let difference = if self.value >= rhs.value {
            &self.value - &rhs.value
        } else {
            &self.modulus - &rhs.value + &self.value
        };

        Ok(self.reduce(difference))
    }

    /// Multiply two elements of the same field.
    pub fn mul(&self, rhs: &FieldElement) -> Result<FieldElement> {
        self.ensure_same_field(rhs, Operation::Multiplication)?;
        Ok(self.reduce(&self.value * &rhs.value))
    }

    /// The additive inverse of this element.
    pub fn neg(&self) -> FieldElement {
        if self.value.is_zero() {
            return self.clone();
        }
        self.reduce(&self.modulus - &self.value)
    }

    /// Calculate the multiplicative inverse of this element using the extended euclidean algorithm.
    ///
    /// Fails with [`FieldError::NotInvertible`] if the value shares a factor with the modulus, which for a prime
    /// modulus only happens for zero.
    pub fn inverse(&self) -> Result<FieldElement> {
        let modulus = BigInt::from(self.modulus.clone());

        // invariant: old_t * value = old_r (mod modulus), and the same for t and r
        let (mut old_r, mut r) = (modulus.clone(), BigInt::from(self.value.clone()));
        let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

        while !r.is_zero() {
            let (quotient, remainder) = old_r.div_rem(&r);
            old_r = mem::replace(&mut r, remainder);
            let next_t = &old_t - &quotient * &t;
            old_t = mem::replace(&mut t, next_t);
        }

        if !old_r.is_one() {
            trace!("{} has no inverse, gcd with the modulus is {}", self, old_r);
            return Err(FieldError::NotInvertible {
                value: self.value.clone(),
                modulus: self.modulus.clone(),
            });
        }

        let (_, inverse) = old_t.mod_floor(&modulus).into_parts();
        Ok(FieldElement::from_residue(inverse, self.modulus.clone()))
    }

    /// Divide this element by `rhs`, i.e. multiply it with the inverse of `rhs`.
    pub fn div(&self, rhs: &FieldElement) -> Result<FieldElement> {
        self.ensure_same_field(rhs, Operation::Division)?;
        let inverse = rhs.inverse()?;
        Ok(self.reduce(&self.value * &inverse.value))
    }

    /// Raise this element to an arbitrary integer power by modular exponentiation.
    ///
    /// The exponent is not bounded by the modulus. A negative exponent raises the inverse of this element to the
    /// absolute value of the exponent and therefore fails for zero. Any element raised to zero is one.
    pub fn pow<E: Into<BigInt>>(&self, exponent: E) -> Result<FieldElement> {
        let (sign, magnitude) = exponent.into().into_parts();
        if magnitude.is_zero() {
            return Ok(self.reduce(BigUint::one()));
        }

        let base = if sign == Sign::Minus {
            self.inverse()?
        } else {
            self.clone()
        };

        Ok(FieldElement::from_residue(
            base.value.modpow(&magnitude, &self.modulus),
            self.modulus.clone(),
        ))
    }

    /// Order the values of two elements of the same field. Prime fields have no natural order compatible with their
    /// arithmetic, so this is mainly useful to test for equality.
    pub fn compare(&self, rhs: &FieldElement) -> Result<Ordering> {
        self.ensure_same_field(rhs, Operation::Comparison)?;
        Ok(self.value.cmp(&rhs.value))
    }

    fn ensure_same_field(&self, rhs: &FieldElement, operation: Operation) -> Result<()> {
        if self.modulus == rhs.modulus {
            return Ok(());
        }

        trace!("{} of {} and {} rejected", operation, self, rhs);
        Err(FieldError::FieldMismatch {
            operation,
            left: self.modulus.clone(),
            right: rhs.modulus.clone(),
        })
    }

    fn reduce(&self, mut value: BigUint) -> FieldElement {
        value %= &self.modulus;
        FieldElement::from_residue(value, self.modulus.clone())
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(mod {})", self.value, self.modulus)
    }
}
