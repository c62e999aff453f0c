//! This module defines the type `PrimeField`, describing a finite field of prime order, and the `Field` trait that
//! abstracts over finite fields acting as factories of their elements.

use std::fmt;

use log::debug;
use num::Integer;
use num_bigint::{BigInt, BigUint};
#[cfg(feature = "rand")]
use num_bigint::RandBigInt;
#[cfg(feature = "rand")]
use rand::{CryptoRng, RngCore};

use crate::element::FieldElement;
use crate::error::{FieldError, Result};
use crate::prime_test::{MillerRabin, PrimeTest};

/// A finite (Galois) field meeting the definition of <https://en.wikipedia.org/wiki/Finite_field>
pub trait Field {
    /// The type of the members of this field.
    type Element;

    /// Returns the order of the field
    fn order(&self) -> &BigUint;

    /// Creates an element within the field from an arbitrary integer
    fn element_of<V: Into<BigInt>>(&self, value: V) -> Self::Element;
}

/// The integers modulo a prime `p`.
///
/// The modulus is expected to be prime and greater than one. [`PrimeField::new`] trusts the caller on that; use
/// [`PrimeField::new_checked`] to validate it.
///
/// # Examples
/// ```
/// use galois::PrimeField;
///
/// let field = PrimeField::new(1021u32);
/// let sum = field.element_of(5).add(&field.element_of(1020)).unwrap();
///
/// assert_eq!(field.element_of(4), sum);
/// assert_eq!("4(mod 1021)", sum.to_string());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Create the field of residues modulo `modulus`. Neither primality nor `modulus > 1` is verified; a field built
    /// from an invalid modulus yields meaningless arithmetic, and a zero modulus panics when minting elements.
    pub fn new<M: Into<BigUint>>(modulus: M) -> Self {
        PrimeField {
            modulus: modulus.into(),
        }
    }

    /// Create the field of residues modulo `modulus` after checking that the modulus is greater than one and passes the
    /// Miller-Rabin primality test.
    pub fn new_checked<M: Into<BigUint>>(modulus: M) -> Result<Self> {
        let modulus = modulus.into();

        if modulus <= BigUint::from(1u32) {
            debug!("rejected field modulus {}: not greater than one", modulus);
            return Err(FieldError::InvalidModulus {
                modulus,
                reason: "modulus must be greater than one",
            });
        }

        if !MillerRabin::is_prime(&modulus) {
            debug!("rejected field modulus {}: composite", modulus);
            return Err(FieldError::InvalidModulus {
                modulus,
                reason: "modulus is not prime",
            });
        }

        debug!("created prime field of order {}", modulus);
        Ok(PrimeField { modulus })
    }

    /// Returns the prime number that is base to this field and its operations.
    pub fn order(&self) -> &BigUint {
        &self.modulus
    }

    /// Map an arbitrary integer into the field. Negative values wrap around, so the result is always the non-negative
    /// residue of `value`.
    pub fn element_of<V: Into<BigInt>>(&self, value: V) -> FieldElement {
        let modulus = BigInt::from(self.modulus.clone());
        let (_, residue) = value.into().mod_floor(&modulus).into_parts();
        let (_, modulus) = modulus.into_parts();
        FieldElement::from_residue(residue, modulus)
    }

    /// The additive identity.
    pub fn zero(&self) -> FieldElement {
        self.element_of(0)
    }

    /// The multiplicative identity.
    pub fn one(&self) -> FieldElement {
        self.element_of(1)
    }

    /// Whether the element carries the modulus of this field.
    pub fn contains(&self, element: &FieldElement) -> bool {
        *element.modulus() == self.modulus
    }

    /// Generate a random member of this field. The distribution of generated elements is uniform as long as `rng` is
    /// well-seeded and cryptographically secure.
    #[cfg(feature = "rand")]
    pub fn random_element<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        FieldElement::from_residue(rng.gen_biguint_below(&self.modulus), self.modulus.clone())
    }
}

impl Field for PrimeField {
    type Element = FieldElement;

    fn order(&self) -> &BigUint {
        PrimeField::order(self)
    }

    fn element_of<V: Into<BigInt>>(&self, value: V) -> FieldElement {
        PrimeField::element_of(self, value)
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.modulus)
    }
}
