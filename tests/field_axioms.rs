//! Field axiom tests over a small prime and the Mersenne prime 2^127 - 1.

use std::str::FromStr;

use galois::{BigInt, BigUint, FieldElement, FieldError, PrimeField};
use proptest::prelude::*;

const P: u64 = 1021;

fn small_field() -> PrimeField {
    PrimeField::new(P)
}

fn mersenne_127() -> PrimeField {
    PrimeField::new(BigUint::from_str("170141183460469231731687303715884105727").unwrap())
}

prop_compose! {
    fn small_element()(v in 0..P) -> FieldElement {
        small_field().element_of(v)
    }
}

prop_compose! {
    fn non_zero_small_element()(v in 1..P) -> FieldElement {
        small_field().element_of(v)
    }
}

prop_compose! {
    fn large_element()(bytes in any::<[u8; 16]>()) -> FieldElement {
        mersenne_127().element_of(BigUint::from_bytes_le(&bytes))
    }
}

fn in_range(x: &FieldElement) -> bool {
    x.value() < x.modulus()
}

proptest! {
    #[test]
    fn closure(a in small_element(), b in non_zero_small_element(), k in -64i32..64) {
        prop_assert!(in_range(&a.add(&b).unwrap()));
        prop_assert!(in_range(&a.sub(&b).unwrap()));
        prop_assert!(in_range(&a.mul(&b).unwrap()));
        prop_assert!(in_range(&a.div(&b).unwrap()));
        prop_assert!(in_range(&b.inverse().unwrap()));
        prop_assert!(in_range(&a.neg()));
        prop_assert!(in_range(&a.pow(k.abs()).unwrap()));
        prop_assert!(in_range(&b.pow(-k.abs()).unwrap()));
    }

    #[test]
    fn commutativity(a in large_element(), b in large_element()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
    }

    #[test]
    fn associativity(a in large_element(), b in large_element(), c in large_element()) {
        prop_assert_eq!(a.add(&b).unwrap().add(&c).unwrap(), a.add(&b.add(&c).unwrap()).unwrap());
        prop_assert_eq!(a.mul(&b).unwrap().mul(&c).unwrap(), a.mul(&b.mul(&c).unwrap()).unwrap());
    }

    #[test]
    fn distributivity(a in large_element(), b in large_element(), c in large_element()) {
        let left = a.mul(&b.add(&c).unwrap()).unwrap();
        let right = a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn additive_identity_and_inverse(a in large_element()) {
        let field = mersenne_127();
        prop_assert_eq!(&a, &a.add(&field.zero()).unwrap());
        prop_assert!(a.add(&a.neg()).unwrap().is_zero());
        prop_assert!(a.sub(&a).unwrap().is_zero());
    }

    #[test]
    fn multiplicative_identity_and_inverse(a in large_element()) {
        let field = mersenne_127();
        prop_assert_eq!(&a, &a.mul(&field.one()).unwrap());
        if !a.is_zero() {
            prop_assert!(a.mul(&a.inverse().unwrap()).unwrap().is_one());
        }
    }

    #[test]
    fn division_consistency(a in small_element(), b in non_zero_small_element()) {
        let quotient = a.div(&b).unwrap();
        prop_assert_eq!(&a, &quotient.mul(&b).unwrap());
        prop_assert_eq!(quotient, a.mul(&b.inverse().unwrap()).unwrap());
    }

    #[test]
    fn fermat(a in non_zero_small_element()) {
        prop_assert!(a.pow(P - 1).unwrap().is_one());
    }

    #[test]
    fn exponentiation_matches_repeated_multiplication(a in small_element(), k in 0u32..64) {
        let expected = (0..k).fold(small_field().one(), |acc, _| acc.mul(&a).unwrap());
        prop_assert_eq!(expected, a.pow(k).unwrap());
    }

    #[test]
    fn subtraction_wraps_into_range(a in 0..P, b in 0..P) {
        let field = small_field();
        let difference = field.element_of(a).sub(&field.element_of(b)).unwrap();
        let expected = (a as i64 - b as i64).rem_euclid(P as i64) as u64;
        prop_assert_eq!(&BigUint::from(expected), difference.value());
    }

    #[test]
    fn construction_round_trip(v in any::<i64>()) {
        let field = small_field();
        let expected = v.rem_euclid(P as i64) as u64;
        let element = field.element_of(v);
        prop_assert_eq!(&BigUint::from(expected), element.value());
    }

    #[test]
    fn construction_round_trip_large(v in any::<i128>()) {
        let field = mersenne_127();
        let p = BigInt::from(field.order().clone());
        let expected = ((BigInt::from(v) % &p) + &p) % &p;
        prop_assert_eq!(field.element_of(expected), field.element_of(v));
    }

    #[test]
    fn cross_field_rejection(a in 0..P, b in 0u64..7) {
        let x = small_field().element_of(a);
        let y = PrimeField::new(7u32).element_of(b);

        let mismatched = |result: Result<FieldElement, FieldError>| {
            matches!(result, Err(FieldError::FieldMismatch { .. }))
        };
        prop_assert!(mismatched(x.add(&y)));
        prop_assert!(mismatched(x.sub(&y)));
        prop_assert!(mismatched(x.mul(&y)));
        prop_assert!(mismatched(x.div(&y)));
        let compared = matches!(x.compare(&y), Err(FieldError::FieldMismatch { .. }));
        prop_assert!(compared);
    }
}

#[test]
fn concrete_scenarios() {
    let field = small_field();
    let e = |v: i64| field.element_of(v);

    assert_eq!(e(4), e(5).add(&e(1020)).unwrap());
    assert_eq!(e(1014), e(3).sub(&e(10)).unwrap());
    assert_eq!(e(479), e(500).mul(&e(3)).unwrap());
    assert_eq!(e(1), e(2).inverse().unwrap().mul(&e(2)).unwrap());
    assert_eq!(e(1), e(2).pow(1020).unwrap());
}
