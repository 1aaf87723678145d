//! Field arithmetic modulo p = 2^256 - 2^32 - 977.
//!
//! Elements carry a *magnitude*: an upper bound on how far the limbs have
//! grown past their normalized widths. Additions sum magnitudes, negation
//! adds one, multiplication requires both inputs at magnitude 8 or less and
//! resets the output to 1. `normalize` canonicalizes. In debug builds the
//! magnitude is tracked alongside the value and every contract is asserted;
//! release builds carry only the limbs.

#[cfg(feature = "field-5x52")]
mod field_5x52;

mod field_impl;

use core::ops::{Add, AddAssign, Mul, MulAssign};
use field_impl::FieldElementImpl;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

/// An element in the finite field used for the secp256k1 curve coordinates.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(FieldElementImpl);

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self(FieldElementImpl::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(FieldElementImpl::ONE);

    /// Parses the given byte array as a big-endian integer, without checking
    /// that it is within the field range.
    ///
    /// Bytes encoding an integer in `[p, 2^256)` yield the element congruent
    /// to that integer mod p, in a non-canonical representation; no error is
    /// raised. Use [`FieldElement::from_bytes`] when the input needs to be
    /// validated.
    pub const fn from_bytes_unchecked(bytes: &[u8; 32]) -> Self {
        Self(FieldElementImpl::from_bytes_unchecked(bytes))
    }

    /// Parses the given byte array as a big-endian integer.
    ///
    /// Returns None if the integer is not in the range [0, p).
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        FieldElementImpl::from_bytes(bytes).map(Self)
    }

    /// Converts a small integer into a (normalized) field element.
    pub const fn from_u64(w: u64) -> Self {
        Self(FieldElementImpl::from_u64(w))
    }

    /// Returns the big-endian encoding of this field element.
    /// The element must be normalized.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Packs the field element into 4 little-endian 64-bit words.
    /// The element must be normalized.
    pub fn to_words(&self) -> [u64; 4] {
        self.0.to_words()
    }

    /// Unpacks 4 little-endian 64-bit words into a field element,
    /// without checking that the value is within the field range.
    pub const fn from_words_unchecked(words: [u64; 4]) -> Self {
        Self(FieldElementImpl::from_words_unchecked(words))
    }

    /// Unpacks 4 little-endian 64-bit words into a field element.
    ///
    /// Returns None if the value is not in the range [0, p).
    pub fn from_words(words: [u64; 4]) -> CtOption<Self> {
        FieldElementImpl::from_words(words).map(Self)
    }

    /// Brings the magnitude down to 1, but does not necessarily canonicalize
    /// the element.
    pub fn normalize_weak(&self) -> Self {
        Self(self.0.normalize_weak())
    }

    /// Fully normalizes the field element: brings it to the unique canonical
    /// representation with magnitude 1 and value below the modulus.
    /// Constant-time.
    pub fn normalize(&self) -> Self {
        Self(self.0.normalize())
    }

    /// Checks if the field element becomes zero if normalized. Usable at any
    /// magnitude, without normalizing first.
    pub fn normalizes_to_zero(&self) -> Choice {
        self.0.normalizes_to_zero()
    }

    /// Determine if this `FieldElement` is zero.
    /// The element must be normalized.
    ///
    /// # Returns
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_zero(&self) -> Choice {
        self.0.is_zero()
    }

    /// Determine if this `FieldElement` is odd: `self mod 2 == 1`.
    /// The element must be normalized.
    ///
    /// # Returns
    ///
    /// If odd, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_odd(&self) -> Choice {
        self.0.is_odd()
    }

    /// Returns -self, treating it as a value of given magnitude.
    /// The provided magnitude must be equal or greater than the actual
    /// magnitude of `self`. Raises the magnitude by 1.
    pub fn negate(&self, magnitude: u32) -> Self {
        Self(self.0.negate(magnitude))
    }

    /// Returns self + rhs mod p.
    /// Sums the magnitudes.
    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0.add(&(rhs.0)))
    }

    /// Returns 2*self.
    /// Doubles the magnitude.
    pub fn double(&self) -> Self {
        Self(self.0.double())
    }

    /// Multiplies by a single-limb integer in `[1, 32]`.
    /// Multiplies the magnitude by the same value.
    pub fn mul_single(&self, rhs: u32) -> Self {
        Self(self.0.mul_single(rhs))
    }

    /// Returns self * rhs mod p.
    /// Brings the magnitude to 1 (but doesn't normalize the result).
    /// The magnitudes of both arguments must be at most 8.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self(self.0.mul(&(rhs.0)))
    }

    /// Returns self * self.
    /// Brings the magnitude to 1 (but doesn't normalize the result).
    /// The magnitude of the argument must be at most 8.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(FieldElementImpl::conditional_select(&(a.0), &(b.0), choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&(other.0))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::add(self, other)
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::add(&self, other)
    }
}

impl AddAssign<FieldElement> for FieldElement {
    fn add_assign(&mut self, rhs: FieldElement) {
        *self = FieldElement::add(self, &rhs);
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::mul(self, other)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::mul(&self, other)
    }
}

impl MulAssign<FieldElement> for FieldElement {
    fn mul_assign(&mut self, rhs: FieldElement) {
        *self = FieldElement::mul(self, &rhs);
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use proptest::prelude::*;
    use subtle::ConstantTimeEq;

    use super::FieldElement;
    use crate::dev::{biguint_to_bytes, bytes_to_biguint, modulus};
    use crate::test_vectors::field::DBL_TEST_VECTORS;

    fn to_biguint(x: &FieldElement) -> BigUint {
        bytes_to_biguint(&x.to_bytes())
    }

    #[test]
    fn zero_is_additive_identity() {
        let zero = FieldElement::ZERO;
        let one = FieldElement::ONE;
        assert_eq!((zero + &zero).normalize(), zero);
        assert_eq!((one + &zero).normalize(), one);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let one = FieldElement::ONE;
        assert_eq!((one * &one).normalize(), one);
    }

    #[test]
    fn from_bytes() {
        assert_eq!(
            FieldElement::from_bytes(&[0; 32]).unwrap(),
            FieldElement::ZERO
        );
        assert_eq!(
            FieldElement::from_bytes(&[
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                0, 0, 0, 0, 1
            ])
            .unwrap(),
            FieldElement::ONE
        );
        assert!(bool::from(FieldElement::from_bytes(&[0xff; 32]).is_none()));
    }

    #[test]
    fn to_bytes() {
        assert_eq!(FieldElement::ZERO.to_bytes(), [0; 32]);
        assert_eq!(
            FieldElement::ONE.to_bytes(),
            [
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                0, 0, 0, 0, 1
            ]
        );
    }

    #[test]
    fn from_u64() {
        assert_eq!(FieldElement::from_u64(0), FieldElement::ZERO);
        assert_eq!(FieldElement::from_u64(1), FieldElement::ONE);
        assert_eq!(
            to_biguint(&FieldElement::from_u64(u64::MAX)),
            BigUint::from(u64::MAX)
        );
    }

    #[test]
    fn repeated_add() {
        let mut r = FieldElement::ONE;
        for item in DBL_TEST_VECTORS {
            assert_eq!(hex::encode(r.to_bytes()), *item);
            r = (r + &r).normalize();
        }
    }

    #[test]
    fn repeated_double() {
        let mut r = FieldElement::ONE;
        for item in DBL_TEST_VECTORS {
            assert_eq!(hex::encode(r.to_bytes()), *item);
            r = r.double().normalize();
        }
    }

    #[test]
    fn repeated_mul() {
        let mut r = FieldElement::ONE;
        let two = FieldElement::from_u64(2);
        for item in DBL_TEST_VECTORS {
            assert_eq!(hex::encode(r.to_bytes()), *item);
            r = (r * &two).normalize();
        }
    }

    #[test]
    fn negation() {
        let two = FieldElement::from_u64(2);
        let neg_two = two.negate(1);
        assert_eq!((two + &neg_two).normalize(), FieldElement::ZERO);
        assert_eq!(neg_two.negate(2).normalize(), two);
    }

    #[test]
    fn negate_one_is_p_minus_one() {
        // p - 1 = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2E
        let neg_one = FieldElement::ONE.negate(1).normalize();
        let expected = biguint_to_bytes(&(modulus() - 1u32));
        assert_eq!(neg_one.to_bytes(), expected);
        assert_eq!(expected[31], 0x2E);
    }

    #[test]
    fn p_minus_one_roundtrips() {
        let bytes = biguint_to_bytes(&(modulus() - 1u32));
        let fe = FieldElement::from_bytes(&bytes).unwrap();
        assert_eq!(fe.normalize().to_bytes(), bytes);
    }

    #[test]
    fn high_limb_reduction() {
        // Drive the top limb to twice its normalized capacity through
        // repeated addition, then check the canonical result.
        let a = FieldElement::from_bytes_unchecked(&biguint_to_bytes(&(modulus() - 1u32)));
        let sum = a + &a;
        let expected = (BigUint::from(2u32) * (modulus() - 1u32)) % modulus();
        assert_eq!(to_biguint(&sum.normalize()), expected);
    }

    #[test]
    fn square_equals_self_multiply() {
        let mut bytes = [0u8; 32];
        bytes[29] = 0x01;
        bytes[30] = 0x02;
        bytes[31] = 0x03;
        let a = FieldElement::from_bytes(&bytes).unwrap();
        assert_eq!(
            a.square().normalize().to_bytes(),
            (a * &a).normalize().to_bytes()
        );
    }

    #[test]
    fn mul_single_equals_repeated_add() {
        let a = FieldElement::from_u64(0xDEADBEEF);
        for k in 1u32..=32 {
            let mut acc = a;
            for _ in 1..k {
                acc = acc + &a;
            }
            assert_eq!(a.mul_single(k).normalize(), acc.normalize());
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let a = FieldElement::from_u64(7).negate(1);
        let once = a.normalize();
        let twice = once.normalize();
        assert_eq!(once.to_words(), twice.to_words());
    }

    #[test]
    fn predicates() {
        assert!(bool::from(FieldElement::ZERO.is_zero()));
        assert!(!bool::from(FieldElement::ONE.is_zero()));
        assert!(bool::from(FieldElement::ZERO.normalizes_to_zero()));
        assert!(bool::from(
            (FieldElement::ONE + &FieldElement::ONE.negate(1)).normalizes_to_zero()
        ));
        assert!(bool::from(FieldElement::ONE.is_odd()));
        assert!(!bool::from(FieldElement::from_u64(2).is_odd()));
    }

    #[test]
    fn equality_requires_normalization_to_agree() {
        let one = FieldElement::ONE;
        let also_one = (one + &FieldElement::from_u64(2).negate(1) + &one + &one).normalize();
        assert!(bool::from(one.ct_eq(&also_one)));
    }

    #[test]
    fn compound_assignment() {
        let a = FieldElement::from_u64(1234567);
        let b = FieldElement::from_u64(7654321);

        let mut sum = a;
        sum += b;
        assert_eq!(sum.normalize(), (a + &b).normalize());

        let mut prod = a;
        prod *= b;
        assert_eq!(prod.normalize(), (a * &b).normalize());

        // rhs aliasing the accumulator
        let mut dbl = a;
        dbl += dbl;
        assert_eq!(dbl.normalize(), a.double().normalize());

        let mut sqr = a;
        sqr *= sqr;
        assert_eq!(sqr.normalize(), a.square().normalize());
    }

    fn field_element() -> impl Strategy<Value = FieldElement> {
        // The top bit of the last word is cleared so the value is always
        // below 2^255 < p and `from_words` cannot fail.
        (
            any::<u64>(),
            any::<u64>(),
            any::<u64>(),
            0u64..0x8000_0000_0000_0000u64,
        )
            .prop_map(|(w0, w1, w2, w3)| FieldElement::from_words([w0, w1, w2, w3]).unwrap())
    }

    proptest! {
        #[test]
        fn add_vs_reference(a in field_element(), b in field_element()) {
            let res = (a + &b).normalize();
            let expected = (to_biguint(&a) + to_biguint(&b)) % modulus();
            prop_assert_eq!(to_biguint(&res), expected);
        }

        #[test]
        fn mul_vs_reference(a in field_element(), b in field_element()) {
            let res = (a * &b).normalize();
            let expected = (to_biguint(&a) * to_biguint(&b)) % modulus();
            prop_assert_eq!(to_biguint(&res), expected);
        }

        #[test]
        fn negate_vs_reference(a in field_element()) {
            let res = a.negate(1).normalize();
            let expected = (modulus() - to_biguint(&a)) % modulus();
            prop_assert_eq!(to_biguint(&res), expected);
        }

        #[test]
        fn square_vs_mul_self(a in field_element()) {
            prop_assert_eq!(a.square().normalize(), (a * &a).normalize());
        }

        #[test]
        fn add_commutes(a in field_element(), b in field_element()) {
            prop_assert_eq!((a + &b).normalize(), (b + &a).normalize());
        }

        #[test]
        fn mul_commutes(a in field_element(), b in field_element()) {
            prop_assert_eq!((a * &b).normalize(), (b * &a).normalize());
        }

        #[test]
        fn add_associates(a in field_element(), b in field_element(), c in field_element()) {
            prop_assert_eq!(
                ((a + &b) + &c).normalize(),
                (a + &(b + &c)).normalize()
            );
        }

        #[test]
        fn mul_associates(a in field_element(), b in field_element(), c in field_element()) {
            prop_assert_eq!(
                ((a * &b) * &c).normalize(),
                (a * &(b * &c)).normalize()
            );
        }

        #[test]
        fn mul_distributes_over_add(a in field_element(), b in field_element(), c in field_element()) {
            prop_assert_eq!(
                (a * &(b + &c)).normalize(),
                ((a * &b) + &(a * &c)).normalize()
            );
        }

        #[test]
        fn bytes_roundtrip(a in field_element()) {
            let bytes = a.to_bytes();
            prop_assert_eq!(
                FieldElement::from_bytes_unchecked(&bytes).normalize().to_bytes(),
                bytes
            );
        }

        #[test]
        fn normalize_idempotent(a in field_element(), b in field_element()) {
            let c = a + &b;
            let once = c.normalize();
            prop_assert_eq!(once.to_words(), once.normalize().to_words());
        }
    }
}
