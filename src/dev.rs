//! Development helper functions.

use num_bigint::{BigUint, ToBigUint};
use num_traits::cast::ToPrimitive;

/// The field modulus p = 2^256 - 2^32 - 977 as a BigUint.
pub fn modulus() -> BigUint {
    (BigUint::from(1u8) << 256) - (BigUint::from(1u8) << 32) - BigUint::from(977u32)
}

/// Converts a byte array (big-endian) to BigUint.
pub fn bytes_to_biguint(bytes: &[u8; 32]) -> BigUint {
    bytes
        .iter()
        .enumerate()
        .map(|(i, w)| w.to_biguint().unwrap() << ((31 - i) * 8))
        .sum()
}

/// Converts a BigUint to a byte array (big-endian).
pub fn biguint_to_bytes(x: &BigUint) -> [u8; 32] {
    let mask = BigUint::from(u8::MAX);
    let mut bytes = [0u8; 32];
    for (i, b) in bytes.iter_mut().enumerate() {
        let byte: BigUint = (x >> ((31 - i) * 8)) & &mask;
        *b = byte.to_u8().unwrap();
    }
    bytes
}
