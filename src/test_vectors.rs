//! Test vectors for the field arithmetic.

pub mod field;
