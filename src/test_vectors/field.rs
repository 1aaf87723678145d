//! Field element test vectors.

/// Big-endian hex serializations of the sequence 1, 2, 4, ... (mod p):
/// entry i is the canonical encoding of 2^i mod p. The table runs past
/// 2^255 so that doubling chains cross the modulus and exercise reduction.
pub const DBL_TEST_VECTORS: [&str; 260] = [
    "0000000000000000000000000000000000000000000000000000000000000001",
    "0000000000000000000000000000000000000000000000000000000000000002",
    "0000000000000000000000000000000000000000000000000000000000000004",
    "0000000000000000000000000000000000000000000000000000000000000008",
    "0000000000000000000000000000000000000000000000000000000000000010",
    "0000000000000000000000000000000000000000000000000000000000000020",
    "0000000000000000000000000000000000000000000000000000000000000040",
    "0000000000000000000000000000000000000000000000000000000000000080",
    "0000000000000000000000000000000000000000000000000000000000000100",
    "0000000000000000000000000000000000000000000000000000000000000200",
    "0000000000000000000000000000000000000000000000000000000000000400",
    "0000000000000000000000000000000000000000000000000000000000000800",
    "0000000000000000000000000000000000000000000000000000000000001000",
    "0000000000000000000000000000000000000000000000000000000000002000",
    "0000000000000000000000000000000000000000000000000000000000004000",
    "0000000000000000000000000000000000000000000000000000000000008000",
    "0000000000000000000000000000000000000000000000000000000000010000",
    "0000000000000000000000000000000000000000000000000000000000020000",
    "0000000000000000000000000000000000000000000000000000000000040000",
    "0000000000000000000000000000000000000000000000000000000000080000",
    "0000000000000000000000000000000000000000000000000000000000100000",
    "0000000000000000000000000000000000000000000000000000000000200000",
    "0000000000000000000000000000000000000000000000000000000000400000",
    "0000000000000000000000000000000000000000000000000000000000800000",
    "0000000000000000000000000000000000000000000000000000000001000000",
    "0000000000000000000000000000000000000000000000000000000002000000",
    "0000000000000000000000000000000000000000000000000000000004000000",
    "0000000000000000000000000000000000000000000000000000000008000000",
    "0000000000000000000000000000000000000000000000000000000010000000",
    "0000000000000000000000000000000000000000000000000000000020000000",
    "0000000000000000000000000000000000000000000000000000000040000000",
    "0000000000000000000000000000000000000000000000000000000080000000",
    "0000000000000000000000000000000000000000000000000000000100000000",
    "0000000000000000000000000000000000000000000000000000000200000000",
    "0000000000000000000000000000000000000000000000000000000400000000",
    "0000000000000000000000000000000000000000000000000000000800000000",
    "0000000000000000000000000000000000000000000000000000001000000000",
    "0000000000000000000000000000000000000000000000000000002000000000",
    "0000000000000000000000000000000000000000000000000000004000000000",
    "0000000000000000000000000000000000000000000000000000008000000000",
    "0000000000000000000000000000000000000000000000000000010000000000",
    "0000000000000000000000000000000000000000000000000000020000000000",
    "0000000000000000000000000000000000000000000000000000040000000000",
    "0000000000000000000000000000000000000000000000000000080000000000",
    "0000000000000000000000000000000000000000000000000000100000000000",
    "0000000000000000000000000000000000000000000000000000200000000000",
    "0000000000000000000000000000000000000000000000000000400000000000",
    "0000000000000000000000000000000000000000000000000000800000000000",
    "0000000000000000000000000000000000000000000000000001000000000000",
    "0000000000000000000000000000000000000000000000000002000000000000",
    "0000000000000000000000000000000000000000000000000004000000000000",
    "0000000000000000000000000000000000000000000000000008000000000000",
    "0000000000000000000000000000000000000000000000000010000000000000",
    "0000000000000000000000000000000000000000000000000020000000000000",
    "0000000000000000000000000000000000000000000000000040000000000000",
    "0000000000000000000000000000000000000000000000000080000000000000",
    "0000000000000000000000000000000000000000000000000100000000000000",
    "0000000000000000000000000000000000000000000000000200000000000000",
    "0000000000000000000000000000000000000000000000000400000000000000",
    "0000000000000000000000000000000000000000000000000800000000000000",
    "0000000000000000000000000000000000000000000000001000000000000000",
    "0000000000000000000000000000000000000000000000002000000000000000",
    "0000000000000000000000000000000000000000000000004000000000000000",
    "0000000000000000000000000000000000000000000000008000000000000000",
    "0000000000000000000000000000000000000000000000010000000000000000",
    "0000000000000000000000000000000000000000000000020000000000000000",
    "0000000000000000000000000000000000000000000000040000000000000000",
    "0000000000000000000000000000000000000000000000080000000000000000",
    "0000000000000000000000000000000000000000000000100000000000000000",
    "0000000000000000000000000000000000000000000000200000000000000000",
    "0000000000000000000000000000000000000000000000400000000000000000",
    "0000000000000000000000000000000000000000000000800000000000000000",
    "0000000000000000000000000000000000000000000001000000000000000000",
    "0000000000000000000000000000000000000000000002000000000000000000",
    "0000000000000000000000000000000000000000000004000000000000000000",
    "0000000000000000000000000000000000000000000008000000000000000000",
    "0000000000000000000000000000000000000000000010000000000000000000",
    "0000000000000000000000000000000000000000000020000000000000000000",
    "0000000000000000000000000000000000000000000040000000000000000000",
    "0000000000000000000000000000000000000000000080000000000000000000",
    "0000000000000000000000000000000000000000000100000000000000000000",
    "0000000000000000000000000000000000000000000200000000000000000000",
    "0000000000000000000000000000000000000000000400000000000000000000",
    "0000000000000000000000000000000000000000000800000000000000000000",
    "0000000000000000000000000000000000000000001000000000000000000000",
    "0000000000000000000000000000000000000000002000000000000000000000",
    "0000000000000000000000000000000000000000004000000000000000000000",
    "0000000000000000000000000000000000000000008000000000000000000000",
    "0000000000000000000000000000000000000000010000000000000000000000",
    "0000000000000000000000000000000000000000020000000000000000000000",
    "0000000000000000000000000000000000000000040000000000000000000000",
    "0000000000000000000000000000000000000000080000000000000000000000",
    "0000000000000000000000000000000000000000100000000000000000000000",
    "0000000000000000000000000000000000000000200000000000000000000000",
    "0000000000000000000000000000000000000000400000000000000000000000",
    "0000000000000000000000000000000000000000800000000000000000000000",
    "0000000000000000000000000000000000000001000000000000000000000000",
    "0000000000000000000000000000000000000002000000000000000000000000",
    "0000000000000000000000000000000000000004000000000000000000000000",
    "0000000000000000000000000000000000000008000000000000000000000000",
    "0000000000000000000000000000000000000010000000000000000000000000",
    "0000000000000000000000000000000000000020000000000000000000000000",
    "0000000000000000000000000000000000000040000000000000000000000000",
    "0000000000000000000000000000000000000080000000000000000000000000",
    "0000000000000000000000000000000000000100000000000000000000000000",
    "0000000000000000000000000000000000000200000000000000000000000000",
    "0000000000000000000000000000000000000400000000000000000000000000",
    "0000000000000000000000000000000000000800000000000000000000000000",
    "0000000000000000000000000000000000001000000000000000000000000000",
    "0000000000000000000000000000000000002000000000000000000000000000",
    "0000000000000000000000000000000000004000000000000000000000000000",
    "0000000000000000000000000000000000008000000000000000000000000000",
    "0000000000000000000000000000000000010000000000000000000000000000",
    "0000000000000000000000000000000000020000000000000000000000000000",
    "0000000000000000000000000000000000040000000000000000000000000000",
    "0000000000000000000000000000000000080000000000000000000000000000",
    "0000000000000000000000000000000000100000000000000000000000000000",
    "0000000000000000000000000000000000200000000000000000000000000000",
    "0000000000000000000000000000000000400000000000000000000000000000",
    "0000000000000000000000000000000000800000000000000000000000000000",
    "0000000000000000000000000000000001000000000000000000000000000000",
    "0000000000000000000000000000000002000000000000000000000000000000",
    "0000000000000000000000000000000004000000000000000000000000000000",
    "0000000000000000000000000000000008000000000000000000000000000000",
    "0000000000000000000000000000000010000000000000000000000000000000",
    "0000000000000000000000000000000020000000000000000000000000000000",
    "0000000000000000000000000000000040000000000000000000000000000000",
    "0000000000000000000000000000000080000000000000000000000000000000",
    "0000000000000000000000000000000100000000000000000000000000000000",
    "0000000000000000000000000000000200000000000000000000000000000000",
    "0000000000000000000000000000000400000000000000000000000000000000",
    "0000000000000000000000000000000800000000000000000000000000000000",
    "0000000000000000000000000000001000000000000000000000000000000000",
    "0000000000000000000000000000002000000000000000000000000000000000",
    "0000000000000000000000000000004000000000000000000000000000000000",
    "0000000000000000000000000000008000000000000000000000000000000000",
    "0000000000000000000000000000010000000000000000000000000000000000",
    "0000000000000000000000000000020000000000000000000000000000000000",
    "0000000000000000000000000000040000000000000000000000000000000000",
    "0000000000000000000000000000080000000000000000000000000000000000",
    "0000000000000000000000000000100000000000000000000000000000000000",
    "0000000000000000000000000000200000000000000000000000000000000000",
    "0000000000000000000000000000400000000000000000000000000000000000",
    "0000000000000000000000000000800000000000000000000000000000000000",
    "0000000000000000000000000001000000000000000000000000000000000000",
    "0000000000000000000000000002000000000000000000000000000000000000",
    "0000000000000000000000000004000000000000000000000000000000000000",
    "0000000000000000000000000008000000000000000000000000000000000000",
    "0000000000000000000000000010000000000000000000000000000000000000",
    "0000000000000000000000000020000000000000000000000000000000000000",
    "0000000000000000000000000040000000000000000000000000000000000000",
    "0000000000000000000000000080000000000000000000000000000000000000",
    "0000000000000000000000000100000000000000000000000000000000000000",
    "0000000000000000000000000200000000000000000000000000000000000000",
    "0000000000000000000000000400000000000000000000000000000000000000",
    "0000000000000000000000000800000000000000000000000000000000000000",
    "0000000000000000000000001000000000000000000000000000000000000000",
    "0000000000000000000000002000000000000000000000000000000000000000",
    "0000000000000000000000004000000000000000000000000000000000000000",
    "0000000000000000000000008000000000000000000000000000000000000000",
    "0000000000000000000000010000000000000000000000000000000000000000",
    "0000000000000000000000020000000000000000000000000000000000000000",
    "0000000000000000000000040000000000000000000000000000000000000000",
    "0000000000000000000000080000000000000000000000000000000000000000",
    "0000000000000000000000100000000000000000000000000000000000000000",
    "0000000000000000000000200000000000000000000000000000000000000000",
    "0000000000000000000000400000000000000000000000000000000000000000",
    "0000000000000000000000800000000000000000000000000000000000000000",
    "0000000000000000000001000000000000000000000000000000000000000000",
    "0000000000000000000002000000000000000000000000000000000000000000",
    "0000000000000000000004000000000000000000000000000000000000000000",
    "0000000000000000000008000000000000000000000000000000000000000000",
    "0000000000000000000010000000000000000000000000000000000000000000",
    "0000000000000000000020000000000000000000000000000000000000000000",
    "0000000000000000000040000000000000000000000000000000000000000000",
    "0000000000000000000080000000000000000000000000000000000000000000",
    "0000000000000000000100000000000000000000000000000000000000000000",
    "0000000000000000000200000000000000000000000000000000000000000000",
    "0000000000000000000400000000000000000000000000000000000000000000",
    "0000000000000000000800000000000000000000000000000000000000000000",
    "0000000000000000001000000000000000000000000000000000000000000000",
    "0000000000000000002000000000000000000000000000000000000000000000",
    "0000000000000000004000000000000000000000000000000000000000000000",
    "0000000000000000008000000000000000000000000000000000000000000000",
    "0000000000000000010000000000000000000000000000000000000000000000",
    "0000000000000000020000000000000000000000000000000000000000000000",
    "0000000000000000040000000000000000000000000000000000000000000000",
    "0000000000000000080000000000000000000000000000000000000000000000",
    "0000000000000000100000000000000000000000000000000000000000000000",
    "0000000000000000200000000000000000000000000000000000000000000000",
    "0000000000000000400000000000000000000000000000000000000000000000",
    "0000000000000000800000000000000000000000000000000000000000000000",
    "0000000000000001000000000000000000000000000000000000000000000000",
    "0000000000000002000000000000000000000000000000000000000000000000",
    "0000000000000004000000000000000000000000000000000000000000000000",
    "0000000000000008000000000000000000000000000000000000000000000000",
    "0000000000000010000000000000000000000000000000000000000000000000",
    "0000000000000020000000000000000000000000000000000000000000000000",
    "0000000000000040000000000000000000000000000000000000000000000000",
    "0000000000000080000000000000000000000000000000000000000000000000",
    "0000000000000100000000000000000000000000000000000000000000000000",
    "0000000000000200000000000000000000000000000000000000000000000000",
    "0000000000000400000000000000000000000000000000000000000000000000",
    "0000000000000800000000000000000000000000000000000000000000000000",
    "0000000000001000000000000000000000000000000000000000000000000000",
    "0000000000002000000000000000000000000000000000000000000000000000",
    "0000000000004000000000000000000000000000000000000000000000000000",
    "0000000000008000000000000000000000000000000000000000000000000000",
    "0000000000010000000000000000000000000000000000000000000000000000",
    "0000000000020000000000000000000000000000000000000000000000000000",
    "0000000000040000000000000000000000000000000000000000000000000000",
    "0000000000080000000000000000000000000000000000000000000000000000",
    "0000000000100000000000000000000000000000000000000000000000000000",
    "0000000000200000000000000000000000000000000000000000000000000000",
    "0000000000400000000000000000000000000000000000000000000000000000",
    "0000000000800000000000000000000000000000000000000000000000000000",
    "0000000001000000000000000000000000000000000000000000000000000000",
    "0000000002000000000000000000000000000000000000000000000000000000",
    "0000000004000000000000000000000000000000000000000000000000000000",
    "0000000008000000000000000000000000000000000000000000000000000000",
    "0000000010000000000000000000000000000000000000000000000000000000",
    "0000000020000000000000000000000000000000000000000000000000000000",
    "0000000040000000000000000000000000000000000000000000000000000000",
    "0000000080000000000000000000000000000000000000000000000000000000",
    "0000000100000000000000000000000000000000000000000000000000000000",
    "0000000200000000000000000000000000000000000000000000000000000000",
    "0000000400000000000000000000000000000000000000000000000000000000",
    "0000000800000000000000000000000000000000000000000000000000000000",
    "0000001000000000000000000000000000000000000000000000000000000000",
    "0000002000000000000000000000000000000000000000000000000000000000",
    "0000004000000000000000000000000000000000000000000000000000000000",
    "0000008000000000000000000000000000000000000000000000000000000000",
    "0000010000000000000000000000000000000000000000000000000000000000",
    "0000020000000000000000000000000000000000000000000000000000000000",
    "0000040000000000000000000000000000000000000000000000000000000000",
    "0000080000000000000000000000000000000000000000000000000000000000",
    "0000100000000000000000000000000000000000000000000000000000000000",
    "0000200000000000000000000000000000000000000000000000000000000000",
    "0000400000000000000000000000000000000000000000000000000000000000",
    "0000800000000000000000000000000000000000000000000000000000000000",
    "0001000000000000000000000000000000000000000000000000000000000000",
    "0002000000000000000000000000000000000000000000000000000000000000",
    "0004000000000000000000000000000000000000000000000000000000000000",
    "0008000000000000000000000000000000000000000000000000000000000000",
    "0010000000000000000000000000000000000000000000000000000000000000",
    "0020000000000000000000000000000000000000000000000000000000000000",
    "0040000000000000000000000000000000000000000000000000000000000000",
    "0080000000000000000000000000000000000000000000000000000000000000",
    "0100000000000000000000000000000000000000000000000000000000000000",
    "0200000000000000000000000000000000000000000000000000000000000000",
    "0400000000000000000000000000000000000000000000000000000000000000",
    "0800000000000000000000000000000000000000000000000000000000000000",
    "1000000000000000000000000000000000000000000000000000000000000000",
    "2000000000000000000000000000000000000000000000000000000000000000",
    "4000000000000000000000000000000000000000000000000000000000000000",
    "8000000000000000000000000000000000000000000000000000000000000000",
    "00000000000000000000000000000000000000000000000000000001000003d1",
    "00000000000000000000000000000000000000000000000000000002000007a2",
    "0000000000000000000000000000000000000000000000000000000400000f44",
    "0000000000000000000000000000000000000000000000000000000800001e88",
];
