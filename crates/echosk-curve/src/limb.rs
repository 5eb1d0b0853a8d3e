//! Shared 4x64-bit limb arithmetic (little-endian limb order).

use std::cmp::Ordering;

/// Add two 256-bit values; returns the sum mod 2^256 and the carry-out bit.
pub(crate) fn add(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let mut out = [0u64; 4];
    let mut carry = 0u64;
    for i in 0..4 {
        let (s, c1) = a[i].overflowing_add(b[i]);
        let (s, c2) = s.overflowing_add(carry);
        out[i] = s;
        carry = u64::from(c1) + u64::from(c2);
    }
    (out, carry)
}

/// Subtract `b` from `a`; returns the difference mod 2^256 and the borrow bit.
pub(crate) fn sub(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let mut out = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (d, b1) = a[i].overflowing_sub(b[i]);
        let (d, b2) = d.overflowing_sub(borrow);
        out[i] = d;
        borrow = u64::from(b1) | u64::from(b2);
    }
    (out, borrow)
}

/// Compare two 256-bit values.
pub(crate) fn cmp(a: &[u64; 4], b: &[u64; 4]) -> Ordering {
    for i in (0..4).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Bit `i` (0 = least significant) of a 256-bit value.
pub(crate) fn bit(a: &[u64; 4], i: usize) -> bool {
    (a[i / 64] >> (i % 64)) & 1 == 1
}

pub(crate) fn is_zero(a: &[u64; 4]) -> bool {
    a.iter().all(|&l| l == 0)
}

/// Schoolbook 256x256 -> 512-bit multiplication.
pub(crate) fn mul_wide(a: &[u64; 4], b: &[u64; 4]) -> [u64; 8] {
    let mut w = [0u64; 8];
    for i in 0..4 {
        let mut carry: u128 = 0;
        for j in 0..4 {
            let t = u128::from(w[i + j]) + u128::from(a[i]) * u128::from(b[j]) + carry;
            w[i + j] = t as u64;
            carry = t >> 64;
        }
        w[i + 4] = carry as u64;
    }
    w
}

/// Parse 32 big-endian bytes into limbs.
pub(crate) fn from_be_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, chunk) in bytes.chunks_exact(8).enumerate() {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        // chunk 0 holds the most significant limb
        limbs[3 - i] = u64::from_be_bytes(buf);
    }
    limbs
}

/// Encode limbs as 32 big-endian bytes.
pub(crate) fn to_be_bytes(limbs: &[u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for i in 0..4 {
        out[i * 8..(i + 1) * 8].copy_from_slice(&limbs[3 - i].to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_carries() {
        let max = [u64::MAX; 4];
        let one = [1, 0, 0, 0];
        let (sum, carry) = add(&max, &one);
        assert_eq!(sum, [0, 0, 0, 0]);
        assert_eq!(carry, 1);
    }

    #[test]
    fn sub_borrows() {
        let zero = [0u64; 4];
        let one = [1, 0, 0, 0];
        let (diff, borrow) = sub(&zero, &one);
        assert_eq!(diff, [u64::MAX; 4]);
        assert_eq!(borrow, 1);
    }

    #[test]
    fn mul_wide_small_values() {
        let a = [3, 0, 0, 0];
        let b = [5, 0, 0, 0];
        let w = mul_wide(&a, &b);
        assert_eq!(w, [15, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn mul_wide_crosses_limbs() {
        let a = [0, 1, 0, 0]; // 2^64
        let b = [0, 0, 1, 0]; // 2^128
        let w = mul_wide(&a, &b);
        assert_eq!(w, [0, 0, 0, 1, 0, 0, 0, 0]); // 2^192
    }

    #[test]
    fn byte_roundtrip() {
        let limbs = [0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210, 7, u64::MAX];
        assert_eq!(from_be_bytes(&to_be_bytes(&limbs)), limbs);
    }

    #[test]
    fn byte_order_is_big_endian() {
        let one = [1u64, 0, 0, 0];
        let bytes = to_be_bytes(&one);
        assert_eq!(bytes[31], 1);
        assert!(bytes[..31].iter().all(|&b| b == 0));
    }

    #[test]
    fn bit_indexing() {
        let v = [0b100, 0, 0, 1];
        assert!(bit(&v, 2));
        assert!(!bit(&v, 3));
        assert!(bit(&v, 192));
    }
}
