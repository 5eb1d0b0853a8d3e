use std::cmp::Ordering;
use std::fmt;

use crate::limb;

/// The secp256k1 group order `n`, little-endian limbs.
pub(crate) const N: [u64; 4] = [
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// A scalar multiplier, always held reduced mod the group order `n`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Scalar([u64; 4]);

impl Scalar {
    pub const ZERO: Self = Self([0, 0, 0, 0]);
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// Interpret 32 big-endian bytes as an integer and reduce mod `n`.
    ///
    /// `n > 2^255`, so any 256-bit value is below `2n` and a single
    /// conditional subtraction fully reduces it.
    pub fn from_be_bytes_reduced(bytes: &[u8; 32]) -> Self {
        let mut limbs = limb::from_be_bytes(bytes);
        if limb::cmp(&limbs, &N) != Ordering::Less {
            let (d, _) = limb::sub(&limbs, &N);
            limbs = d;
        }
        Self(limbs)
    }

    /// A small scalar, mainly for tests and known-vector checks.
    pub fn from_u64(v: u64) -> Self {
        Self([v, 0, 0, 0])
    }

    /// The group order `n` as 32 big-endian bytes.
    pub fn order_be_bytes() -> [u8; 32] {
        limb::to_be_bytes(&N)
    }

    pub fn is_zero(&self) -> bool {
        limb::is_zero(&self.0)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        limb::to_be_bytes(&self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// Bit `i` (0 = least significant).
    pub(crate) fn bit(&self, i: usize) -> bool {
        limb::bit(&self.0, i)
    }

    /// Index of the highest set bit, or `None` for zero.
    pub(crate) fn highest_bit(&self) -> Option<usize> {
        (0..256).rev().find(|&i| self.bit(i))
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_value_passes_through() {
        let mut bytes = [0u8; 32];
        bytes[31] = 42;
        let s = Scalar::from_be_bytes_reduced(&bytes);
        assert_eq!(s, Scalar::from_u64(42));
    }

    #[test]
    fn order_reduces_to_zero() {
        let s = Scalar::from_be_bytes_reduced(&Scalar::order_be_bytes());
        assert!(s.is_zero());
    }

    #[test]
    fn order_plus_one_reduces_to_one() {
        let mut limbs = N;
        limbs[0] += 1; // n ends in ...4141, no carry
        let s = Scalar::from_be_bytes_reduced(&limb::to_be_bytes(&limbs));
        assert_eq!(s, Scalar::ONE);
    }

    #[test]
    fn all_ones_reduces_below_order() {
        let s = Scalar::from_be_bytes_reduced(&[0xFF; 32]);
        assert!(limb::cmp(&s.0, &N) == std::cmp::Ordering::Less);
        assert!(!s.is_zero());
    }

    #[test]
    fn highest_bit() {
        assert_eq!(Scalar::ZERO.highest_bit(), None);
        assert_eq!(Scalar::ONE.highest_bit(), Some(0));
        assert_eq!(Scalar::from_u64(0x80).highest_bit(), Some(7));
    }
}
