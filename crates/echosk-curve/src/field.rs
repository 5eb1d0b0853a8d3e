use std::cmp::Ordering;
use std::fmt;

use crate::error::CurveError;
use crate::limb;

/// The secp256k1 field prime `p = 2^256 - 2^32 - 977`, little-endian limbs.
pub(crate) const P: [u64; 4] = [
    0xFFFF_FFFE_FFFF_FC2F,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// Exponent for Fermat inversion: `p - 2`.
const P_MINUS_TWO: [u64; 4] = [
    0xFFFF_FFFE_FFFF_FC2D,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// `2^256 mod p = 2^32 + 977`. Folding constant for pseudo-Mersenne reduction.
const REDUCTION_C: u128 = 0x1_0000_03D1;
const C_LIMBS: [u64; 4] = [0x1_0000_03D1, 0, 0, 0];

/// An element of the secp256k1 prime field, always held reduced mod `p`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FieldElement([u64; 4]);

impl FieldElement {
    pub const ZERO: Self = Self([0, 0, 0, 0]);
    pub const ONE: Self = Self([1, 0, 0, 0]);
    /// The curve constant `b` in `y^2 = x^3 + b`.
    pub const B: Self = Self([7, 0, 0, 0]);

    /// Construct from limbs known at compile time to be `< p`.
    pub(crate) const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }

    /// Parse 32 big-endian bytes. Fails if the value is not `< p`.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self, CurveError> {
        let limbs = limb::from_be_bytes(bytes);
        if limb::cmp(&limbs, &P) != Ordering::Less {
            return Err(CurveError::NonCanonicalBytes);
        }
        Ok(Self(limbs))
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, CurveError> {
        let bytes = hex::decode(s).map_err(|e| CurveError::InvalidHex(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| CurveError::InvalidHex("expected 32 bytes".into()))?;
        Self::from_be_bytes(&arr)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        limb::to_be_bytes(&self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    pub fn is_zero(&self) -> bool {
        limb::is_zero(&self.0)
    }

    pub fn add(&self, rhs: &Self) -> Self {
        let (sum, carry) = limb::add(&self.0, &rhs.0);
        if carry != 0 {
            // Wrapped past 2^256; 2^256 ≡ C (mod p). The wrapped value is
            // below p - C, so this add cannot carry again.
            let (folded, _) = limb::add(&sum, &C_LIMBS);
            return Self(folded);
        }
        Self(normalize(sum))
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        let (diff, borrow) = limb::sub(&self.0, &rhs.0);
        if borrow != 0 {
            let (wrapped, _) = limb::add(&diff, &P);
            return Self(wrapped);
        }
        Self(diff)
    }

    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let (d, _) = limb::sub(&P, &self.0);
        Self(d)
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        Self(reduce_wide(&limb::mul_wide(&self.0, &rhs.0)))
    }

    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Modular exponentiation by square-and-multiply, MSB first.
    fn pow(&self, exp: &[u64; 4]) -> Self {
        let mut acc = Self::ONE;
        for i in (0..256).rev() {
            acc = acc.square();
            if limb::bit(exp, i) {
                acc = acc.mul(self);
            }
        }
        acc
    }

    /// Modular inverse via Fermat's little theorem: `a^(p-2) mod p`.
    /// Undefined for zero.
    pub fn invert(&self) -> Result<Self, CurveError> {
        if self.is_zero() {
            return Err(CurveError::ZeroInverse);
        }
        Ok(self.pow(&P_MINUS_TWO))
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{})", self.to_hex())
    }
}

/// Reduce a value `< 2^256` into `[0, p)`.
fn normalize(limbs: [u64; 4]) -> [u64; 4] {
    if limb::cmp(&limbs, &P) != Ordering::Less {
        let (d, _) = limb::sub(&limbs, &P);
        return d;
    }
    limbs
}

/// Reduce a 512-bit product mod `p` by folding the high half twice:
/// `hi * 2^256 + lo ≡ hi * C + lo (mod p)` with `C = 2^32 + 977`.
fn reduce_wide(w: &[u64; 8]) -> [u64; 4] {
    // First fold: 512 bits -> at most 290 bits.
    let mut t = [0u64; 5];
    let mut carry: u128 = 0;
    for i in 0..4 {
        let v = u128::from(w[i]) + u128::from(w[i + 4]) * REDUCTION_C + carry;
        t[i] = v as u64;
        carry = v >> 64;
    }
    t[4] = carry as u64;

    // Second fold: the single overflow limb folds into the low two limbs.
    let m = u128::from(t[4]) * REDUCTION_C;
    let mut r = [0u64; 4];
    let mut carry: u128 = m;
    for (i, limb_r) in r.iter_mut().enumerate() {
        let v = u128::from(t[i]) + (carry & u128::from(u64::MAX));
        *limb_r = v as u64;
        carry = (carry >> 64) + (v >> 64);
    }
    if carry != 0 {
        // One final wrap past 2^256; the wrapped value is tiny.
        let (folded, _) = limb::add(&r, &C_LIMBS);
        r = folded;
    }

    normalize(r)
}
