//! From-scratch secp256k1 arithmetic for EchoSK.
//!
//! Implements the finite-field and group operations the key-derivation
//! engine needs — modular inversion via Fermat's little theorem, affine
//! point addition and doubling with an explicit point-at-infinity variant,
//! and double-and-add scalar multiplication — over the single fixed curve
//! `y^2 = x^3 + 7` mod `p`.
//!
//! All curve parameters (`p`, `n`, `G`) are compiled-in constants; there is
//! no runtime curve selection and no mutable global state. The field prime
//! `p = 2^256 - 2^32 - 977` is pseudo-Mersenne, so wide products reduce by
//! folding the high half instead of long division.

pub mod error;
pub mod field;
mod limb;
pub mod point;
pub mod scalar;

pub use error::CurveError;
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;

/// Multiply the generator (or any point) by a scalar, reducing the scalar
/// mod the group order first. Free-function form of [`Point::mul`].
pub fn scalar_multiply(k: &Scalar, point: &Point) -> Result<Point, CurveError> {
    point.mul(k)
}
