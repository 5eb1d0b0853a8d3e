use crate::error::CurveError;
use crate::field::FieldElement;
use crate::scalar::Scalar;

/// Generator x-coordinate, little-endian limbs.
const GX: [u64; 4] = [
    0x59F2_815B_16F8_1798,
    0x029B_FCDB_2DCE_28D9,
    0x55A0_6295_CE87_0B07,
    0x79BE_667E_F9DC_BBAC,
];

/// Generator y-coordinate, little-endian limbs.
const GY: [u64; 4] = [
    0x9C47_D08F_FB10_D4B8,
    0xFD17_B448_A685_5419,
    0x5DA4_FBFC_0E11_08A8,
    0x483A_DA77_26A3_C465,
];

/// A point on secp256k1.
///
/// The group identity is the explicit [`Point::Infinity`] variant — never a
/// null-as-zero-point encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    Infinity,
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    /// The fixed base point `G`.
    pub const GENERATOR: Self = Point::Affine {
        x: FieldElement::from_limbs(GX),
        y: FieldElement::from_limbs(GY),
    };

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Affine coordinates, `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Group addition with the full affine case analysis: identity on either
    /// side, doubling when the points coincide, and the vertical case
    /// (`x1 = x2`, `y1 + y2 = 0`) which yields infinity.
    pub fn add(&self, other: &Point) -> Result<Point, CurveError> {
        match (self, other) {
            (Point::Infinity, q) => Ok(q.clone()),
            (p, Point::Infinity) => Ok(p.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                if x1 == x2 {
                    if y1.add(y2).is_zero() {
                        // Vertical chord (or vertical tangent when y = 0).
                        return Ok(Point::Infinity);
                    }
                    return self.double();
                }
                // Chord slope (y2 - y1) / (x2 - x1); x1 != x2 so the
                // inverse exists.
                let lambda = y2.sub(y1).mul(&x2.sub(x1).invert()?);
                let x3 = lambda.square().sub(x1).sub(x2);
                let y3 = lambda.mul(&x1.sub(&x3)).sub(y1);
                Ok(Point::Affine { x: x3, y: y3 })
            }
        }
    }

    /// Point doubling. A point with `y = 0` has a vertical tangent and
    /// doubles to infinity.
    pub fn double(&self) -> Result<Point, CurveError> {
        match self {
            Point::Infinity => Ok(Point::Infinity),
            Point::Affine { x, y } => {
                if y.is_zero() {
                    return Ok(Point::Infinity);
                }
                // Tangent slope 3x^2 / 2y.
                let x_sq = x.square();
                let numer = x_sq.add(&x_sq).add(&x_sq);
                let lambda = numer.mul(&y.add(y).invert()?);
                let x3 = lambda.square().sub(x).sub(x);
                let y3 = lambda.mul(&x.sub(&x3)).sub(y);
                Ok(Point::Affine { x: x3, y: y3 })
            }
        }
    }

    pub fn negate(&self) -> Point {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine { x: *x, y: y.neg() },
        }
    }

    /// Double-and-add scalar multiplication, MSB first. The [`Scalar`] type
    /// guarantees the multiplier is already reduced mod `n`.
    pub fn mul(&self, k: &Scalar) -> Result<Point, CurveError> {
        let Some(top) = k.highest_bit() else {
            return Ok(Point::Infinity);
        };
        if self.is_infinity() {
            return Ok(Point::Infinity);
        }
        let mut acc = Point::Infinity;
        for i in (0..=top).rev() {
            acc = acc.double()?;
            if k.bit(i) {
                acc = acc.add(self)?;
            }
        }
        Ok(acc)
    }

    /// Whether the point satisfies `y^2 = x^3 + 7`. Infinity is on the curve.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let lhs = y.square();
                let rhs = x.square().mul(x).add(&FieldElement::B);
                lhs == rhs
            }
        }
    }

    /// Uncompressed SEC1 encoding: `0x04 || x || y`.
    pub fn to_uncompressed_bytes(&self) -> Result<[u8; 65], CurveError> {
        let (x, y) = self.coordinates().ok_or(CurveError::InfinityEncoding)?;
        let mut out = [0u8; 65];
        out[0] = 0x04;
        out[1..33].copy_from_slice(&x.to_be_bytes());
        out[33..65].copy_from_slice(&y.to_be_bytes());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_minus_one() -> Scalar {
        let mut bytes = Scalar::order_be_bytes();
        bytes[31] -= 1; // n ends in 0x41; no borrow
        Scalar::from_be_bytes_reduced(&bytes)
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(Point::GENERATOR.is_on_curve());
    }

    #[test]
    fn one_times_g_is_g() {
        let p = Point::GENERATOR.mul(&Scalar::ONE).unwrap();
        assert_eq!(p, Point::GENERATOR);
    }

    #[test]
    fn double_matches_published_2g_vector() {
        let two_g = Point::GENERATOR.double().unwrap();
        let (x, y) = two_g.coordinates().unwrap();
        assert_eq!(
            x.to_hex(),
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"
        );
        assert_eq!(
            y.to_hex(),
            "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"
        );
    }

    #[test]
    fn add_and_mul_agree() {
        let g = &Point::GENERATOR;
        let two_g = g.add(g).unwrap();
        assert_eq!(two_g, g.mul(&Scalar::from_u64(2)).unwrap());
        let three_g = two_g.add(g).unwrap();
        assert_eq!(three_g, g.mul(&Scalar::from_u64(3)).unwrap());
        assert!(three_g.is_on_curve());
    }

    #[test]
    fn adding_infinity_is_identity() {
        let g = Point::GENERATOR;
        assert_eq!(g.add(&Point::Infinity).unwrap(), g);
        assert_eq!(Point::Infinity.add(&g).unwrap(), g);
        assert_eq!(
            Point::Infinity.add(&Point::Infinity).unwrap(),
            Point::Infinity
        );
    }

    #[test]
    fn vertical_case_yields_infinity() {
        let g = Point::GENERATOR;
        let neg_g = g.negate();
        assert!(neg_g.is_on_curve());
        assert_eq!(g.add(&neg_g).unwrap(), Point::Infinity);
    }

    #[test]
    fn order_minus_one_times_g_is_negated_g() {
        let p = Point::GENERATOR.mul(&order_minus_one()).unwrap();
        assert_eq!(p, Point::GENERATOR.negate());
        // And one more G closes the cycle at infinity.
        assert_eq!(p.add(&Point::GENERATOR).unwrap(), Point::Infinity);
    }

    #[test]
    fn zero_scalar_yields_infinity() {
        let p = Point::GENERATOR.mul(&Scalar::ZERO).unwrap();
        assert_eq!(p, Point::Infinity);
    }

    #[test]
    fn scalar_multiples_stay_on_curve() {
        for k in [5u64, 17, 1 << 40, u64::MAX] {
            let p = Point::GENERATOR.mul(&Scalar::from_u64(k)).unwrap();
            assert!(p.is_on_curve(), "k = {k}");
        }
    }

    #[test]
    fn uncompressed_encoding_has_sec1_shape() {
        let bytes = Point::GENERATOR.to_uncompressed_bytes().unwrap();
        assert_eq!(bytes[0], 0x04);
        assert_eq!(
            hex::encode(&bytes[1..33]),
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(
            hex::encode(&bytes[33..65]),
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
    }

    #[test]
    fn infinity_has_no_encoding() {
        assert_eq!(
            Point::Infinity.to_uncompressed_bytes().unwrap_err(),
            CurveError::InfinityEncoding
        );
    }
}
