//! Affine points produced by the map-to-curve routines.

use core::ops::Neg;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::fp::Fp;
use crate::map_to_curve::constants::{B, SSWU_ELLP_A, SSWU_ELLP_B};

/// A point on the 11-isogenous curve E': y^2 = x^3 + A' * x + B'.
///
/// Only ever produced by the simplified SWU map, so it is never the
/// point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IsogenousPoint {
    /// Affine x-coordinate on E'
    pub x: Fp,
    /// Affine y-coordinate on E'
    pub y: Fp,
}

impl IsogenousPoint {
    /// Returns true if this point satisfies the E' curve equation.
    pub fn is_on_curve(&self) -> Choice {
        let rhs = (self.x.square() + SSWU_ELLP_A) * self.x + SSWU_ELLP_B;
        self.y.square().ct_eq(&rhs)
    }
}

/// An affine point on the BLS12-381 G1 curve E: y^2 = x^3 + 4.
///
/// Points returned by [`map_to_curve`](crate::map_to_curve()) are on E but
/// not yet in the prime-order subgroup; see
/// [`ClearCofactor`](crate::ClearCofactor).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CurvePoint {
    /// Affine x-coordinate on E
    pub x: Fp,
    /// Affine y-coordinate on E
    pub y: Fp,
}

impl ConstantTimeEq for CurvePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for CurvePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        CurvePoint {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl<'a> Neg for &'a CurvePoint {
    type Output = CurvePoint;

    #[inline]
    fn neg(self) -> CurvePoint {
        CurvePoint {
            x: self.x,
            y: -self.y,
        }
    }
}

impl Neg for CurvePoint {
    type Output = CurvePoint;

    #[inline]
    fn neg(self) -> CurvePoint {
        -&self
    }
}

impl CurvePoint {
    /// Returns true if this point satisfies the curve equation.
    pub fn is_on_curve(&self) -> Choice {
        // y^2 - x^3 ?= 4
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&B)
    }

    /// Serializes this point as big-endian `x || y`.
    ///
    /// This is the uncompressed G1 encoding used by zkcrypto and the
    /// hash-to-curve test vectors; the three flag bits are always clear
    /// because the point is never the identity.
    pub fn to_uncompressed(&self) -> [u8; 96] {
        let mut res = [0; 96];

        res[0..48].copy_from_slice(&self.x.to_bytes()[..]);
        res[48..96].copy_from_slice(&self.y.to_bytes()[..]);

        res
    }
}

#[test]
fn test_is_on_curve() {
    // (0, 2) lies on y^2 = x^3 + 4
    let p = CurvePoint {
        x: Fp::zero(),
        y: Fp::from(2),
    };
    assert!(bool::from(p.is_on_curve()));
    assert!(bool::from((-p).is_on_curve()));

    // 3^2 != 1 + 4
    let q = CurvePoint {
        x: Fp::one(),
        y: Fp::from(3),
    };
    assert!(!bool::from(q.is_on_curve()));
}

#[test]
fn test_equality_and_selection() {
    let a = CurvePoint {
        x: Fp::zero(),
        y: Fp::from(2),
    };
    let b = -a;

    assert!(bool::from(a.ct_eq(&a)));
    assert!(!bool::from(a.ct_eq(&b)));
    assert!(!bool::from(
        a.ct_eq(&CurvePoint {
            x: Fp::one(),
            y: a.y
        })
    ));

    assert_eq!(CurvePoint::conditional_select(&a, &b, Choice::from(0u8)), a);
    assert_eq!(CurvePoint::conditional_select(&a, &b, Choice::from(1u8)), b);
}

#[test]
fn test_uncompressed_layout() {
    let p = CurvePoint {
        x: Fp::from(1),
        y: Fp::from(2),
    };
    let bytes = p.to_uncompressed();

    assert_eq!(bytes[47], 1);
    assert_eq!(bytes[95], 2);
    assert!(bytes[..47].iter().all(|b| *b == 0));
    assert!(bytes[48..95].iter().all(|b| *b == 0));
}
