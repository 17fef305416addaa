//! Simplified Shallue-van de Woestijne-Ulas map onto the isogenous curve E'
//! (RFC 9380 section 6.6.2).

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

use super::constants::{CurveParams, SSWU_PARAMS};
use crate::fp::Fp;
use crate::point::IsogenousPoint;

/// One of the two x-coordinates the map can pick, with `g(x)` and its
/// square root candidate.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    x: Fp,
    y: Fp,
    gx: Fp,
}

impl Candidate {
    fn new(x: Fp, params: &CurveParams) -> Self {
        let gx = params.g(&x);
        Candidate {
            x,
            y: gx.sqrt_attempt(),
            gx,
        }
    }

    /// The provider gives no residuosity signal, so check the root by squaring.
    fn is_square(&self) -> Choice {
        self.y.square().ct_eq(&self.gx)
    }
}

impl ConditionallySelectable for Candidate {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Candidate {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            gx: Fp::conditional_select(&a.gx, &b.gx, choice),
        }
    }
}

/// Map from a field element to a point on the curve E-prime
pub fn map_to_curve_simple_swu(u: &Fp) -> IsogenousPoint {
    simple_swu(u, &SSWU_PARAMS).0
}

/// Runs the map with explicit E' parameters, also reporting whether the
/// first candidate `x1` was used.
pub(crate) fn simple_swu(u: &Fp, params: &CurveParams) -> (IsogenousPoint, Choice) {
    let z_usq = params.z * u.square();
    // tv1 = inv0(Z^2 * u^4 + Z * u^2)
    let tv1 = (z_usq.square() + z_usq).invert_or_zero();

    // x1 = (-B / A) * (1 + tv1), or B / (Z * A) when tv1 == 0
    let x1 = -(params.b * params.a.invert_or_zero()) * (Fp::one() + tv1);
    let x1_exceptional = params.b * (params.z * params.a).invert_or_zero();
    let x1 = Fp::conditional_select(&x1, &x1_exceptional, tv1.is_zero());

    let first = Candidate::new(x1, params);
    let gx1_square = first.is_square();
    // x2 = Z * u^2 * x1; g(x2) is square whenever g(x1) is not
    let second = Candidate::new(z_usq * x1, params);

    let chosen = Candidate::conditional_select(&second, &first, gx1_square);

    // ensure sign of y and sign of u agree
    let mut y = chosen.y;
    y.conditional_negate(y.sgn0() ^ u.sgn0());

    (IsogenousPoint { x: chosen.x, y }, gx1_square)
}

#[cfg(test)]
fn isogenous_point(x: &str, y: &str) -> IsogenousPoint {
    IsogenousPoint {
        x: Fp::from_be_hex(x),
        y: Fp::from_be_hex(y),
    }
}

#[test]
fn test_simple_swu_expected() {
    let at_zero = isogenous_point(
        "123939a31626a32de772bc7a591ea140683bca0c62efb105310d5ce1d27d1aadf79a5d5cbe8e2c4ff7d4816af76d2814",
        "05be3446f07e910e291153e84f1dabd3dfe5c2b1080d8b6a640425c3826f2a429373f9bab7e8308f6dd10ffa11124dbc",
    );

    // exceptional case: zero
    let p = map_to_curve_simple_swu(&Fp::zero());
    assert_eq!(p, at_zero);
    assert!(bool::from(p.is_on_curve()));
    // x1 = B / (Z * A)
    assert_eq!(p.x * SSWU_PARAMS.z * SSWU_PARAMS.a, SSWU_PARAMS.b);

    // exceptional case: sqrt(-1/Z) (even)
    let excp = Fp::from_be_hex(
        "01f7462c8b6cbf74db38f4a9a3d71bda12f01df4948d09ff046edbdd403fc31088b69520ee5c57fb7cc51062bde821b8",
    );
    assert_eq!(excp.square() * SSWU_PARAMS.z, -Fp::one());
    let p = map_to_curve_simple_swu(&excp);
    assert_eq!(p, at_zero);

    // exceptional case: sqrt(-1/Z) (odd)
    let excp = -excp;
    let p = map_to_curve_simple_swu(&excp);
    assert_eq!(p.x, at_zero.x);
    assert_eq!(p.y, -at_zero.y);
    assert!(bool::from(p.is_on_curve()));

    let u = Fp::from_be_hex(
        "14f05da1ad4eddc886657cd3fc3d08b52b17303f8af1ec8248c1a8fdff541ebaa79f2ece3390978cd4e2aa3bbf9a8255",
    );
    let (p, gx1_square) = simple_swu(&u, &SSWU_PARAMS);
    assert_eq!(
        p,
        isogenous_point(
            "0028cb75eca3d29ba6c7481df2a5ef040205ffa3de0c6df77a8f1e1ebf68a088d87bd2324cf067d13824cdef60ef9d87",
            "13a33135dfceeda6093406f66818bb9ad4acca3eb74fcd84139396517d3a3b5e3e192a6a4708e64930edc0be85cebbf7",
        )
    );
    assert!(!bool::from(gx1_square));
    assert!(bool::from(p.is_on_curve()));
}

#[test]
fn test_simple_swu_semirandom() {
    use rand_core::SeedableRng;
    let mut rng = rand_xorshift::XorShiftRng::from_seed([
        0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc,
        0xe5,
    ]);

    let mut first_branch = 0;
    let mut second_branch = 0;
    for _ in 0..64 {
        let u = Fp::random(&mut rng);
        let (p, gx1_square) = simple_swu(&u, &SSWU_PARAMS);
        assert!(bool::from(p.is_on_curve()));
        assert_eq!(bool::from(p.y.sgn0()), bool::from(u.sgn0()));

        if bool::from(gx1_square) {
            first_branch += 1;
        } else {
            second_branch += 1;
        }
    }

    assert!(first_branch > 0);
    assert!(second_branch > 0);
}
