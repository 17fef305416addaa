//! Curve constants for the simplified SWU map to BLS12-381 G1.
//!
//! Values are the canonical integers from RFC 9380 section 8.8.1 and
//! appendix E.2, converted to Montgomery form at compile time.

use crate::fp::Fp;

/// Coefficient `A'` of the isogenous curve E': y^2 = x^3 + A' * x + B'
pub const SSWU_ELLP_A: Fp = Fp::from_be_hex(
    "00144698a3b8e9433d693a02c96d4982b0ea985383ee66a8d8e8981aefd881ac98936f8da0e0f97f5cf428082d584c1d",
);

/// Coefficient `B'` of the isogenous curve E'
pub const SSWU_ELLP_B: Fp = Fp::from_be_hex(
    "12e2908d11688030018b12e8753eee3b2016c1f0f24f4070a0b9c14fcef35ef55a23215a316ceaa5d1cc48e98e172be0",
);

/// The non-square `Z = 11` used by the SWU map
pub const SSWU_Z: Fp = Fp::from_u64(11);

/// Coefficient `B = 4` of the target curve E: y^2 = x^3 + 4
pub const B: Fp = Fp::from_u64(4);

/// The effective cofactor `h_eff = 1 - z` for G1, where `z` is the
/// BLS parameter `-0xd201000000010000`.
pub const H_EFF: u64 = 0xd201_0000_0001_0001;

/// The constants of the isogenous curve E' consumed by the SWU map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    pub a: Fp,
    pub b: Fp,
    pub z: Fp,
}

impl CurveParams {
    /// Evaluates `g(x) = x^3 + A' * x + B'`.
    #[inline]
    pub fn g(&self, x: &Fp) -> Fp {
        (x.square() + self.a) * x + self.b
    }
}

/// E' parameters for the BLS12-381 G1 suite.
pub const SSWU_PARAMS: CurveParams = CurveParams {
    a: SSWU_ELLP_A,
    b: SSWU_ELLP_B,
    z: SSWU_Z,
};

#[test]
fn test_z_is_nonsquare() {
    assert!(bool::from(SSWU_Z.sqrt().is_none()));
    assert!(bool::from((-SSWU_Z).sqrt().is_some()));
}

#[test]
fn test_g_at_zero_is_b() {
    assert_eq!(SSWU_PARAMS.g(&Fp::zero()), SSWU_ELLP_B);
}

#[test]
fn test_h_eff() {
    const BLS_X: u64 = 0xd201_0000_0001_0000;
    assert_eq!(H_EFF, BLS_X + 1);
}
