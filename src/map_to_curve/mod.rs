//! This module implements map_to_curve for BLS12-381 G1: the simplified SWU
//! map onto the 11-isogenous curve E', followed by the isogeny to E.
//!
//! The result lies on E but not necessarily in G1; callers finish the
//! encoding with cofactor clearing (see [`ClearCofactor`]).

pub(crate) mod constants;
pub use self::constants::H_EFF;

mod iso;
pub use self::iso::{IsogenyMap, ISO11};

mod sswu;
pub use self::sswu::map_to_curve_simple_swu;

use crate::error::Error;
use crate::fp::Fp;
use crate::point::CurvePoint;

/// Allow conversion from field elements to points on the curve
pub trait MapToCurve: Sized {
    /// The field element type consumed by the map
    type FieldElement;

    /// Map an element of the finite field to a point on the curve E
    fn map_to_curve(u: &Self::FieldElement) -> Result<Self, Error>;
}

/// Clear the cofactor, sending a point on curve E to the target group.
///
/// Implemented by a group-law layer on top of this crate. For G1 the
/// effective cofactor is [`H_EFF`]: `clear_cofactor(P) = h_eff * P`.
pub trait ClearCofactor {
    /// The prime-order subgroup element type
    type Output;

    /// Multiply by the effective cofactor
    fn clear_cofactor(&self) -> Self::Output;
}

impl MapToCurve for CurvePoint {
    type FieldElement = Fp;

    fn map_to_curve(u: &Fp) -> Result<CurvePoint, Error> {
        map_to_curve_with(u, &ISO11)
    }
}

/// Maps a field element to a point on E: y^2 = x^3 + 4.
///
/// Deterministic and total over Fp; `u` and `-u` map to negated points.
/// An error only ever reports an arithmetic invariant violation.
pub fn map_to_curve(u: &Fp) -> Result<CurvePoint, Error> {
    CurvePoint::map_to_curve(u)
}

/// Decodes a big-endian integer, reduces it modulo p and maps it to E.
///
/// Any integer of at most 48 bytes is accepted, including values `>= p`.
/// Longer inputs cannot be an element of Fp and are rejected with
/// [`Error::InvalidFieldElement`].
pub fn map_to_curve_bytes(bytes: &[u8]) -> Result<CurvePoint, Error> {
    let u = Fp::from_bytes_reduced(bytes).ok_or(Error::InvalidFieldElement)?;
    map_to_curve(&u)
}

/// Runs the full map with the given isogeny tables.
pub(crate) fn map_to_curve_with(u: &Fp, iso: &IsogenyMap) -> Result<CurvePoint, Error> {
    let p = map_to_curve_simple_swu(u);
    let q = iso.evaluate(&p)?;

    if bool::from(q.is_on_curve()) {
        Ok(q)
    } else {
        Err(Error::NotOnCurve)
    }
}

#[test]
fn test_map_to_curve_expected() {
    let cases = [
        (
            Fp::zero(),
            "1956714e4244749bcdcef542ac99a287d43cb887988b8adabe76cc7d0153351193ea5769ba338d1ac61609ac3d3c8eaf",
            "0acadf436f71189445cf3148db5dd35b045e00de62e7e1b3c25164b5b097f5de804be566f90dbf69fc212c6d23d50639",
        ),
        (
            Fp::one(),
            "12b102f542ad7885a3af5aee959ec74f7995df741908854d631cf5855e7f0cd55fbd265471337c53623a484f4687b99e",
            "0db49b13f7c468aeef6d24c1eda8076baa37eee0ea79b11510f0314a2d76f49b8b69aa1ec83c4ee90c372a17f424df4d",
        ),
        (
            Fp::from(2),
            "0777e130908fbbd27ee308202708d88656808947df9c2c0346cce6ea81fa0b6aea6d0a4dea24c0b4bb6b2eaa8bc21855",
            "0e1f3212738f13579225d72cae5344d578d696b85bd018243468666810f3068be76bc0fa3255435ecd023d608788a912",
        ),
        (
            Fp::from(3),
            "0a5ca92d0dc864eba8a5922d9f45888557b4ac4e01d89485ff54b32c78cd0354e61f57a36eef13eabffb5daaec6a8d71",
            "1509979d297528201544dea6492ed2b9972c99becf6d84b031c5b5c43e20ece9f074e24848c4a071e06691b40839fe9b",
        ),
    ];

    for (u, x, y) in cases.iter() {
        let p = map_to_curve(u).unwrap();
        assert_eq!(p.x, Fp::from_be_hex(x));
        assert_eq!(p.y, Fp::from_be_hex(y));
        assert!(bool::from(p.is_on_curve()));
    }
}

#[test]
fn test_map_to_curve_negation() {
    // u = p - 1 is the negation of u = 1
    let p = map_to_curve(&Fp::one()).unwrap();
    let q = map_to_curve(&-Fp::one()).unwrap();
    assert_eq!(q, -p);
    assert_eq!(
        q.y,
        Fp::from_be_hex(
            "0c4c76d641bb7deb5bae82f455a3a56bba3f5ca4090b61aa5640a156c93a0188934255dfe917b116adc7d5e80bdacb5e"
        )
    );
}

#[test]
fn test_map_to_curve_semirandom() {
    use rand_core::SeedableRng;
    let mut rng = rand_xorshift::XorShiftRng::from_seed([
        0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc,
        0xe5,
    ]);

    for _ in 0..32 {
        let u = Fp::random(&mut rng);
        let p = map_to_curve(&u).unwrap();
        assert!(bool::from(p.is_on_curve()));
        assert_eq!(map_to_curve(&u).unwrap(), p);
        assert_eq!(map_to_curve(&-u).unwrap(), -p);
    }
}

#[test]
fn test_map_to_curve_bytes() {
    let mut bytes = [0u8; 48];
    bytes[47] = 1;
    let one = map_to_curve(&Fp::one()).unwrap();
    assert_eq!(map_to_curve_bytes(&bytes).unwrap(), one);
    assert_eq!(map_to_curve_bytes(&[1]).unwrap(), one);

    // integers >= p are reduced, so p + 1 maps like 1
    let p_plus_one = hex_literal::hex!(
        "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaac"
    );
    assert_eq!(map_to_curve_bytes(&p_plus_one).unwrap(), one);
    assert_eq!(map_to_curve_bytes(&[]).unwrap(), map_to_curve(&Fp::zero()).unwrap());

    let err = map_to_curve_bytes(&[0u8; 49]).unwrap_err();
    assert_eq!(err, Error::InvalidFieldElement);
    assert!(!err.is_fatal());
}

#[test]
fn test_broken_isogeny_is_detected() {
    let u = Fp::from(7);
    assert!(map_to_curve_with(&u, &ISO11).is_ok());

    for (table, &len) in [12, 11, 16, 16].iter().enumerate() {
        for idx in 0..len {
            let mut map = ISO11.clone();
            match table {
                0 => map.xnum[idx] -= Fp::one(),
                1 => map.xden[idx] -= Fp::one(),
                2 => map.ynum[idx] -= Fp::one(),
                _ => map.yden[idx] -= Fp::one(),
            }

            let err = map_to_curve_with(&u, &map).unwrap_err();
            assert!(err.is_fatal());
        }
    }
}
