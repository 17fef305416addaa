//! # `bls12_381_sswu`
//!
//! The deterministic map from a BLS12-381 base field element to a point on
//! the G1 curve `E: y^2 = x^3 + 4`, as used by the `BLS12381G1_XMD:SHA-256_SSWU`
//! hash-to-curve suites (RFC 9380 section 8.8.1).
//!
//! The map runs the simplified Shallue-van de Woestijne-Ulas method on the
//! 11-isogenous curve E' and then applies the 11-isogeny to land on E. The
//! output is not yet in the prime-order subgroup; see [`ClearCofactor`].
//!
//! ```
//! use bls12_381_sswu::{map_to_curve, Fp};
//!
//! let p = map_to_curve(&Fp::from(1)).unwrap();
//! assert!(bool::from(p.is_on_curve()));
//! assert_eq!(map_to_curve(&-Fp::from(1)).unwrap(), -p);
//! ```
//!
//! ## Features
//!
//! * `std` (on by default): implements `std::error::Error` for [`Error`].
//! * `zeroize`: implements `DefaultIsZeroes` for [`Fp`].

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]
#![deny(unsafe_code)]
#![allow(clippy::many_single_char_names)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[macro_use]
mod util;

pub mod fp;

mod error;
mod point;

pub mod map_to_curve;

pub use error::Error;
pub use fp::{Fp, FpRepr};
pub use map_to_curve::{
    map_to_curve, map_to_curve_bytes, map_to_curve_simple_swu, ClearCofactor, IsogenyMap,
    MapToCurve, H_EFF, ISO11,
};
pub use point::{CurvePoint, IsogenousPoint};
