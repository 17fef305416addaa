//! Error type

use core::fmt::{self, Display};

/// Failures surfaced by the map-to-curve entry points.
///
/// The mapping itself is total; an error either means the input could not be
/// turned into a field element, or that the arithmetic broke an invariant the
/// construction guarantees. Neither is worth retrying.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input could not be read as a field element: it encodes an
    /// integer wider than 48 bytes.
    InvalidFieldElement,
    /// An isogeny denominator evaluated to zero.
    ZeroDenominator,
    /// The mapped point does not satisfy `y^2 = x^3 + 4`.
    NotOnCurve,
}

impl Error {
    /// Returns true for invariant violations, as opposed to rejected input.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::InvalidFieldElement)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFieldElement => f.write_str("field element encoding exceeds 48 bytes"),
            Error::ZeroDenominator => f.write_str("isogeny denominator is zero"),
            Error::NotOnCurve => f.write_str("mapped point is not on the curve"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[test]
fn test_fatal_classification() {
    use std::string::ToString;

    assert!(!Error::InvalidFieldElement.is_fatal());
    assert!(Error::ZeroDenominator.is_fatal());
    assert!(Error::NotOnCurve.is_fatal());
    assert_eq!(
        Error::NotOnCurve.to_string(),
        "mapped point is not on the curve"
    );
}
