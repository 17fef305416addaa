//! This module provides an implementation of the BLS12-381 base field `GF(p)`
//! where `p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab`
//!
//! It is the arithmetic provider for the map-to-curve routines: everything
//! the mapping needs (`inv0`, a square root candidate, `sgn0`, canonical
//! encodings) lives here, and nothing else in the crate touches limbs.

use core::borrow::Borrow;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crypto_bigint::{Encoding, Limb, U384};
use ff::{Field, PrimeField};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::util::{mont_mul, mont_pow_vartime, reduction_inv, try_sub};

// The internal representation of this type is a 384-bit unsigned integer.
// `Fp` values are always in Montgomery form; i.e., Fp(a) = aR mod p,
// with R = 2^384.
#[derive(Copy, Clone, Eq)]
#[repr(transparent)]
pub struct Fp(pub(crate) U384);

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp(U384::conditional_select(&a.0, &b.0, choice))
    }
}

/// Constant representing the modulus (p)
const MODULUS: U384 = U384::from_be_hex(
    "1a0111ea397fe69a\
     4b1ba7b6434bacd7\
     64774b84f38512bf\
     6730d2a0f6b0f624\
     1eabfffeb153ffff\
     b9feffffffffaaab",
);

/// INV = -(p^{-1} mod 2^64) mod 2^64
const INV: Limb = reduction_inv(&MODULUS);

/// R = 2^384 mod p
const R: U384 = U384::from_be_hex(
    "15f65ec3fa80e493\
     5c071a97a256ec6d\
     77ce585370525745\
     5f48985753c758ba\
     ebf4000bc40c0002\
     760900000002fffd",
);

/// R2 = 2^(384*2) mod p
const R2: U384 = U384::from_be_hex(
    "11988fe592cae3aa\
     9a793e85b519952d\
     67eb88a9939d83c0\
     8de5476c4c95b6d5\
     0a76e6a609d104f1\
     f4df1f341c341746",
);

/// R3 = 2^(384*3) mod p
const R3: U384 = U384::from_be_hex(
    "0aa6346091755d4d\
     2512d43565724728\
     34c04e5e921e1761\
     9a53352a615e29dd\
     315f831e03a7adf8\
     ed48ac6bd94ca1e0",
);

/// (p + 1) / 4, the square root exponent for p = 3 (mod 4)
const SQRT_EXP: U384 = U384::from_be_hex(
    "0680447a8e5ff9a6\
     92c6e9ed90d2eb35\
     d91dd2e13ce144af\
     d9cc34a83dac3d89\
     07aaffffac54ffff\
     ee7fbfffffffeaab",
);

/// p - 2, the inversion exponent
const INVERT_EXP: U384 = U384::from_be_hex(
    "1a0111ea397fe69a\
     4b1ba7b6434bacd7\
     64774b84f38512bf\
     6730d2a0f6b0f624\
     1eabfffeb153ffff\
     b9feffffffffaaa9",
);

impl<'a> Neg for &'a Fp {
    type Output = Fp;

    #[inline]
    fn neg(self) -> Fp {
        self.neg()
    }
}

impl Neg for Fp {
    type Output = Fp;

    #[inline]
    fn neg(self) -> Fp {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp, Fp);
impl_binops_multiplicative!(Fp, Fp);

impl<T> Sum<T> for Fp
where
    T: Borrow<Fp>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::zero(), |acc, item| acc + item.borrow())
    }
}

impl<T> Product<T> for Fp
where
    T: Borrow<Fp>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::one(), |acc, item| acc * item.borrow())
    }
}

impl From<u64> for Fp {
    fn from(val: u64) -> Fp {
        Fp::from_u64(val)
    }
}

impl Fp {
    /// Returns zero, the additive identity.
    #[inline]
    pub const fn zero() -> Fp {
        Fp(U384::ZERO)
    }

    /// Returns one, the multiplicative identity.
    #[inline]
    pub const fn one() -> Fp {
        Fp(R)
    }

    /// Returns true if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Converts a small integer into an `Fp`. Usable in const context.
    pub const fn from_u64(val: u64) -> Fp {
        Fp::from_canonical(&U384::from_u64(val))
    }

    /// Attempts to convert a big-endian byte representation of
    /// a field element into an `Fp`, failing if the input is not canonical.
    pub fn from_bytes(bytes: &[u8; 48]) -> CtOption<Fp> {
        let uint = U384::from_be_bytes(*bytes);

        // Is the value smaller than the modulus?
        let (_, borrow) = uint.sbb(&MODULUS, Limb::ZERO);
        let is_some = Choice::from((borrow.0 & 1) as u8);

        CtOption::new(Fp::from_canonical(&uint), is_some)
    }

    /// Converts a big-endian integer of up to 48 bytes into an `Fp`,
    /// reducing it modulo p.
    ///
    /// Returns `None` only when `bytes` is longer than 48 bytes.
    pub fn from_bytes_reduced(bytes: &[u8]) -> Option<Fp> {
        if bytes.len() > 48 {
            return None;
        }

        // Zero-extend into the low half of a wide little-endian integer.
        let mut wide = [0u8; 96];
        for (dst, src) in wide.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        Some(Fp::from_bytes_wide(&wide))
    }

    /// Converts an element of `Fp` into a byte representation in
    /// big-endian byte order.
    pub fn to_bytes(self) -> [u8; 48] {
        self.to_canonical().to_be_bytes()
    }

    /// Reduces a 768-bit little-endian integer modulo p.
    pub fn from_bytes_wide(bytes: &[u8; 96]) -> Fp {
        let lo = U384::from_le_slice(&bytes[..48]);
        let hi = U384::from_le_slice(&bytes[48..]);

        // The lower bits are multiplied by `R^2`, as normal.
        // The upper bits are multiplied by `R^2 * 2^384 = R^3`.
        let lo = Fp(mont_mul(&lo, &R2, &MODULUS, INV));
        let hi = Fp(mont_mul(&hi, &R3, &MODULUS, INV));
        Fp::add(&lo, &hi)
    }

    /// Parses a canonical 96-digit big-endian hex string, as printed in
    /// RFC 9380.
    ///
    /// Meant for constants and test vectors. Panics if the string is not
    /// exactly 96 hex digits or encodes an integer `>= p`; in const context
    /// the panic is a compile error.
    pub(crate) const fn from_be_hex(hex: &str) -> Fp {
        let uint = U384::from_be_hex(hex);
        let (_, borrow) = uint.sbb(&MODULUS, Limb::ZERO);
        if borrow.0 == 0 {
            panic!("hex literal is not reduced modulo p");
        }
        Fp::from_canonical(&uint)
    }

    /// Constructs an element of `Fp` from its Montgomery form without
    /// checking that it is canonical.
    ///
    /// **This operation is unsafe**: an unreduced value breaks every
    /// arithmetic invariant of the type.
    pub const fn from_raw_unchecked(v: U384) -> Fp {
        Fp(v)
    }

    /// Converts a canonical integer below p into Montgomery form by computing
    /// (a.R^0 * R^2) / R = a.R
    #[inline]
    const fn from_canonical(uint: &U384) -> Fp {
        Fp(mont_mul(uint, &R2, &MODULUS, INV))
    }

    /// Returns the canonical (non-Montgomery) integer.
    #[inline]
    pub(crate) const fn to_canonical(self) -> U384 {
        mont_mul(&self.0, &U384::ONE, &MODULUS, INV)
    }

    pub(crate) fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 96];
        rng.fill_bytes(&mut bytes);
        Fp::from_bytes_wide(&bytes)
    }

    /// Returns the `sgn0` of this element: the parity of its canonical
    /// integer representative.
    #[inline]
    pub fn sgn0(&self) -> Choice {
        Choice::from((self.to_canonical().limbs()[0].0 & 1) as u8)
    }

    /// Although this is labeled "vartime", it is only
    /// variable time with respect to the exponent.
    pub const fn pow_vartime(&self, by: &U384) -> Self {
        Fp(mont_pow_vartime(&self.0, by, &R, &MODULUS, INV))
    }

    /// Returns a square root candidate, `self^((p + 1) / 4)`.
    ///
    /// The result is only a square root when `self` is a quadratic residue;
    /// callers decide that by squaring the candidate.
    #[inline]
    pub fn sqrt_attempt(&self) -> Self {
        self.pow_vartime(&SQRT_EXP)
    }

    /// Computes the square root of this element, if it exists.
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        let sqrt = self.sqrt_attempt();
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Computes the multiplicative inverse of this field
    /// element, returning None in the case that this element
    /// is zero.
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.invert_or_zero(), !self.is_zero())
    }

    /// `inv0` from RFC 9380: the inverse of a nonzero element, and zero for zero.
    #[inline]
    pub fn invert_or_zero(&self) -> Self {
        // 0^(p - 2) = 0, so exponentiation already has the required behaviour.
        self.pow_vartime(&INVERT_EXP)
    }

    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        // Both operands are below p < 2^383, so the sum never carries out.
        let (sum, _) = self.0.adc(&rhs.0, Limb::ZERO);
        Fp(try_sub(&sum, &MODULUS))
    }

    #[inline]
    pub const fn neg(&self) -> Fp {
        let (diff, _) = MODULUS.sbb(&self.0, Limb::ZERO);

        // Let's use a mask if `self` was zero, which would mean
        // the result of the subtraction is p.
        let limbs = self.0.limbs();
        let mut nonzero = 0;
        let mut i = 0;
        while i < U384::LIMBS {
            nonzero |= limbs[i].0;
            i += 1;
        }
        let mask = ((nonzero == 0) as crypto_bigint::Word).wrapping_sub(1);

        let diff = diff.limbs();
        let mut res = [Limb::ZERO; U384::LIMBS];
        let mut i = 0;
        while i < U384::LIMBS {
            res[i] = Limb(diff[i].0 & mask);
            i += 1;
        }

        Fp(U384::new(res))
    }

    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        self.add(&rhs.neg())
    }

    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        Fp(mont_mul(&self.0, &rhs.0, &MODULUS, INV))
    }

    /// Squares this element.
    #[inline]
    pub const fn square(&self) -> Self {
        self.mul(self)
    }

    /// Doubles this element.
    #[inline]
    pub const fn double(&self) -> Self {
        self.add(self)
    }
}

/// Big-endian canonical encoding of an [`Fp`], used as its `PrimeField::Repr`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FpRepr(pub [u8; 48]);

impl Default for FpRepr {
    fn default() -> Self {
        FpRepr([0u8; 48])
    }
}

impl AsRef<[u8]> for FpRepr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for FpRepr {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl Field for Fp {
    const ZERO: Self = Fp::zero();
    const ONE: Self = Fp::one();

    fn random(rng: impl RngCore) -> Self {
        Fp::random(rng)
    }

    #[must_use]
    fn square(&self) -> Self {
        self.square()
    }

    #[must_use]
    fn double(&self) -> Self {
        self.double()
    }

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }

    fn sqrt(&self) -> CtOption<Self> {
        self.sqrt()
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        // p = 3 (mod 4), so ROOT_OF_UNITY = -1 and exactly one of
        // num/div and -num/div is a square when num/div is nonzero.
        let a = div.invert_or_zero() * num;
        let b = -a;
        let sqrt_a = a.sqrt_attempt();
        let sqrt_b = b.sqrt_attempt();

        let a_is_square = sqrt_a.square().ct_eq(&a);
        let is_square = a_is_square & (num.is_zero() | !div.is_zero());

        (is_square, Fp::conditional_select(&sqrt_b, &sqrt_a, a_is_square))
    }
}

impl PrimeField for Fp {
    type Repr = FpRepr;

    fn from_repr(r: Self::Repr) -> CtOption<Self> {
        Self::from_bytes(&r.0)
    }

    fn to_repr(&self) -> Self::Repr {
        FpRepr(self.to_bytes())
    }

    fn is_odd(&self) -> Choice {
        self.sgn0()
    }

    const MODULUS: &'static str = "0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";
    const NUM_BITS: u32 = 381;
    const CAPACITY: u32 = Self::NUM_BITS - 1;
    const TWO_INV: Self = Fp::from_be_hex(
        "0d0088f51cbff34d258dd3db21a5d66bb23ba5c279c2895fb39869507b587b120f55ffff58a9ffffdcff7fffffffd556",
    );
    const MULTIPLICATIVE_GENERATOR: Self = Fp::from_u64(2);
    const S: u32 = 1;
    const ROOT_OF_UNITY: Self = Fp::neg(&Fp::one());
    const ROOT_OF_UNITY_INV: Self = Fp::neg(&Fp::one());
    const DELTA: Self = Fp::from_u64(4);
}

#[test]
fn test_inv() {
    // Compute -(p^{-1} mod 2^64) mod 2^64 by exponentiating
    // by totient(2**64) - 1

    let mut inv = Limb::ONE;
    for _ in 0..Limb::BIT_SIZE - 1 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(MODULUS.limbs()[0]);
    }
    inv = Limb(inv.0.wrapping_neg());

    assert_eq!(inv, INV);
}

#[test]
fn test_montgomery_constants() {
    assert_eq!(Fp::from(1), Fp::one());
    assert_eq!(Fp::from_u64(1), Fp::one());
    assert_eq!(Fp::one().to_canonical(), U384::ONE);
    // R2 in Montgomery form is R3
    assert_eq!(Fp(R2).mul(&Fp(R2)), Fp(R3));
}

#[test]
fn test_conditional_selection() {
    let a = Fp::from(11);
    let b = Fp::from(13);

    assert_eq!(Fp::conditional_select(&a, &b, Choice::from(0u8)), a);
    assert_eq!(Fp::conditional_select(&a, &b, Choice::from(1u8)), b);
}

#[test]
fn test_equality() {
    let a = Fp::from_raw_unchecked(U384::from_u64(0x0102_0304));
    let b = Fp::from_raw_unchecked(U384::from_u64(0x0102_0304).shl_vartime(320));

    assert!(a != b);
    assert!(!bool::from(a.ct_eq(&b)));
    assert_eq!(a, Fp::from_raw_unchecked(U384::from_u64(0x0102_0304)));
}

#[test]
fn test_from_be_hex_matches_montgomery_form() {
    let raw = Fp::from_raw_unchecked(U384::from_be_hex(
        "115a2a5489babe5bc32365c5e73f474acdb21f93078dbb3e5c5b5071ce4f4dcf7dd275ae799e128e5360bb5978678032",
    ));
    let hex = Fp::from_be_hex(
        "104bf052ad3bc99bcb176c24a06a6c3aad4eaf2308fc4d282e106c84a757d061052630515305e59bdddf8111bfdeb704",
    );
    assert_eq!(raw, hex);
}

#[test]
fn test_squaring() {
    let a = Fp::from_be_hex(
        "005cedc8dbe777f63890282d1c1b2d3c3f00a704bdd507f219fb2345b2c981816c39680792c19eada7b743c2f9d5fd77",
    );
    let b = Fp::from_be_hex(
        "14292f4416d203d83ba0bbdfb2d8a2aa4d28a8f05f0870d9a77196cc2bd24bf9b06c5d1c46bca407c4a6185aae808959",
    );

    assert_eq!(a.square(), b);
}

#[test]
fn test_multiplication() {
    let a = Fp::from_be_hex(
        "1254a406f08c6978ff8235b819d7c2dc2f20a5210d486a3330eb856957a1aa5d07432b90669ebc88888d5cee8d8fce43",
    );
    let b = Fp::from_be_hex(
        "033301683e94505ce72df95a03df715a39e4f10db53df4c3ef20850f81f4ec3c8e4dd269d33fb95f47e13f8e54a495ea",
    );
    let c = Fp::from_be_hex(
        "027191460df9d8ff6e5e657a1c4c3ebf2ca4dd706ef8ecd289749fc04ed5e710bbf203be02019f9be35391700a68680f",
    );

    assert_eq!(a * b, c);
    assert_eq!(b * a, c);
}

#[test]
fn test_addition_and_subtraction() {
    let a = Fp::from_be_hex(
        "104bf052ad3bc99bcb176c24a06a6c3aad4eaf2308fc4d282e106c84a757d061052630515305e59bdddf8111bfdeb704",
    );
    let b = Fp::from_be_hex(
        "12b5621fb67239efef4531c602935e8c6d62d28368942b7fcf27b47a5809a390c9539259bda4d957b6a21594e68abbb2",
    );

    assert_eq!(
        a + b,
        Fp::from_be_hex(
            "090040882a2e1cf16f40f6345fb21defb63a36217e0b65e896074e5e08b07dcdafcdc2ac5f56bef3da8296a6a669c80b"
        )
    );
    assert_eq!(
        a - b,
        Fp::from_be_hex(
            "1797a01d3049764626ede214e122ba85a463282493ed3467c6198aab45ff22f45a7e9df646b50c43e13c6b7cd953a5fd"
        )
    );
    assert_eq!(a - a, Fp::zero());
}

#[test]
fn test_negation() {
    let a = Fp::from_be_hex(
        "104bf052ad3bc99bcb176c24a06a6c3aad4eaf2308fc4d282e106c84a757d061052630515305e59bdddf8111bfdeb704",
    );
    let b = Fp::from_be_hex(
        "09b521978c441cfe80043b91a2e1409cb7289c61ea88c5973920661c4f5925c31985cfad5e4e1a63dc1f7eee4020f3a7",
    );

    assert_eq!(-a, b);
    assert_eq!(-Fp::zero(), Fp::zero());
}

#[test]
fn test_debug() {
    assert_eq!(
        format!("{:?}", Fp::from(0x1234)),
        "0x000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001234"
    );
}

#[test]
fn test_from_bytes() {
    let mut a = Fp::from(0xdead_beef);

    for _ in 0..100 {
        a = a.square();
        let tmp = a.to_bytes();
        let b = Fp::from_bytes(&tmp).unwrap();

        assert_eq!(a, b);
    }

    // p - 1
    assert_eq!(
        -Fp::one(),
        Fp::from_bytes(&hex_literal::hex!(
            "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"
        ))
        .unwrap()
    );

    // p itself is not canonical
    assert!(bool::from(
        Fp::from_bytes(&hex_literal::hex!(
            "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab"
        ))
        .is_none()
    ));

    assert!(bool::from(Fp::from_bytes(&[0xff; 48]).is_none()));
}

#[test]
fn test_from_bytes_wide() {
    let mut bytes = [0u8; 96];
    bytes[0] = 5;
    assert_eq!(Fp::from_bytes_wide(&bytes), Fp::from(5));

    // 2^384 = R
    let mut bytes = [0u8; 96];
    bytes[48] = 1;
    assert_eq!(Fp::from_bytes_wide(&bytes), Fp(R).mul(&Fp(R2)));

    // 2^768 - 1 reduces to R2 - 1
    assert_eq!(
        Fp::from_bytes_wide(&[0xff; 96]),
        Fp(R2).mul(&Fp(R2)) - Fp::one()
    );
}

#[test]
fn test_from_bytes_reduced() {
    assert_eq!(Fp::from_bytes_reduced(&[]), Some(Fp::zero()));
    assert_eq!(Fp::from_bytes_reduced(&[0x12, 0x34]), Some(Fp::from(0x1234)));

    // p + 1 wraps around to one
    let p_plus_one = hex_literal::hex!(
        "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaac"
    );
    assert_eq!(Fp::from_bytes_reduced(&p_plus_one), Some(Fp::one()));

    // 2^384 - 1 = R - 1
    assert_eq!(
        Fp::from_bytes_reduced(&[0xff; 48]),
        Some(Fp(R).mul(&Fp(R2)) - Fp::one())
    );

    assert_eq!(Fp::from_bytes_reduced(&[0u8; 49]), None);
}

#[test]
fn test_sqrt() {
    let four = Fp::from(4);
    let two = Fp::from(2);
    let root = four.sqrt().unwrap();

    assert!(root == two || root == -two);
    assert_eq!(four.sqrt_attempt().square(), four);

    // p = 3 (mod 8), so 2 is a non-residue and the attempt does not verify.
    assert!(bool::from(two.sqrt().is_none()));
    assert!(two.sqrt_attempt().square() != two);
}

#[test]
fn test_sqrt_ratio() {
    let (is_square, root) = Fp::sqrt_ratio(&Fp::from(8), &Fp::from(2));
    assert!(bool::from(is_square));
    assert_eq!(root.square(), Fp::from(4));

    let (is_square, root) = Fp::sqrt_ratio(&Fp::from(2), &Fp::one());
    assert!(!bool::from(is_square));
    assert_eq!(root.square(), -Fp::from(2));

    let (is_square, root) = Fp::sqrt_ratio(&Fp::one(), &Fp::zero());
    assert!(!bool::from(is_square));
    assert_eq!(root, Fp::zero());

    let (is_square, root) = Fp::sqrt_ratio(&Fp::zero(), &Fp::zero());
    assert!(bool::from(is_square));
    assert_eq!(root, Fp::zero());
}

#[test]
fn test_inversion() {
    let a = Fp::from_be_hex(
        "135dc396cc7c6cad6aa54253bc83c32c86ef95bb71957b80fe4a153eb6bc11214787d42f3e3b9358ccd7a153b15ea042",
    );
    let b = Fp::from_be_hex(
        "07f2e4347edee1da2979af3da154bbda03c261e839b037e9f47392df17742778a20841b53cc59c4c328d4804b6cb4c21",
    );

    assert_eq!(a.invert().unwrap(), b);
    assert_eq!(a * b, Fp::one());
    assert!(bool::from(Fp::zero().invert().is_none()));
    assert_eq!(Fp::zero().invert_or_zero(), Fp::zero());
}

#[test]
fn test_sgn0() {
    assert!(!bool::from(Fp::zero().sgn0()));
    assert!(bool::from(Fp::one().sgn0()));
    assert!(!bool::from(Fp::from(2).sgn0()));
    // p - 1 is even
    assert!(!bool::from((-Fp::one()).sgn0()));
    // p - 2 is odd
    assert!(bool::from((-Fp::from(2)).sgn0()));
}

#[test]
fn test_prime_field_constants() {
    assert_eq!(Fp::TWO_INV.double(), Fp::one());
    assert_eq!(Fp::ROOT_OF_UNITY.square(), Fp::one());
    assert_eq!(Fp::ROOT_OF_UNITY * Fp::ROOT_OF_UNITY_INV, Fp::one());
    assert_eq!(Fp::DELTA, Fp::MULTIPLICATIVE_GENERATOR.square());
    assert!(bool::from(Fp::MULTIPLICATIVE_GENERATOR.sqrt().is_none()));

    let repr = Fp::from(7).to_repr();
    assert_eq!(repr.0[47], 7);
    assert_eq!(Fp::from_repr(repr).unwrap(), Fp::from(7));
    assert!(bool::from(Fp::from(7).is_odd()));
}

#[cfg(feature = "zeroize")]
#[test]
fn test_zeroize() {
    use zeroize::Zeroize;

    let mut a = Fp::one();
    a.zeroize();
    assert!(bool::from(a.is_zero()));
}
