use crypto_bigint::{Limb, UInt};

/// Calculate `-(q^{-1} mod 2^w) mod 2^w`, where `w` is the limb width, for use
/// in Montgomery reduction.
pub const fn reduction_inv<const LIMBS: usize>(modulus: &UInt<LIMBS>) -> Limb {
    // The units mod 2^w have exponent 2^(w-2), so q^(2^(w-1) - 1) = q^{-1}.
    let q0 = modulus.limbs()[0];
    let mut inv = Limb::ONE;
    let mut i = 1;
    while i < Limb::BIT_SIZE {
        inv = inv.wrapping_mul(inv).wrapping_mul(q0);
        i += 1;
    }
    Limb(inv.0.wrapping_neg())
}

/// Montgomery multiplication, `a * b / R mod q` with `R = 2^(w * LIMBS)`.
///
/// The reduction is interleaved with the operand scan over the limbs of `a`
/// (CIOS). `a` may be any `LIMBS`-wide integer, `b` must be below `q`, and
/// `q` must leave the top bit clear.
#[inline(always)]
pub const fn mont_mul<const LIMBS: usize>(
    a: &UInt<LIMBS>,
    b: &UInt<LIMBS>,
    modulus: &UInt<LIMBS>,
    inv: Limb,
) -> UInt<LIMBS> {
    let a_limbs = a.limbs();
    let b_limbs = b.limbs();
    let q_limbs = modulus.limbs();
    let mut acc = [Limb::ZERO; LIMBS];
    let mut i = 0;

    while i < LIMBS {
        // acc += a_i * b
        let mut carry = Limb::ZERO;
        let mut j = 0;
        while j < LIMBS {
            let (l, c) = acc[j].mac(a_limbs[i], b_limbs[j], carry);
            acc[j] = l;
            carry = c;
            j += 1;
        }
        let top = carry;

        // acc = (acc + k * q) / 2^w, where k zeroes the lowest limb
        let k = acc[0].wrapping_mul(inv);
        let (_, mut carry) = acc[0].mac(k, q_limbs[0], Limb::ZERO);
        let mut j = 1;
        while j < LIMBS {
            let (l, c) = acc[j].mac(k, q_limbs[j], carry);
            acc[j - 1] = l;
            carry = c;
            j += 1;
        }
        let (l, _) = top.adc(carry, Limb::ZERO);
        acc[LIMBS - 1] = l;
        i += 1;
    }

    // acc < b + q < 2q
    try_sub(&UInt::new(acc), modulus)
}

/// Computes `base^by` in Montgomery form, where `one = R mod q`.
///
/// Variable time with respect to the exponent only.
pub const fn mont_pow_vartime<const LIMBS: usize>(
    base: &UInt<LIMBS>,
    by: &UInt<LIMBS>,
    one: &UInt<LIMBS>,
    modulus: &UInt<LIMBS>,
    inv: Limb,
) -> UInt<LIMBS> {
    let words = by.limbs();
    let mut res = *one;
    let mut i = LIMBS;
    while i > 0 {
        i -= 1;
        let mut j = Limb::BIT_SIZE;
        while j > 0 {
            j -= 1;
            res = mont_mul(&res, &res, modulus, inv);
            if (words[i].0 >> j) & 1 == 1 {
                res = mont_mul(&res, base, modulus, inv);
            }
        }
    }
    res
}

/// Subtract `rhs` from `lhs` in constant time, keeping `lhs` when the
/// subtraction would underflow.
#[inline(always)]
pub const fn try_sub<const LIMBS: usize>(lhs: &UInt<LIMBS>, rhs: &UInt<LIMBS>) -> UInt<LIMBS> {
    let (diff, borrow) = lhs.sbb(rhs, Limb::ZERO);
    let prev = lhs.limbs();
    let diff = diff.limbs();
    let mut res = [Limb::ZERO; LIMBS];
    let mut i = 0;

    while i < LIMBS {
        // borrow is all ones on underflow and zero otherwise
        res[i] = Limb((prev[i].0 & borrow.0) | (diff[i].0 & !borrow.0));
        i += 1;
    }

    UInt::new(res)
}

macro_rules! impl_add_binop_specify_output {
    ($lhs:ident, $rhs:ident, $output:ident) => {
        impl<'b> Add<&'b $rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn add(self, rhs: &'b $rhs) -> $output {
                &self + rhs
            }
        }

        impl<'a> Add<$rhs> for &'a $lhs {
            type Output = $output;

            #[inline]
            fn add(self, rhs: $rhs) -> $output {
                self + &rhs
            }
        }

        impl Add<$rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn add(self, rhs: $rhs) -> $output {
                &self + &rhs
            }
        }
    };
}

macro_rules! impl_sub_binop_specify_output {
    ($lhs:ident, $rhs:ident, $output:ident) => {
        impl<'b> Sub<&'b $rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn sub(self, rhs: &'b $rhs) -> $output {
                &self - rhs
            }
        }

        impl<'a> Sub<$rhs> for &'a $lhs {
            type Output = $output;

            #[inline]
            fn sub(self, rhs: $rhs) -> $output {
                self - &rhs
            }
        }

        impl Sub<$rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn sub(self, rhs: $rhs) -> $output {
                &self - &rhs
            }
        }
    };
}

macro_rules! impl_binops_additive {
    ($lhs:ident, $rhs:ident) => {
        impl_add_binop_specify_output!($lhs, $rhs, $lhs);
        impl_sub_binop_specify_output!($lhs, $rhs, $lhs);

        impl SubAssign<$rhs> for $lhs {
            #[inline]
            fn sub_assign(&mut self, rhs: $rhs) {
                *self = &*self - &rhs;
            }
        }

        impl AddAssign<$rhs> for $lhs {
            #[inline]
            fn add_assign(&mut self, rhs: $rhs) {
                *self = &*self + &rhs;
            }
        }

        impl<'b> SubAssign<&'b $rhs> for $lhs {
            #[inline]
            fn sub_assign(&mut self, rhs: &'b $rhs) {
                *self = &*self - rhs;
            }
        }

        impl<'b> AddAssign<&'b $rhs> for $lhs {
            #[inline]
            fn add_assign(&mut self, rhs: &'b $rhs) {
                *self = &*self + rhs;
            }
        }
    };
}

macro_rules! impl_binops_multiplicative {
    ($lhs:ident, $rhs:ident) => {
        impl<'b> Mul<&'b $rhs> for $lhs {
            type Output = $lhs;

            #[inline]
            fn mul(self, rhs: &'b $rhs) -> $lhs {
                &self * rhs
            }
        }

        impl<'a> Mul<$rhs> for &'a $lhs {
            type Output = $lhs;

            #[inline]
            fn mul(self, rhs: $rhs) -> $lhs {
                self * &rhs
            }
        }

        impl Mul<$rhs> for $lhs {
            type Output = $lhs;

            #[inline]
            fn mul(self, rhs: $rhs) -> $lhs {
                &self * &rhs
            }
        }

        impl MulAssign<$rhs> for $lhs {
            #[inline]
            fn mul_assign(&mut self, rhs: $rhs) {
                *self = &*self * &rhs;
            }
        }

        impl<'b> MulAssign<&'b $rhs> for $lhs {
            #[inline]
            fn mul_assign(&mut self, rhs: &'b $rhs) {
                *self = &*self * rhs;
            }
        }
    };
}

#[test]
fn test_reduction_inv() {
    use crypto_bigint::U64;

    for q in [3u64, 0xffff_fffb, 0x1a01_11ea_397f_e69b, u64::MAX] {
        let q = U64::from_u64(q);
        let inv = reduction_inv(&q);
        // q * inv = -1 (mod 2^w)
        assert_eq!(q.limbs()[0].wrapping_mul(inv), Limb::MAX);
    }
}

#[test]
fn test_try_sub() {
    use crypto_bigint::U64;

    let q = U64::from_u64(97);
    assert_eq!(try_sub(&U64::from_u64(100), &q), U64::from_u64(3));
    assert_eq!(try_sub(&U64::from_u64(97), &q), U64::ZERO);
    assert_eq!(try_sub(&U64::from_u64(96), &q), U64::from_u64(96));
}
