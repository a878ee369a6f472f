//! Implementation of increment rounding functionality

use crate::options::{RoundingMode, UnsignedRoundingMode};

use core::cmp::Ordering;

use num_traits::{ConstOne, ConstZero, Euclid, Signed};

pub(crate) trait Roundable: Euclid + Signed + Ord + ConstZero + ConstOne + Copy {
    fn is_exact(dividend: Self, divisor: Self) -> bool {
        dividend.rem_euclid(&divisor) == Self::ZERO
    }

    fn compare_remainder(dividend: Self, divisor: Self) -> Ordering {
        let remainder = dividend.abs() % divisor;
        remainder.cmp(&(divisor - remainder))
    }

    fn is_even_cardinal(dividend: Self, divisor: Self) -> bool {
        let two = Self::ONE + Self::ONE;
        Self::result_floor(dividend, divisor).rem_euclid(&two) == Self::ZERO
    }

    fn result_floor(dividend: Self, divisor: Self) -> Self {
        Self::quotient_abs(dividend, divisor)
    }

    fn result_ceil(dividend: Self, divisor: Self) -> Self {
        Self::quotient_abs(dividend, divisor) + Self::ONE
    }

    fn quotient_abs(dividend: Self, divisor: Self) -> Self {
        (dividend / divisor).abs()
    }
}

impl Roundable for i64 {}

impl Roundable for i128 {}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub(crate) struct IncrementRounder<T: Roundable> {
    sign: bool,
    dividend: T,
    divisor: T,
}

impl<T: Roundable> IncrementRounder<T> {
    /// Creates a rounder of `number` to a multiple of `increment`, which
    /// must be positive.
    #[inline]
    pub(crate) fn from_signed_num(number: T, increment: T) -> Self {
        debug_assert!(increment > T::ZERO);
        Self {
            sign: number >= T::ZERO,
            dividend: number,
            divisor: increment,
        }
    }

    #[inline]
    pub(crate) fn round(&self, mode: RoundingMode) -> T {
        let unsigned_rounding_mode = mode.get_unsigned_round_mode(self.sign);
        let mut rounded =
            apply_unsigned_rounding_mode(self.dividend, self.divisor, unsigned_rounding_mode);
        if !self.sign {
            rounded = -rounded;
        }
        rounded * self.divisor
    }
}

/// Applies the unsigned rounding mode.
fn apply_unsigned_rounding_mode<T: Roundable>(
    dividend: T,
    divisor: T,
    unsigned_rounding_mode: UnsignedRoundingMode,
) -> T {
    // 1. If x is equal to r1, return r1.
    if T::is_exact(dividend, divisor) {
        return T::result_floor(dividend, divisor);
    }
    // 2. If unsignedRoundingMode is zero, return r1.
    if unsigned_rounding_mode == UnsignedRoundingMode::Zero {
        return T::result_floor(dividend, divisor);
    };
    // 3. If unsignedRoundingMode is infinity, return r2.
    if unsigned_rounding_mode == UnsignedRoundingMode::Infinity {
        return T::result_ceil(dividend, divisor);
    };

    // 4. Return whichever of r1 and r2 is closer to x.
    match T::compare_remainder(dividend, divisor) {
        Ordering::Less => T::result_floor(dividend, divisor),
        Ordering::Greater => T::result_ceil(dividend, divisor),
        Ordering::Equal => match unsigned_rounding_mode {
            // 5. On a tie, half-zero returns r1 and half-infinity returns r2.
            UnsignedRoundingMode::HalfZero => T::result_floor(dividend, divisor),
            UnsignedRoundingMode::HalfInfinity => T::result_ceil(dividend, divisor),
            // 6. half-even returns whichever of r1 and r2 is even.
            _ => {
                debug_assert!(unsigned_rounding_mode == UnsignedRoundingMode::HalfEven);
                if T::is_even_cardinal(dividend, divisor) {
                    T::result_floor(dividend, divisor)
                } else {
                    T::result_ceil(dividend, divisor)
                }
            }
        },
    }
}
