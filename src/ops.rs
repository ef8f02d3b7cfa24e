//! Group operations on permutations.
use std::cmp::max;
use std::mem::size_of;
use std::ops::{Mul, MulAssign};

use log::trace;
use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::action::LeftAction;
use crate::error::PowerError;
use crate::perm::Permutation;
use crate::Point;

impl Permutation {
    /// Composition of two permutations, `other` is applied first.
    fn compose(&self, other: &Permutation) -> Permutation {
        let cycles: Vec<Vec<Point>> = self
            .cycles()
            .chain(other.cycles())
            .map(|cycle| cycle.collect())
            .collect();

        // The cycles of a permutation always contain its largest point.
        Permutation::compose_cycles(max(self.max_point(), other.max_point()), &cycles)
    }

    /// A power of this permutation.
    ///
    /// The result is built from the cycles of this permutation repeated `exponent` times. The
    /// zeroth power is the identity on the same points. Negative exponents are not supported.
    pub fn pow<E>(&self, exponent: E) -> Result<Permutation, PowerError>
    where
        E: Integer + ToPrimitive,
    {
        if exponent < E::zero() {
            return Err(PowerError::NegativeExponent);
        }
        let exponent = exponent.to_usize().ok_or(PowerError::ExponentTooLarge)?;

        if exponent == 0 {
            return Ok(Permutation::identity_unchecked(self.max_point()));
        }

        let cycles: Vec<Vec<Point>> = self.cycles().map(|cycle| cycle.collect()).collect();
        let total = cycles
            .len()
            .checked_mul(exponent)
            .filter(|&total| total <= isize::MAX as usize / size_of::<&[Point]>())
            .ok_or(PowerError::ExponentTooLarge)?;
        let repeated: Vec<&[Point]> = cycles
            .iter()
            .map(Vec::as_slice)
            .cycle()
            .take(total)
            .collect();

        Ok(Permutation::compose_cycles(self.max_point(), &repeated))
    }

    /// The order of this permutation.
    ///
    /// This is the number of multiplications by this permutation needed until the successive
    /// powers return to the permutation itself.
    pub fn order(&self) -> usize {
        let mut order = 1;
        let mut result = self * self;
        while result != *self {
            result *= self;
            order += 1;
        }
        trace!("order of {} is {}", self, order);
        order
    }

    /// The sign of this permutation.
    ///
    /// Returns -1 for an odd permutation and +1 for an even permutation.
    pub fn sgn(&self) -> i32 {
        let even_cycles = self
            .cycles()
            .filter(|cycle| cycle.clone().count().is_even())
            .count();
        if even_cycles.is_even() {
            1
        } else {
            -1
        }
    }

    /// Whether this is an even permutation.
    pub fn is_even(&self) -> bool {
        self.sgn() == 1
    }

    /// Whether this is an odd permutation.
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

/// Composition, the right hand side is applied first.
impl<'a, 'b> Mul<&'b Permutation> for &'a Permutation {
    type Output = Permutation;

    fn mul(self, other: &'b Permutation) -> Permutation {
        self.compose(other)
    }
}

impl Mul<Permutation> for Permutation {
    type Output = Permutation;

    fn mul(self, other: Permutation) -> Permutation {
        self.compose(&other)
    }
}

impl<'b> Mul<&'b Permutation> for Permutation {
    type Output = Permutation;

    fn mul(self, other: &'b Permutation) -> Permutation {
        self.compose(other)
    }
}

impl<'b> MulAssign<&'b Permutation> for Permutation {
    fn mul_assign(&mut self, other: &'b Permutation) {
        *self = self.compose(other);
    }
}

impl MulAssign<Permutation> for Permutation {
    fn mul_assign(&mut self, other: Permutation) {
        *self = self.compose(&other);
    }
}

/// Composition of a permutation on the left.
impl<'a> LeftAction<&'a Permutation> for Permutation {
    type Output = Permutation;

    fn left_apply(&self, perm: &'a Permutation) -> Permutation {
        self.compose(perm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm;
    use crate::perm::tests::random_perm;

    use proptest::{prelude::*, *};

    #[test]
    fn composition_order() {
        let a = perm!((1, 2), (3,)).unwrap();
        let b = perm!((2, 3)).unwrap();

        assert_eq!(&a * &b, perm!((1, 2, 3)).unwrap());
        assert_eq!(&b * &a, perm!((1, 3, 2)).unwrap());
        assert_eq!(a.left_apply(&b), &a * &b);

        let mut c = a.clone();
        c *= &b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn composition_grows_to_larger_size() {
        let a = perm!((1, 2)).unwrap();
        let b = perm!((4, 3)).unwrap();
        let ab = &a * &b;
        assert_eq!(ab.len(), 4);
        assert_eq!(ab.to_string(), "(1 2)(3 4)");
    }

    #[test]
    fn power_of_three_cycle() {
        let a = perm!((1, 2, 3)).unwrap();
        assert_eq!(a.pow(3).unwrap(), perm!((3,)).unwrap());
        assert_eq!(a.pow(2u8).unwrap(), perm!((1, 3, 2)).unwrap());
        assert_eq!(a.pow(4i64).unwrap(), a);
    }

    #[test]
    fn zero_power_is_identity() {
        let a = perm!((1, 2), (5, 4, 3, 7)).unwrap();
        let id = a.pow(0).unwrap();
        assert_eq!(id.len(), 7);
        assert_eq!(id, Permutation::identity(7).unwrap());
        assert_eq!(id.to_string(), "(7)");
    }

    #[test]
    fn unsupported_exponents() {
        let a = perm!((1, 2)).unwrap();
        assert_eq!(a.pow(-1).unwrap_err(), PowerError::NegativeExponent);
        assert_eq!(
            a.pow(u128::max_value()).unwrap_err(),
            PowerError::ExponentTooLarge
        );
        assert_eq!(
            perm!((1, 2), (3, 4)).unwrap().pow(u64::MAX).unwrap_err(),
            PowerError::ExponentTooLarge
        );
        assert_eq!(
            perm!((1, 2, 3)).unwrap().pow(usize::MAX).unwrap_err(),
            PowerError::ExponentTooLarge
        );
    }

    #[test]
    fn order_examples() {
        assert_eq!(perm!((5,)).unwrap().order(), 1);
        assert_eq!(perm!((1, 3), (2, 5), (7, 4, 6)).unwrap().order(), 6);
        assert_eq!(perm!((1, 2), (5, 4, 3, 7)).unwrap().order(), 4);
        assert_eq!(perm!((1, 2, 3, 4, 5)).unwrap().order(), 5);
    }

    #[test]
    fn sign_examples() {
        let a = perm!((4,)).unwrap();
        let b = perm!((1, 3)).unwrap();
        assert_eq!(a.sgn(), 1);
        assert_eq!(b.sgn(), -1);
        assert_eq!(a.pow(2).unwrap().sgn(), 1);
        assert_eq!((&a * &b).sgn(), -1);
        assert!(a.is_even());
        assert!(b.is_odd());
        assert_eq!(perm!((1, 2, 3)).unwrap().sgn(), 1);
        assert_eq!(perm!((1, 2, 3, 4)).unwrap().sgn(), -1);
        assert_eq!(perm!((1, 2), (3, 4)).unwrap().sgn(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn associative(
            a in random_perm(1..40u32),
            b in random_perm(1..40u32),
            c in random_perm(1..40u32),
        ) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn composition_applies_right_first(
            a in random_perm(1..40u32),
            b in random_perm(1..40u32),
        ) {
            let ab = &a * &b;
            prop_assert_eq!(ab.len(), a.len().max(b.len()));
            for point in 1..=ab.len() as Point {
                let b_point = b.apply(point).unwrap_or(point);
                let expected = a.apply(b_point).unwrap_or(b_point);
                prop_assert_eq!(ab.apply(point), Ok(expected));
            }
        }

        #[test]
        fn power_consistency(
            a in random_perm(1..30u32),
            m in 0..8usize,
            n in 0..8usize,
        ) {
            prop_assert_eq!(a.pow(1).unwrap(), a.clone());
            prop_assert_eq!(a.pow(2).unwrap(), &a * &a);
            prop_assert_eq!(a.pow(m + n).unwrap(), a.pow(m).unwrap() * a.pow(n).unwrap());
        }

        #[test]
        fn order_returns_to_identity(a in random_perm(1..12u32)) {
            let order = a.order();
            prop_assert_eq!(a.pow(order).unwrap(), a.pow(0).unwrap());
            prop_assert_eq!(a.pow(order + 1).unwrap(), a.clone());
            for k in 1..order {
                prop_assert_ne!(a.pow(k).unwrap(), a.pow(0).unwrap());
            }
        }

        #[test]
        fn sign_is_multiplicative(
            a in random_perm(1..40u32),
            b in random_perm(1..40u32),
        ) {
            prop_assert_eq!((&a * &b).sgn(), a.sgn() * b.sgn());
        }
    }
}
