//! distance values between cities.
//!
//! A distance is either a finite non negative weight or Unreachable, which plays the
//! role of the usual infinite sentinel without entering any arithmetic: sums go through
//! [checked_add](Dist::checked_add) which absorbs Unreachable and degrades a finite
//! overflow to Unreachable so a sum can never wrap into a small seemingly valid value.

use num_traits::{CheckedAdd, PrimInt};

/// A distance between two cities, generic on the integer weight type.
/// The derived order puts every finite value below Unreachable, so relaxation and
/// nearest hub tracking compare distances directly without a finiteness test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dist<W: PrimInt> {
    Finite(W),
    Unreachable,
}

impl<W: PrimInt> Dist<W> {
    /// the null distance (a city to itself)
    pub fn zero() -> Self {
        Dist::Finite(W::zero())
    }

    /// true if not the Unreachable sentinel
    pub fn is_finite(&self) -> bool {
        matches!(self, Dist::Finite(_))
    }

    /// finite weight if any
    pub fn finite(&self) -> Option<W> {
        match self {
            Dist::Finite(w) => Some(*w),
            Dist::Unreachable => None,
        }
    }
} // end of impl block Dist

impl<W: PrimInt + CheckedAdd> Dist<W> {
    /// sum of two distances. Unreachable absorbs, and an overflowing finite sum
    /// becomes Unreachable instead of wrapping.
    pub fn checked_add(self, other: Dist<W>) -> Dist<W> {
        match (self, other) {
            (Dist::Finite(a), Dist::Finite(b)) => match a.checked_add(&b) {
                Some(s) => Dist::Finite(s),
                None => Dist::Unreachable,
            },
            _ => Dist::Unreachable,
        }
    }
} // end of impl block Dist (checked arithmetic)

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_order() {
        log_init_test();
        //
        assert!(Dist::Finite(3u32) < Dist::Finite(5u32));
        assert!(Dist::Finite(u32::MAX) < Dist::Unreachable);
        assert!(Dist::<u32>::zero() <= Dist::Finite(0u32));
    } // end of test_order

    #[test]
    fn test_checked_add() {
        log_init_test();
        //
        assert_eq!(
            Dist::Finite(3u32).checked_add(Dist::Finite(4u32)),
            Dist::Finite(7u32)
        );
        assert_eq!(
            Dist::Finite(3u32).checked_add(Dist::Unreachable),
            Dist::<u32>::Unreachable
        );
        assert_eq!(
            Dist::<u32>::Unreachable.checked_add(Dist::Unreachable),
            Dist::<u32>::Unreachable
        );
        // an overflow must not wrap to a small finite distance
        assert_eq!(
            Dist::Finite(u32::MAX).checked_add(Dist::Finite(1u32)),
            Dist::<u32>::Unreachable
        );
    } // end of test_checked_add
} // end of mod tests
