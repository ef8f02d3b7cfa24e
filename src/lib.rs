//! Permutations in cycle notation
//!
//! This crate represents elements of the symmetric group S<sub>n</sub>, i.e. permutations of the
//! points {1, ..., n}. Permutations are built from cycles and support application to points,
//! composition, powers, order and sign.
//!
//! ```
//! use cyclic::perm;
//!
//! let a = perm!((1, 2), (5, 4, 3, 7)).unwrap();
//! assert_eq!(a.to_string(), "(1 2)(3 7 5 4)");
//! assert_eq!(a.apply(5), Ok(4));
//! assert_eq!(a.order(), 4);
//! ```
//!
pub mod action;
pub mod cycles;
pub mod error;
pub mod fmt;
pub mod ops;
pub mod parse;
pub mod perm;

pub use crate::action::LeftAction;
pub use crate::error::{ConstructionError, ParseError, PowerError, RangeError};
pub use crate::perm::Permutation;

/// Point of a permutation's domain.
///
/// Points are positive integers (`u32`), the domain of a permutation of size n is {1, ..., n}.
pub type Point = u32;

/// Build a [`Permutation`] from cycles written as tuples.
///
/// The cycles are composed right to left, `perm!((1, 2), (2, 3))` first applies `(2 3)` and then
/// `(1 2)`. Evaluates to a `Result<Permutation, ConstructionError>`. The reconstruction code
/// returned by [`Permutation::to_code`] is an invocation of this macro.
///
/// ```
/// use cyclic::perm;
///
/// let a = perm!((1, 2), (3,)).unwrap();
/// assert_eq!(a.len(), 3);
/// assert_eq!(format!("{:?}", a), "perm!((1, 2), (3,))");
/// ```
#[macro_export]
macro_rules! perm {
    ($(($($point:expr),+ $(,)?)),+ $(,)?) => {
        $crate::Permutation::from_cycles::<&[$crate::Point]>(&[$(&[$($point),+][..]),+])
    };
}
