//! # scalarset
//!
//! Hash-backed sets of primitive scalar values with one uniform operation
//! vocabulary across every instantiation: signed and unsigned integers of
//! all native widths, 32/64-bit floats, 64/128-bit complex numbers, and
//! strings.
//!
//! ## Overview
//!
//! The whole crate is a single generic container, [`ScalarSet<T>`], plus a
//! [`Scalar`] trait that adapts each element type to hash-set storage. The
//! trait is what lets one implementation cover types that are not directly
//! hashable: floats are stored through [`ordered_float::OrderedFloat`]
//! keys, and floating-point NaN is silently excluded from storage at every
//! entry point (it can never become a member, and querying it always
//! answers `false`).
//!
//! Per-type aliases ([`I32Set`], [`F64Set`], [`StringSet`], ...) name the
//! fifteen supported instantiations.
//!
//! ## Example
//!
//! ```rust
//! use scalarset::I32Set;
//!
//! let mut set = I32Set::from([1, 2, 3]);
//! set.remove_all([2, 3]);
//! set.add([4]);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&1) && set.contains(&4));
//! assert_eq!(set, I32Set::from([4, 1]));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ScalarSet`] as a plain
//!   sequence of members.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod scalar;
pub mod set;

pub use scalar::{Complex64, Complex128, ParseComplexError, Scalar};
pub use set::aliases::{
    Complex64Set, Complex128Set, F32Set, F64Set, I8Set, I16Set, I32Set, I64Set, IsizeSet,
    StringSet, U8Set, U16Set, U32Set, U64Set, UsizeSet,
};
pub use set::{IntoIter, Iter, ParseSetError, ScalarSet};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use scalarset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::scalar::{Complex64, Complex128, Scalar};
    pub use crate::set::ScalarSet;
    pub use crate::set::aliases::*;
}
