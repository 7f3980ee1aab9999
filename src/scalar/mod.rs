//! Scalar element types and their storage-key adaptation.
//!
//! This module provides the [`Scalar`] trait, the seam that lets a single
//! generic set implementation serve every supported element type. A scalar
//! converts itself into a hashable *storage key* on the way into the set
//! and is reconstructed from that key on the way out.
//!
//! Most types are their own key. The interesting cases:
//!
//! - `f32`/`f64` use [`OrderedFloat`] keys, which supply the `Eq + Hash`
//!   that raw floats lack. [`Scalar::to_key`] returns `None` for NaN, so a
//!   NaN value can never be stored, matched, or rendered — the exclusion
//!   happens once, here, and every set entry point inherits it.
//! - [`Complex64`]/[`Complex128`] key on a pair of `OrderedFloat`
//!   components. Components are stored as given, NaN included: the NaN
//!   exclusion rule covers the float instantiations only, and an
//!   `OrderedFloat` NaN is equal to itself, so set semantics stay coherent.

use std::fmt;
use std::hash::Hash;

use ordered_float::OrderedFloat;

mod complex;

pub use complex::{Complex64, Complex128, ParseComplexError};

/// An element type storable in a [`ScalarSet`](crate::set::ScalarSet).
///
/// Implementations exist for the ten native integer widths, `String`,
/// `f32`, `f64`, [`Complex64`], and [`Complex128`]. The trait is the only
/// per-type code in the crate; everything else is the one generic
/// algorithm.
pub trait Scalar: Clone + fmt::Display {
    /// The hashable representation stored inside the set.
    type Key: Clone + Eq + Hash;

    /// Converts the value into its storage key.
    ///
    /// Returns `None` when the value is excluded from storage entirely;
    /// the only excluded values are floating-point NaNs.
    fn to_key(&self) -> Option<Self::Key>;

    /// Reconstructs the value from its storage key.
    fn from_key(key: Self::Key) -> Self;
}

/// Implements [`Scalar`] for types that are their own storage key.
macro_rules! impl_identity_scalar {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Scalar for $scalar {
                type Key = $scalar;

                #[inline]
                fn to_key(&self) -> Option<Self::Key> {
                    Some(self.clone())
                }

                #[inline]
                fn from_key(key: Self::Key) -> Self {
                    key
                }
            }
        )*
    };
}

impl_identity_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, String);

/// Implements [`Scalar`] for the float widths with NaN exclusion.
macro_rules! impl_float_scalar {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Scalar for $scalar {
                type Key = OrderedFloat<$scalar>;

                #[inline]
                fn to_key(&self) -> Option<Self::Key> {
                    if self.is_nan() {
                        None
                    } else {
                        Some(OrderedFloat(*self))
                    }
                }

                #[inline]
                fn from_key(key: Self::Key) -> Self {
                    key.into_inner()
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn integer_key_is_identity() {
        assert_eq!(42_i32.to_key(), Some(42));
        assert_eq!(i32::from_key(42), 42);
    }

    #[rstest]
    fn string_key_is_identity() {
        let value = "hello".to_string();
        assert_eq!(value.to_key(), Some("hello".to_string()));
        assert_eq!(String::from_key("hello".to_string()), "hello");
    }

    #[rstest]
    fn float_nan_has_no_key() {
        assert_eq!(f32::NAN.to_key(), None);
        assert_eq!(f64::NAN.to_key(), None);
        assert_eq!(1.5_f64.to_key(), Some(OrderedFloat(1.5)));
    }

    #[rstest]
    fn float_zero_signs_share_a_key() {
        // -0.0 and +0.0 must collapse to one member.
        assert_eq!(0.0_f64.to_key(), (-0.0_f64).to_key());
    }

    #[rstest]
    fn complex_nan_component_has_a_key() {
        let value = Complex128::new(f64::NAN, 1.0);
        let key = value.to_key().unwrap();
        assert_eq!(Some(key.clone()), value.to_key());
        assert!(Complex128::from_key(key).re.is_nan());
    }
}
