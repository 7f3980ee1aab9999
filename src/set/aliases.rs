//! Per-type set aliases.
//!
//! One alias per supported scalar instantiation, all sharing the single
//! generic implementation in [`ScalarSet`]. The alias family is the whole
//! public per-type surface; there is no per-type code beyond the
//! [`Scalar`](crate::scalar::Scalar) impls.

use paste::paste;

use super::ScalarSet;
use crate::scalar::{Complex64, Complex128};

macro_rules! define_set_aliases {
    ($($scalar:ident),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("A hash-backed set of `", stringify!($scalar), "` members.")]
                pub type [<$scalar:camel Set>] = ScalarSet<$scalar>;
            )*
        }
    };
}

define_set_aliases!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, Complex64, Complex128, String,
);

// The sets carry no interior mutability or shared state, so every
// instantiation must stay Send + Sync.
static_assertions::assert_impl_all!(I32Set: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(F64Set: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Complex128Set: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(StringSet: Send, Sync, Clone, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn aliases_share_the_generic_implementation() {
        let signed: I8Set = ScalarSet::from([1_i8, 2]);
        let unsigned: UsizeSet = ScalarSet::from([1_usize, 2]);
        let text: StringSet = ScalarSet::from(["a".to_string()]);

        assert_eq!(signed.len(), 2);
        assert_eq!(unsigned.len(), 2);
        assert_eq!(text.len(), 1);
    }

    #[rstest]
    fn complex_aliases_use_the_pair_types() {
        let set = Complex64Set::from([Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)]);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Complex64::new(1.0, 0.0)));
    }
}
