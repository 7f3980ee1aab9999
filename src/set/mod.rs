//! The generic scalar set.
//!
//! This module provides [`ScalarSet`], a mutable, unordered collection of
//! unique scalar values backed by an [`FxHashSet`] of storage keys. One
//! implementation covers every instantiation; the per-type differences
//! (float NaN exclusion, complex key pairing) live entirely in the
//! [`Scalar`] trait.
//!
//! # Overview
//!
//! - O(1) expected membership, insert, and remove
//! - algebra (union, intersection, difference) allocates a fresh set and
//!   never mutates an operand
//! - intersection and disjointness probe the larger operand while walking
//!   the smaller one
//! - iteration order is unspecified; equality and the textual form are
//!   order-independent contracts
//!
//! # Examples
//!
//! ```rust
//! use scalarset::ScalarSet;
//!
//! let a = ScalarSet::from([1, 2, 3]);
//! let b = ScalarSet::from([2, 3, 4]);
//!
//! assert_eq!(a.intersection(&b), ScalarSet::from([2, 3]));
//! assert_eq!(a.difference(&b), ScalarSet::from([1]));
//! assert!(a.union(&b).is_superset(&a));
//! ```

use std::collections::hash_set;
use std::fmt;
use std::str::FromStr;

use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::scalar::Scalar;

pub mod aliases;

// =============================================================================
// ScalarSet Definition
// =============================================================================

/// A mutable, unordered set of unique scalar values.
///
/// Values are stored as hashable keys produced by [`Scalar::to_key`]. A
/// value whose key is `None` — floating-point NaN — is silently dropped by
/// every mutating entry point and never matched by [`contains`](Self::contains).
///
/// `ScalarSet` has no internal synchronization; wrap it in a lock for
/// shared mutation across threads.
///
/// # Examples
///
/// ```rust
/// use scalarset::F64Set;
///
/// let mut set = F64Set::new();
/// set.add([1.5, f64::NAN, 1.5]);
///
/// assert_eq!(set.len(), 1);
/// assert!(set.contains(&1.5));
/// assert!(!set.contains(&f64::NAN));
/// ```
#[derive(Clone)]
pub struct ScalarSet<T: Scalar> {
    inner: FxHashSet<T::Key>,
}

impl<T: Scalar> ScalarSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::I32Set;
    ///
    /// let set = I32Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FxHashSet::default(),
        }
    }

    /// Creates a new empty set with room for at least `capacity` members.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: FxHashSet::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Returns the number of members in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::I32Set;
    ///
    /// let set = I32Set::from([1, 2, 2]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no members.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes all members. Idempotent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::StringSet;
    ///
    /// let mut set = StringSet::from(["a".to_string()]);
    /// set.clear();
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Adds each of `values` to the set.
    ///
    /// Values already present are left alone; floating-point NaN values
    /// are silently ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::I32Set;
    ///
    /// let mut set = I32Set::new();
    /// set.add([1, 2, 1]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn add<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            if let Some(key) = value.to_key() {
                self.inner.insert(key);
            }
        }
    }

    /// Inserts a single value.
    ///
    /// Returns `true` if the value was newly inserted, `false` if it was
    /// already present or is excluded from storage (NaN).
    pub fn insert(&mut self, value: T) -> bool {
        value.to_key().is_some_and(|key| self.inner.insert(key))
    }

    /// Removes each of `values` from the set.
    ///
    /// Removing an absent value is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::I32Set;
    ///
    /// let mut set = I32Set::from([1, 2, 3]);
    /// set.remove_all([2, 3, 99]);
    /// assert_eq!(set, I32Set::from([1]));
    /// ```
    pub fn remove_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            if let Some(key) = value.to_key() {
                self.inner.remove(&key);
            }
        }
    }

    /// Removes a single value.
    ///
    /// Returns `true` if the value was present and removed.
    pub fn remove(&mut self, value: &T) -> bool {
        value.to_key().is_some_and(|key| self.inner.remove(&key))
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// Querying floating-point NaN always answers `false`: NaN is never a
    /// member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::F32Set;
    ///
    /// let set = F32Set::from([1.5]);
    /// assert!(set.contains(&1.5));
    /// assert!(!set.contains(&f32::NAN));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        value.to_key().is_some_and(|key| self.inner.contains(&key))
    }

    /// Returns the union of two sets: every value present in either
    /// operand. Neither operand is mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::I32Set;
    ///
    /// let a = I32Set::from([1, 2]);
    /// let b = I32Set::from([2, 3]);
    /// assert_eq!(a.union(&b), I32Set::from([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            inner: self.inner.union(&other.inner).cloned().collect(),
        }
    }

    /// Returns the intersection of two sets: the values present in both
    /// operands.
    ///
    /// Walks the smaller operand and probes the larger one, so the cost is
    /// proportional to the smaller size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::I32Set;
    ///
    /// let a = I32Set::from([1, 2, 3]);
    /// let b = I32Set::from([2, 3, 4]);
    /// assert_eq!(a.intersection(&b), I32Set::from([2, 3]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() <= other.len() {
            (&self.inner, &other.inner)
        } else {
            (&other.inner, &self.inner)
        };

        let mut inner = FxHashSet::with_capacity_and_hasher(smaller.len(), FxBuildHasher);
        inner.extend(smaller.iter().filter(|key| larger.contains(*key)).cloned());
        Self { inner }
    }

    /// Returns the difference `self - other`: the values present in `self`
    /// but absent from `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::StringSet;
    ///
    /// let a = StringSet::from(["a".to_string(), "b".to_string()]);
    /// let b = StringSet::from(["b".to_string()]);
    /// assert_eq!(a.difference(&b), StringSet::from(["a".to_string()]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            inner: self.inner.difference(&other.inner).cloned().collect(),
        }
    }

    /// Returns `true` if every member of `self` is a member of `other`.
    ///
    /// Vacuously true for an empty `self`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Returns `true` if `self` is a subset of `other` and the two sets
    /// are not equal.
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() != other.len() && self.is_subset(other)
    }

    /// Returns `true` if every member of `other` is a member of `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `other` is a subset of `self` and the two sets
    /// are not equal.
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Returns `true` if the two sets have no members in common.
    ///
    /// Walks the smaller operand and probes the larger one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::I32Set;
    ///
    /// let a = I32Set::from([1, 2]);
    /// assert!(a.is_disjoint(&I32Set::from([3, 4])));
    /// assert!(!a.is_disjoint(&I32Set::from([2, 3])));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.len() <= other.len() {
            (&self.inner, &other.inner)
        } else {
            (&other.inner, &self.inner)
        };

        smaller.iter().all(|key| !larger.contains(key))
    }

    /// Returns an iterator over the members, in unspecified order.
    ///
    /// The iterator yields owned values reconstructed from storage keys;
    /// two iterations may visit the members in different orders but always
    /// yield each member exactly once.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            keys: self.inner.iter(),
        }
    }

    /// Collects the members into a vector, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::I32Set;
    ///
    /// let mut members = I32Set::from([3, 1, 2]).to_vec();
    /// members.sort_unstable();
    /// assert_eq!(members, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// A borrowing iterator over the members of a [`ScalarSet`].
///
/// Yields owned values because members are reconstructed from their
/// storage keys.
pub struct Iter<'a, T: Scalar> {
    keys: hash_set::Iter<'a, T::Key>,
}

impl<T: Scalar> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(|key| T::from_key(key.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T: Scalar> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.keys.len()
    }
}

/// An owning iterator over the members of a [`ScalarSet`].
pub struct IntoIter<T: Scalar> {
    keys: hash_set::IntoIter<T::Key>,
}

impl<T: Scalar> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(T::from_key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T: Scalar> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<T: Scalar> IntoIterator for ScalarSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            keys: self.inner.into_iter(),
        }
    }
}

impl<'a, T: Scalar> IntoIterator for &'a ScalarSet<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Scalar> Default for ScalarSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> FromIterator<T> for ScalarSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iterator = iter.into_iter();
        let mut set = Self::with_capacity(iterator.size_hint().0);
        set.add(iterator);
        set
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for ScalarSet<T> {
    /// Creates a set from an array, collapsing duplicates and dropping
    /// NaN values.
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Scalar> Extend<T> for ScalarSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<T: Scalar> PartialEq for ScalarSet<T> {
    /// Two sets are equal iff they have identical membership; insertion
    /// order never matters.
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Scalar> Eq for ScalarSet<T> {}

impl<T: Scalar + fmt::Debug> fmt::Debug for ScalarSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Scalar> fmt::Display for ScalarSet<T> {
    /// Renders as `{` + space-joined members + `}`; the empty set renders
    /// as `{}`. Member order is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::{Complex64, Complex64Set};
    ///
    /// let set = Complex64Set::from([Complex64::new(1.0, 0.0)]);
    /// assert_eq!(set.to_string(), "{1+0i}");
    /// ```
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        let mut first = true;
        for member in self {
            if first {
                first = false;
            } else {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{member}")?;
        }
        formatter.write_str("}")
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Scalar> std::ops::BitOr for &ScalarSet<T> {
    type Output = ScalarSet<T>;

    /// Shorthand for [`ScalarSet::union`].
    fn bitor(self, other: Self) -> ScalarSet<T> {
        self.union(other)
    }
}

impl<T: Scalar> std::ops::BitAnd for &ScalarSet<T> {
    type Output = ScalarSet<T>;

    /// Shorthand for [`ScalarSet::intersection`].
    fn bitand(self, other: Self) -> ScalarSet<T> {
        self.intersection(other)
    }
}

impl<T: Scalar> std::ops::Sub for &ScalarSet<T> {
    type Output = ScalarSet<T>;

    /// Shorthand for [`ScalarSet::difference`].
    fn sub(self, other: Self) -> ScalarSet<T> {
        self.difference(other)
    }
}

// =============================================================================
// Textual Parsing
// =============================================================================

/// Error produced when parsing a set from its textual form fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSetError<E> {
    /// The text was not wrapped in `{` and `}`.
    Delimiters,
    /// A member token failed to parse; carries the member's own error.
    Member(E),
}

impl<E: fmt::Display> fmt::Display for ParseSetError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delimiters => formatter.write_str("set text must be wrapped in `{` and `}`"),
            Self::Member(error) => write!(formatter, "invalid set member: {error}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for ParseSetError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Delimiters => None,
            Self::Member(error) => Some(error),
        }
    }
}

impl<T> FromStr for ScalarSet<T>
where
    T: Scalar + FromStr,
{
    type Err = ParseSetError<T::Err>;

    /// Parses the textual form produced by `Display`: `{}` or
    /// `{member member ...}` with whitespace-separated members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::I32Set;
    ///
    /// let set: I32Set = "{1 4}".parse().unwrap();
    /// assert_eq!(set, I32Set::from([4, 1]));
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let body = text
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or(ParseSetError::Delimiters)?;

        let mut set = Self::new();
        for token in body.split_whitespace() {
            set.insert(token.parse().map_err(ParseSetError::Member)?);
        }
        Ok(set)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: Scalar + serde::Serialize> serde::Serialize for ScalarSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for member in self {
            seq.serialize_element(&member)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ScalarSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ScalarSetVisitor<T>
where
    T: Scalar + serde::Deserialize<'de>,
{
    type Value = ScalarSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of scalar values")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Rebuilding through insert collapses duplicates and drops NaN,
        // the same as every other entry point.
        let mut set = ScalarSet::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ScalarSet<T>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ScalarSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_creates_empty() {
        let set: ScalarSet<i32> = ScalarSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    fn construction_collapses_duplicates() {
        let set = ScalarSet::from([1, 1, 2, 2, 2]);
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn insert_reports_novelty() {
        let mut set = ScalarSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn remove_reports_presence() {
        let mut set = ScalarSet::from([1, 2]);
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert_eq!(set, ScalarSet::from([2]));
    }

    #[rstest]
    fn nan_is_never_stored() {
        let mut set = ScalarSet::from([f64::NAN]);
        assert!(set.is_empty());

        set.add([1.0, f64::NAN]);
        assert_eq!(set.len(), 1);
        assert!(!set.insert(f64::NAN));
        assert!(!set.contains(&f64::NAN));
        assert!(!set.remove(&f64::NAN));
    }

    #[rstest]
    fn negative_zero_collapses_with_positive_zero() {
        let set = ScalarSet::from([0.0_f64, -0.0_f64]);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&-0.0));
    }

    #[rstest]
    fn clear_is_idempotent() {
        let mut set = ScalarSet::from(["a".to_string(), "b".to_string()]);
        set.clear();
        set.clear();
        assert!(set.is_empty());
    }

    #[rstest]
    fn clone_is_independent() {
        let original = ScalarSet::from([1, 2]);
        let mut copy = original.clone();
        copy.add([3]);

        assert!(!original.contains(&3));
        assert!(copy.contains(&3));
    }

    #[rstest]
    fn equality_ignores_insertion_order() {
        assert_eq!(ScalarSet::from([1, 2]), ScalarSet::from([2, 1]));
        assert_ne!(ScalarSet::from([1, 2]), ScalarSet::from([1]));
    }

    #[rstest]
    fn intersection_iterates_either_side() {
        // Same result whichever operand is smaller.
        let small = ScalarSet::from([2, 3]);
        let large = ScalarSet::from([1, 2, 3, 4, 5]);

        assert_eq!(small.intersection(&large), ScalarSet::from([2, 3]));
        assert_eq!(large.intersection(&small), ScalarSet::from([2, 3]));
    }

    #[rstest]
    fn algebra_leaves_operands_untouched() {
        let a = ScalarSet::from([1, 2]);
        let b = ScalarSet::from([2, 3]);

        let _ = a.union(&b);
        let _ = a.intersection(&b);
        let _ = a.difference(&b);

        assert_eq!(a, ScalarSet::from([1, 2]));
        assert_eq!(b, ScalarSet::from([2, 3]));
    }

    #[rstest]
    fn proper_subset_requires_size_difference() {
        let smaller = ScalarSet::from([1, 2]);
        let larger = ScalarSet::from([1, 2, 3]);

        assert!(smaller.is_proper_subset(&larger));
        assert!(!smaller.is_proper_subset(&smaller.clone()));
        assert!(larger.is_proper_superset(&smaller));
        assert!(smaller.is_subset(&smaller.clone()));
    }

    #[rstest]
    fn empty_set_is_subset_of_everything() {
        let empty: ScalarSet<i32> = ScalarSet::new();
        assert!(empty.is_subset(&ScalarSet::from([1])));
        assert!(empty.is_subset(&ScalarSet::new()));
        assert!(empty.is_disjoint(&ScalarSet::new()));
    }

    #[rstest]
    fn operators_mirror_methods() {
        let a = ScalarSet::from([1, 2]);
        let b = ScalarSet::from([2, 3]);

        assert_eq!(&a | &b, a.union(&b));
        assert_eq!(&a & &b, a.intersection(&b));
        assert_eq!(&a - &b, a.difference(&b));
    }

    #[rstest]
    fn display_empty_set() {
        let set: ScalarSet<i32> = ScalarSet::new();
        assert_eq!(set.to_string(), "{}");
    }

    #[rstest]
    fn iter_yields_each_member_once() {
        let set = ScalarSet::from([1, 2, 3]);
        let mut members = set.to_vec();
        members.sort_unstable();
        assert_eq!(members, vec![1, 2, 3]);
        assert_eq!(set.iter().len(), 3);
    }

    #[rstest]
    #[case("1 2")]
    #[case("{1 2")]
    #[case("1 2}")]
    fn parse_requires_braces(#[case] text: &str) {
        assert_eq!(
            text.parse::<ScalarSet<i32>>(),
            Err(ParseSetError::Delimiters)
        );
    }

    #[rstest]
    fn parse_reports_member_errors() {
        let result = "{1 x}".parse::<ScalarSet<i32>>();
        assert!(matches!(result, Err(ParseSetError::Member(_))));
    }

    #[rstest]
    fn parse_round_trips_membership() {
        let set = ScalarSet::from([1, 4]);
        let reparsed: ScalarSet<i32> = set.to_string().parse().unwrap();
        assert_eq!(reparsed, set);
    }
}
