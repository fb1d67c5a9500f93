//! Hash set with set-algebra operations.
//!
//! This module provides [`SuperSet`], a hash set of unique elements that
//! keeps insertion order for iteration and exposes the classic set-algebra
//! operations against any finite collection of the same element type.
//!
//! # Overview
//!
//! Every binary operation takes a *candidate*: anything that implements
//! [`IntoIterator`] with items that [`Borrow`] the set's element type. The
//! candidate is first materialized into a deduplicated set, then combined with
//! the receiver. Neither input is modified; each operation returns a fresh set.
//!
//! | Operation      | Result                                      | Complexity        |
//! |----------------|---------------------------------------------|-------------------|
//! | `union`        | elements of either side                     | O(n + m)          |
//! | `complement`   | elements of `self` absent from candidate    | O(n + m)          |
//! | `difference`   | elements of exactly one side                | O(n + m)          |
//! | `intersection` | elements of both sides                      | O(m + min(n, m))  |
//! | `cartesian`    | every `(a, b)` pair                         | O(n * m)          |
//! | `subset_of`    | `self ⊆ candidate`                          | O(n + m)          |
//! | `superset_of`  | `self ⊇ candidate`                          | O(n + m)          |
//! | `to_vec`       | elements as a `Vec`                         | O(n)              |
//!
//! # Examples
//!
//! ```rust
//! use superset::set_algebra::SuperSet;
//!
//! let set = SuperSet::from(vec![4, 5, 6]);
//! let candidate = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(set.union(&candidate).to_vec(), vec![4, 5, 6, 1, 2, 3]);
//! assert_eq!(set.complement(&candidate).to_vec(), vec![6]);
//! assert_eq!(set.difference(&candidate), SuperSet::from(vec![1, 2, 3, 6]));
//! assert_eq!(set.intersection(&candidate).to_vec(), vec![4, 5]);
//! assert_eq!(set.cartesian(&candidate).len(), 15);
//! assert!(SuperSet::from(vec![1, 2, 3]).subset_of(&candidate));
//! assert!(!set.superset_of(&candidate));
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use hashbrown::HashTable;
use tracing::trace;

use super::hasher::DefaultHashBuilder;
use super::iter::{IntoIter, Iter};

// =============================================================================
// SuperSet Definition
// =============================================================================

/// A hash set of unique elements with set-algebra operations.
///
/// Elements are stored densely in insertion order and indexed by hash, so
/// membership tests are O(1) on average and iteration (and therefore
/// [`to_vec`](Self::to_vec)) is deterministic.
///
/// # Examples
///
/// ```rust
/// use superset::set_algebra::SuperSet;
///
/// let mut set = SuperSet::new();
/// assert!(set.insert("a"));
/// assert!(set.insert("b"));
/// assert!(!set.insert("a"));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("a"));
/// ```
#[derive(Clone)]
pub struct SuperSet<T, S = DefaultHashBuilder> {
    entries: Vec<T>,
    indices: HashTable<usize>,
    hash_builder: S,
}

static_assertions::assert_impl_all!(SuperSet<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(SuperSet<String>: Send, Sync, Clone);

impl<T> SuperSet<T> {
    /// Creates an empty set using the [`DefaultHashBuilder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set: SuperSet<i32> = SuperSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> SuperSet<T, S> {
    /// Creates an empty set that hashes its elements with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::hash::RandomState;
    /// use superset::set_algebra::SuperSet;
    ///
    /// let mut set = SuperSet::with_hasher(RandomState::new());
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            entries: Vec::new(),
            indices: HashTable::new(),
            hash_builder,
        }
    }

    /// Creates an empty set with room for `capacity` elements that hashes
    /// its elements with `hash_builder`.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            indices: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a reference to the set's hash builder.
    #[inline]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set = SuperSet::from(vec![3, 1, 2, 1]);
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&3, &1, &2]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns the elements as a slice, in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Consumes the set and returns its elements in insertion order.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.entries
    }
}

impl<T: Hash + Eq, S: BuildHasher> SuperSet<T, S> {
    fn find_index<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(element);
        self.indices
            .find(hash, |&index| {
                <T as Borrow<Q>>::borrow(&self.entries[index]) == element
            })
            .copied()
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// The element may be any borrowed form of the set's element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set = SuperSet::from(vec!["hello".to_string(), "world".to_string()]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_index(element).is_some()
    }

    /// Adds `element` to the set.
    ///
    /// Returns `true` if the element was not present. An element that is
    /// already present is left in place and keeps its position.
    pub fn insert(&mut self, element: T) -> bool {
        let hash = self.hash_builder.hash_one(&element);
        if self
            .indices
            .find(hash, |&index| self.entries[index] == element)
            .is_some()
        {
            return false;
        }

        let entries = &self.entries;
        let hash_builder = &self.hash_builder;
        self.indices.insert_unique(hash, entries.len(), |&index| {
            hash_builder.hash_one(&entries[index])
        });
        self.entries.push(element);
        true
    }
}

#[inline]
fn to_owned_element<T: Clone, B: Borrow<T>>(item: B) -> T {
    <B as Borrow<T>>::borrow(&item).clone()
}

// =============================================================================
// Set Algebra
// =============================================================================

impl<T, S> SuperSet<T, S>
where
    T: Clone + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn empty_like(&self) -> Self {
        Self::with_hasher(self.hash_builder.clone())
    }

    /// Collects `candidate` into a deduplicated set sharing this set's hasher.
    fn materialize<I>(&self, candidate: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let candidate = candidate.into_iter();
        let mut set =
            Self::with_capacity_and_hasher(candidate.size_hint().0, self.hash_builder.clone());
        for item in candidate {
            set.insert(to_owned_element(item));
        }
        set
    }

    /// Returns the union of this set and `candidate`.
    ///
    /// The result holds every element that appears in either operand, once.
    /// It iterates this set's elements first, followed by the candidate's
    /// new elements in candidate order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set = SuperSet::from(vec![4, 5, 6]);
    /// let union = set.union(vec![6, 7, 7, 8, 8, 8]);
    ///
    /// assert_eq!(union.to_vec(), vec![4, 5, 6, 7, 8]);
    /// assert_eq!(set.len(), 3);
    /// ```
    ///
    /// Candidates of a different element type are rejected at compile time:
    ///
    /// ```compile_fail
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set = SuperSet::from(vec![1, 2, 3]);
    /// let _ = set.union(vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn union<I>(&self, candidate: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut result = self.empty_like();
        result.extend(
            self.entries
                .iter()
                .cloned()
                .chain(candidate.into_iter().map(to_owned_element)),
        );
        trace!(
            operation = "union",
            receiver = self.len(),
            result = result.len(),
            "set operation"
        );
        result
    }

    /// Returns the relative complement: elements of this set that are not in
    /// `candidate`.
    ///
    /// The operation is asymmetric; `a.complement(b)` and `b.complement(a)`
    /// generally differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set = SuperSet::from(vec![4, 5, 6]);
    /// assert_eq!(set.complement(vec![1, 2, 3, 4, 5]).to_vec(), vec![6]);
    /// assert_eq!(set.complement(Vec::<i32>::new()), set);
    /// ```
    #[must_use]
    pub fn complement<I>(&self, candidate: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let candidate = self.materialize(candidate);
        let mut result = self.empty_like();
        for element in &self.entries {
            if !candidate.contains(element) {
                result.insert(element.clone());
            }
        }
        trace!(
            operation = "complement",
            receiver = self.len(),
            candidate = candidate.len(),
            result = result.len(),
            "set operation"
        );
        result
    }

    /// Returns the symmetric difference: elements present in exactly one of
    /// this set and `candidate`.
    ///
    /// Computed as the union of the two relative complements,
    /// `self.complement(candidate) ∪ candidate.complement(self)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set = SuperSet::from(vec![4, 5, 6]);
    /// let difference = set.difference(vec![1, 1, 2, 2, 2, 3, 3, 4, 4, 4, 5, 5]);
    ///
    /// assert_eq!(difference.to_vec(), vec![6, 1, 2, 3]);
    /// ```
    #[must_use]
    pub fn difference<I>(&self, candidate: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let candidate = self.materialize(candidate);
        let result = self
            .complement(&candidate)
            .union(candidate.complement(self));
        trace!(
            operation = "difference",
            receiver = self.len(),
            candidate = candidate.len(),
            result = result.len(),
            "set operation"
        );
        result
    }

    /// Returns the intersection: elements present in both this set and
    /// `candidate`.
    ///
    /// Only the smaller of the two sets is walked; each of its elements is
    /// probed in the larger one. When both have the same size the candidate
    /// is walked. The result iterates in the walked set's order.
    ///
    /// # Complexity
    ///
    /// O(m) to materialize the candidate plus O(min(n, m)) membership tests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set = SuperSet::from(vec![4, 5, 6]);
    /// assert_eq!(set.intersection(vec![1, 2, 3, 4, 5]).to_vec(), vec![4, 5]);
    /// assert!(set.intersection(Vec::<i32>::new()).is_empty());
    /// ```
    #[must_use]
    pub fn intersection<I>(&self, candidate: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let candidate = self.materialize(candidate);
        let (smaller, larger) = if candidate.len() > self.len() {
            (self, &candidate)
        } else {
            (&candidate, self)
        };

        let mut result = self.empty_like();
        for element in smaller {
            if larger.contains(element) {
                result.insert(element.clone());
            }
        }
        trace!(
            operation = "intersection",
            receiver = self.len(),
            candidate = candidate.len(),
            result = result.len(),
            "set operation"
        );
        result
    }

    /// Returns the cartesian product of this set and `candidate`.
    ///
    /// Each element is a pair whose first component comes from this set and
    /// whose second component comes from the deduplicated candidate. Pairs are
    /// produced receiver-major: for every element of this set, in order, one
    /// pair per candidate element, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set = SuperSet::from(vec![4, 5]);
    /// let product = set.cartesian(vec![1, 2, 1]);
    ///
    /// assert_eq!(product.to_vec(), vec![(4, 1), (4, 2), (5, 1), (5, 2)]);
    /// ```
    #[must_use]
    pub fn cartesian<I>(&self, candidate: I) -> SuperSet<(T, T), S>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let candidate = self.materialize(candidate);
        let capacity = self.len().checked_mul(candidate.len()).unwrap_or(0);
        let mut result = SuperSet::with_capacity_and_hasher(capacity, self.hash_builder.clone());
        for left in &self.entries {
            for right in &candidate.entries {
                result.insert((left.clone(), right.clone()));
            }
        }
        trace!(
            operation = "cartesian",
            receiver = self.len(),
            candidate = candidate.len(),
            result = result.len(),
            "set operation"
        );
        result
    }

    /// Returns `true` if every element of this set is in `candidate`.
    ///
    /// Decided by size: the set is a subset exactly when adding its elements
    /// to the materialized candidate adds nothing new. The empty set is a
    /// subset of every candidate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set_algebra::SuperSet;
    ///
    /// let candidate = vec![1, 2, 3, 4, 5];
    /// assert!(SuperSet::from(vec![1, 2, 3]).subset_of(&candidate));
    /// assert!(!SuperSet::from(vec![1, 2, 3, 4, 5, 6, 7]).subset_of(&candidate));
    /// assert!(SuperSet::<i32>::new().subset_of(Vec::<i32>::new()));
    /// ```
    #[must_use]
    pub fn subset_of<I>(&self, candidate: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let candidate = self.materialize(candidate);
        let union = self.union(&candidate);
        let is_subset = union.len() == candidate.len();
        trace!(
            operation = "subset_of",
            receiver = self.len(),
            candidate = candidate.len(),
            result = is_subset,
            "set operation"
        );
        is_subset
    }

    /// Returns `true` if every element of `candidate` is in this set.
    ///
    /// Equivalent to materializing the candidate and asking whether it is a
    /// [subset](Self::subset_of) of this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set = SuperSet::from(vec![1, 2, 3, 4, 5, 6, 7]);
    /// assert!(set.superset_of(vec![1, 2, 3, 4, 5]));
    /// assert!(!SuperSet::from(vec![4, 5, 6]).superset_of(vec![1, 2, 3, 4, 5]));
    /// assert!(set.superset_of(Vec::<i32>::new()));
    /// ```
    #[must_use]
    pub fn superset_of<I>(&self, candidate: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.materialize(candidate).subset_of(self)
    }

    /// Returns the elements as a `Vec`, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set = SuperSet::from(vec![1, 2, 2, 3, 4, 5, 5]);
    /// assert_eq!(set.to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.clone()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for SuperSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for SuperSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for SuperSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T: Clone + Hash + Eq + 'a, S: BuildHasher> Extend<&'a T> for SuperSet<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Hash + Eq> From<Vec<T>> for SuperSet<T> {
    fn from(elements: Vec<T>) -> Self {
        let mut set = Self::with_capacity(elements.len());
        set.extend(elements);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for SuperSet<T> {
    fn from(elements: [T; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.extend(elements);
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher + Clone> From<HashSet<T, S>> for SuperSet<T, S> {
    fn from(elements: HashSet<T, S>) -> Self {
        let mut set = Self::with_capacity_and_hasher(elements.len(), elements.hasher().clone());
        set.extend(elements);
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher> From<SuperSet<T, S>> for HashSet<T, S> {
    fn from(set: SuperSet<T, S>) -> Self {
        let mut elements = Self::with_capacity_and_hasher(set.len(), set.hash_builder);
        elements.extend(set.entries);
        elements
    }
}

impl<T, S> IntoIterator for SuperSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a SuperSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for SuperSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for SuperSet<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for SuperSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for SuperSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for SuperSet<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SuperSetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for SuperSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = SuperSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(4096);
        let mut set = SuperSet::with_capacity_and_hasher(capacity, S::default());
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for SuperSet<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SuperSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
