//!
//! This module defines `FrequencyDistribution`, the categorical frequency
//! table consumed by the dispersion engine. A distribution is built once,
//! either from a pre-aggregated mapping of label to count or from a list of
//! category assignments, and is not modified afterwards.
//!
use crate::errors::InvalidDistributionError;
use fxhash::FxHashMap;
use num_traits::PrimInt;
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::fmt::Display;
use std::hash::Hash;
use std::iter::FromIterator;

/// A category label. Strings and integer identifiers both qualify.
pub trait Category: Clone + Eq + Hash + Display {}

impl<T> Category for T where T: Clone + Eq + Hash + Display {}

/// Mapping from category label to observation count, in insertion order.
///
/// Labels are unique. Counts are stored as supplied, so a distribution may
/// still be rejected by [`compute`](crate::compute) if it is empty, if every
/// count is zero or if any count is negative.
#[derive(Debug, Clone)]
pub struct FrequencyDistribution<K> {
    entries: Vec<(K, i128)>,
    // label -> position in `entries`
    index: FxHashMap<K, usize>,
}

impl<K: Category> PartialEq for FrequencyDistribution<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Category> Eq for FrequencyDistribution<K> {}

impl<K: Category> FrequencyDistribution<K> {
    /// Build a distribution from `(label, count)` pairs. The count may be any
    /// primitive integer type.
    ///
    /// # Example
    /// ```rust
    /// use brookes_delta::FrequencyDistribution;
    /// let dist = FrequencyDistribution::from_counts([("A", 90), ("B", 5), ("C", 5)]).unwrap();
    /// assert_eq!(dist.len(), 3);
    /// assert_eq!(dist.count("A"), 90);
    /// assert!(FrequencyDistribution::from_counts([("A", 1), ("A", 2)]).is_err());
    /// ```
    pub fn from_counts<I, C>(counts: I) -> Result<Self, InvalidDistributionError>
    where
        I: IntoIterator<Item = (K, C)>,
        C: PrimInt,
    {
        let mut index: FxHashMap<K, usize> = FxHashMap::default();
        let mut entries = Vec::new();
        for (category, count) in counts {
            let count = count
                .to_i128()
                .ok_or(InvalidDistributionError::TotalOverflow)?;
            match index.entry(category.clone()) {
                Entry::Occupied(_) => {
                    return Err(InvalidDistributionError::DuplicateCategory {
                        category: category.to_string(),
                    })
                }
                Entry::Vacant(slot) => {
                    slot.insert(entries.len());
                }
            }
            entries.push((category, count));
        }
        Ok(FrequencyDistribution { entries, index })
    }

    /// Build a distribution by tallying one category assignment per
    /// observation. Categories are ordered by first appearance.
    ///
    /// # Example
    /// ```rust
    /// use brookes_delta::FrequencyDistribution;
    /// let dist = FrequencyDistribution::from_assignments(["x", "y", "x", "x"]);
    /// assert_eq!(dist.count("x"), 3);
    /// assert_eq!(dist.count("y"), 1);
    /// assert_eq!(dist.count("z"), 0);
    /// ```
    pub fn from_assignments(assignments: impl IntoIterator<Item = K>) -> Self {
        let mut index: FxHashMap<K, usize> = FxHashMap::default();
        let mut entries: Vec<(K, i128)> = Vec::new();
        for category in assignments {
            match index.entry(category) {
                Entry::Occupied(slot) => entries[*slot.get()].1 += 1,
                Entry::Vacant(slot) => {
                    entries.push((slot.key().clone(), 1));
                    slot.insert(entries.len() - 1);
                }
            }
        }
        FrequencyDistribution { entries, index }
    }

    /// Number of categories, including those with a zero count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no categories at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count recorded for `category`, 0 if it is absent.
    pub fn count<Q>(&self, category: &Q) -> i128
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(category)
            .map_or(0, |&i| self.entries[i].1)
    }

    /// Iterate over `(label, count)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, i128)> + '_ {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// Iterate over the labels in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl<K: Category> FromIterator<K> for FrequencyDistribution<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        FrequencyDistribution::from_assignments(iter)
    }
}
