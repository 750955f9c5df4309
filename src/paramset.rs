//! Accumulated multi-valued constraints and the matching rule over them.
//!
//! A [`ParamSet`] records, per parameter key, every distinct value it has
//! been shown. Matching asks the reverse question: could this concrete
//! [`Params`] have been one of the records I absorbed? Silences use it to
//! decide which incidents they cover; ignore rules use it to decide which
//! traces they suppress.
//!
//! ## Matching rule
//!
//! Matching is universal quantification over the set's keys: *every* key
//! recorded in the set must appear in the candidate with one of the recorded
//! values. Keys the set has never seen impose no constraint, so a candidate
//! may carry extras freely. The empty set constrains nothing and therefore
//! matches everything.
//!
//! ## Example
//!
//! ```rust
//! use paramtools::{ParamSet, Params};
//!
//! let mut ps = ParamSet::new();
//! ps.add(&[("foo", "1"), ("bar", "a")].into_iter().collect());
//! ps.add(&[("foo", "2"), ("bar", "b")].into_iter().collect());
//!
//! // Values recorded independently per key: the cross product matches.
//! assert!(ps.matches(&[("foo", "2"), ("bar", "a")].into_iter().collect()));
//! // A constrained key missing from the candidate fails the whole match.
//! assert!(!ps.matches(&[("bar", "a")].into_iter().collect()));
//! ```

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::params::Params;

/// The set of values observed per parameter key.
///
/// Created empty, grown one [`Params`] record at a time via [`add`] or
/// [`add_ignored`], and queried via [`matches`]. Growth is monotonic: a
/// value once recorded is never removed, so a candidate that matches keeps
/// matching no matter what is added later. There is no removal operation;
/// rebuild from scratch instead of mutating down.
///
/// Per-key values keep insertion order and never duplicate. Keys live in a
/// sorted map, so iteration and serialization are deterministic. The wrapper
/// is serde-transparent and round-trips as a JSON object of string arrays:
///
/// ```json
/// { "foo": ["1", "2"], "bar": ["a", "b"] }
/// ```
///
/// Mutation goes through the `add` methods only; the [`Deref`] impl exposes
/// a read-only map view for iteration and lookups.
///
/// [`add`]: ParamSet::add
/// [`add_ignored`]: ParamSet::add_ignored
/// [`matches`]: ParamSet::matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet(BTreeMap<String, Vec<String>>);

impl ParamSet {
    /// Creates an empty `ParamSet`, which matches every `Params`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorbs one observation: every key in `params` grows that key's value
    /// list, creating the key on first occurrence. Re-adding a value the key
    /// already holds is a no-op, so `add` is idempotent per record.
    pub fn add(&mut self, params: &Params) {
        self.add_ignored(params, &[]);
    }

    /// Like [`add`](ParamSet::add), but keys named in `ignore_keys` are
    /// skipped entirely. Used to keep free-text keys such as descriptions
    /// out of the constraint.
    pub fn add_ignored(&mut self, params: &Params, ignore_keys: &[&str]) {
        for (key, value) in params.iter() {
            if ignore_keys.contains(&key.as_str()) {
                continue;
            }
            self.insert_value(key, value);
        }
    }

    /// Absorbs another `ParamSet` wholesale, value by value in its stored
    /// order, under the same dedup rule as [`add`](ParamSet::add).
    pub fn add_param_set(&mut self, other: &ParamSet) {
        for (key, values) in other.iter() {
            for value in values {
                self.insert_value(key, value);
            }
        }
    }

    pub(crate) fn insert_value(&mut self, key: &str, value: &str) {
        let values = self.0.entry(key.to_string()).or_default();
        // Per-key value counts stay small; a linear scan beats a set here.
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }

    /// Reports whether `params` is consistent with everything recorded.
    ///
    /// Every key in the set must be present in `params` with one of that
    /// key's recorded values; a constrained key that is missing, or present
    /// with an unrecorded value, fails the match. Candidate keys the set has
    /// never seen are ignored. Neither side is mutated.
    pub fn matches(&self, params: &Params) -> bool {
        self.0.iter().all(|(key, values)| {
            params
                .get(key)
                .is_some_and(|candidate| values.iter().any(|v| v == candidate))
        })
    }

    /// Sorts each key's value list in place.
    ///
    /// `add` preserves insertion order; callers that want a canonical form
    /// (stable diffs, content hashing) opt in here.
    pub fn normalize(&mut self) {
        for values in self.0.values_mut() {
            values.sort();
        }
    }
}

impl Deref for ParamSet {
    type Target = BTreeMap<String, Vec<String>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<BTreeMap<String, Vec<String>>> for ParamSet {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        ParamSet(map)
    }
}
