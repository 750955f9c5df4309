//! A single concrete parameter assignment.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// One concrete key/value observation: an incident's labels, a trace's
/// key, an alert's annotations.
///
/// `Params` is what arrives on the wire alongside a record. It is tested
/// against a [`ParamSet`](crate::ParamSet) or absorbed into one. The wrapper
/// is serde-transparent, so it round-trips as a plain JSON object of
/// strings:
///
/// ```json
/// { "alertname": "BotMissing", "bot": "skia-rpi-064" }
/// ```
///
/// Keys iterate in sorted order, which is also the order display layers
/// show them in.
///
/// # Example
///
/// ```rust
/// use paramtools::Params;
///
/// let mut p = Params::new();
/// p.set("foo", "1");
/// p.set("bar", "a");
/// assert_eq!(p.get("foo").map(String::as_str), Some("1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Creates an empty `Params`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a single key, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

impl Deref for Params {
    type Target = BTreeMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Params {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<BTreeMap<String, String>> for Params {
    fn from(map: BTreeMap<String, String>) -> Self {
        Params(map)
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Params(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Params {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl Extend<(String, String)> for Params {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
