//! Silences, incidents, and the filter that pairs them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::params::Params;
use crate::paramset::ParamSet;

/// Cap on how many matching silences a display surface shows per incident.
pub const MAX_MATCHING_SILENCES: usize = 50;

/// A timestamped comment attached to an incident or silence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
    /// Unix seconds.
    #[serde(default)]
    pub ts: i64,
}

/// A suppression rule: incidents whose params match `param_set` are
/// silenced while the silence is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Silence {
    pub key: String,
    #[serde(default)]
    pub user: String,
    pub param_set: ParamSet,
    /// Unix seconds.
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Silence {
    /// True when the silence carries at least one real note. A single note
    /// with empty text is the backend's placeholder and does not count.
    pub fn has_notes(&self) -> bool {
        match self.notes.as_slice() {
            [] => false,
            [only] => !only.text.is_empty(),
            _ => true,
        }
    }
}

/// One firing alert and the label params it fired with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub key: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub active: bool,
    /// Unix seconds.
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub last_seen: i64,
    pub params: Params,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Incident {
    /// Seconds between first and last sighting, clamped at zero. Feeds
    /// [`duration_string`](crate::duration_string) for display.
    pub fn duration_secs(&self) -> u64 {
        self.last_seen.saturating_sub(self.start).max(0) as u64
    }
}

/// Returns the silences whose param set matches `params`, in input order,
/// capped at [`MAX_MATCHING_SILENCES`].
///
/// With `require_notes` set, silences without a real note are dropped
/// before the cap is applied (the "show only silences with comments"
/// toggle).
pub fn matching_silences<'a>(
    silences: &'a [Silence],
    params: &Params,
    require_notes: bool,
) -> Vec<&'a Silence> {
    let matched: Vec<&Silence> = silences
        .iter()
        .filter(|s| s.param_set.matches(params))
        .filter(|s| !require_notes || s.has_notes())
        .take(MAX_MATCHING_SILENCES)
        .collect();
    debug!(
        total = silences.len(),
        matched = matched.len(),
        require_notes,
        "silence_match"
    );
    matched
}
