//! Ignore rules: a query-string constraint with an expiration and a note.
//!
//! A rule suppresses matching results until it expires. The constraint is
//! stored in query-string form (see [`ParamSet::from_query`]) so rules stay
//! human-readable in storage and in review UIs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{QueryError, RuleError};
use crate::human::approx_duration;
use crate::params::Params;
use crate::paramset::ParamSet;

/// A single ignore rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreRule {
    /// Query-string constraint, e.g. `config=8888&name=ninepatch-stretch`.
    pub query: String,
    /// Absolute expiration time.
    pub expires: DateTime<Utc>,
    /// Free-text reason, usually a bug link.
    #[serde(default)]
    pub note: String,
    /// Who created the rule.
    #[serde(default)]
    pub created_by: String,
    /// Who last edited the rule.
    #[serde(default)]
    pub updated_by: String,
}

impl IgnoreRule {
    /// Creates a rule with empty note and authorship fields.
    pub fn new(query: impl Into<String>, expires: DateTime<Utc>) -> Self {
        IgnoreRule {
            query: query.into(),
            expires,
            note: String::new(),
            created_by: String::new(),
            updated_by: String::new(),
        }
    }

    /// Checks that the rule is storable: a non-empty query that decodes,
    /// and an expiration still in the future. A rule failing any of these
    /// would either match nothing or stop mattering immediately.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), RuleError> {
        if self.query.trim().is_empty() {
            let err = RuleError::EmptyQuery;
            warn!(error = %err, "ignore_rule_invalid");
            return Err(err);
        }
        if let Err(err) = ParamSet::from_query(&self.query) {
            warn!(query = %self.query, error = %err, "ignore_rule_invalid");
            return Err(err.into());
        }
        if self.is_expired(now) {
            warn!(query = %self.query, expires = %self.expires, "ignore_rule_invalid");
            return Err(RuleError::Expired);
        }
        Ok(())
    }

    /// True once the expiration has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }

    /// Remaining lifetime as display text: the approximate duration until
    /// expiry (`"6d"` for six days and change), or the empty string once
    /// expired, which is the caller's cue to require a fresh expiration.
    pub fn expires_text(&self, now: DateTime<Utc>) -> String {
        let remaining = self.expires.signed_duration_since(now).num_seconds();
        if remaining <= 0 {
            return String::new();
        }
        approx_duration(remaining as u64)
    }

    /// The rule's constraint as a [`ParamSet`].
    pub fn param_set(&self) -> Result<ParamSet, QueryError> {
        ParamSet::from_query(&self.query)
    }

    /// True when `params` falls under this rule's constraint. Expiry is not
    /// consulted here; pair with [`is_expired`](IgnoreRule::is_expired) when
    /// filtering live traffic.
    pub fn matches(&self, params: &Params) -> Result<bool, QueryError> {
        Ok(self.param_set()?.matches(params))
    }
}
