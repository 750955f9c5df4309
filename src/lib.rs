//! Parameter tooling shared by alerting and test-triage services.
//!
//! ## What this is
//!
//! Alerts, silences, and ignore rules all speak one small language: a record
//! carries string key/value labels ([`Params`]), and a constraint
//! accumulates the values it is willing to accept per key ([`ParamSet`]).
//! This crate is that language: the accumulation and matching rules, the
//! query-string form constraints are stored in, the `2w3d`-style duration
//! strings expirations are written in, and the record types that carry them.
//!
//! ## What we do
//!
//! - **Accumulate**: feed observed [`Params`] into a [`ParamSet`]; per-key
//!   value lists grow monotonically and never duplicate.
//! - **Match**: ask whether a concrete record is consistent with everything
//!   a set has absorbed. Every constrained key must be satisfied; unseen
//!   keys are free.
//! - **Encode**: round-trip a [`ParamSet`] through `key=value&key=value`
//!   query strings, the persisted form of an [`IgnoreRule`].
//! - **Humanize**: format and parse durations ([`duration_string`],
//!   [`approx_duration`], [`parse_duration`]) for expirations and
//!   incident-age display.
//! - **Filter**: pick the [`Silence`]s covering an [`Incident`]'s params,
//!   note-aware and capped for display ([`matching_silences`]).
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock reads, no global state. Time-dependent operations take
//! `now` as an argument. The only mutation anywhere is the documented
//! in-place growth of a [`ParamSet`] the caller owns; share one across
//! threads and the usual aliasing rules are all the synchronization there
//! is to think about.
//!
//! ## Example
//!
//! ```rust
//! use paramtools::{matching_silences, ParamSet, Params, Silence};
//!
//! // A silence that covers every BotMissing alert on two bots.
//! let mut covered = ParamSet::new();
//! covered.add(&[("alertname", "BotMissing"), ("bot", "skia-rpi-064")].into_iter().collect());
//! covered.add(&[("alertname", "BotMissing"), ("bot", "skia-rpi-102")].into_iter().collect());
//! let silence = Silence { key: "sil-1".into(), param_set: covered, active: true, ..Default::default() };
//!
//! // An incident fires with concrete labels.
//! let labels: Params =
//!     [("alertname", "BotMissing"), ("bot", "skia-rpi-102"), ("severity", "critical")]
//!         .into_iter()
//!         .collect();
//!
//! let silences = [silence];
//! assert_eq!(matching_silences(&silences, &labels, false).len(), 1);
//! ```

mod error;
mod human;
mod ignore;
mod params;
mod paramset;
mod query;
mod silence;

pub use crate::error::{DurationError, QueryError, RuleError};
pub use crate::human::{approx_duration, duration_string, expires_from_duration, parse_duration};
pub use crate::ignore::IgnoreRule;
pub use crate::params::Params;
pub use crate::paramset::ParamSet;
pub use crate::silence::{matching_silences, Incident, Note, Silence, MAX_MATCHING_SILENCES};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rule_query_and_matcher_agree() {
        let now = chrono::Utc
            .with_ymd_and_hms(2020, 2, 1, 0, 0, 0)
            .single()
            .expect("ts");
        let expires = expires_from_duration(now, "2w").expect("expiry");
        let rule = IgnoreRule::new("config=8888&config=565", expires);
        rule.validate(now).expect("rule validates");

        let gpu_trace: Params = [("config", "8888"), ("name", "ninepatch-stretch")]
            .into_iter()
            .collect();
        let other: Params = [("config", "gles"), ("name", "ninepatch-stretch")]
            .into_iter()
            .collect();

        assert_eq!(rule.matches(&gpu_trace), Ok(true));
        assert_eq!(rule.matches(&other), Ok(false));
        assert_eq!(rule.expires_text(now), "2w");
    }

    #[test]
    fn incident_age_renders_through_duration_string() {
        let incident = Incident {
            key: "inc-1".into(),
            start: 1_580_000_000,
            last_seen: 1_580_000_000 + 9 * 86400,
            params: [("alertname", "BotMissing")].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(duration_string(incident.duration_secs()), "1w2d");
    }

    #[test]
    fn paramset_survives_the_query_codec() {
        let mut ps = ParamSet::new();
        ps.add_ignored(
            &[("foo", "1"), ("bar", "a"), ("description", "long text")]
                .into_iter()
                .collect(),
            &["description"],
        );
        ps.add(&[("foo", "2"), ("bar", "b")].into_iter().collect());

        let reparsed = ParamSet::from_query(&ps.to_query()).expect("reparse");
        assert_eq!(reparsed, ps);
        assert!(reparsed.matches(&[("foo", "2"), ("bar", "a")].into_iter().collect()));
    }
}
