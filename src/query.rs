//! Query-string form of a [`ParamSet`].
//!
//! Ignore rules persist their constraint as a URL-style query string, e.g.
//! `alpha_type=Opaque&arch=arm&arch=x86_64`. Repeated keys accumulate
//! values, so the string is exactly a `ParamSet` in wire form. Decoding
//! handles `%XX` escapes and `+`-for-space; encoding percent-escapes
//! anything outside the unreserved set.

use crate::error::QueryError;
use crate::paramset::ParamSet;

impl ParamSet {
    /// Parses a `key=value&key=value` query string.
    ///
    /// Repeated keys accumulate values under the same dedup rule as
    /// [`add`](ParamSet::add). Empty segments (`a=b&&c=d`) are skipped.
    /// A pair without `=` or with an empty key is an error; the empty
    /// string decodes to the empty set.
    ///
    /// ```rust
    /// use paramtools::ParamSet;
    ///
    /// let ps = ParamSet::from_query("config=8888&config=565&arch=arm").unwrap();
    /// assert_eq!(ps.get("config").map(Vec::len), Some(2));
    /// ```
    pub fn from_query(query: &str) -> Result<ParamSet, QueryError> {
        let mut ps = ParamSet::new();
        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (raw_key, raw_value) = pair
                .split_once('=')
                .ok_or_else(|| QueryError::MalformedPair(pair.to_string()))?;
            let key = decode_component(raw_key, pair)?;
            if key.is_empty() {
                return Err(QueryError::EmptyKey(pair.to_string()));
            }
            let value = decode_component(raw_value, pair)?;
            ps.insert_value(&key, &value);
        }
        Ok(ps)
    }

    /// Encodes the set back into query-string form: keys in map order,
    /// values in stored order. Inverse of [`from_query`](ParamSet::from_query)
    /// up to the choice of escape (`%20` is emitted for spaces, `+` is only
    /// accepted on input).
    pub fn to_query(&self) -> String {
        let mut out = String::new();
        for (key, values) in self.iter() {
            for value in values {
                if !out.is_empty() {
                    out.push('&');
                }
                encode_component(key, &mut out);
                out.push('=');
                encode_component(value, &mut out);
            }
        }
        out
    }
}

fn decode_component(raw: &str, pair: &str) -> Result<String, QueryError> {
    let src = raw.as_bytes();
    let mut out = Vec::with_capacity(src.len());
    let mut i = 0;
    while i < src.len() {
        match src[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hi = src.get(i + 1).and_then(|b| hex_digit(*b));
                let lo = src.get(i + 2).and_then(|b| hex_digit(*b));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
                    _ => return Err(QueryError::InvalidEscape(pair.to_string())),
                }
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).map_err(|_| QueryError::InvalidUtf8(pair.to_string()))
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn encode_component(raw: &str, out: &mut String) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for &b in raw.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => {
                out.push('%');
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0xF) as usize] as char);
            }
        }
    }
}
