//! Location parsing.
//!
//! # Responsibilities
//! - Split a raw location into path, query and hash
//! - Decode the query string (form-urlencoded)
//! - Split the path into percent-decoded segments
//!
//! # Design Decisions
//! - Segments are decoded after splitting, so `%2F` stays inside one segment
//! - Invalid UTF-8 in an encoded segment is replaced, never rejected
//! - A path that is not absolute yields no segments at all (never matches)

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

/// A requested location, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path component as written (still percent-encoded).
    pub path: String,
    /// Decoded query pairs. Later duplicates win.
    pub query: BTreeMap<String, String>,
    /// Fragment without the leading `#`.
    pub hash: Option<String>,
}

impl Location {
    /// Parse a raw location such as `/rooms/42?tab=chat#bottom`.
    pub fn parse(raw: &str) -> Self {
        let (before_hash, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };

        let (path, query) = match before_hash.split_once('?') {
            Some((path, query)) => (path, query),
            None => (before_hash, ""),
        };

        let query = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let path = if path.is_empty() { "/" } else { path };

        Self {
            path: path.to_string(),
            query,
            hash,
        }
    }

    /// Decoded path segments, or `None` if the path is not absolute.
    ///
    /// The root path has zero segments. Unless `strict`, one trailing slash is
    /// dropped before splitting.
    pub fn segments(&self, strict: bool) -> Option<Vec<String>> {
        let mut body = self.path.strip_prefix('/')?;
        if !strict {
            body = body.strip_suffix('/').unwrap_or(body);
        }
        if body.is_empty() {
            return Some(Vec::new());
        }
        Some(
            body.split('/')
                .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
                .collect(),
        )
    }
}
