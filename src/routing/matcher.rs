//! Route matching logic.
//!
//! # Responsibilities
//! - Match decoded location segments against a compiled pattern
//! - Capture parameter values
//! - Detect when two patterns could match the same location
//!
//! # Design Decisions
//! - Literal matching is case-insensitive unless `sensitive`
//! - Parameters capture verbatim and only bind non-empty segments
//! - Segment counts must be equal (patterns are anchored at both ends)
//! - Under `strict`, a pattern's trailing slash is a required empty last
//!   segment; otherwise it is ignored
//! - No regex to guarantee O(n) matching

use crate::routing::pattern::{PathPattern, Segment};
use crate::routing::table::MatchOptions;
use crate::routing::types::{Params, RouteResult};

/// A pattern compiled with the table's matching rules.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: PathPattern,
    options: MatchOptions,
}

impl PatternMatcher {
    pub fn new(pattern: PathPattern, options: MatchOptions) -> Self {
        Self { pattern, options }
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// True when matched locations must end in `/`.
    fn requires_trailing_slash(&self) -> bool {
        self.options.strict && self.pattern.has_trailing_slash()
    }

    fn literal_eq(&self, a: &str, b: &str) -> bool {
        if self.options.sensitive {
            a == b
        } else {
            a.to_lowercase() == b.to_lowercase()
        }
    }

    /// Returns the captured parameters if the segments match this pattern.
    pub fn capture(&self, segments: &[String]) -> Option<Params> {
        let segments = if self.requires_trailing_slash() {
            match segments.split_last() {
                Some((last, rest)) if last.is_empty() => rest,
                _ => return None,
            }
        } else {
            segments
        };

        let expected = self.pattern.segments();
        if expected.len() != segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (seg, actual) in expected.iter().zip(segments) {
            match seg {
                Segment::Literal(lit) => {
                    if !self.literal_eq(lit, actual) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), actual.clone());
                }
            }
        }
        Some(params)
    }

    /// Returns true if some location would be matched by both patterns.
    ///
    /// Literals are never empty and parameters accept any non-empty segment,
    /// so two patterns overlap exactly when they have the same shape and no
    /// position holds two different literals.
    pub fn overlaps(&self, other: &PatternMatcher) -> bool {
        if self.requires_trailing_slash() != other.requires_trailing_slash() {
            return false;
        }

        let ours = self.pattern.segments();
        let theirs = other.pattern.segments();
        if ours.len() != theirs.len() {
            return false;
        }

        ours.iter().zip(theirs).all(|pair| match pair {
            (Segment::Literal(a), Segment::Literal(b)) => self.literal_eq(a, b),
            _ => true,
        })
    }

    /// Build a concrete path, honoring the trailing slash under `strict`.
    pub fn build(&self, route: &str, params: &Params) -> RouteResult<String> {
        self.pattern
            .build(route, params, self.requires_trailing_slash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher_with(pattern: &str, strict: bool, sensitive: bool) -> PatternMatcher {
        PatternMatcher::new(
            PathPattern::parse(pattern).unwrap(),
            MatchOptions { strict, sensitive },
        )
    }

    fn matcher(pattern: &str, sensitive: bool) -> PatternMatcher {
        matcher_with(pattern, false, sensitive)
    }

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_literal_matcher() {
        let m = matcher("/rooms", false);
        assert_eq!(m.capture(&segs(&["rooms"])), Some(Params::new()));
        assert_eq!(m.capture(&segs(&["ROOMS"])), Some(Params::new())); // Case insensitive
        assert!(m.capture(&segs(&["rooms", "1"])).is_none());
        assert!(m.capture(&segs(&[])).is_none());

        let strict_case = matcher("/rooms", true);
        assert!(strict_case.capture(&segs(&["ROOMS"])).is_none());
    }

    #[test]
    fn test_param_capture() {
        let m = matcher("/rooms/:id", false);
        let params = m.capture(&segs(&["rooms", "General Chat"])).unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("General Chat"));

        // Parameter values keep their case even when literals do not
        let params = m.capture(&segs(&["Rooms", "AbC"])).unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("AbC"));
    }

    #[test]
    fn test_param_rejects_empty_segment() {
        let m = matcher("/rooms/:id", false);
        assert!(m.capture(&segs(&["rooms", ""])).is_none());
    }

    #[test]
    fn test_root_matcher() {
        let m = matcher("/", false);
        assert_eq!(m.capture(&segs(&[])), Some(Params::new()));
        assert!(m.capture(&segs(&["x"])).is_none());
    }

    #[test]
    fn test_strict_trailing_slash_capture() {
        let slashed = matcher_with("/rooms/", true, false);
        assert_eq!(slashed.capture(&segs(&["rooms", ""])), Some(Params::new()));
        assert!(slashed.capture(&segs(&["rooms"])).is_none());

        let bare = matcher_with("/rooms", true, false);
        assert!(bare.capture(&segs(&["rooms", ""])).is_none());

        // Not strict: the slash in the pattern carries no weight
        let loose = matcher_with("/rooms/", false, false);
        assert_eq!(loose.capture(&segs(&["rooms"])), Some(Params::new()));
    }

    #[test]
    fn test_overlaps_either_order() {
        let by_id = matcher("/rooms/:id", false);
        let new_room = matcher("/rooms/new", false);
        assert!(by_id.overlaps(&new_room));
        assert!(new_room.overlaps(&by_id));

        assert!(by_id.overlaps(&matcher("/rooms/:slug", false)));
        assert!(!by_id.overlaps(&matcher("/rooms", false)));
        assert!(!new_room.overlaps(&matcher("/rooms/old", false)));
    }

    #[test]
    fn test_overlaps_crossed_params() {
        // Both match /y/x
        let a = matcher("/:a/x", false);
        let b = matcher("/y/:b", false);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_case_and_strict_rules() {
        assert!(matcher("/rooms/new", false).overlaps(&matcher("/Rooms/NEW", false)));
        assert!(!matcher("/rooms/new", true).overlaps(&matcher("/Rooms/NEW", true)));

        assert!(!matcher_with("/rooms/", true, false).overlaps(&matcher_with("/rooms", true, false)));
        assert!(matcher_with("/rooms/", false, false).overlaps(&matcher_with("/rooms", false, false)));
    }
}
