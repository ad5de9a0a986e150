//! Path pattern parsing and reverse construction.
//!
//! # Syntax
//! ```text
//! /                    root, zero segments
//! /rooms               one literal segment
//! /rooms/:id           literal + parameter
//! /u/:user/files/:file multiple parameters
//! ```
//!
//! # Design Decisions
//! - Literal segments are stored percent-decoded, compared against decoded
//!   location segments
//! - A single trailing slash is recorded, not stored as a segment; only
//!   strict matching gives it weight
//! - Parameter names are `[A-Za-z0-9_]+` and unique within a pattern

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::routing::types::{Params, RouteError, RouteResult};

/// Characters escaped when writing a value into a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// One `/`-separated piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
    trailing_slash: bool,
}

impl PathPattern {
    /// Parse a pattern string.
    pub fn parse(pattern: &str) -> RouteResult<Self> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let body = pattern
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;
        let (body, trailing_slash) = match body.strip_suffix('/') {
            Some(rest) => (rest, true),
            None => (body, false),
        };

        let mut segments = Vec::new();
        if !body.is_empty() {
            for raw in body.split('/') {
                if raw.is_empty() {
                    return Err(invalid("empty segment"));
                }
                match raw.strip_prefix(':') {
                    Some(name) => {
                        if name.is_empty() {
                            return Err(invalid("parameter name is empty"));
                        }
                        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                            return Err(invalid(&format!(
                                "parameter name '{}' must be alphanumeric or '_'",
                                name
                            )));
                        }
                        if segments
                            .iter()
                            .any(|s| matches!(s, Segment::Param(p) if p == name))
                        {
                            return Err(invalid(&format!("parameter '{}' repeats", name)));
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => {
                        let literal = percent_encoding::percent_decode_str(raw)
                            .decode_utf8_lossy()
                            .into_owned();
                        segments.push(Segment::Literal(literal));
                    }
                }
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
            trailing_slash,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the pattern was written with a trailing slash (`/rooms/`).
    /// Always false for the root pattern.
    pub fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    /// Names of the parameter segments, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Build a concrete path from parameter values.
    ///
    /// `route` only labels the error. Empty values count as missing since they
    /// could never be matched back. With `trailing_slash` set, a pattern
    /// written as `/rooms/` builds `/rooms/`.
    pub fn build(&self, route: &str, params: &Params, trailing_slash: bool) -> RouteResult<String> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(lit) => path.extend(utf8_percent_encode(lit, SEGMENT)),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouteError::MissingParameter {
                            route: route.to_string(),
                            param: name.clone(),
                        })?;
                    path.extend(utf8_percent_encode(value, SEGMENT));
                }
            }
        }
        if trailing_slash && self.trailing_slash {
            path.push('/');
        }
        Ok(path)
    }
}
