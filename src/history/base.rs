//! Base path handling.
//!
//! The host stores full hrefs (`/app/rooms`); the router works with
//! app-relative locations (`/rooms`). `Base` converts between the two.

/// A normalized base path. The root base is stored as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base(String);

impl Base {
    /// Normalize a configured base: leading slash added, trailing slash removed.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        if trimmed.starts_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("/{}", trimmed))
        }
    }

    pub fn as_str(&self) -> &str {
        if self.0.is_empty() {
            "/"
        } else {
            &self.0
        }
    }

    /// Remove the base from an href. Hrefs outside the base are returned as-is.
    pub fn strip(&self, href: &str) -> String {
        if self.0.is_empty() {
            return href.to_string();
        }
        match href.strip_prefix(self.0.as_str()) {
            Some("") => "/".to_string(),
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            Some(rest) if rest.starts_with('?') || rest.starts_with('#') => format!("/{}", rest),
            _ => href.to_string(),
        }
    }

    /// Prefix an app-relative location with the base.
    pub fn href(&self, location: &str) -> String {
        format!("{}{}", self.0, location)
    }
}
