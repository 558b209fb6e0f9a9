//! Color tokens for gauges, labels and borders.
//!
//! A [`Color`] is an opaque name handed through to the renderer's color space.
//! The terminal renderer feeds it to the `console` dotted style syntax, so
//! `"red"`, `"cyan.bold"` or `"color(208)"`-style tokens are all accepted as-is.

use std::fmt;

/// An opaque color token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Name of the color every gauge starts with.
    pub const ACTIVE: &'static str = "green";

    /// Create a color from its name. Blank names fall back to [`Color::ACTIVE`].
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self(trimmed.to_string())
    }

    /// The token as passed to the renderer.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(Self::ACTIVE.to_string())
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::new(name)
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color::new(name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Look up a color by name.
pub fn color(name: &str) -> Color {
    Color::new(name)
}
