//! Gauge styling and template options for the terminal display.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use progress_grid::progress::GaugeStyle;
//!
//! let style = GaugeStyle::default();
//! assert!(style.is_enabled());
//! ```
//!
//! ## Custom Styling
//!
//! ```rust
//! use progress_grid::progress::GaugeStyle;
//!
//! let style = GaugeStyle::new(Some(GaugeStyle::CHARS_LINE.to_string()), Some(100), true);
//! assert_eq!(style.columns(), Some(100));
//! ```
//!
//! ## Hidden Gauges
//!
//! ```rust
//! use progress_grid::progress::GaugeStyle;
//!
//! let hidden = GaugeStyle::hidden();
//! assert!(!hidden.is_enabled());
//! ```

use crate::color::Color;
use crate::error::Result;

use console::Style;
use indicatif::ProgressStyle;

/// Define the options used to draw gauges and text blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaugeStyle {
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Width of the display in terminal columns, detected when unset.
    columns: Option<u16>,
    /// Enable or disable drawing.
    enabled: bool,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            progress_chars: Some(GaugeStyle::CHARS_FINE.into()),
            columns: None,
            enabled: true,
        }
    }
}

impl GaugeStyle {
    /// Use increasing quarter blocks as progress characters: `"█▛▌▖  "`.
    pub const CHARS_BLOCKY: &'static str = "█▛▌▖  ";
    /// Use fade-in blocks as progress characters: `"█▓▒░  "`.
    pub const CHARS_FADE_IN: &'static str = "█▓▒░  ";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";
    /// Use rough blocks as progress characters: `"█  "`.
    pub const CHARS_ROUGH: &'static str = "█  ";

    /// Width used when the terminal size cannot be detected.
    pub const FALLBACK_COLUMNS: u16 = 80;

    /// Create a new [`GaugeStyle`].
    pub fn new(progress_chars: Option<String>, columns: Option<u16>, enabled: bool) -> Self {
        Self {
            progress_chars,
            columns,
            enabled,
        }
    }

    /// Create a new [`GaugeStyle`] which draws nothing.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..GaugeStyle::default()
        }
    }

    /// Return `false` if drawing is disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Fixed display width, if one was set.
    pub fn columns(&self) -> Option<u16> {
        self.columns
    }

    /// Set a fixed display width instead of detecting the terminal's.
    pub fn set_columns(&mut self, columns: u16) {
        self.columns = Some(columns);
    }

    /// Set the progression characters.
    pub fn set_progress_chars(&mut self, progress_chars: impl Into<String>) {
        self.progress_chars = Some(progress_chars.into());
    }

    /// Create a [`ProgressStyle`] from a template, using these options.
    pub fn to_progress_style(&self, template: &str) -> Result<ProgressStyle> {
        let mut style = ProgressStyle::default_bar().template(template)?;
        if let Some(ref progress_chars) = self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        Ok(style)
    }

    /// Template of a bordered gauge: the title on the top border, the bar
    /// inside.
    pub(crate) fn bordered_gauge_template(color: &Color, bar_width: u16) -> String {
        let border = Style::from_dotted_str(color.as_str());
        let rule = "─".repeat(usize::from(bar_width) + 7);
        format!(
            "{top} {{msg:.{c}}}\n{side} {{bar:{w}.{c}}} {{percent:>3}}%\n{bottom}",
            top = border.apply_to("╭─"),
            side = border.apply_to("│"),
            bottom = border.apply_to(format!("╰{rule}")),
            c = color,
            w = bar_width,
        )
    }

    /// Template of an unbordered gauge with its label cell on the left.
    pub(crate) fn labelled_gauge_template(color: &Color, label_width: u16, bar_width: u16) -> String {
        format!(
            "{{msg:<{lw}.{c}}} {{bar:{w}.{c}}} {{percent:>3}}%",
            lw = label_width,
            c = color,
            w = bar_width,
        )
    }

    /// Template of a text block, optionally framed by horizontal rules.
    pub(crate) fn text_template(color: Option<&Color>, bordered: bool, width: u16) -> String {
        let msg = match color {
            Some(c) => format!("{{msg:.{c}}}"),
            None => "{msg}".to_string(),
        };
        if !bordered {
            return msg;
        }

        let rule = "─".repeat(usize::from(width));
        format!("{rule}\n{msg}\n{rule}")
    }
}
