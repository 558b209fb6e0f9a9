//! Configuration of a progress grid.
//!
//! # Examples
//!
//! ```rust
//! use progress_grid::manager::ProgressConfig;
//!
//! let config = ProgressConfig {
//!     slots: 8,
//!     border: true,
//!     header_lines: Some(2),
//!     message_lines: Some(10),
//!     ..ProgressConfig::default()
//! };
//! assert!(config.has_header());
//! assert!(config.has_messages());
//! ```

use crate::progress::GaugeStyle;

/// Configuration structure for the progress manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Number of gauges.
    pub slots: usize,
    /// Draw each gauge inside a border titled with its label.
    pub border: bool,
    /// Text lines reserved for the header block, if any.
    pub header_lines: Option<usize>,
    /// Text lines reserved for the message block, if any.
    pub message_lines: Option<usize>,
    /// Style of the default terminal display.
    pub style: GaugeStyle,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            slots: 1,
            border: false,
            header_lines: None,
            message_lines: None,
            style: GaugeStyle::default(),
        }
    }
}

impl ProgressConfig {
    /// Whether a header block is shown.
    pub fn has_header(&self) -> bool {
        self.header_lines.is_some()
    }

    /// Whether a message block is shown.
    pub fn has_messages(&self) -> bool {
        self.message_lines.is_some()
    }

    /// Number of messages visible in the message block.
    pub fn message_window(&self) -> usize {
        self.message_lines.unwrap_or(0)
    }
}
