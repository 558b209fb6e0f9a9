//! Builder pattern implementation for creating [`ProgressManager`] instances.
//!
//! The builder collects every option first; nothing is allocated and nothing
//! is drawn until [`ProgressBuilder::build`] runs.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use progress_grid::ProgressBuilder;
//!
//! # fn main() -> progress_grid::Result<()> {
//! let manager = ProgressBuilder::hidden(10)
//!     .border(true)
//!     .header(2)
//!     .messages(10)
//!     .build()?;
//!
//! manager.set_header("Example application")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Renderer
//!
//! ```rust
//! use progress_grid::render::RecordingRenderer;
//! use progress_grid::ProgressBuilder;
//!
//! # fn main() -> progress_grid::Result<()> {
//! let recorder = RecordingRenderer::new();
//! let manager = ProgressBuilder::new(2).renderer(recorder.clone()).build()?;
//! assert_eq!(recorder.frames(), 1);
//! # Ok(())
//! # }
//! ```

use super::{config::ProgressConfig, manager::ProgressManager};
use crate::error::Result;
use crate::progress::{GaugeStyle, TerminalDisplay};
use crate::render::Renderer;

/// A builder used to create a [`ProgressManager`].
pub struct ProgressBuilder {
    config: ProgressConfig,
    renderer: Option<Box<dyn Renderer>>,
}

impl std::fmt::Debug for ProgressBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBuilder")
            .field("config", &self.config)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

impl ProgressBuilder {
    /// Creates a builder for `slots` gauges with the default options.
    pub fn new(slots: usize) -> Self {
        Self {
            config: ProgressConfig {
                slots,
                ..ProgressConfig::default()
            },
            renderer: None,
        }
    }

    /// Convenience function to hide the terminal display.
    pub fn hidden(slots: usize) -> Self {
        Self::new(slots).style(GaugeStyle::hidden())
    }

    /// Draw every gauge inside a border titled with its label.
    pub fn border(mut self, border: bool) -> Self {
        self.config.border = border;
        self
    }

    /// Reserve a header block of `lines` text lines.
    pub fn header(mut self, lines: usize) -> Self {
        self.config.header_lines = Some(lines);
        self
    }

    /// Reserve a message block showing the last `lines` messages.
    pub fn messages(mut self, lines: usize) -> Self {
        self.config.message_lines = Some(lines);
        self
    }

    /// Set the style of the default terminal display.
    ///
    /// Ignored when a custom renderer is set.
    pub fn style(mut self, style: GaugeStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Replace the terminal display with another renderer.
    pub fn renderer<R>(mut self, renderer: R) -> Self
    where
        R: Renderer + 'static,
    {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Get a reference to the configuration collected so far.
    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Create the [`ProgressManager`] and draw it once.
    ///
    /// Fails if the renderer cannot draw the initial layout.
    pub fn build(self) -> Result<ProgressManager> {
        let Self { config, renderer } = self;
        let renderer: Box<dyn Renderer> = match renderer {
            Some(renderer) => renderer,
            None => Box::new(TerminalDisplay::new(config.style.clone())),
        };
        ProgressManager::new(config, renderer)
    }
}
