//! Terminal rendering of the progress grid.
//!
//! This module provides the `indicatif` backed [`Renderer`](crate::render::Renderer)
//! used by default, and the options that control how it draws.
//!
//! # Overview
//!
//! - `style` - Gauge characters, display width and templates
//! - `display` - The [`TerminalDisplay`] renderer
//!
//! # Examples
//!
//! ## Custom Gauge Styling
//!
//! ```rust
//! use progress_grid::progress::GaugeStyle;
//! use progress_grid::ProgressBuilder;
//!
//! # fn main() -> progress_grid::Result<()> {
//! let mut style = GaugeStyle::hidden();
//! style.set_progress_chars(GaugeStyle::CHARS_ROUGH);
//! style.set_columns(120);
//!
//! let manager = ProgressBuilder::new(4).style(style).build()?;
//! assert_eq!(manager.len(), 4);
//! # Ok(())
//! # }
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::TerminalDisplay;
pub use style::GaugeStyle;
