//! Progress-grid is a crate for showing the progress of many concurrent tasks
//! in the terminal: one gauge per task, an optional header, and a scrolling
//! log of status messages.
//!
//! # Quick Start
//!
//! ```rust
//! use progress_grid::{percent::perc_int, Error, ProgressBuilder};
//!
//! # fn main() -> Result<(), Error> {
//! let progress = ProgressBuilder::hidden(2)
//!     .border(true)
//!     .header(2)
//!     .messages(10)
//!     .build()?;
//!
//! progress.set_header("Example application\nTwo tasks")?;
//! progress.set(0, "Task 0", perc_int(3, 10))?;
//! progress.set(1, "Task 1 Done!", 100)?;
//! progress.add_message("Task 1 Done!")?;
//!
//! println!("{}", progress.messages().join("\n"));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`manager`] - The [`ProgressManager`] facade, its builder and configuration
//! - [`layout`] - The 12-column layout tree handed to renderers
//! - [`render`] - The [`Renderer`] trait and test renderers
//! - [`progress`] - The `indicatif` terminal display and its styling
//! - [`messages`] - The bounded-view message log
//! - [`percent`] - Percentage helpers
//! - [`color`] - Color tokens
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod color;
pub mod error;
pub mod layout;
pub mod manager;
pub mod messages;
pub mod percent;
pub mod progress;
pub mod render;
pub mod slot;

pub use color::{color, Color};
pub use error::{Error, Result};
pub use layout::{Cell, Layout, TextRole};
pub use manager::{ProgressBuilder, ProgressConfig, ProgressManager};
pub use messages::MessageLog;
pub use percent::{perc_float, perc_i64, perc_int};
pub use progress::{GaugeStyle, TerminalDisplay};
pub use render::{NullRenderer, RecordingRenderer, Renderer};
pub use slot::Slot;
