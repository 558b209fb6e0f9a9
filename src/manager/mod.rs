//! Manager module containing the progress grid facade, its builder and its
//! configuration.
//!
//! # Overview
//!
//! - `manager` - The [`ProgressManager`] owning slots, header and message log
//! - `builder` - [`ProgressBuilder`] for configuring a manager
//! - `config` - The [`ProgressConfig`] the builder produces
//!
//! # Examples
//!
//! ```rust
//! use progress_grid::ProgressBuilder;
//!
//! # fn main() -> progress_grid::Result<()> {
//! let manager = ProgressBuilder::hidden(3).border(true).messages(5).build()?;
//!
//! manager.set(1, "halfway", 50)?;
//! manager.set_color(1, "yellow")?;
//! manager.add_message("task 1 is halfway")?;
//!
//! assert_eq!(manager.slot(1)?.label(), "halfway");
//! assert!(manager.set(3, "nope", 0).is_err());
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
#[allow(clippy::module_inception)]
mod manager;

pub use builder::ProgressBuilder;
pub use config::ProgressConfig;
pub use manager::ProgressManager;
