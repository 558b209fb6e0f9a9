//! Error handling for the progress grid.
//!
//! Indexed slot operations fail with [`Error::OutOfRange`] before touching any
//! state. Failures of the rendering collaborator are surfaced unchanged, both
//! from [`ProgressBuilder::build`](crate::ProgressBuilder::build) and from the
//! mutating operations that redraw.

use indicatif::style::TemplateError;
use std::io;
use thiserror::Error;

/// Errors that can happen when driving a progress grid.
#[derive(Error, Debug)]
pub enum Error {
    /// A slot index outside `[0, len)` was used.
    ///
    /// No slot is modified when this is returned.
    #[error("slot index {index} out of range (0..{len})")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of slots the manager was built with.
        len: usize,
    },

    /// A terminal template could not be parsed.
    ///
    /// This usually means a color token is not understood by the terminal
    /// style parser.
    #[error("invalid gauge template")]
    Template {
        #[from]
        source: TemplateError,
    },

    /// I/O Error.
    ///
    /// This variant wraps terminal write failures, such as clearing the
    /// display when it is released.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// The rendering collaborator failed.
    #[error("render error: {0}")]
    Render(String),
}

/// Result type alias for progress grid operations.
pub type Result<T> = std::result::Result<T, Error>;
