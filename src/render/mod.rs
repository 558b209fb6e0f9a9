//! The rendering collaborator.
//!
//! The manager never draws anything itself: after every mutation it composes
//! a fresh [`Layout`] and hands it to a [`Renderer`]. Swapping the renderer is
//! how hosts pick a terminal backend, and how tests observe what would have
//! been drawn.
//!
//! - [`TerminalDisplay`](crate::progress::TerminalDisplay) draws with `indicatif`.
//! - [`NullRenderer`] discards every frame.
//! - [`RecordingRenderer`] keeps every frame for later inspection.
//!
//! # Examples
//!
//! ```rust
//! use progress_grid::render::RecordingRenderer;
//! use progress_grid::ProgressBuilder;
//!
//! # fn main() -> progress_grid::Result<()> {
//! let recorder = RecordingRenderer::new();
//! let manager = ProgressBuilder::new(1)
//!     .renderer(recorder.clone())
//!     .build()?;
//!
//! manager.set(0, "working", 10)?;
//!
//! // One frame at construction, one for the update.
//! assert_eq!(recorder.frames(), 2);
//! # Ok(())
//! # }
//! ```

mod recording;

pub use recording::RecordingRenderer;

use crate::error::Result;
use crate::layout::Layout;

/// Something that can draw a [`Layout`].
///
/// The manager serializes every call, so implementations never see two
/// concurrent `render` calls.
pub trait Renderer: Send {
    /// Redraw the whole layout.
    fn render(&mut self, layout: &Layout) -> Result<()>;

    /// Release the drawing surface. The default does nothing.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, layout: &Layout) -> Result<()> {
        (**self).render(layout)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// A renderer which draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _layout: &Layout) -> Result<()> {
        Ok(())
    }
}
