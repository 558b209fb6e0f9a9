//! A renderer that remembers what it was asked to draw.

use super::Renderer;
use crate::error::Result;
use crate::layout::Layout;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Recording {
    frames: Vec<Layout>,
    finished: bool,
}

/// Records every rendered layout.
///
/// Clones share the same recording, so a test can keep one handle while the
/// manager owns the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    inner: Arc<Mutex<Recording>>,
}

impl RecordingRenderer {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> usize {
        self.lock().frames.len()
    }

    /// The most recent frame.
    pub fn last(&self) -> Option<Layout> {
        self.lock().frames.last().cloned()
    }

    /// All frames, oldest first.
    pub fn history(&self) -> Vec<Layout> {
        self.lock().frames.clone()
    }

    /// Whether [`Renderer::finish`] was called.
    pub fn is_finished(&self) -> bool {
        self.lock().finished
    }

    fn lock(&self) -> MutexGuard<'_, Recording> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, layout: &Layout) -> Result<()> {
        self.lock().frames.push(layout.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.lock().finished = true;
        Ok(())
    }
}
