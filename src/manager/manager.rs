//! Core progress manager.
//!
//! The [`ProgressManager`] owns the slots, the header text, the message log
//! and the renderer. Every mutation goes through one lock that also guards the
//! renderer, so many producer tasks can share one manager behind an `Arc`.
//!
//! # Examples
//!
//! ## Updating gauges from several threads
//!
//! ```rust
//! use progress_grid::percent::perc_int;
//! use progress_grid::ProgressBuilder;
//! use std::sync::Arc;
//! use std::thread;
//!
//! # fn main() -> progress_grid::Result<()> {
//! let manager = Arc::new(ProgressBuilder::hidden(4).messages(3).build()?);
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|slot| {
//!         let manager = Arc::clone(&manager);
//!         thread::spawn(move || -> progress_grid::Result<()> {
//!             for step in 0..=10 {
//!                 manager.set(slot, format!("task {slot}"), perc_int(step, 10))?;
//!             }
//!             manager.add_message_fmt(format_args!("task {slot} done"))
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().expect("producer panicked")?;
//! }
//!
//! assert_eq!(manager.messages().len(), 4);
//! assert_eq!(manager.visible_messages().len(), 3);
//! # Ok(())
//! # }
//! ```

use super::config::ProgressConfig;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::layout::{compose, Layout};
use crate::messages::MessageLog;
use crate::render::Renderer;
use crate::slot::Slot;

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// Everything a redraw reads, guarded together with the renderer.
struct State {
    slots: Vec<Slot>,
    header: Option<String>,
    renderer: Box<dyn Renderer>,
}

/// Owns the gauges of a progress grid and redraws them on every change.
///
/// A manager is created via its builder:
///
/// ```rust
/// # fn main() -> progress_grid::Result<()> {
/// use progress_grid::ProgressBuilder;
///
/// let manager = ProgressBuilder::hidden(3).build()?;
/// assert_eq!(manager.len(), 3);
/// # Ok(())
/// # }
/// ```
pub struct ProgressManager {
    config: ProgressConfig,
    state: Mutex<State>,
    log: MessageLog,
}

impl fmt::Debug for ProgressManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressManager")
            .field("config", &self.config)
            .field("messages", &self.log.len())
            .finish()
    }
}

impl ProgressManager {
    /// Builds the slots and draws the initial layout.
    pub(crate) fn new(config: ProgressConfig, renderer: Box<dyn Renderer>) -> Result<Self> {
        debug!(
            slots = config.slots,
            border = config.border,
            header = ?config.header_lines,
            messages = ?config.message_lines,
            "Creating progress manager"
        );

        let slots = (0..config.slots)
            .map(|index| Slot::new(index, config.border))
            .collect();
        let header = config.header_lines.map(|_| String::new());
        let log = MessageLog::new(config.message_window());

        let manager = Self {
            config,
            state: Mutex::new(State {
                slots,
                header,
                renderer,
            }),
            log,
        };

        manager.redraw(&mut manager.lock())?;
        Ok(manager)
    }

    /// Gets the configuration the manager was built with.
    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.config.slots
    }

    /// Whether the manager has no slot at all.
    pub fn is_empty(&self) -> bool {
        self.config.slots == 0
    }

    /// Replace the header text.
    ///
    /// Does nothing if no header was configured.
    pub fn set_header(&self, text: impl Into<String>) -> Result<()> {
        let mut state = self.lock();
        match state.header {
            Some(ref mut header) => *header = text.into(),
            None => return Ok(()),
        }
        self.redraw(&mut state)
    }

    /// Replace the header text with formatted arguments.
    pub fn set_header_fmt(&self, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.config.has_header() {
            return Ok(());
        }
        self.set_header(args.to_string())
    }

    /// Set the label and fill level of a slot.
    ///
    /// The label becomes the border title in bordered mode, the text of the
    /// label cell otherwise. `percent` is clamped to 100.
    pub fn set(&self, index: usize, label: impl Into<String>, percent: u8) -> Result<()> {
        let mut state = self.lock();
        let slot = Self::slot_mut(&mut state, index)?;
        slot.update(label.into(), percent);
        trace!(index, percent = slot.percent(), "Slot updated");
        self.redraw(&mut state)
    }

    /// Change the fill color of a slot, along with its border or label color.
    ///
    /// If the renderer rejects the color, the slot keeps its previous color
    /// and the error is returned.
    pub fn set_color(&self, index: usize, color: impl Into<Color>) -> Result<()> {
        let mut state = self.lock();
        let slot = Self::slot_mut(&mut state, index)?;
        let previous = slot.color().clone();
        slot.set_color(color.into());
        trace!(index, color = %slot.color(), "Slot color updated");

        let result = self.redraw(&mut state);
        if result.is_err() {
            debug!(index, color = %previous, "Color rejected by renderer, restoring");
            Self::slot_mut(&mut state, index)?.set_color(previous);
        }
        result
    }

    /// Append a message to the log.
    ///
    /// The message block is redrawn if one was configured; otherwise the
    /// message is only kept for [`messages`](Self::messages).
    pub fn add_message(&self, text: impl Into<String>) -> Result<()> {
        self.log.append(text);
        trace!(count = self.log.len(), "Message added");

        if !self.config.has_messages() {
            return Ok(());
        }
        self.redraw(&mut self.lock())
    }

    /// Append a message built from formatted arguments.
    pub fn add_message_fmt(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.add_message(args.to_string())
    }

    /// The full message history, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.log.all()
    }

    /// The messages currently shown in the message block.
    pub fn visible_messages(&self) -> Vec<String> {
        self.log.visible_tail()
    }

    /// A snapshot of one slot.
    pub fn slot(&self, index: usize) -> Result<Slot> {
        let mut state = self.lock();
        Self::slot_mut(&mut state, index).cloned()
    }

    /// A snapshot of every slot, in index order.
    pub fn slots(&self) -> Vec<Slot> {
        self.lock().slots.clone()
    }

    /// The header text, if a header was configured.
    pub fn header(&self) -> Option<String> {
        self.lock().header.clone()
    }

    /// Compose the layout from the current state.
    pub fn layout(&self) -> Layout {
        self.compose(&self.lock())
    }

    /// Release the rendering surface.
    ///
    /// The manager stays usable; a later mutation draws again.
    pub fn finish(&self) -> Result<()> {
        debug!("Finishing progress manager");
        self.lock().renderer.finish()
    }

    fn slot_mut(state: &mut State, index: usize) -> Result<&mut Slot> {
        let len = state.slots.len();
        state
            .slots
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    fn compose(&self, state: &State) -> Layout {
        let tail = match self.config.has_messages() {
            true => self.log.visible_tail(),
            false => Vec::new(),
        };
        compose(&self.config, &state.slots, state.header.as_deref(), &tail)
    }

    fn redraw(&self, state: &mut State) -> Result<()> {
        let layout = self.compose(state);
        state.renderer.render(&layout)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
