//! Terminal display built on `indicatif`.
//!
//! [`TerminalDisplay`] maps every [`Row`] of a layout to one line group of a
//! [`MultiProgress`]: header and message blocks become text bars, slot rows
//! become gauges. Bars are created once and updated in place afterwards; they
//! are rebuilt only when the number of rows changes.
//!
//! # Examples
//!
//! ```rust
//! use progress_grid::progress::{GaugeStyle, TerminalDisplay};
//! use progress_grid::ProgressBuilder;
//!
//! # fn main() -> progress_grid::Result<()> {
//! let manager = ProgressBuilder::new(3)
//!     .border(true)
//!     .messages(5)
//!     .renderer(TerminalDisplay::new(GaugeStyle::hidden()))
//!     .build()?;
//!
//! manager.set(0, "compiling", 40)?;
//! manager.add_message("started")?;
//! manager.finish()?;
//! # Ok(())
//! # }
//! ```

use super::GaugeStyle;
use crate::error::Result;
use crate::layout::{Cell, Layout, Row, GAUGE_SPAN, GRID_COLUMNS, LABEL_SPAN};
use crate::render::Renderer;

use console::Term;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};
use tracing::debug;

/// Room taken by the ` 100%` suffix of a gauge.
const PERCENT_WIDTH: u16 = 5;
/// Room taken by the border characters around a bordered bar.
const BORDER_WIDTH: u16 = 3;

/// A row of the layout and the bar drawing it.
struct RowBar {
    bar: ProgressBar,
    /// Template the bar's style was built from.
    template: String,
}

/// Draws layouts on the terminal with `indicatif`.
pub struct TerminalDisplay {
    /// The multi-progress instance the row bars live in.
    multi: MultiProgress,
    /// Style options for the gauges.
    style: GaugeStyle,
    /// Display width in terminal columns.
    columns: u16,
    /// One bar per layout row, top to bottom.
    rows: Vec<RowBar>,
}

impl std::fmt::Debug for TerminalDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalDisplay")
            .field("style", &self.style)
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .finish()
    }
}

impl TerminalDisplay {
    /// Create a display drawing on stderr, or nowhere if `style` is disabled.
    pub fn new(style: GaugeStyle) -> Self {
        let multi = match style.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };

        let columns = style.columns().unwrap_or_else(|| {
            Term::stderr()
                .size_checked()
                .map(|(_, columns)| columns)
                .unwrap_or(GaugeStyle::FALLBACK_COLUMNS)
        });

        Self {
            multi,
            style,
            columns,
            rows: Vec::new(),
        }
    }

    /// Convenience function to create a display which draws nothing.
    pub fn hidden() -> Self {
        Self::new(GaugeStyle::hidden())
    }

    /// Get the multi-progress instance, e.g. to print above the gauges.
    pub fn multi(&self) -> &MultiProgress {
        &self.multi
    }

    /// Display width in terminal columns.
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// The bars currently drawn, one per layout row.
    pub fn bars(&self) -> Vec<ProgressBar> {
        self.rows.iter().map(|r| r.bar.clone()).collect()
    }

    fn rebuild(&mut self, count: usize) {
        debug!(rows = count, "Rebuilding terminal rows");
        for old in self.rows.drain(..) {
            old.bar.finish_and_clear();
        }
        for _ in 0..count {
            let bar = self.multi.add(ProgressBar::new(100));
            self.rows.push(RowBar {
                bar,
                template: String::new(),
            });
        }
    }

    fn row_template(&self, row: &Row) -> String {
        let width = |span: u8| self.columns / u16::from(GRID_COLUMNS) * u16::from(span);

        match row.gauge() {
            Some(Cell::Gauge {
                color,
                bordered: true,
                ..
            }) => {
                let bar = self.columns.saturating_sub(PERCENT_WIDTH + BORDER_WIDTH).max(1);
                GaugeStyle::bordered_gauge_template(color, bar)
            }
            Some(Cell::Gauge { color, .. }) => {
                let label = width(LABEL_SPAN).saturating_sub(1).max(1);
                let bar = width(GAUGE_SPAN).saturating_sub(PERCENT_WIDTH).max(1);
                GaugeStyle::labelled_gauge_template(color, label, bar)
            }
            _ => match row.columns().first().map(|c| c.cell()) {
                Some(Cell::Text {
                    color, bordered, ..
                }) => GaugeStyle::text_template(color.as_ref(), *bordered, self.columns),
                _ => GaugeStyle::text_template(None, false, self.columns),
            },
        }
    }
}

/// Message and position shown by the bar of a row.
fn row_content(row: &Row) -> (String, u64) {
    let mut message = String::new();
    let mut position = 0;

    for column in row.columns() {
        match column.cell() {
            Cell::Gauge { percent, title, .. } => {
                position = u64::from(*percent);
                if let Some(title) = title {
                    message = title.clone();
                }
            }
            Cell::Text { text, .. } => message = text.clone(),
        }
    }

    (message, position)
}

impl Renderer for TerminalDisplay {
    fn render(&mut self, layout: &Layout) -> Result<()> {
        if self.rows.len() != layout.rows().len() {
            self.rebuild(layout.rows().len());
        }

        for (i, row) in layout.rows().iter().enumerate() {
            let template = self.row_template(row);
            let slot = &mut self.rows[i];
            if slot.template != template {
                slot.bar.set_style(self.style.to_progress_style(&template)?);
                slot.template = template;
            }

            let (message, position) = row_content(row);
            slot.bar.set_position(position);
            slot.bar.set_message(message);
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        for row in self.rows.drain(..) {
            row.bar.finish_and_clear();
        }
        self.multi.clear()?;
        Ok(())
    }
}
