//! Layout tree handed to the renderer.
//!
//! A [`Layout`] is a stack of [`Row`]s on a 12-column grid. Every row is
//! either a single full-width cell, or (for unbordered slots) a label cell of
//! span 4 next to a gauge cell of span 8.
//!
//! The tree is rebuilt from the manager's state on every redraw with
//! [`compose`], so renderers can treat it as an immutable snapshot.
//!
//! # Examples
//!
//! ```rust
//! use progress_grid::layout::{Cell, GRID_COLUMNS};
//! use progress_grid::ProgressBuilder;
//! use progress_grid::render::NullRenderer;
//!
//! # fn main() -> progress_grid::Result<()> {
//! let manager = ProgressBuilder::new(2)
//!     .header(1)
//!     .renderer(NullRenderer)
//!     .build()?;
//!
//! let layout = manager.layout();
//! assert_eq!(layout.rows().len(), 3);
//! for row in layout.rows() {
//!     assert_eq!(row.span(), GRID_COLUMNS);
//! }
//! assert!(matches!(layout.rows()[1].columns()[0].cell(), Cell::Text { .. }));
//! # Ok(())
//! # }
//! ```

mod compose;

pub use compose::compose;

use crate::color::Color;

/// Width of the grid, in spans.
pub const GRID_COLUMNS: u8 = 12;
/// Span of the label cell of an unbordered slot.
pub const LABEL_SPAN: u8 = 4;
/// Span of the gauge cell of an unbordered slot.
pub const GAUGE_SPAN: u8 = 8;

/// What a text cell is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// The header block at the top.
    Header,
    /// The label paired with an unbordered gauge.
    Label,
    /// The message block at the bottom.
    Messages,
}

/// A drawable primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A block of text.
    Text {
        /// What the block is.
        role: TextRole,
        /// Text, lines separated by `\n`.
        text: String,
        /// Height in terminal lines, border included.
        height: u16,
        /// Whether the block has a border.
        bordered: bool,
        /// Text color, if any.
        color: Option<Color>,
    },
    /// A percentage gauge.
    Gauge {
        /// Index of the slot this gauge shows.
        slot: usize,
        /// Fill level.
        percent: u8,
        /// Border title, only set for bordered gauges.
        title: Option<String>,
        /// Fill color, also used for the border and title.
        color: Color,
        /// Height in terminal lines, border or padding included.
        height: u16,
        /// Whether the gauge has a border.
        bordered: bool,
    },
}

impl Cell {
    /// Height of the cell in terminal lines.
    pub fn height(&self) -> u16 {
        match self {
            Cell::Text { height, .. } | Cell::Gauge { height, .. } => *height,
        }
    }
}

/// A cell placed in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    span: u8,
    cell: Cell,
}

impl Column {
    /// Create a column of `span` grid units.
    pub fn new(span: u8, cell: Cell) -> Self {
        Self { span, cell }
    }

    /// Width in grid units.
    pub fn span(&self) -> u8 {
        self.span
    }

    /// The cell drawn in this column.
    pub fn cell(&self) -> &Cell {
        &self.cell
    }
}

/// A horizontal band of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    columns: Vec<Column>,
}

impl Row {
    /// Create a row from its columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// A row made of a single full-width cell.
    pub fn full(cell: Cell) -> Self {
        Self::new(vec![Column::new(GRID_COLUMNS, cell)])
    }

    /// The columns, left to right.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Total span of the row.
    pub fn span(&self) -> u8 {
        self.columns.iter().map(Column::span).sum()
    }

    /// Height of the row, i.e. of its tallest cell.
    pub fn height(&self) -> u16 {
        self.columns
            .iter()
            .map(|c| c.cell.height())
            .max()
            .unwrap_or(0)
    }

    /// The gauge cell of this row, if it holds one.
    pub fn gauge(&self) -> Option<&Cell> {
        self.columns
            .iter()
            .map(Column::cell)
            .find(|c| matches!(c, Cell::Gauge { .. }))
    }
}

/// The full rendering tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Row>,
}

impl Layout {
    /// Create a layout from its rows, top to bottom.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// The rows, top to bottom.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Total height in terminal lines.
    pub fn height(&self) -> u16 {
        self.rows
            .iter()
            .map(Row::height)
            .fold(0, u16::saturating_add)
    }

    /// The gauge showing `slot`, if any.
    pub fn gauge(&self, slot: usize) -> Option<&Cell> {
        self.rows
            .iter()
            .filter_map(Row::gauge)
            .find(|c| matches!(c, Cell::Gauge { slot: s, .. } if *s == slot))
    }

    /// The label text paired with an unbordered gauge for `slot`.
    pub fn label(&self, slot: usize) -> Option<&str> {
        let row = self.rows.iter().find(|r| {
            matches!(r.gauge(), Some(Cell::Gauge { slot: s, .. }) if *s == slot)
        })?;
        row.columns.iter().find_map(|c| match c.cell() {
            Cell::Text {
                role: TextRole::Label,
                text,
                ..
            } => Some(text.as_str()),
            _ => None,
        })
    }

    /// The first text cell with the given role.
    pub fn text(&self, role: TextRole) -> Option<&Cell> {
        self.rows
            .iter()
            .flat_map(|r| r.columns.iter().map(Column::cell))
            .find(|c| matches!(c, Cell::Text { role: found, .. } if *found == role))
    }
}
