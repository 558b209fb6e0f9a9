//! Per-gauge state.

use crate::color::Color;

/// Visual state of one tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Stable position of the slot, in `[0, n)`.
    index: usize,
    /// Fill level, in `[0, 100]`.
    percent: u8,
    /// Text shown next to the gauge, or as its border title.
    label: String,
    /// Gauge fill color (and border or label color).
    color: Color,
    /// Whether the slot renders as one bordered gauge.
    bordered: bool,
}

impl Slot {
    pub(crate) fn new(index: usize, bordered: bool) -> Self {
        Self {
            index,
            percent: 0,
            label: String::new(),
            color: Color::default(),
            bordered,
        }
    }

    /// Get the slot's index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the slot's fill level.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Get the slot's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the slot's color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Whether the label is drawn as the gauge's border title.
    pub fn bordered(&self) -> bool {
        self.bordered
    }

    pub(crate) fn update(&mut self, label: String, percent: u8) {
        self.label = label;
        self.percent = percent.min(100);
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
