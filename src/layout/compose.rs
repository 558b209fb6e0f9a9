//! Builds a [`Layout`] out of the manager's state.

use super::{Cell, Column, Layout, Row, TextRole, GAUGE_SPAN, LABEL_SPAN};
use crate::manager::ProgressConfig;
use crate::slot::Slot;

/// Lines taken by a top and a bottom border.
const BORDER_LINES: u16 = 2;
/// Height of a bordered gauge: one bar line inside its border.
const BORDERED_GAUGE_HEIGHT: u16 = 3;
/// Height of an unbordered gauge: one bar line plus one padding line.
const GAUGE_HEIGHT: u16 = 2;
/// Height of the label cell paired with an unbordered gauge.
const LABEL_HEIGHT: u16 = 1;

/// Compose the rendering tree.
///
/// Rows are, from top to bottom: the header if configured, one row per slot
/// in index order, and the message block if configured. `messages` is the
/// already windowed tail of the message log.
pub fn compose(
    config: &ProgressConfig,
    slots: &[Slot],
    header: Option<&str>,
    messages: &[String],
) -> Layout {
    let border = config.border;
    let mut rows = Vec::with_capacity(slots.len() + 2);

    if let (Some(lines), Some(text)) = (config.header_lines, header) {
        // The unbordered header keeps one padding line under its text.
        let height = if border {
            lines_height(lines) + BORDER_LINES
        } else {
            lines_height(lines) + 1
        };
        rows.push(Row::full(Cell::Text {
            role: TextRole::Header,
            text: text.to_string(),
            height,
            bordered: border,
            color: None,
        }));
    }

    rows.extend(slots.iter().map(slot_row));

    if let Some(lines) = config.message_lines {
        let height = if border {
            lines_height(lines) + BORDER_LINES
        } else {
            lines_height(lines)
        };
        rows.push(Row::full(Cell::Text {
            role: TextRole::Messages,
            text: messages.join("\n"),
            height,
            bordered: border,
            color: None,
        }));
    }

    Layout::new(rows)
}

fn slot_row(slot: &Slot) -> Row {
    if slot.bordered() {
        return Row::full(Cell::Gauge {
            slot: slot.index(),
            percent: slot.percent(),
            title: Some(slot.label().to_string()),
            color: slot.color().clone(),
            height: BORDERED_GAUGE_HEIGHT,
            bordered: true,
        });
    }

    Row::new(vec![
        Column::new(
            LABEL_SPAN,
            Cell::Text {
                role: TextRole::Label,
                text: slot.label().to_string(),
                height: LABEL_HEIGHT,
                bordered: false,
                color: Some(slot.color().clone()),
            },
        ),
        Column::new(
            GAUGE_SPAN,
            Cell::Gauge {
                slot: slot.index(),
                percent: slot.percent(),
                title: None,
                color: slot.color().clone(),
                height: GAUGE_HEIGHT,
                bordered: false,
            },
        ),
    ])
}

// Leaves room for the border lines added on top.
fn lines_height(lines: usize) -> u16 {
    u16::try_from(lines)
        .unwrap_or(u16::MAX)
        .min(u16::MAX - BORDER_LINES)
}
