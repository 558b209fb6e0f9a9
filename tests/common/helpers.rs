use progress_grid::layout::{Cell, Layout};
use progress_grid::progress::GaugeStyle;
use progress_grid::render::RecordingRenderer;
use progress_grid::{ProgressBuilder, ProgressManager};

// Common test constants
pub const TEST_SLOTS: usize = 3;
pub const TEST_WINDOW: usize = 5;
pub const TEST_COLUMNS: u16 = 96;

// === Manager Helpers ===

/// Creates a manager drawing into a recorder, returning both
pub fn create_recorded_manager(builder: ProgressBuilder) -> (ProgressManager, RecordingRenderer) {
    let recorder = RecordingRenderer::new();
    let manager = builder
        .renderer(recorder.clone())
        .build()
        .expect("Failed to build manager");
    (manager, recorder)
}

/// Creates a bordered manager with a message block
pub fn create_bordered_manager() -> (ProgressManager, RecordingRenderer) {
    create_recorded_manager(
        ProgressBuilder::new(TEST_SLOTS)
            .border(true)
            .messages(TEST_WINDOW),
    )
}

/// Creates an unbordered manager with a header and a message block
pub fn create_unbordered_manager() -> (ProgressManager, RecordingRenderer) {
    create_recorded_manager(
        ProgressBuilder::new(TEST_SLOTS)
            .header(2)
            .messages(TEST_WINDOW),
    )
}

/// Creates a fixed-width hidden style for terminal display tests
pub fn create_test_style() -> GaugeStyle {
    GaugeStyle::new(Some(GaugeStyle::CHARS_ROUGH.to_string()), Some(TEST_COLUMNS), false)
}

/// Creates distinct test messages
pub fn create_test_messages(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("message {}", i)).collect()
}

// === Assertion Helpers ===

/// Asserts that every row of a layout fills the 12-column grid
pub fn assert_full_rows(layout: &Layout) {
    for row in layout.rows() {
        assert_eq!(row.span(), 12, "Row should span the whole grid: {:?}", row);
    }
}

/// Asserts the fill level drawn for a slot
pub fn assert_gauge_percent(layout: &Layout, slot: usize, expected: u8) {
    match layout.gauge(slot) {
        Some(Cell::Gauge { percent, .. }) => assert_eq!(*percent, expected, "slot {}", slot),
        other => panic!("Expected a gauge for slot {}, got {:?}", slot, other),
    }
}

/// Asserts the border title drawn for a slot
pub fn assert_gauge_title(layout: &Layout, slot: usize, expected: &str) {
    match layout.gauge(slot) {
        Some(Cell::Gauge { title, .. }) => assert_eq!(title.as_deref(), Some(expected)),
        other => panic!("Expected a gauge for slot {}, got {:?}", slot, other),
    }
}
