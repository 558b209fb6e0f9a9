//! Tests for the progress manager facade.

use progress_grid::layout::{Cell, TextRole};
use progress_grid::{Color, Error, ProgressBuilder};

mod common;
use common::helpers::*;

#[test]
fn test_new_slots_start_empty() {
    let (manager, recorder) = create_bordered_manager();

    assert_eq!(manager.len(), TEST_SLOTS);
    assert!(!manager.is_empty());
    for (i, slot) in manager.slots().iter().enumerate() {
        assert_eq!(slot.index(), i);
        assert_eq!(slot.percent(), 0);
        assert_eq!(slot.label(), "");
        assert_eq!(slot.color(), &Color::default());
        assert!(slot.bordered());
    }

    // The initial layout is drawn once at construction.
    assert_eq!(recorder.frames(), 1);
}

#[test]
fn test_set_updates_one_slot() {
    let (manager, recorder) = create_bordered_manager();
    manager.set(1, "halfway", 50).unwrap();

    let slot = manager.slot(1).unwrap();
    assert_eq!(slot.label(), "halfway");
    assert_eq!(slot.percent(), 50);
    assert_eq!(manager.slot(0).unwrap().percent(), 0);
    assert_eq!(manager.slot(2).unwrap().percent(), 0);

    let frame = recorder.last().unwrap();
    assert_gauge_title(&frame, 1, "halfway");
    assert_gauge_percent(&frame, 1, 50);
}

#[test]
fn test_set_clamps_percent() {
    let (manager, _) = create_bordered_manager();
    manager.set(0, "over", 250).unwrap();
    assert_eq!(manager.slot(0).unwrap().percent(), 100);
}

#[test]
fn test_set_out_of_range_changes_nothing() {
    let (manager, recorder) = create_bordered_manager();
    manager.set(0, "first", 10).unwrap();
    let before = manager.slots();
    let frames = recorder.frames();

    let err = manager.set(TEST_SLOTS, "nope", 90).unwrap_err();
    assert!(matches!(
        err,
        Error::OutOfRange {
            index: TEST_SLOTS,
            len: TEST_SLOTS
        }
    ));
    assert_eq!(manager.slots(), before);
    assert_eq!(recorder.frames(), frames);
}

#[test]
fn test_set_color_out_of_range() {
    let (manager, _) = create_unbordered_manager();
    let err = manager.set_color(99, "red").unwrap_err();
    assert!(matches!(err, Error::OutOfRange { index: 99, .. }));
    assert!(manager.slot(99).is_err());
}

#[test]
fn test_set_color_bordered() {
    let (manager, recorder) = create_bordered_manager();
    manager.set_color(2, "red").unwrap();

    assert_eq!(manager.slot(2).unwrap().color().as_str(), "red");
    match recorder.last().unwrap().gauge(2) {
        Some(Cell::Gauge { color, .. }) => assert_eq!(color.as_str(), "red"),
        other => panic!("Expected a gauge, got {:?}", other),
    }
}

#[test]
fn test_set_color_unbordered_colors_label() {
    let (manager, recorder) = create_unbordered_manager();
    manager.set_color(0, Color::new("yellow")).unwrap();

    let frame = recorder.last().unwrap();
    let row = frame
        .rows()
        .iter()
        .find(|r| matches!(r.gauge(), Some(Cell::Gauge { slot: 0, .. })))
        .unwrap();
    match row.columns()[0].cell() {
        Cell::Text { color, .. } => {
            assert_eq!(color.as_ref().map(Color::as_str), Some("yellow"))
        }
        other => panic!("Expected a label, got {:?}", other),
    }
}

#[test]
fn test_set_header_without_header_is_noop() {
    let (manager, recorder) = create_bordered_manager();

    manager.set_header("ignored").unwrap();
    manager
        .set_header_fmt(format_args!("ignored {}", 2))
        .unwrap();

    assert_eq!(manager.header(), None);
    assert_eq!(recorder.frames(), 1);
}

#[test]
fn test_set_header() {
    let (manager, recorder) = create_unbordered_manager();

    assert_eq!(manager.header().as_deref(), Some(""));
    manager
        .set_header_fmt(format_args!("Example application\n{} tasks", 3))
        .unwrap();

    assert_eq!(
        manager.header().as_deref(),
        Some("Example application\n3 tasks")
    );
    match recorder.last().unwrap().text(TextRole::Header) {
        Some(Cell::Text { text, .. }) => assert_eq!(text, "Example application\n3 tasks"),
        other => panic!("Expected a header, got {:?}", other),
    }
}

#[test]
fn test_every_mutation_redraws_once() {
    let (manager, recorder) = create_unbordered_manager();

    manager.set(0, "a", 1).unwrap();
    manager.set(1, "b", 2).unwrap();
    manager.set_color(1, "blue").unwrap();
    manager.set_header("header").unwrap();
    manager.add_message("message").unwrap();

    assert_eq!(recorder.frames(), 6);
    assert_eq!(recorder.history().len(), 6);
}

#[test]
fn test_messages_without_block_are_kept_but_not_drawn() {
    let (manager, recorder) = create_recorded_manager(ProgressBuilder::new(2));

    manager.add_message("first").unwrap();
    manager.add_message_fmt(format_args!("second {}", 2)).unwrap();

    assert_eq!(manager.messages(), vec!["first", "second 2"]);
    assert!(manager.visible_messages().is_empty());
    assert_eq!(recorder.frames(), 1);
}

#[test]
fn test_finish_releases_renderer() {
    let (manager, recorder) = create_bordered_manager();
    assert!(!recorder.is_finished());
    manager.finish().unwrap();
    assert!(recorder.is_finished());
}

#[test]
fn test_zero_slots() {
    let (manager, _) = create_recorded_manager(ProgressBuilder::new(0).messages(1));
    assert!(manager.is_empty());
    assert!(matches!(
        manager.set(0, "none", 0),
        Err(Error::OutOfRange { index: 0, len: 0 })
    ));
    manager.add_message("still works").unwrap();
    assert_eq!(manager.visible_messages(), vec!["still works"]);
}

#[test]
fn test_builder_config() {
    let builder = ProgressBuilder::hidden(4).border(true).header(1).messages(7);
    let config = builder.config().clone();
    assert_eq!(config.slots, 4);
    assert!(config.border);
    assert_eq!(config.header_lines, Some(1));
    assert_eq!(config.message_lines, Some(7));
    assert!(!config.style.is_enabled());

    let manager = builder.build().unwrap();
    assert_eq!(manager.config(), &config);
}

#[test]
fn test_blank_color_falls_back_to_active() {
    assert_eq!(Color::new("  "), Color::default());
    assert_eq!(Color::default().as_str(), Color::ACTIVE);
    assert_eq!(progress_grid::color(" red ").as_str(), "red");
}
