//! Integration tests for the progress-grid crate.
//!
//! These tests drive a manager the way a host program does: many producer
//! tasks updating their own gauge and appending messages concurrently.

use progress_grid::layout::TextRole;
use progress_grid::{perc_int, Cell, ProgressBuilder};
use std::sync::Arc;

mod common;
use common::helpers::*;

/// Bordered manager, one update, then more messages than the window holds
#[test]
fn test_end_to_end_bordered_with_messages() {
    let (manager, recorder) = create_recorded_manager(
        ProgressBuilder::new(3).border(true).messages(5),
    );

    manager.set(1, "halfway", 50).unwrap();
    let slot = manager.slot(1).unwrap();
    assert_eq!(slot.label(), "halfway");
    assert_eq!(slot.percent(), 50);
    assert_eq!(manager.slot(0).unwrap().percent(), 0);
    assert_eq!(manager.slot(2).unwrap().percent(), 0);
    assert_gauge_title(&recorder.last().unwrap(), 1, "halfway");

    let messages = create_test_messages(6);
    for m in &messages {
        manager.add_message(m.as_str()).unwrap();
    }

    let visible = manager.visible_messages();
    assert_eq!(visible.len(), 5);
    assert_eq!(visible, messages[1..].to_vec());
    assert_eq!(manager.messages().len(), 6);
    assert_eq!(manager.messages(), messages);
}

/// One tokio task per slot, all updating and logging at the same time
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_producers() {
    const STEPS: i32 = 20;

    let recorder = progress_grid::RecordingRenderer::new();
    let manager = Arc::new(
        ProgressBuilder::new(TEST_SLOTS * 2)
            .header(1)
            .messages(TEST_WINDOW)
            .renderer(recorder.clone())
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..manager.len())
        .map(|slot| {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move {
                for step in 1..=STEPS {
                    manager
                        .set(slot, format!("task {} step {}", slot, step), perc_int(step, STEPS))
                        .unwrap();
                    manager
                        .add_message(format!("task {} step {}", slot, step))
                        .unwrap();
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let total = manager.len() * STEPS as usize;
    assert_eq!(manager.messages().len(), total);
    assert_eq!(manager.visible_messages().len(), TEST_WINDOW);
    for slot in manager.slots() {
        assert_eq!(slot.percent(), 100);
        assert_eq!(slot.label(), format!("task {} step {}", slot.index(), STEPS));
    }

    // Initial frame, then one per set and one per message.
    assert_eq!(recorder.frames(), 1 + total * 2);

    let last = recorder.last().unwrap();
    assert_full_rows(&last);
    match last.text(TextRole::Messages) {
        Some(Cell::Text { text, .. }) => assert_eq!(text.lines().count(), TEST_WINDOW),
        other => panic!("Expected a message block, got {:?}", other),
    }
}

/// Producers on plain threads sharing a slot pool smaller than the task count
#[test]
fn test_slot_reuse_across_tasks() {
    const TASKS: usize = 12;

    let (manager, _) = create_recorded_manager(ProgressBuilder::new(TEST_SLOTS).messages(3));
    let manager = Arc::new(manager);

    for batch in 0..TASKS / TEST_SLOTS {
        let handles: Vec<_> = (0..TEST_SLOTS)
            .map(|slot| {
                let manager = Arc::clone(&manager);
                std::thread::spawn(move || {
                    let task = batch * TEST_SLOTS + slot;
                    manager
                        .set(slot, format!("Task {} Done!", task), 100)
                        .unwrap();
                    manager
                        .add_message_fmt(format_args!("Task {} Done!", task))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    assert_eq!(manager.messages().len(), TASKS);
    for slot in manager.slots() {
        let last_task = (TASKS / TEST_SLOTS - 1) * TEST_SLOTS + slot.index();
        assert_eq!(slot.label(), format!("Task {} Done!", last_task));
    }
}
