//! Session lifecycle tests
//!
//! Tests for the composition root: the measuring state machine, dirty
//! tracking, sort operations, virtualization windows, and snapshot
//! save/restore.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::render::TextCell;
use gridview::session::GridSession;
use gridview::types::{Column, ColumnWidth, GridConfig, GridSnapshot, SortDirection, SortState};
use gridview::{GridError, Phase};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    id: u32,
    name: &'static str,
    age: u32,
}

fn people() -> Vec<Person> {
    vec![
        Person { id: 1, name: "Ada", age: 36 },
        Person { id: 2, name: "Grace", age: 45 },
        Person { id: 3, name: "Edsger", age: 36 },
        Person { id: 4, name: "Barbara", age: 28 },
    ]
}

fn columns() -> Vec<Column<Person>> {
    vec![
        Column::new("name", "Name", TextCell::new(|p: &Person| p.name.to_string()))
            .width(ColumnWidth::Fixed(120.0)),
        Column::new("age", "Age", TextCell::new(|p: &Person| p.age.to_string()))
            .width(ColumnWidth::Fixed(60.0))
            .sortable_by(|a, b| a.age.cmp(&b.age)),
    ]
}

fn ready_session() -> GridSession<Person> {
    let mut s = GridSession::new(columns(), people(), GridConfig::default()).unwrap();
    s.set_viewport_size(400.0, 300.0);
    s.frame(0.0);
    s
}

#[test]
fn test_phase_transitions_on_first_frame() {
    let mut s = GridSession::new(columns(), people(), GridConfig::default()).unwrap();
    assert_eq!(s.phase(), Phase::Uninitialized);
    assert!(s.is_dirty());

    s.frame(0.0);
    assert_eq!(s.phase(), Phase::Ready);
    assert!(!s.is_dirty());
}

#[test]
fn test_resize_marks_dirty_and_remeasures() {
    let mut s = ready_session();
    assert!(!s.is_dirty());

    s.set_viewport_size(500.0, 300.0);
    assert!(s.is_dirty());
    s.frame(1.0);
    assert!(!s.is_dirty());

    // Same size again is a no-op.
    s.set_viewport_size(500.0, 300.0);
    assert!(!s.is_dirty());
}

#[test]
fn test_sort_change_does_not_remeasure() {
    let mut s = ready_session();
    s.update_sort("age");
    // Sorting reuses the last width snapshot (documented approximation:
    // the sampled window is not re-measured in sorted order).
    assert!(!s.is_dirty());
    assert_eq!(s.get_column_width("age"), Some(60.0));
}

#[test]
fn test_set_items_marks_dirty() {
    let mut s = ready_session();
    s.set_items(people());
    assert!(s.is_dirty());
}

#[test]
fn test_invalid_config_rejected_at_construction() {
    let config = GridConfig {
        row_height: 0.0,
        ..GridConfig::default()
    };
    let result = GridSession::new(columns(), people(), config);
    assert!(matches!(result, Err(GridError::Config(_))));
}

#[test]
fn test_duplicate_column_ids_rejected() {
    let mut cols = columns();
    cols.push(Column::new("age", "Age again", TextCell::new(|p: &Person| p.id.to_string())));
    let result = GridSession::new(cols, people(), GridConfig::default());
    assert!(matches!(result, Err(GridError::DuplicateColumnId(id)) if id == "age"));
}

#[test]
fn test_sort_cycle_through_session() {
    let mut s = ready_session();

    s.update_sort("age");
    assert_eq!(s.sort_state().direction(), Some(SortDirection::Ascending));
    // Ascending by age: Barbara (28), then Ada and Edsger (36, stable), Grace (45).
    assert_eq!(s.item_at(0).unwrap().id, 4);
    assert_eq!(s.item_at(1).unwrap().id, 1);
    assert_eq!(s.item_at(2).unwrap().id, 3);

    s.update_sort("age");
    assert_eq!(s.sort_state().direction(), Some(SortDirection::Descending));
    assert_eq!(s.item_at(0).unwrap().id, 2);

    s.update_sort("age");
    assert_eq!(s.sort_state(), &SortState::inactive());
    assert_eq!(s.item_at(0).unwrap().id, 1);
}

#[test]
fn test_unknown_sort_column_is_ignored() {
    let mut s = ready_session();
    s.update_sort("height");
    assert_eq!(s.sort_state(), &SortState::inactive());
    assert_eq!(s.item_at(0).unwrap().id, 1);
}

#[test]
fn test_sort_listener_fires_on_changes() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen: Rc<RefCell<Vec<Option<SortDirection>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut s = GridSession::new(columns(), people(), GridConfig::default())
        .unwrap()
        .with_sort_listener(move |state| sink.borrow_mut().push(state.direction()));
    s.frame(0.0);

    s.update_sort("age");
    s.update_sort("age");
    s.clear_sort();
    // clear_sort on an already-inactive state does not notify again.
    s.clear_sort();

    assert_eq!(
        *seen.borrow(),
        vec![
            Some(SortDirection::Ascending),
            Some(SortDirection::Descending),
            None
        ]
    );
}

#[test]
fn test_visible_window_tracks_vertical_scroll() {
    let items: Vec<Person> = (0..1000)
        .map(|i| Person { id: i, name: "x", age: i })
        .collect();
    let config = GridConfig {
        row_height: 20.0,
        prefetch_rows: 2,
        ..GridConfig::default()
    };
    let mut s = GridSession::new(columns(), items, config).unwrap();
    s.set_viewport_size(400.0, 200.0);
    s.frame(0.0);

    let w = s.visible_rows().unwrap();
    assert_eq!(w.first, 0);
    assert_eq!(w.last, 11); // 10 visible + 2 prefetch below

    s.scroll_to_row(500);
    let w = s.visible_rows().unwrap();
    assert_eq!(w.first, 498);
    assert!(w.contains(500));
}

#[test]
fn test_animated_scroll_converges_and_is_idempotent() {
    let items: Vec<Person> = (0..1000)
        .map(|i| Person { id: i, name: "x", age: i })
        .collect();
    let config = GridConfig {
        row_height: 20.0,
        ..GridConfig::default()
    };
    let mut s = GridSession::new(columns(), items, config).unwrap();
    s.set_viewport_size(400.0, 200.0);
    s.frame(0.0);

    s.animate_scroll_to_row(100, 0.0);
    assert!(s.frame(100.0)); // mid-flight
    let mid = s.scroll_y();
    assert!(mid > 0.0 && mid < 2000.0);

    // Re-requesting the same target mid-flight does not restart the clock.
    s.animate_scroll_to_row(100, 150.0);
    assert!(!s.frame(400.0));
    assert_eq!(s.scroll_y(), 2000.0);

    // Further frames stay converged with no overshoot.
    s.animate_scroll_to_row(100, 500.0);
    s.frame(900.0);
    assert_eq!(s.scroll_y(), 2000.0);
}

#[test]
fn test_new_animation_target_supersedes_in_flight() {
    let items: Vec<Person> = (0..1000)
        .map(|i| Person { id: i, name: "x", age: i })
        .collect();
    let config = GridConfig {
        row_height: 20.0,
        ..GridConfig::default()
    };
    let mut s = GridSession::new(columns(), items, config).unwrap();
    s.set_viewport_size(400.0, 200.0);
    s.frame(0.0);

    s.animate_scroll_to_row(100, 0.0);
    s.frame(100.0);
    s.animate_scroll_to_row(10, 100.0);
    s.frame(500.0);
    assert_eq!(s.scroll_y(), 200.0);
}

#[test]
fn test_immediate_scroll_cancels_animation() {
    let items: Vec<Person> = (0..1000)
        .map(|i| Person { id: i, name: "x", age: i })
        .collect();
    let config = GridConfig {
        row_height: 20.0,
        ..GridConfig::default()
    };
    let mut s = GridSession::new(columns(), items, config).unwrap();
    s.set_viewport_size(400.0, 200.0);
    s.frame(0.0);

    s.animate_scroll_to_row(100, 0.0);
    s.scroll_to_row(50);
    assert!(!s.frame(100.0));
    assert_eq!(s.scroll_y(), 1000.0);
}

#[test]
fn test_snapshot_round_trip_is_bit_identical() {
    let snapshot = GridSnapshot {
        sort_column_id: Some("age".to_string()),
        sort_direction_ordinal: SortDirection::Descending.ordinal(),
        scroll_offset_x: 120.0,
        first_visible_row: 7,
        first_visible_row_offset_px: 4.0,
    };
    let restored = GridSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(restored, snapshot);
}

#[test]
fn test_save_restore_preserves_session_state() {
    let items: Vec<Person> = (0..1000)
        .map(|i| Person { id: i, name: "x", age: i })
        .collect();
    let config = GridConfig {
        row_height: 20.0,
        ..GridConfig::default()
    };
    let mut s = GridSession::new(columns(), items.clone(), config.clone()).unwrap();
    // Narrow viewport so the 180px of columns overflow horizontally.
    s.set_viewport_size(100.0, 200.0);
    s.frame(0.0);
    s.update_sort("age");
    s.update_sort("age"); // descending
    s.scroll_by(30.0, 144.0);

    let saved = s.save();
    assert_eq!(saved.sort_column_id.as_deref(), Some("age"));
    assert_eq!(saved.first_visible_row, 7);
    assert_eq!(saved.first_visible_row_offset_px, 4.0);

    let mut restored = GridSession::new(columns(), items, config).unwrap();
    restored.set_viewport_size(100.0, 200.0);
    restored.restore(&saved);
    restored.frame(0.0);

    assert_eq!(restored.scroll_x(), 30.0);
    assert_eq!(restored.scroll_y(), 144.0);
    assert_eq!(restored.sort_state(), s.sort_state());
    assert_eq!(restored.save(), saved);
}

#[test]
fn test_swapping_measurer_drops_stale_measurements() {
    struct WideMeasurer;
    impl gridview::render::TextMeasurer for WideMeasurer {
        fn text_width(&self, text: &str) -> f32 {
            text.chars().count() as f32 * 50.0
        }
    }

    let cols = vec![
        Column::new("name", "Name", TextCell::new(|p: &Person| p.name.to_string())).width(
            ColumnWidth::ContentBased {
                min: 0.0,
                max: 10_000.0,
                padding: 0.0,
            },
        ),
    ];
    let mut s = GridSession::new(cols, people(), GridConfig::default()).unwrap();
    s.set_viewport_size(400.0, 300.0);
    s.frame(0.0);
    let heuristic_width = s.get_column_width("name").unwrap();

    let mut s = s.with_measurer(WideMeasurer);
    assert!(s.is_dirty());
    s.frame(1.0);
    // Widest content is "Barbara" (7 chars) at 50px per char.
    assert_eq!(s.get_column_width("name"), Some(350.0));
    assert!(s.get_column_width("name").unwrap() > heuristic_width);
}

#[test]
fn test_clear_measurement_cache_schedules_remeasure() {
    let mut s = ready_session();
    assert!(!s.is_dirty());
    s.clear_measurement_cache();
    assert!(s.is_dirty());
    s.frame(1.0);
    assert_eq!(s.phase(), Phase::Ready);
}

#[test]
fn test_disabled_axes_ignore_scroll() {
    let items: Vec<Person> = (0..1000)
        .map(|i| Person { id: i, name: "x", age: i })
        .collect();
    let config = GridConfig {
        horizontal_scroll: false,
        row_height: 20.0,
        ..GridConfig::default()
    };
    let cols = vec![
        Column::new("wide", "Wide", TextCell::new(|p: &Person| p.name.to_string()))
            .width(ColumnWidth::Fixed(2000.0)),
    ];
    let mut s = GridSession::new(cols, items, config).unwrap();
    s.set_viewport_size(400.0, 200.0);
    s.frame(0.0);

    s.scroll_by(100.0, 40.0);
    assert_eq!(s.scroll_x(), 0.0);
    assert_eq!(s.scroll_y(), 40.0);
}

#[test]
fn test_empty_items_still_lays_out() {
    let mut s = GridSession::new(columns(), Vec::new(), GridConfig::default()).unwrap();
    s.set_viewport_size(400.0, 300.0);
    s.frame(0.0);
    assert_eq!(s.phase(), Phase::Ready);
    assert!(s.visible_rows().is_none());
    assert!(s.row_plans().is_empty());
    assert_eq!(s.get_column_width("name"), Some(120.0));
}
