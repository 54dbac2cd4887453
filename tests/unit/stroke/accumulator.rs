use super::*;

fn acc(max_undo: usize) -> StrokeAccumulator {
    StrokeAccumulator::new(PixelSize::new(100, 100), 1.0, HeatBlend::SourceOver, max_undo).unwrap()
}

fn draw(a: &mut StrokeAccumulator, y: f64) {
    a.begin_stroke();
    for x in [10.0, 30.0, 50.0] {
        a.add_stamp(Stamp::new(x, y, 12.0, 0.3)).unwrap();
    }
    assert!(a.end_stroke());
}

#[test]
fn three_stamps_then_undo_leaves_buffer_blank() {
    let mut a = acc(10);
    a.begin_stroke();
    for x in [10.0, 15.0, 20.0] {
        a.add_stamp(Stamp::new(x, 10.0, 20.0, 0.1)).unwrap();
    }
    assert!(!a.buffer().is_blank());
    assert!(a.end_stroke());
    assert!(a.undo());
    assert!(a.buffer().is_blank());
    assert!(a.log().is_empty());
    assert!(a.can_redo());
}

#[test]
fn add_stamp_outside_stroke_is_rejected() {
    let mut a = acc(10);
    let err = a.add_stamp(Stamp::new(1.0, 1.0, 5.0, 0.5)).unwrap_err();
    assert!(err.to_string().contains("outside a stroke"));
}

#[test]
fn add_stamp_validates_numbers() {
    let mut a = acc(10);
    a.begin_stroke();
    assert!(a.add_stamp(Stamp::new(f64::NAN, 1.0, 5.0, 0.5)).is_err());
    assert!(a.add_stamp(Stamp::new(1.0, 1.0, -5.0, 0.5)).is_err());
    assert!(a.buffer().is_blank());
}

#[test]
fn empty_stroke_is_not_logged() {
    let mut a = acc(10);
    a.begin_stroke();
    assert!(!a.end_stroke());
    assert!(a.log().is_empty());
    assert!(!a.has_unsaved_changes());
}

#[test]
fn undo_redo_restores_identical_buffer() {
    let mut a = acc(10);
    for i in 0..5 {
        draw(&mut a, 10.0 + 15.0 * f64::from(i));
    }
    let before = a.buffer().clone();

    for n in 1..=5 {
        for _ in 0..n {
            assert!(a.undo());
        }
        for _ in 0..n {
            assert!(a.redo());
        }
        assert_eq!(a.buffer(), &before, "mismatch after {n} undo/redo pairs");
    }
}

#[test]
fn new_stroke_discards_redo_history() {
    let mut a = acc(10);
    draw(&mut a, 20.0);
    draw(&mut a, 40.0);
    assert!(a.undo());
    assert!(a.can_redo());

    draw(&mut a, 60.0);
    assert!(!a.can_redo());
    assert!(!a.redo());
    assert_eq!(a.log().len(), 2);
}

#[test]
fn undo_depth_is_bounded_by_evicting_oldest() {
    let mut a = acc(3);
    for i in 0..6 {
        draw(&mut a, 5.0 + 15.0 * f64::from(i));
    }
    assert_eq!(a.log().len(), 6);
    assert_eq!(a.undo_depth(), 3);

    assert!(a.undo());
    assert!(a.undo());
    assert!(a.undo());
    assert!(!a.undo());
    assert_eq!(a.log().len(), 3);
    assert!(!a.buffer().is_blank());
}

#[test]
fn shrinking_undo_limit_bakes_strokes() {
    let mut a = acc(10);
    for i in 0..4 {
        draw(&mut a, 10.0 + 20.0 * f64::from(i));
    }
    a.set_max_undo(1);
    assert_eq!(a.undo_depth(), 1);
}

fn first_stamp_rows(a: &StrokeAccumulator) -> Vec<f64> {
    a.log().strokes().iter().map(|s| s.stamps()[0].y).collect()
}

#[test]
fn shrinking_limit_keeps_next_redo() {
    let mut a = acc(10);
    for y in [10.0, 50.0, 90.0] {
        draw(&mut a, y);
    }
    for _ in 0..3 {
        assert!(a.undo());
    }
    a.set_max_undo(1);
    assert_eq!(a.redo_depth(), 1);

    assert!(a.redo());
    assert_eq!(first_stamp_rows(&a), vec![10.0]);
    assert!(!a.redo());

    let mut fresh = acc(10);
    draw(&mut fresh, 10.0);
    assert_eq!(a.buffer(), fresh.buffer());
}

#[test]
fn redo_respects_shrunk_undo_limit() {
    let mut a = acc(10);
    for i in 0..10 {
        draw(&mut a, 5.0 + 9.0 * f64::from(i));
    }
    assert!(a.undo());
    assert!(a.undo());
    a.set_max_undo(3);

    assert!(a.redo());
    assert!(a.redo());
    assert_eq!(a.log().len(), 10);
    assert_eq!(a.undo_depth(), 3);

    for _ in 0..3 {
        assert!(a.undo());
    }
    assert!(!a.undo());
    assert_eq!(a.log().len(), 7);
}

#[test]
fn replay_matches_incremental_state() {
    let mut a = acc(10);
    for i in 0..4 {
        draw(&mut a, 12.0 + 20.0 * f64::from(i));
    }
    let incremental = a.buffer().clone();
    a.replay();
    assert_eq!(a.buffer(), &incremental);
}

#[test]
fn clear_and_load() {
    let mut a = acc(2);
    draw(&mut a, 20.0);
    let log = a.log().clone();
    let drawn = a.buffer().clone();

    a.clear();
    assert!(a.buffer().is_blank());
    assert!(!a.can_undo());
    assert!(a.has_unsaved_changes());

    a.load(log).unwrap();
    assert_eq!(a.buffer(), &drawn);
    assert!(a.can_undo());
    assert!(!a.has_unsaved_changes());
}

#[test]
fn undo_commits_stroke_in_progress_first() {
    let mut a = acc(10);
    a.begin_stroke();
    a.add_stamp(Stamp::new(50.0, 50.0, 10.0, 0.5)).unwrap();
    assert!(a.undo());
    assert!(a.buffer().is_blank());
    assert_eq!(a.redo_depth(), 1);
}
