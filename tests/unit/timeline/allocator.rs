use super::*;

#[test]
fn plain_slots_are_back_to_back_with_gap() {
    let mut tl = Timeline::default();
    let a = tl.reserve_slot(SlotRequest::new(1.0));
    let b = tl.reserve_slot(SlotRequest::new(0.5));
    assert_eq!(a.start, 0.0);
    assert!((b.start - 1.1).abs() < 1e-12);
    assert!((tl.cursor() - 1.7).abs() < 1e-12);
    assert_eq!(tl.camera_busy_until(), 0.0);
}

#[test]
fn camera_moves_chain_and_advance_busy_window() {
    let mut tl = Timeline::default();
    let a = tl.reserve_slot(SlotRequest::new(1.0).camera_move());
    let busy_after_a = tl.camera_busy_until();
    let b = tl.reserve_slot(SlotRequest::new(1.0).camera_move());
    assert!(b.start >= a.start + 1.0 + tl.opts().gap - 1e-12);
    assert!(tl.camera_busy_until() > busy_after_a);
    assert!(busy_after_a > 0.0);
}

#[test]
fn narration_pause_adds_breathing_room() {
    let mut tl = Timeline::default();
    tl.reserve_slot(SlotRequest::new(1.0));
    let s = tl.reserve_slot(SlotRequest::new(1.0).narration_pause());
    assert!((s.start - 1.4).abs() < 1e-12);
}

#[test]
fn degenerate_durations_are_clamped() {
    let mut tl = Timeline::default();
    for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let s = tl.reserve_slot(SlotRequest::new(d));
        assert_eq!(s.duration, MIN_DURATION_SECS);
        assert!(s.start.is_finite());
    }
    assert!(tl.cursor().is_finite());
}

#[test]
fn slots_never_overlap() {
    let mut tl = Timeline::default();
    let mut slots = Vec::new();
    for i in 0..50 {
        let mut req = SlotRequest::new(f64::from(i % 7) * 0.3);
        req.needs_camera_move = i % 5 == 0;
        req.add_narration_pause = i % 3 == 0;
        slots.push(tl.reserve_slot(req));
    }
    for w in slots.windows(2) {
        assert!(w[1].start >= w[0].end());
    }
}

#[test]
fn invalid_opts_fall_back_to_defaults() {
    let tl = Timeline::new(TimelineOpts {
        min_duration: -1.0,
        gap: f64::NAN,
        breathing_room: -0.5,
    });
    assert_eq!(tl.opts(), TimelineOpts::default());
}
