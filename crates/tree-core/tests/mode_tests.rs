use tree_core::*;

fn sample(is_fist: bool, is_open: bool) -> HandSample {
    HandSample {
        is_fist,
        is_open,
        x: 0.0,
        y: 0.0,
    }
}

#[test]
fn starts_merged() {
    let c = ModeController::default();
    assert_eq!(c.mode(), TreeMode::Merged);
    assert_eq!(c.transitions(), 0);
}

#[test]
fn fist_stream_while_merged_is_a_noop_then_open_scatters_once() {
    let mut c = ModeController::default();
    let fist = sample(true, false);
    for _ in 0..100 {
        assert_eq!(c.observe(Some(&fist)), None);
    }
    assert_eq!(c.transitions(), 0);

    let open = sample(false, true);
    assert_eq!(c.observe(Some(&open)), Some(TreeMode::Scattered));
    assert_eq!(c.transitions(), 1);
    for _ in 0..100 {
        assert_eq!(c.observe(Some(&open)), None);
    }
    assert_eq!(c.transitions(), 1);
    assert_eq!(c.mode(), TreeMode::Scattered);
}

#[test]
fn missing_or_indeterminate_samples_keep_mode() {
    let mut c = ModeController::new(TreeMode::Scattered);
    assert_eq!(c.observe(None), None);
    assert_eq!(c.observe(Some(&sample(false, false))), None);
    assert_eq!(c.mode(), TreeMode::Scattered);

    assert_eq!(c.observe(Some(&sample(true, false))), Some(TreeMode::Merged));
    assert_eq!(c.observe(None), None);
    assert_eq!(c.observe(Some(&sample(false, false))), None);
    assert_eq!(c.mode(), TreeMode::Merged);
}

#[test]
fn alternating_gestures_count_every_edge() {
    let mut c = ModeController::default();
    let seq = [
        sample(false, true),
        sample(false, false),
        sample(true, false),
        sample(true, false),
        sample(false, true),
    ];
    for s in &seq {
        c.observe(Some(s));
    }
    assert_eq!(c.transitions(), 3);
    assert_eq!(c.mode(), TreeMode::Scattered);
}
