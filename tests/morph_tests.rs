// Host-side tests for the formed <-> chaos step machine.

use tree_web::core::{MorphState, MorphTarget};

fn at(step_taps: usize) -> MorphState {
    let mut m = MorphState::new();
    for _ in 0..step_taps {
        m.advance();
    }
    m
}

#[test]
fn starts_formed_and_expanding() {
    let m = MorphState::new();
    assert_eq!(m.step(), 0);
    assert!(m.is_expanding());
    assert_eq!(m.progress(), 0.0);
}

#[test]
fn advance_never_leaves_range_from_any_state() {
    // Reach every (step, expanding) pair by tapping, then tap once more.
    for taps in 0..20 {
        let mut m = at(taps);
        assert!(m.step() <= 5, "step {} after {} taps", m.step(), taps);
        m.advance();
        assert!(m.step() <= 5, "step {} after {} taps", m.step(), taps + 1);
    }
    for target in [MorphTarget::Formed, MorphTarget::Chaos] {
        let mut m = MorphState::new();
        m.jump_to(target);
        for _ in 0..12 {
            m.advance();
            assert!(m.step() <= 5);
        }
    }
}

#[test]
fn five_taps_reach_full_chaos_and_sixth_bounces_back() {
    let mut m = at(5);
    assert_eq!(m.step(), 5);
    assert_eq!(m.progress(), 1.0);
    m.advance();
    assert_eq!(m.step(), 4, "must bounce back, never reach 6");
    assert!(!m.is_expanding());
}

#[test]
fn tap_sequence_walks_up_then_down() {
    let mut m = MorphState::new();
    let mut steps = Vec::new();
    for _ in 0..12 {
        m.advance();
        steps.push(m.step());
    }
    assert_eq!(steps, vec![1, 2, 3, 4, 5, 4, 3, 2, 1, 0, 1, 2]);
}

#[test]
fn bounces_off_formed_extreme() {
    let mut m = MorphState::new();
    m.jump_to(MorphTarget::Chaos);
    for _ in 0..5 {
        m.advance();
    }
    assert_eq!((m.step(), m.is_expanding()), (0, false));
    m.advance();
    assert_eq!((m.step(), m.is_expanding()), (1, true));
}

#[test]
fn jumps_are_idempotent_and_restore_initial_state() {
    let mut m = at(3);
    m.jump_to(MorphTarget::Chaos);
    let chaos = m;
    m.jump_to(MorphTarget::Chaos);
    assert_eq!(m, chaos);
    assert_eq!((m.step(), m.is_expanding()), (5, false));

    m.jump_to(MorphTarget::Formed);
    m.jump_to(MorphTarget::Formed);
    assert_eq!(m, MorphState::new());
}

#[test]
fn progress_is_step_over_five() {
    for taps in 0..=5 {
        let m = at(taps);
        assert!((m.progress() - taps as f32 / 5.0).abs() < 1e-6);
    }
}
