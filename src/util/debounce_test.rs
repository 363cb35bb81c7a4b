use super::*;

// The timer itself needs a browser; the generation gate is what decides
// whether a fired timer may act, and that is testable here.

#[test]
fn only_the_latest_schedule_is_current() {
    let debouncer = Debouncer::new();
    // Keystrokes at t=0, t=100, t=200, all within one debounce window.
    let first = debouncer.begin();
    let second = debouncer.begin();
    let third = debouncer.begin();

    assert!(!debouncer.is_current(first));
    assert!(!debouncer.is_current(second));
    assert!(debouncer.is_current(third));
}

#[test]
fn single_schedule_stays_current_until_superseded() {
    // One keystroke then silence: that timer fires.
    let debouncer = Debouncer::new();
    let only = debouncer.begin();
    assert!(debouncer.is_current(only));
}

#[test]
fn cancel_invalidates_pending_timers() {
    let debouncer = Debouncer::new();
    let pending = debouncer.begin();
    debouncer.cancel();
    assert!(!debouncer.is_current(pending));
}

#[test]
fn clones_share_the_generation_counter() {
    let debouncer = Debouncer::new();
    let clone = debouncer.clone();
    let pending = debouncer.begin();
    clone.cancel();
    assert!(!debouncer.is_current(pending));
}
