use super::*;

#[test]
fn only_the_latest_token_is_current() {
    let gate = DebounceGate::new();
    let first = gate.arm();
    let second = gate.arm();
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
}

#[test]
fn each_keystroke_supersedes_the_previous_pending_search() {
    let gate = DebounceGate::new();
    // "U", "Ur", "Urg" typed inside one quiet window: three armed tokens,
    // only the last may fire.
    let tokens: Vec<u64> = (0..3).map(|_| gate.arm()).collect();
    let fired: Vec<u64> = tokens.iter().copied().filter(|t| gate.is_current(*t)).collect();
    assert_eq!(fired, [tokens[2]]);
}

#[test]
fn cancel_invalidates_without_issuing_a_new_token() {
    let gate = DebounceGate::new();
    let token = gate.arm();
    gate.cancel();
    assert!(!gate.is_current(token));
}

#[test]
fn expiring_timers_from_one_burst_fire_exactly_once() {
    let gate = DebounceGate::new();
    let fired = std::cell::Cell::new(0u32);

    // Three keystrokes each arm a token and hand it to a timer; all three
    // timers eventually expire, in order.
    let tokens: Vec<u64> = (0..3).map(|_| gate.arm()).collect();
    for token in tokens {
        gate.try_fire(token, || fired.set(fired.get() + 1));
    }

    assert_eq!(fired.get(), 1);
}

#[test]
fn a_cancelled_timer_never_fires() {
    let gate = DebounceGate::new();
    let token = gate.arm();
    gate.cancel();
    assert!(!gate.try_fire(token, || unreachable!("cancelled timer fired")));
}

#[test]
fn clones_share_the_same_gate() {
    let gate = DebounceGate::new();
    let handle = gate.clone();
    let token = gate.arm();
    handle.arm();
    assert!(!gate.is_current(token));
}
