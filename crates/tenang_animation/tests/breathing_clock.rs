//! Drives the breathing machine and descriptor the way a renderer would:
//! sync the flag on every frame, restart the clock on entry, sample the pulse.

use std::sync::{Arc, Mutex};

use tenang_animation::breathing::{BREATH_DURATION_MS, BREATH_EXPANDED_SCALE};
use tenang_animation::{BreathingMachine, BreathingState};

#[test]
fn test_renderer_restarts_clock_on_entry() {
    let clock_start = Arc::new(Mutex::new(None::<u64>));
    let now = Arc::new(Mutex::new(0u64));

    let mut machine = BreathingMachine::new();
    {
        let clock_start = clock_start.clone();
        let now = now.clone();
        machine.on_start(move || *clock_start.lock().unwrap() = Some(*now.lock().unwrap()));
    }
    {
        let clock_start = clock_start.clone();
        machine.on_stop(move || *clock_start.lock().unwrap() = None);
    }

    // Frame at t=100ms: breathing switched on
    *now.lock().unwrap() = 100;
    let state = machine.sync(true);
    assert_eq!(*clock_start.lock().unwrap(), Some(100));

    // Half a cycle later the surface is fully expanded
    let frame = 100 + u64::from(BREATH_DURATION_MS / 2);
    let start = clock_start.lock().unwrap().unwrap();
    let anim = state.animation(false).expect("breathing state has an animation");
    let props = anim.sample_at(frame - start);
    assert!((props.resolved_scale() - BREATH_EXPANDED_SCALE).abs() < 1e-6);

    // Switched off: clock cleared, no animation
    let state = machine.sync(false);
    assert_eq!(state, BreathingState::Idle);
    assert_eq!(*clock_start.lock().unwrap(), None);
    assert!(state.animation(false).is_none());
}

#[test]
fn test_pulse_returns_to_rest_every_cycle() {
    let anim = BreathingState::Breathing.animation(true).unwrap();
    let rest = anim.sample_at(0);
    for cycle in 1..5u64 {
        assert_eq!(anim.sample_at(cycle * u64::from(BREATH_DURATION_MS)), rest);
    }
}
