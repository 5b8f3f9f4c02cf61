//! Flat state machines
//!
//! Small statechart runtime used for steady-state effects such as the
//! breathing animation. Supports:
//! - Flat state machines over any `Copy + Eq + Hash` state and event types
//! - Entry/exit callbacks

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A callback run when a state is entered or exited
pub type Callback = Box<dyn FnMut() + Send>;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
}

impl<S, E> Transition<S, E> {
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    transitions: Vec<Transition<S, E>>,
    entry_callbacks: FxHashMap<S, Vec<Callback>>,
    exit_callbacks: FxHashMap<S, Vec<Callback>>,
    transitions_taken: usize,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Debug,
{
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: S, transitions: Vec<Transition<S, E>>) -> Self {
        Self {
            current_state: initial_state,
            transitions,
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
            transitions_taken: 0,
        }
    }

    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Number of transitions taken since construction
    pub fn transition_count(&self) -> usize {
        self.transitions_taken
    }

    /// Send an event to the state machine, potentially triggering a transition
    ///
    /// Events with no transition from the current state are ignored.
    pub fn send(&mut self, event: E) -> S {
        let current = self.current_state;

        let Some(to_state) = self
            .transitions
            .iter()
            .find(|t| t.from_state == current && t.event == event)
            .map(|t| t.to_state)
        else {
            return current;
        };

        run_callbacks(&mut self.exit_callbacks, current);

        self.current_state = to_state;
        self.transitions_taken += 1;
        tracing::trace!(from = ?current, ?event, to = ?to_state, "fsm transition");

        run_callbacks(&mut self.entry_callbacks, to_state);

        to_state
    }

    /// Register an entry callback for a state
    pub fn on_enter<F: FnMut() + Send + 'static>(&mut self, state: S, callback: F) {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(callback));
    }

    /// Register an exit callback for a state
    pub fn on_exit<F: FnMut() + Send + 'static>(&mut self, state: S, callback: F) {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(callback));
    }
}

fn run_callbacks<S: Eq + Hash>(table: &mut FxHashMap<S, Vec<Callback>>, state: S) {
    if let Some(callbacks) = table.get_mut(&state) {
        for callback in callbacks.iter_mut() {
            callback();
        }
    }
}
