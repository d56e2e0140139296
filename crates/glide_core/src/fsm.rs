//! State machine runtime
//!
//! Flat statecharts for widget interaction states. Supports:
//! - Guards (conditional transitions)
//! - Entry/exit actions
//! - Transition actions
//!
//! An event with no matching transition from the current state is ignored,
//! which gives widgets their defensive behavior against malformed event
//! sequences for free: a `GESTURE_MOVE` delivered while idle simply does
//! not transition.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::events::EventType;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// A guard function that determines if a transition should occur
pub type Guard = Box<dyn Fn() -> bool + Send>;

/// An action function executed during transitions
pub type Action = Box<dyn FnMut() + Send>;

/// A transition in the state machine
pub struct Transition {
    pub from_state: StateId,
    pub event: EventType,
    pub to_state: StateId,
    pub guard: Option<Guard>,
    pub actions: SmallVec<[Action; 2]>,
}

impl Transition {
    /// Create a simple transition without guard or actions
    pub fn new(from: StateId, event: EventType, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
            actions: SmallVec::new(),
        }
    }

    /// Add a guard condition
    pub fn with_guard<F: Fn() -> bool + Send + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Add an action to execute during transition
    pub fn with_action<F: FnMut() + Send + 'static>(mut self, action: F) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    fn is_open(&self) -> bool {
        match &self.guard {
            Some(guard) => guard(),
            None => true,
        }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: Vec<Transition>,
    entry_callbacks: FxHashMap<StateId, Vec<Action>>,
    exit_callbacks: FxHashMap<StateId, Vec<Action>>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventType, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add an entry action for a state
    pub fn on_enter<F: FnMut() + Send + 'static>(mut self, state: StateId, action: F) -> Self {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Add an exit action for a state
    pub fn on_exit<F: FnMut() + Send + 'static>(mut self, state: StateId, action: F) -> Self {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            entry_callbacks: self.entry_callbacks,
            exit_callbacks: self.exit_callbacks,
            history: Vec::new(),
        }
    }
}

/// A state machine instance
pub struct StateMachine {
    current_state: StateId,
    transitions: Vec<Transition>,
    entry_callbacks: FxHashMap<StateId, Vec<Action>>,
    exit_callbacks: FxHashMap<StateId, Vec<Action>>,
    /// History of state transitions (for debugging)
    history: Vec<(StateId, EventType, StateId)>,
}

impl StateMachine {
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: StateId, transitions: Vec<Transition>) -> Self {
        Self {
            current_state: initial_state,
            transitions,
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
            history: Vec::new(),
        }
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Get transition history
    pub fn history(&self) -> &[(StateId, EventType, StateId)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from the current state
    pub fn can_send(&self, event: EventType) -> bool {
        let current = self.current_state;
        self.transitions
            .iter()
            .any(|t| t.from_state == current && t.event == event && t.is_open())
    }

    /// Send an event to the state machine, potentially triggering a
    /// transition. Returns the (possibly unchanged) current state.
    pub fn send(&mut self, event: EventType) -> StateId {
        let current = self.current_state;

        let transition_idx = self
            .transitions
            .iter()
            .position(|t| t.from_state == current && t.event == event && t.is_open());

        let Some(idx) = transition_idx else {
            return current;
        };

        // Target state is fixed before any callback runs
        let to_state = self.transitions[idx].to_state;

        if let Some(callbacks) = self.exit_callbacks.get_mut(&current) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        for action in self.transitions[idx].actions.iter_mut() {
            action();
        }

        self.current_state = to_state;
        self.history.push((current, event, to_state));
        tracing::trace!("fsm transition {} --{}--> {}", current, event, to_state);

        if let Some(callbacks) = self.entry_callbacks.get_mut(&to_state) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        to_state
    }

    /// Register an entry callback for a state
    pub fn on_enter<F: FnMut() + Send + 'static>(&mut self, state: StateId, callback: F) {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(callback));
    }

    /// Register an exit callback for a state
    pub fn on_exit<F: FnMut() + Send + 'static>(&mut self, state: StateId, callback: F) {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_types::{GESTURE_CANCEL, GESTURE_END, GESTURE_MOVE, GESTURE_START};
    use std::sync::{Arc, Mutex};

    // State constants for tests
    const IDLE: StateId = 0;
    const DRAGGING: StateId = 1;

    fn drag_fsm() -> StateMachine {
        StateMachine::builder(IDLE)
            .on(IDLE, GESTURE_START, DRAGGING)
            .on(DRAGGING, GESTURE_MOVE, DRAGGING)
            .on(DRAGGING, GESTURE_END, IDLE)
            .on(DRAGGING, GESTURE_CANCEL, IDLE)
            .build()
    }

    #[test]
    fn test_drag_lifecycle_transitions() {
        let mut fsm = drag_fsm();
        assert_eq!(fsm.current_state(), IDLE);

        fsm.send(GESTURE_START);
        assert_eq!(fsm.current_state(), DRAGGING);

        fsm.send(GESTURE_MOVE);
        assert_eq!(fsm.current_state(), DRAGGING);

        fsm.send(GESTURE_END);
        assert_eq!(fsm.current_state(), IDLE);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut fsm = drag_fsm();
        fsm.send(GESTURE_START);
        fsm.send(GESTURE_CANCEL);
        assert_eq!(fsm.current_state(), IDLE);
    }

    #[test]
    fn test_event_without_transition_is_ignored() {
        let mut fsm = drag_fsm();

        // A move before any start has no matching transition
        fsm.send(GESTURE_MOVE);
        assert_eq!(fsm.current_state(), IDLE);
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_guard_conditions() {
        let enabled = Arc::new(Mutex::new(true));
        let enabled_clone = enabled.clone();

        let mut fsm = StateMachine::builder(IDLE)
            .transition(
                Transition::new(IDLE, GESTURE_START, DRAGGING)
                    .with_guard(move || *enabled_clone.lock().unwrap()),
            )
            .build();

        // Guard passes - transition happens
        fsm.send(GESTURE_START);
        assert_eq!(fsm.current_state(), DRAGGING);

        // Reset to IDLE (manually for test)
        fsm.current_state = IDLE;

        // Guard fails - no transition
        *enabled.lock().unwrap() = false;
        fsm.send(GESTURE_START);
        assert_eq!(fsm.current_state(), IDLE);
    }

    #[test]
    fn test_entry_exit_callbacks() {
        let entry_count = Arc::new(Mutex::new(0));
        let exit_count = Arc::new(Mutex::new(0));

        let entry_clone = entry_count.clone();
        let exit_clone = exit_count.clone();

        let mut fsm = StateMachine::builder(IDLE)
            .on(IDLE, GESTURE_START, DRAGGING)
            .on(DRAGGING, GESTURE_END, IDLE)
            .on_enter(DRAGGING, move || {
                *entry_clone.lock().unwrap() += 1;
            })
            .on_exit(DRAGGING, move || {
                *exit_clone.lock().unwrap() += 1;
            })
            .build();

        fsm.send(GESTURE_START);
        assert_eq!(*entry_count.lock().unwrap(), 1);
        assert_eq!(*exit_count.lock().unwrap(), 0);

        fsm.send(GESTURE_END);
        assert_eq!(*entry_count.lock().unwrap(), 1);
        assert_eq!(*exit_count.lock().unwrap(), 1);
    }

    #[test]
    fn test_transition_actions() {
        let action_count = Arc::new(Mutex::new(0));
        let action_clone = action_count.clone();

        let mut fsm = StateMachine::builder(IDLE)
            .transition(
                Transition::new(IDLE, GESTURE_START, DRAGGING).with_action(move || {
                    *action_clone.lock().unwrap() += 1;
                }),
            )
            .build();

        fsm.send(GESTURE_START);
        assert_eq!(*action_count.lock().unwrap(), 1);
    }

    #[test]
    fn test_history() {
        let mut fsm = drag_fsm();

        fsm.send(GESTURE_START);
        fsm.send(GESTURE_END);

        let history = fsm.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], (IDLE, GESTURE_START, DRAGGING));
        assert_eq!(history[1], (DRAGGING, GESTURE_END, IDLE));
    }

    #[test]
    fn test_can_send() {
        let fsm = drag_fsm();

        assert!(fsm.can_send(GESTURE_START));
        assert!(!fsm.can_send(GESTURE_END));
    }
}
