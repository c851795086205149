//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Event, State, Transition};
use crate::delegate::{BoxDelegate, Delegate};
use crate::machine::StateMachine;
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
///
/// Transitions keep the order they are added in, so the first one added for
/// a `(from, event)` pair is the one that fires.
pub struct StateMachineBuilder<S: State, E: Event> {
    delegate: Option<BoxDelegate<S, E>>,
    transitions: Vec<Transition<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            delegate: None,
            transitions: Vec::new(),
        }
    }

    /// Set the delegate (required).
    pub fn delegate<D>(mut self, delegate: D) -> Self
    where
        D: Delegate<S, E> + 'static,
    {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Add a transition that changes state without calling the delegate.
    pub fn transition(self, from: S, event: E, to: S) -> Self {
        self.add_transition(Transition::new(from, event, to))
    }

    /// Add a transition whose action is handed to the delegate.
    pub fn transition_with_action(
        self,
        from: S,
        event: E,
        to: S,
        action: impl Into<String>,
    ) -> Self {
        self.add_transition(Transition::new(from, event, to).with_action(action))
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Arc<StateMachine<S, E>>, BuildError> {
        let delegate = self.delegate.ok_or(BuildError::MissingDelegate)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(StateMachine::new(delegate, self.transitions))
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
