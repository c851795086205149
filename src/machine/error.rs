//! Errors reported by [`StateMachine::trigger`](super::StateMachine::trigger).

use crate::core::{Arguments, Event, State};
use crate::delegate::BoxError;
use thiserror::Error;

/// No transition matches the current state and event.
#[derive(Debug, Error)]
#[error(
    "cannot transition from {:?} state triggered by {:?} event",
    .current_state.name(),
    .event.name()
)]
pub struct InvalidTransitionError<S: State, E: Event> {
    current_state: S,
    event: E,
    arguments: Arguments,
}

impl<S: State, E: Event> InvalidTransitionError<S, E> {
    pub(crate) fn new(current_state: S, event: E, arguments: Arguments) -> Self {
        Self {
            current_state,
            event,
            arguments,
        }
    }

    pub fn current_state(&self) -> &S {
        &self.current_state
    }

    pub fn event(&self) -> &E {
        &self.event
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }
}

/// A delegate failed while handling a transition's action.
///
/// Records the would-be next state and the action so callers can tell a
/// side-effect failure apart from a transition table problem. Nothing is
/// rolled back: state changes belong to the delegate.
#[derive(Debug, Error)]
#[error(
    "delegate reported an error during transition from {:?} state triggered by {:?} event: {cause}",
    .current_state.name(),
    .event.name()
)]
pub struct DelegateError<S: State, E: Event> {
    #[source]
    cause: BoxError,
    current_state: S,
    event: E,
    arguments: Arguments,
    next_state: S,
    action: String,
}

impl<S: State, E: Event> DelegateError<S, E> {
    pub(crate) fn new(
        cause: BoxError,
        current_state: S,
        event: E,
        arguments: Arguments,
        next_state: S,
        action: String,
    ) -> Self {
        Self {
            cause,
            current_state,
            event,
            arguments,
            next_state,
            action,
        }
    }

    /// The error returned by the delegate.
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    /// Take ownership of the delegate's error.
    pub fn into_cause(self) -> BoxError {
        self.cause
    }

    pub fn current_state(&self) -> &S {
        &self.current_state
    }

    pub fn event(&self) -> &E {
        &self.event
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// The state the transition would have led to.
    pub fn next_state(&self) -> &S {
        &self.next_state
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

/// Errors that can occur when triggering an event.
#[derive(Debug, Error)]
pub enum TriggerError<S: State, E: Event> {
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransitionError<S, E>),

    #[error(transparent)]
    Delegate(#[from] DelegateError<S, E>),

    /// The subject's state accessor failed; the error is passed through as is
    #[error(transparent)]
    Subject(BoxError),
}

impl<S: State, E: Event> TriggerError<S, E> {
    pub fn as_invalid_transition(&self) -> Option<&InvalidTransitionError<S, E>> {
        match self {
            Self::InvalidTransition(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_delegate(&self) -> Option<&DelegateError<S, E>> {
        match self {
            Self::Delegate(err) => Some(err),
            _ => None,
        }
    }
}
