//! Delegates perform the side effects attached to transition actions.
//!
//! A delegate is a single capability: handle a named action for a
//! `from -> to` transition. Richer dispatch policies are built by composing
//! delegates, without the engine knowing about composition:
//!
//! - [`ActionMuxDelegate`]: routes each action to the delegate registered for it
//! - [`CompositeDelegate`]: runs a chain of delegates with early stop

mod composite;
mod mux;

pub use composite::{CompositeDelegate, ErrorStrategy};
pub use mux::ActionMuxDelegate;

use crate::core::{Arguments, Event, State};
use crate::machine::StateMachine;
use std::sync::{Arc, OnceLock, Weak};
use thiserror::Error;

/// Boxed error type used for delegate failures and subject accessor failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A delegate stored behind a trait object.
pub type BoxDelegate<S, E> = Box<dyn Delegate<S, E>>;

/// Non-successful outcome of [`Delegate::handle`].
#[derive(Debug, Error)]
pub enum HandleError {
    /// Handled: suppress further chaining and report success to the caller
    #[error("delegate stopped propagation")]
    StopPropagation,

    /// The side effect failed
    #[error(transparent)]
    Failure(BoxError),
}

impl HandleError {
    /// Wrap any error (or message) as a delegate failure.
    pub fn failure(error: impl Into<BoxError>) -> Self {
        Self::Failure(error.into())
    }

    pub fn is_stop_propagation(&self) -> bool {
        matches!(self, Self::StopPropagation)
    }
}

/// Handles transition actions.
///
/// The actual state change of a subject usually happens inside a delegate:
/// the engine only resolves transitions.
///
/// Delegates that need to trigger further transitions from within
/// [`handle`](Delegate::handle) override
/// [`set_state_machine`](Delegate::set_state_machine) to keep the weak
/// back-reference the engine hands out at construction (see
/// [`StateMachineCell`]).
pub trait Delegate<S: State, E: Event>: Send + Sync {
    /// Handle `action` for a transition from `from` to `to`.
    fn handle(&self, action: &str, from: &S, to: &S, args: &Arguments) -> Result<(), HandleError>;

    /// Receive a back-reference to the owning state machine.
    ///
    /// Called once by [`StateMachine::new`] before the machine is returned.
    /// Composite delegates forward it to their children.
    fn set_state_machine(&self, _machine: &Weak<StateMachine<S, E>>) {}
}

impl<S: State, E: Event, D: Delegate<S, E> + ?Sized> Delegate<S, E> for Arc<D> {
    fn handle(&self, action: &str, from: &S, to: &S, args: &Arguments) -> Result<(), HandleError> {
        (**self).handle(action, from, to, args)
    }

    fn set_state_machine(&self, machine: &Weak<StateMachine<S, E>>) {
        (**self).set_state_machine(machine)
    }
}

impl<S: State, E: Event, D: Delegate<S, E> + ?Sized> Delegate<S, E> for Box<D> {
    fn handle(&self, action: &str, from: &S, to: &S, args: &Arguments) -> Result<(), HandleError> {
        (**self).handle(action, from, to, args)
    }

    fn set_state_machine(&self, machine: &Weak<StateMachine<S, E>>) {
        (**self).set_state_machine(machine)
    }
}

type HandleFn<S> = Box<dyn Fn(&str, &S, &S, &Arguments) -> Result<(), HandleError> + Send + Sync>;

/// Leaf delegate backed by a closure.
///
/// # Example
///
/// ```rust
/// use fsm_delegate::delegate::{Delegate, FnDelegate};
/// use fsm_delegate::core::Arguments;
///
/// let log = FnDelegate::new(|action: &str, from: &String, to: &String, _args: &Arguments| {
///     println!("{action}: {from} -> {to}");
///     Ok(())
/// });
///
/// let handled: &dyn Delegate<String, String> = &log;
/// assert!(handled
///     .handle("unlock", &"locked".into(), &"unlocked".into(), &Arguments::new())
///     .is_ok());
/// ```
pub struct FnDelegate<S: State> {
    handler: HandleFn<S>,
}

impl<S: State> FnDelegate<S> {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str, &S, &S, &Arguments) -> Result<(), HandleError> + Send + Sync + 'static,
    {
        FnDelegate {
            handler: Box::new(handler),
        }
    }
}

impl<S: State, E: Event> Delegate<S, E> for FnDelegate<S> {
    fn handle(&self, action: &str, from: &S, to: &S, args: &Arguments) -> Result<(), HandleError> {
        (self.handler)(action, from, to, args)
    }
}

/// Set-once slot holding a state-machine-aware delegate's back-reference.
///
/// The reference is weak: the delegate never keeps the engine alive.
pub struct StateMachineCell<S: State, E: Event> {
    machine: OnceLock<Weak<StateMachine<S, E>>>,
}

impl<S: State, E: Event> StateMachineCell<S, E> {
    pub fn new() -> Self {
        Self {
            machine: OnceLock::new(),
        }
    }

    /// Store the reference. Returns `false` if one was already stored.
    pub fn set(&self, machine: &Weak<StateMachine<S, E>>) -> bool {
        self.machine.set(Weak::clone(machine)).is_ok()
    }

    /// Upgrade the stored reference, if the engine is still alive.
    pub fn get(&self) -> Option<Arc<StateMachine<S, E>>> {
        self.machine.get()?.upgrade()
    }

    pub fn is_set(&self) -> bool {
        self.machine.get().is_some()
    }
}

impl<S: State, E: Event> Default for StateMachineCell<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
