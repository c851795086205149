//! Ordered delegate chaining with early stop.

use super::{BoxDelegate, Delegate, HandleError};
use crate::core::{Arguments, Event, State};
use crate::machine::StateMachine;
use std::sync::Weak;
use tracing::debug;

/// How a [`CompositeDelegate`] reacts to an ordinary failure of one of its
/// delegates. `StopPropagation` always halts the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorStrategy {
    /// Skip the remaining delegates and return the failure
    #[default]
    Halt,

    /// Run the remaining delegates, then return the first failure
    Continue,

    /// Run the remaining delegates and drop the failure after logging it
    IgnoreAndLog,
}

/// Runs a sequence of delegates against the same action, in order.
///
/// A delegate returning [`HandleError::StopPropagation`] ends the chain; the
/// composite then returns `StopPropagation` itself, which the state machine
/// reports to its caller as success.
pub struct CompositeDelegate<S: State, E: Event> {
    delegates: Vec<BoxDelegate<S, E>>,
    strategy: ErrorStrategy,
}

impl<S: State, E: Event> CompositeDelegate<S, E> {
    pub fn new(delegates: Vec<BoxDelegate<S, E>>) -> Self {
        Self {
            delegates,
            strategy: ErrorStrategy::default(),
        }
    }

    /// Append a delegate to the end of the chain.
    pub fn with<D>(mut self, delegate: D) -> Self
    where
        D: Delegate<S, E> + 'static,
    {
        self.delegates.push(Box::new(delegate));
        self
    }

    /// Set the failure handling strategy (default: [`ErrorStrategy::Halt`]).
    pub fn with_strategy(mut self, strategy: ErrorStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> ErrorStrategy {
        self.strategy
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl<S: State, E: Event> Default for CompositeDelegate<S, E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<S: State, E: Event> FromIterator<BoxDelegate<S, E>> for CompositeDelegate<S, E> {
    fn from_iter<I: IntoIterator<Item = BoxDelegate<S, E>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S: State, E: Event> Delegate<S, E> for CompositeDelegate<S, E> {
    fn handle(&self, action: &str, from: &S, to: &S, args: &Arguments) -> Result<(), HandleError> {
        let mut first_failure = None;

        for (position, delegate) in self.delegates.iter().enumerate() {
            match delegate.handle(action, from, to, args) {
                Ok(()) => {}
                Err(HandleError::StopPropagation) => {
                    return Err(first_failure.unwrap_or(HandleError::StopPropagation));
                }
                Err(failure) => match self.strategy {
                    ErrorStrategy::Halt => return Err(failure),
                    ErrorStrategy::Continue => {
                        first_failure.get_or_insert(failure);
                    }
                    ErrorStrategy::IgnoreAndLog => {
                        debug!(
                            action,
                            from = from.name(),
                            to = to.name(),
                            position,
                            error = %failure,
                            "composite delegate ignored a delegate failure"
                        );
                    }
                },
            }
        }

        first_failure.map_or(Ok(()), Err)
    }

    fn set_state_machine(&self, machine: &Weak<StateMachine<S, E>>) {
        for delegate in &self.delegates {
            delegate.set_state_machine(machine);
        }
    }
}
