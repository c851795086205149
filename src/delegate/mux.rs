//! Action-keyed delegate multiplexing.

use super::{BoxDelegate, Delegate, HandleError};
use crate::core::{Arguments, Event, State};
use crate::machine::StateMachine;
use std::collections::HashMap;
use std::sync::Weak;

/// Routes each action to the delegate registered under its name.
///
/// Actions without a registered delegate are ignored: callers register only
/// the actions they care about and the rest flow through unhandled.
pub struct ActionMuxDelegate<S: State, E: Event> {
    delegates: HashMap<String, BoxDelegate<S, E>>,
}

impl<S: State, E: Event> ActionMuxDelegate<S, E> {
    pub fn new(delegates: HashMap<String, BoxDelegate<S, E>>) -> Self {
        Self { delegates }
    }

    /// Register `delegate` for `action`, replacing any previous one.
    pub fn with<D>(mut self, action: impl Into<String>, delegate: D) -> Self
    where
        D: Delegate<S, E> + 'static,
    {
        self.delegates.insert(action.into(), Box::new(delegate));
        self
    }

    pub fn contains(&self, action: &str) -> bool {
        self.delegates.contains_key(action)
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl<S: State, E: Event> Default for ActionMuxDelegate<S, E> {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl<S: State, E: Event> FromIterator<(String, BoxDelegate<S, E>)> for ActionMuxDelegate<S, E> {
    fn from_iter<I: IntoIterator<Item = (String, BoxDelegate<S, E>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S: State, E: Event> Delegate<S, E> for ActionMuxDelegate<S, E> {
    fn handle(&self, action: &str, from: &S, to: &S, args: &Arguments) -> Result<(), HandleError> {
        match self.delegates.get(action) {
            Some(delegate) => delegate.handle(action, from, to, args),
            None => Ok(()),
        }
    }

    fn set_state_machine(&self, machine: &Weak<StateMachine<S, E>>) {
        for delegate in self.delegates.values() {
            delegate.set_state_machine(machine);
        }
    }
}
