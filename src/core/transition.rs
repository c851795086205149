//! Transition table entries.

use super::state::{Event, State};
use serde::{Deserialize, Serialize};

/// A rule mapping a `(from, event)` pair to the next state and an optional
/// action.
///
/// Transitions are plain values: the engine stores them in declaration order
/// and never mutates them.
///
/// # Example
///
/// ```rust
/// use fsm_delegate::core::Transition;
///
/// let unlock = Transition::new("locked".to_string(), "coin".to_string(), "unlocked".to_string())
///     .with_action("unlock");
///
/// assert_eq!(unlock.action(), Some("unlock"));
/// assert!(unlock.matches(&"locked".to_string(), &"coin".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State, E: Event> {
    /// The state the transition starts from
    pub from: S,
    /// The event that fires the transition
    pub event: E,
    /// The state the transition leads to
    pub to: S,
    /// Action handed to the delegate; `None` changes state without a call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Create a transition without an action.
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from,
            event,
            to,
            action: None,
        }
    }

    /// Attach an action. An empty name is the same as no action.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        let action = action.into();
        self.action = if action.is_empty() { None } else { Some(action) };
        self
    }

    /// The action to dispatch, if any (pure).
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref().filter(|action| !action.is_empty())
    }

    /// Check if this transition applies to the state/event pair (pure).
    pub fn matches(&self, state: &S, event: &E) -> bool {
        self.from == *state && self.event == *event
    }
}
