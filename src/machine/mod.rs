//! The state machine engine.
//!
//! - **StateMachine**: resolves transitions and dispatches actions to a delegate
//! - **Subject**: stateful objects the engine can read the current state from
//! - **Errors**: invalid transitions versus failed side effects

mod engine;
mod error;

pub use engine::{StateMachine, Subject};
pub use error::{DelegateError, InvalidTransitionError, TriggerError};
