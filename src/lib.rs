//! fsm-delegate: a table-driven state machine engine
//!
//! The engine resolves `(state, event)` pairs against a fixed transition
//! table and hands each transition's action to a *delegate*. It owns no state
//! of its own: the subject being driven keeps its state, and delegates
//! perform the side effects (including the actual state change).
//!
//! # Core Concepts
//!
//! - **Transition**: `(from, event) -> (to, optional action)`, first match wins
//! - **Delegate**: handles an action; composable via `ActionMuxDelegate` and
//!   `CompositeDelegate`
//! - **StopPropagation**: a delegate outcome meaning "handled, report success"
//! - **Subject**: anything exposing a current state to `trigger_subject`
//!
//! # Example
//!
//! ```rust
//! use fsm_delegate::core::{Arguments, Transition};
//! use fsm_delegate::delegate::{ActionMuxDelegate, FnDelegate};
//! use fsm_delegate::machine::{StateMachine, TriggerError};
//!
//! let unlock = FnDelegate::new(|_: &str, _: &String, to: &String, _: &Arguments| {
//!     assert_eq!(to, "unlocked");
//!     Ok(())
//! });
//!
//! let machine = StateMachine::new(
//!     ActionMuxDelegate::default().with("unlock", unlock),
//!     vec![
//!         Transition::new("locked".to_string(), "coin".to_string(), "unlocked".to_string())
//!             .with_action("unlock"),
//!         Transition::new("unlocked".to_string(), "push".to_string(), "locked".to_string())
//!             .with_action("pass"),
//!     ],
//! );
//!
//! machine
//!     .trigger(&"locked".to_string(), &"coin".to_string(), Arguments::new())
//!     .unwrap();
//!
//! let err = machine
//!     .trigger(&"unlocked".to_string(), &"coin".to_string(), Arguments::new())
//!     .unwrap_err();
//! assert!(matches!(err, TriggerError::InvalidTransition(_)));
//! ```

pub mod builder;
pub mod core;
pub mod delegate;
pub mod machine;

// Re-export commonly used types
pub use self::builder::{BuildError, StateMachineBuilder};
pub use self::core::{Arguments, Event, State, Transition};
pub use self::delegate::{
    ActionMuxDelegate, BoxError, CompositeDelegate, Delegate, ErrorStrategy, FnDelegate,
    HandleError, StateMachineCell,
};
pub use self::machine::{
    DelegateError, InvalidTransitionError, StateMachine, Subject, TriggerError,
};
