//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and macros for assembling
//! transition tables and delegates with minimal boilerplate.
//!
//! # Example
//!
//! ```
//! use fsm_delegate::builder::StateMachineBuilder;
//! use fsm_delegate::core::Arguments;
//! use fsm_delegate::delegate::{ActionMuxDelegate, FnDelegate, HandleError};
//! use fsm_delegate::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Door {
//!         Open,
//!         Closed,
//!     }
//! }
//!
//! event_enum! {
//!     enum Command {
//!         Close,
//!         Open,
//!     }
//! }
//!
//! let machine = StateMachineBuilder::new()
//!     .delegate(ActionMuxDelegate::default().with(
//!         "slam",
//!         FnDelegate::new(|_: &str, _: &Door, _: &Door, _: &Arguments| {
//!             Err(HandleError::StopPropagation)
//!         }),
//!     ))
//!     .transition_with_action(Door::Open, Command::Close, Door::Closed, "slam")
//!     .transition(Door::Closed, Command::Open, Door::Open)
//!     .build()
//!     .unwrap();
//!
//! assert!(machine.trigger(&Door::Open, &Command::Close, Arguments::new()).is_ok());
//! assert!(machine.trigger(&Door::Open, &Command::Open, Arguments::new()).is_err());
//! ```

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
