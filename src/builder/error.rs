//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building state machines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Delegate not specified. Call .delegate(delegate) before .build()")]
    MissingDelegate,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,
}
