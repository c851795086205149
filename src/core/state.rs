//! Identifier traits for states and events.
//!
//! The engine treats both as opaque, comparable tokens. The only thing it
//! ever asks of them is equality and a name for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state identifiers.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transitions and error values
/// - `PartialEq`: transition lookup compares the current state by equality
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: transition tables can be kept in config files
///
/// # Example
///
/// ```rust
/// use fsm_delegate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for event identifiers.
///
/// Same shape as [`State`], kept separate so a table cannot mix the two up.
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
