//! Core value types shared by the engine and its delegates.
//!
//! - Identifier traits for states and events
//! - The immutable `Transition` table entry
//! - The type-erased `Arguments` list forwarded to delegates

mod arguments;
mod state;
mod transition;

pub use arguments::{Argument, Arguments};
pub use state::{Event, State};
pub use transition::Transition;
