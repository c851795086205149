//! Macros for ergonomic state machine construction.

/// Generate a `State` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use fsm_delegate::state_enum;
/// use fsm_delegate::core::State;
///
/// state_enum! {
///     pub enum TurnstileState {
///         Locked,
///         Unlocked,
///     }
/// }
///
/// assert_eq!(TurnstileState::Locked.name(), "Locked");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__identifier_enum!(
            $crate::core::State;
            $(#[$meta])*
            $vis enum $name { $($(#[$variant_meta])* $variant),* }
        );
    };
}

/// Generate an `Event` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use fsm_delegate::event_enum;
/// use fsm_delegate::core::Event;
///
/// event_enum! {
///     pub enum TurnstileEvent {
///         CoinInserted,
///         Pushed,
///     }
/// }
///
/// assert_eq!(TurnstileEvent::Pushed.name(), "Pushed");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__identifier_enum!(
            $crate::core::Event;
            $(#[$meta])*
            $vis enum $name { $($(#[$variant_meta])* $variant),* }
        );
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __identifier_enum {
    (
        $trait:path;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $trait for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Build an `Arguments` list from a sequence of values.
///
/// # Example
///
/// ```
/// use fsm_delegate::arguments;
///
/// let args = arguments!["argument", 3_u8];
/// assert_eq!(args.get::<u8>(1), Some(&3));
///
/// let empty = arguments![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! arguments {
    () => {
        $crate::core::Arguments::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut args = $crate::core::Arguments::new();
        $(args.push($value);)+
        args
    }};
}
