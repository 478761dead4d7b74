//! Macros for declaring state and event enums.

/// Generate a state enum and its `State` trait implementation.
///
/// The enum must declare at least one variant.
///
/// # Example
///
/// ```
/// use fsmtable::state_enum;
/// use fsmtable::core::State;
///
/// state_enum! {
///     pub enum SessionState {
///         Idle,
///         Established,
///     }
/// }
///
/// assert_eq!(SessionState::Established.name(), "Established");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $crate::__identifier_enum! {
            $crate::core::State;
            $(#[$meta])*
            $vis enum $name { $($(#[$variant_meta])* $variant),+ }
        }
    };
}

/// Generate an event enum and its `Event` trait implementation.
///
/// The enum must declare at least one variant.
///
/// # Example
///
/// ```
/// use fsmtable::event_enum;
/// use fsmtable::core::Event;
///
/// event_enum! {
///     pub enum SessionEvent {
///         Register,
///         Deregister,
///     }
/// }
///
/// assert_eq!(SessionEvent::Register.name(), "Register");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $crate::__identifier_enum! {
            $crate::core::Event;
            $(#[$meta])*
            $vis enum $name { $($(#[$variant_meta])* $variant),+ }
        }
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
            ),+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
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
