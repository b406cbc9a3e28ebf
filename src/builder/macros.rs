//! Macros for ergonomic state declaration.

/// Declare a fieldless state enum and implement [`State`](crate::core::State) for it.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug` and the serde traits, implements `Display` using the variant
/// name, and gets an `ALL` constant listing every variant in declaration
/// order.
///
/// # Example
///
/// ```
/// use gumball::core::State;
/// use gumball::state_enum;
///
/// state_enum! {
///     pub enum DoorState {
///         Open,
///         Closed,
///         Welded,
///     }
///     final: [Welded]
/// }
///
/// assert_eq!(DoorState::ALL.len(), 3);
/// assert_eq!(DoorState::Closed.name(), "Closed");
/// assert!(DoorState::Welded.is_final());
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

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
