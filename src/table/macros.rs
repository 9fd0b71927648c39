//! Macros for declaring control states.

/// Generate a control-state enum together with its `ControlState` impl.
///
/// # Example
///
/// ```
/// use screenflow::control_enum;
/// use screenflow::core::ControlState;
///
/// control_enum! {
///     pub enum Phase {
///         Start,
///         Querying,
///         Shown,
///         Errored,
///     }
///     error: [Errored]
/// }
///
/// assert_eq!(Phase::Querying.name(), "Querying");
/// assert!(Phase::Errored.is_error());
/// ```
#[macro_export]
macro_rules! control_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(error: [$($error:ident),* $(,)?])?
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

        impl $crate::core::ControlState for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::ControlState;

    control_enum! {
        enum TestPhase {
            Idle,
            Loading,
            Shown,
            Broken,
        }
        error: [Broken]
    }

    #[test]
    fn macro_generates_names() {
        assert_eq!(TestPhase::Idle.name(), "Idle");
        assert_eq!(TestPhase::Loading.name(), "Loading");
        assert_eq!(TestPhase::Shown.name(), "Shown");
        assert_eq!(TestPhase::Broken.name(), "Broken");
    }

    #[test]
    fn macro_marks_error_states() {
        assert!(TestPhase::Broken.is_error());
        assert!(!TestPhase::Idle.is_error());
        assert!(!TestPhase::Shown.is_error());
    }

    #[test]
    fn macro_supports_visibility() {
        control_enum! {
            pub enum PublicPhase {
                A,
                B,
            }
        }

        let _phase = PublicPhase::A;
        assert!(!PublicPhase::B.is_error());
    }

    #[test]
    fn generated_enum_is_copy_and_hashable() {
        use std::collections::HashSet;

        let phase = TestPhase::Loading;
        let copy = phase;
        assert_eq!(phase, copy);

        let mut set = HashSet::new();
        set.insert(TestPhase::Idle);
        assert!(set.contains(&TestPhase::Idle));
    }
}
