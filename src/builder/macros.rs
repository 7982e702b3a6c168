//! Macros for declaring labelled enums.

/// Declare a fieldless enum and implement [`Labelable`](crate::core::Labelable)
/// for it.
///
/// Each variant is labelled with its own name unless a string literal is
/// given after `=>`. `VARIANT_COUNT` and `labelable_items` are generated from
/// the same variant list, so the labels can never be incomplete.
///
/// # Example
///
/// ```
/// use switchyard::core::Labelable;
/// use switchyard::labelled_enum;
///
/// labelled_enum! {
///     pub enum Phase {
///         Draft,
///         Review => "In Review",
///         Published,
///     }
/// }
///
/// assert_eq!(Phase::VARIANT_COUNT, 3);
/// assert_eq!(Phase::Review.label(), "In Review");
/// assert_eq!(Phase::labelable_items(), vec![Phase::Draft, Phase::Review, Phase::Published]);
/// ```
#[macro_export]
macro_rules! labelled_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Labelable for $name {
            const VARIANT_COUNT: usize = <[&str]>::len(&[$(stringify!($variant)),*]);

            fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::labelled_enum!(@label $variant $($label)?)),*
                }
            }

            fn labelable_items() -> ::std::vec::Vec<Self> {
                ::std::vec![$(Self::$variant),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Labelable;

    labelled_enum! {
        enum TestState {
            Initial,
            Processing => "Working",
            Complete,
        }
    }

    #[test]
    fn labelled_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.label(), "Initial");
        assert_eq!(TestState::Processing.label(), "Working");
        assert_eq!(TestState::Complete.label(), "Complete");
    }

    #[test]
    fn labelled_enum_lists_every_variant() {
        assert_eq!(TestState::VARIANT_COUNT, 3);
        assert_eq!(
            TestState::labelable_items(),
            vec![
                TestState::Initial,
                TestState::Processing,
                TestState::Complete
            ]
        );
    }

    #[test]
    fn labelled_enum_supports_visibility() {
        labelled_enum! {
            pub enum PublicEvent {
                Go,
                Stop,
            }
        }

        let labels: Vec<String> = PublicEvent::labelled_items()
            .into_iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["Go", "Stop"]);
    }
}
