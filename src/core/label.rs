//! Labelling contract for state and event types.
//!
//! Graph introspection has to visit every variant of a state or event type,
//! including variants that carry data. Rust cannot enumerate the inhabitants
//! of an enum at runtime, so implementers list one representative value per
//! variant themselves and declare how many variants the type has.

/// Capability of a closed variant type to enumerate its own variants.
///
/// `label` should be written as an exhaustive `match` so that adding a variant
/// fails to compile until it is labelled. `VARIANT_COUNT` is checked against
/// the length of `labelable_items` when a graph is built.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Labelable;
///
/// #[derive(Clone, Debug)]
/// enum Door {
///     Open,
///     Closed,
///     Locked { code: u32 },
/// }
///
/// impl Labelable for Door {
///     const VARIANT_COUNT: usize = 3;
///
///     fn label(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked { .. } => "Locked",
///         }
///     }
///
///     fn labelable_items() -> Vec<Self> {
///         vec![Self::Open, Self::Closed, Self::Locked { code: 0 }]
///     }
/// }
///
/// let labels: Vec<String> = Door::labelled_items()
///     .into_iter()
///     .map(|item| item.label)
///     .collect();
/// assert_eq!(labels, ["Open", "Closed", "Locked"]);
/// ```
pub trait Labelable: Sized {
    /// Number of distinct variants of the type.
    const VARIANT_COUNT: usize;

    /// Display label of this value's variant. Associated data is ignored.
    fn label(&self) -> &str;

    /// One representative value per variant, in display order.
    fn labelable_items() -> Vec<Self>;

    /// Representatives paired with their labels.
    fn labelled_items() -> Vec<LabelledItem<Self>> {
        Self::labelable_items()
            .into_iter()
            .map(LabelledItem::new)
            .collect()
    }
}

/// A representative variant value together with its display label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelledItem<T> {
    /// Representative value of the variant
    pub value: T,
    /// Label shown for the variant
    pub label: String,
}

impl<T: Labelable> LabelledItem<T> {
    /// Pair a value with its own label.
    pub fn new(value: T) -> Self {
        let label = value.label().to_string();
        Self { value, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Signal {
        Idle,
        Data(u8),
        Error { code: i32 },
    }

    impl Labelable for Signal {
        const VARIANT_COUNT: usize = 3;

        fn label(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Data(_) => "Data",
                Self::Error { .. } => "Error",
            }
        }

        fn labelable_items() -> Vec<Self> {
            vec![Self::Idle, Self::Data(0), Self::Error { code: 0 }]
        }
    }

    #[test]
    fn label_ignores_associated_data() {
        assert_eq!(Signal::Data(1).label(), Signal::Data(200).label());
        assert_eq!(Signal::Error { code: -1 }.label(), "Error");
    }

    #[test]
    fn labelled_items_preserve_declared_order() {
        let items = Signal::labelled_items();
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();

        assert_eq!(labels, vec!["Idle", "Data", "Error"]);
        assert_eq!(items[1].value, Signal::Data(0));
    }

    #[test]
    fn item_count_matches_variant_count() {
        assert_eq!(Signal::labelable_items().len(), Signal::VARIANT_COUNT);
    }
}
