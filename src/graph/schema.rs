//! Schema that validates its labels and derives its transition graph.

use crate::core::{Labelable, LabelledItem, Schema, Transition};
use crate::graph::description::{GraphDescription, GraphEdge};
use crate::graph::error::GraphError;
use std::collections::BTreeSet;
use std::ops::Deref;

/// A [`Schema`] whose transition graph is computed at construction.
///
/// Construction checks that the labelled items of both `S` and `E` cover
/// every variant, then probes the transition function with every
/// (state, event) pair. Actions returned while probing are dropped without
/// running. The graph layer does not change dispatch behaviour: a machine
/// built from [`into_schema`](Self::into_schema) behaves exactly like one
/// built from the plain schema.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Transition;
/// use switchyard::graph::{GraphEdge, GraphableSchema};
/// use switchyard::labelled_enum;
///
/// labelled_enum! {
///     enum Light { Off, On }
/// }
/// labelled_enum! {
///     enum Switch { Flip }
/// }
///
/// let schema: GraphableSchema<Light, Switch> =
///     GraphableSchema::new(Light::Off, |state, _event| match state {
///         Light::Off => Some(Transition::to(Light::On)),
///         Light::On => Some(Transition::to(Light::Off)),
///     })
///     .unwrap();
///
/// assert_eq!(
///     schema.graph().edges(),
///     &[GraphEdge::new("Off", "On", "Flip"), GraphEdge::new("On", "Off", "Flip")]
/// );
/// ```
pub struct GraphableSchema<S, E, Subj = ()> {
    schema: Schema<S, E, Subj>,
    graph: GraphDescription,
}

impl<S, E, Subj> GraphableSchema<S, E, Subj>
where
    S: Labelable,
    E: Labelable,
{
    /// Validate labels and build the graph.
    ///
    /// Fails if either labelled list is incomplete or repeats a label, or if
    /// the initial state or any probed target state is unlabelled.
    pub fn new<F>(initial_state: S, transition_fn: F) -> Result<Self, GraphError>
    where
        F: Fn(&S, &E) -> Option<Transition<S, Subj>> + Send + Sync + 'static,
    {
        let schema = Schema::new(initial_state, transition_fn);
        Self::from_schema(schema)
    }

    /// Validate an existing schema and build its graph.
    pub fn from_schema(schema: Schema<S, E, Subj>) -> Result<Self, GraphError> {
        let states = S::labelled_items();
        let events = E::labelled_items();
        let state_labels = validate_items(&states)?;
        validate_items(&events)?;

        let mut missing = BTreeSet::new();
        let initial = schema.initial_state().label().to_string();
        if !state_labels.contains(&initial) {
            missing.insert(initial.clone());
        }

        let mut edges = Vec::new();
        for state in &states {
            for event in &events {
                let Some(transition) = schema.transition(&state.value, &event.value) else {
                    continue;
                };
                let to = transition.next.label();
                if !state_labels.contains(to) {
                    missing.insert(to.to_string());
                    continue;
                }
                edges.push(GraphEdge::new(
                    state.label.as_str(),
                    to,
                    event.label.as_str(),
                ));
            }
        }

        if !missing.is_empty() {
            let err = GraphError::MissingLabels {
                type_name: std::any::type_name::<S>(),
                missing: missing.into_iter().collect(),
            };
            tracing::warn!("{}", err);
            return Err(err);
        }

        tracing::debug!(
            states = state_labels.len(),
            events = events.len(),
            edges = edges.len(),
            "built transition graph"
        );

        Ok(Self {
            schema,
            graph: GraphDescription::new(initial, state_labels, edges),
        })
    }
}

impl<S, E, Subj> GraphableSchema<S, E, Subj> {
    pub fn schema(&self) -> &Schema<S, E, Subj> {
        &self.schema
    }

    pub fn graph(&self) -> &GraphDescription {
        &self.graph
    }

    /// Drop the graph and keep the plain schema.
    pub fn into_schema(self) -> Schema<S, E, Subj> {
        self.schema
    }

    pub fn into_parts(self) -> (Schema<S, E, Subj>, GraphDescription) {
        (self.schema, self.graph)
    }
}

impl<S, E, Subj> Deref for GraphableSchema<S, E, Subj> {
    type Target = Schema<S, E, Subj>;

    fn deref(&self) -> &Self::Target {
        &self.schema
    }
}

impl<S: Clone, E, Subj> Clone for GraphableSchema<S, E, Subj> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            graph: self.graph.clone(),
        }
    }
}

/// Check the labelled list against the declared variant count and for
/// duplicates. Returns the set of labels.
///
/// Distinct labels are counted first, so a list that repeats one variant in
/// place of another is reported as incomplete.
fn validate_items<T: Labelable>(items: &[LabelledItem<T>]) -> Result<BTreeSet<String>, GraphError> {
    let type_name = std::any::type_name::<T>();
    let labels: BTreeSet<String> = items.iter().map(|item| item.label.clone()).collect();

    if labels.len() != T::VARIANT_COUNT {
        let err = GraphError::IncompleteLabels {
            type_name,
            expected: T::VARIANT_COUNT,
            found: labels.len(),
        };
        tracing::warn!("{}", err);
        return Err(err);
    }

    if items.len() != labels.len() {
        let mut seen = BTreeSet::new();
        let repeated = items
            .iter()
            .find(|item| !seen.insert(item.label.as_str()))
            .map(|item| item.label.clone())
            .unwrap_or_default();
        let err = GraphError::DuplicateLabel {
            type_name,
            label: repeated,
        };
        tracing::warn!("{}", err);
        return Err(err);
    }

    Ok(labels)
}
