//! Structured description of a machine's transition graph.

use serde::Serialize;
use std::collections::BTreeSet;

/// One labelled directed edge between two states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    /// Label of the event that causes the transition
    pub via: String,
}

impl GraphEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, via: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            via: via.into(),
        }
    }
}

/// Nodes and edges of a transition graph.
///
/// Edges are ordered state-major, event-minor, following the labelled item
/// order of both types. Rendering to a textual format is left to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphDescription {
    initial: String,
    nodes: BTreeSet<String>,
    edges: Vec<GraphEdge>,
}

impl GraphDescription {
    pub(crate) fn new(initial: String, nodes: BTreeSet<String>, edges: Vec<GraphEdge>) -> Self {
        Self {
            initial,
            nodes,
            edges,
        }
    }

    /// Label of the schema's initial state.
    pub fn initial_label(&self) -> &str {
        &self.initial
    }

    /// Every labelled state, including states with no edges.
    pub fn node_labels(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Edges leaving the state labelled `from`.
    pub fn edges_from<'a>(&'a self, from: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |edge| edge.from == from)
    }
}
