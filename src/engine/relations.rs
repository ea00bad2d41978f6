//! Relation-property predicates over the edge set.
//!
//! Every predicate compares edges exhaustively; the only shortcut taken is a
//! hash lookup for "does edge (x, y) exist", which gives the same answer as a
//! linear scan.

use serde::Serialize;

use crate::graph::RelationGraph;
use crate::types::Vertex;

/// A relation property that can be checked on a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationProperty {
    Reflexive,
    Symmetric,
    Transitive,
    Antisymmetric,
    /// Reflexive, symmetric and transitive together.
    Equivalence,
}

impl RelationProperty {
    /// All properties, in report order.
    pub const ALL: [RelationProperty; 5] = [
        Self::Reflexive,
        Self::Symmetric,
        Self::Transitive,
        Self::Antisymmetric,
        Self::Equivalence,
    ];

    /// Return a human-readable name for this property.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reflexive => "reflexive",
            Self::Symmetric => "symmetric",
            Self::Transitive => "transitive",
            Self::Antisymmetric => "antisymmetric",
            Self::Equivalence => "equivalence",
        }
    }

    /// Parse a property from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "reflexive" | "reflexivity" => Some(Self::Reflexive),
            "symmetric" | "symmetry" => Some(Self::Symmetric),
            "transitive" | "transitivity" => Some(Self::Transitive),
            "antisymmetric" | "antisymmetry" | "anti_symmetric" => Some(Self::Antisymmetric),
            "equivalence" => Some(Self::Equivalence),
            _ => None,
        }
    }
}

impl std::fmt::Display for RelationProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Snapshot of every relation property of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelationReport {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of distinct edges.
    pub edges: usize,
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
    pub antisymmetric: bool,
    /// Reflexive, symmetric and transitive.
    pub equivalence: bool,
}

impl<V: Vertex> RelationGraph<V> {
    /// Every vertex has a self-loop. True for an empty vertex set.
    pub fn is_reflexive(&self) -> bool {
        self.vertices().all(|v| self.has_edge(v, v))
    }

    /// Every edge `(a, b)` has a reverse edge `(b, a)`. True without edges.
    pub fn is_symmetric(&self) -> bool {
        self.edges()
            .iter()
            .all(|e| self.has_edge(e.destination, e.source))
    }

    /// For every `(a, b)` and `(b, c)` there is `(a, c)`. True without edges.
    pub fn is_transitive(&self) -> bool {
        let edges = self.edges();
        edges.iter().all(|first| {
            edges
                .iter()
                .filter(|second| second.source == first.destination)
                .all(|second| self.has_edge(first.source, second.destination))
        })
    }

    /// `(a, b)` and `(b, a)` together imply `a == b`. True without edges.
    pub fn is_antisymmetric(&self) -> bool {
        self.edges()
            .iter()
            .filter(|e| !e.is_self_loop())
            .all(|e| !self.has_edge(e.destination, e.source))
    }

    /// Reflexive, symmetric and transitive.
    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }

    /// Evaluate a single property.
    pub fn check(&self, property: RelationProperty) -> bool {
        match property {
            RelationProperty::Reflexive => self.is_reflexive(),
            RelationProperty::Symmetric => self.is_symmetric(),
            RelationProperty::Transitive => self.is_transitive(),
            RelationProperty::Antisymmetric => self.is_antisymmetric(),
            RelationProperty::Equivalence => self.is_equivalence(),
        }
    }

    /// Evaluate every predicate once.
    pub fn relation_report(&self) -> RelationReport {
        let reflexive = self.is_reflexive();
        let symmetric = self.is_symmetric();
        let transitive = self.is_transitive();
        RelationReport {
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            reflexive,
            symmetric,
            transitive,
            antisymmetric: self.is_antisymmetric(),
            equivalence: reflexive && symmetric && transitive,
        }
    }
}
