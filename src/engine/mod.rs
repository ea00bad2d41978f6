//! High-level analysis — relation predicates, equivalence classes, roots and
//! root-seeded searches, all as methods on `RelationGraph`.

pub mod relations;
pub mod roots;
pub mod search;

pub use relations::{RelationProperty, RelationReport};
