//! Shared graph fixtures for integration tests.
#![allow(dead_code)]

use relation_graph::{Edge, GraphBuilder, RelationGraph};

pub fn graph(vertices: &[u64], edges: &[(u64, u64)]) -> RelationGraph<u64> {
    RelationGraph::from_parts(
        vertices.iter().copied(),
        edges.iter().map(|&(s, d)| Edge::new(s, d)),
    )
    .unwrap()
}

/// Tree rooted at 0: 0 -> {1, 2}, 1 -> {3, 4, 5}.
pub fn fixture_a() -> RelationGraph<u64> {
    graph(
        &[0, 1, 2, 3, 4, 5],
        &[(1, 5), (0, 2), (1, 3), (0, 1), (1, 4)],
    )
}

/// Chain 6 -> 5 -> ... -> 0 with a back edge 4 -> 5.
pub fn fixture_b() -> RelationGraph<u64> {
    graph(
        &[0, 1, 2, 3, 4, 5, 6],
        &[(6, 5), (5, 4), (4, 5), (4, 3), (3, 2), (2, 1), (1, 0)],
    )
}

/// Equivalence relation with classes {0} and {1, 2, 3}.
pub fn fixture_c() -> RelationGraph<u64> {
    GraphBuilder::new()
        .class(&[0])
        .class(&[3, 1, 2])
        .build()
        .unwrap()
}

/// Four components; roots 0, 1, 4, 10.
pub fn fixture_d() -> RelationGraph<u64> {
    graph(
        &[0, 1, 2, 3, 4, 5, 6, 10, 23, 32],
        &[(1, 2), (1, 3), (4, 5), (4, 6), (10, 23), (10, 32)],
    )
}

/// Three components; roots 1, 2, 30.
pub fn fixture_f() -> RelationGraph<u64> {
    graph(
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 23, 30],
        &[
            (1, 3),
            (1, 4),
            (3, 6),
            (3, 7),
            (4, 5),
            (2, 8),
            (2, 9),
            (30, 23),
        ],
    )
}

/// Mirrored pairs without self-loops: every vertex has a predecessor.
pub fn fixture_g() -> RelationGraph<u64> {
    graph(&[0, 1, 2], &[(0, 1), (1, 0), (1, 2), (2, 1)])
}

/// Four components with shared descendants; roots 0, 2, 9, 19.
pub fn fixture_h() -> RelationGraph<u64> {
    graph(
        &[0, 2, 3, 4, 5, 6, 7, 8, 9, 11, 19, 21, 22, 23, 36],
        &[
            (0, 23),
            (0, 22),
            (22, 36),
            (22, 8),
            (8, 3),
            (23, 5),
            (23, 3),
            (23, 4),
            (4, 21),
            (2, 6),
            (6, 7),
            (19, 11),
        ],
    )
}

pub fn empty() -> RelationGraph<u64> {
    RelationGraph::new()
}
