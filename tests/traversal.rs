//! Root-seeded BFS/DFS in iterative and recursive form.

mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use relation_graph::{
    Edge, GraphBuilder, GraphError, RelationGraph, TraversalOrder, TraversalStyle,
    MAX_RECURSION_DEPTH,
};

use common::*;

fn all_four(g: &RelationGraph<u64>) -> [Vec<u64>; 4] {
    [
        g.iterative_bfs().unwrap(),
        g.recursive_bfs().unwrap(),
        g.iterative_dfs().unwrap(),
        g.recursive_dfs().unwrap(),
    ]
}

fn assert_searches(g: &RelationGraph<u64>, bfs: &[u64], dfs: &[u64]) {
    let [ibfs, rbfs, idfs, rdfs] = all_four(g);
    assert_eq!(ibfs, bfs, "iterative bfs");
    assert_eq!(rbfs, bfs, "recursive bfs");
    assert_eq!(idfs, dfs, "iterative dfs");
    assert_eq!(rdfs, dfs, "recursive dfs");
}

// ==================== Fixture Orders ====================

#[test]
fn test_tree_orders() {
    assert_searches(&fixture_a(), &[0, 1, 2, 3, 4, 5], &[0, 1, 3, 4, 5, 2]);
}

#[test]
fn test_chain_with_back_edge() {
    let expected = [6, 5, 4, 3, 2, 1, 0];
    assert_searches(&fixture_b(), &expected, &expected);
}

#[test]
fn test_equivalence_orders() {
    assert_searches(&fixture_c(), &[0, 1, 2, 3], &[0, 1, 2, 3]);
}

#[test]
fn test_disconnected_components_in_root_order() {
    let expected = [0, 1, 2, 3, 4, 5, 6, 10, 23, 32];
    assert_searches(&fixture_d(), &expected, &expected);
    assert_searches(
        &fixture_f(),
        &[1, 3, 4, 6, 7, 5, 2, 8, 9, 30, 23],
        &[1, 3, 6, 7, 4, 5, 2, 8, 9, 30, 23],
    );
}

#[test]
fn test_shared_descendants_visited_once() {
    assert_searches(
        &fixture_h(),
        &[0, 22, 23, 8, 36, 3, 4, 5, 21, 2, 6, 7, 9, 19, 11],
        &[0, 22, 8, 3, 36, 23, 4, 21, 5, 2, 6, 7, 9, 19, 11],
    );
}

#[test]
fn test_single_vertex() {
    assert_searches(&graph(&[6], &[]), &[6], &[6]);
}

#[test]
fn test_empty_graph_visits_nothing() {
    for visited in all_four(&empty()) {
        assert!(visited.is_empty());
    }
}

#[test]
fn test_self_loop_not_revisited() {
    let g = graph(&[0, 1, 2], &[(0, 1), (1, 1), (1, 2), (2, 2)]);
    assert_searches(&g, &[0, 1, 2], &[0, 1, 2]);
}

#[test]
fn test_single_class_visits_nothing() {
    // Reflexive + symmetric + transitive with one class {0, 1}: no roots.
    let g = graph(&[0, 1], &[(0, 0), (0, 1), (1, 1), (1, 0)]);
    for visited in all_four(&g) {
        assert!(visited.is_empty());
    }
}

#[test]
fn test_traverse_dispatch() {
    let g = fixture_h();
    assert_eq!(
        g.traverse(TraversalOrder::DepthFirst, TraversalStyle::Iterative)
            .unwrap(),
        g.iterative_dfs().unwrap()
    );
    assert_eq!(
        g.traverse(TraversalOrder::BreadthFirst, TraversalStyle::Recursive)
            .unwrap(),
        g.recursive_bfs().unwrap()
    );
}

#[test]
fn test_searches_idempotent() {
    let g = fixture_f();
    assert_eq!(all_four(&g), all_four(&g));
}

// ==================== Recursion Limit ====================

#[test]
fn test_recursive_refuses_oversized_graph() {
    let n = MAX_RECURSION_DEPTH as u64 + 1;
    let edges: Vec<Edge<u64>> = (0..n - 1).map(|i| Edge::new(i, i + 1)).collect();
    let g = RelationGraph::from_parts(0..n, edges).unwrap();

    match g.recursive_dfs() {
        Err(GraphError::RecursionLimit { vertices, limit }) => {
            assert_eq!(vertices, n as usize);
            assert_eq!(limit, MAX_RECURSION_DEPTH);
        }
        other => panic!("Expected RecursionLimit error, got {:?}", other.map(|v| v.len())),
    }

    let visited = g.iterative_dfs().unwrap();
    assert_eq!(visited.len(), n as usize);
    assert_eq!(visited.first(), Some(&0));
}

// ==================== Randomized Agreement ====================

fn random_graph(rng: &mut StdRng, vertex_count: u64, edge_count: usize) -> RelationGraph<u64> {
    let edges: Vec<Edge<u64>> = (0..edge_count)
        .map(|_| {
            Edge::new(
                rng.gen_range(0..vertex_count),
                rng.gen_range(0..vertex_count),
            )
        })
        .collect();
    RelationGraph::from_parts(0..vertex_count, edges).unwrap()
}

#[test]
fn test_random_graphs_iterative_matches_recursive() {
    let mut rng = StdRng::seed_from_u64(281);
    for _ in 0..200 {
        let n: u64 = rng.gen_range(1..30);
        let m = rng.gen_range(0..(n as usize * 3));
        let g = random_graph(&mut rng, n, m);
        let [ibfs, rbfs, idfs, rdfs] = all_four(&g);
        assert_eq!(ibfs, rbfs);
        assert_eq!(idfs, rdfs);

        // Same vertex set reached either way, no duplicates.
        let mut b = ibfs.clone();
        let mut d = idfs.clone();
        b.sort_unstable();
        d.sort_unstable();
        assert_eq!(b, d);
        b.dedup();
        assert_eq!(b.len(), ibfs.len());
    }
}

#[test]
fn test_random_multi_class_equivalences_reach_every_vertex() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let n = rng.gen_range(1..25u64);
        let class_count = rng.gen_range(1..=n);
        let mut classes: Vec<Vec<u64>> = vec![Vec::new(); class_count as usize];
        for v in 0..n {
            classes[rng.gen_range(0..class_count) as usize].push(v);
        }

        let mut builder = GraphBuilder::new();
        for class in classes.iter().filter(|c| !c.is_empty()) {
            builder.class(class);
        }
        let g = builder.build().unwrap();
        assert!(g.is_equivalence());

        if classes.iter().filter(|c| !c.is_empty()).count() == 1 {
            // One class covering every vertex has no representative root.
            assert!(g.roots().is_empty());
            for visited in all_four(&g) {
                assert!(visited.is_empty());
            }
            continue;
        }

        let expected_roots: Vec<u64> = classes
            .iter()
            .filter_map(|c| c.first().copied())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect();
        assert_eq!(g.roots(), expected_roots);

        for visited in all_four(&g) {
            assert_eq!(visited.len(), n as usize);
        }
    }
}
