use super::*;
use crate::layout::graph::OrgGraph;
use crate::layout::normalize::insert_dummy_nodes;
use crate::layout::rank::assign_ranks;
use crate::layout::types::{EdgeSpec, NodeSpec};

fn layered(ids: &[&str], pairs: &[(&str, &str)]) -> (LayeredGraph, Vec<usize>) {
    let nodes: Vec<NodeSpec> = ids.iter().map(|id| NodeSpec::new(*id, 10.0, 10.0)).collect();
    let edges: Vec<EdgeSpec> = pairs.iter().map(|(m, r)| EdgeSpec::new(*m, *r)).collect();
    let g = OrgGraph::build(&nodes, &edges).unwrap();
    let r = assign_ranks(&g);
    let roots = g.roots.iter().map(|n| n.index()).collect();
    (insert_dummy_nodes(&g, &r), roots)
}

/// O(E²) reference count.
fn brute_force_crossings(l: &LayeredGraph, layers: &[Vec<usize>]) -> usize {
    let mut pos = vec![0usize; l.node_count()];
    for layer in layers {
        for (i, &n) in layer.iter().enumerate() {
            pos[n] = i;
        }
    }
    let segs: Vec<(usize, usize, usize)> = l
        .segments()
        .map(|(u, v)| (l.nodes[u].rank, pos[u], pos[v]))
        .collect();
    let mut total = 0;
    for i in 0..segs.len() {
        for j in (i + 1)..segs.len() {
            let (ri, ui, vi) = segs[i];
            let (rj, uj, vj) = segs[j];
            if ri == rj && ((ui < uj && vi > vj) || (ui > uj && vi < vj)) {
                total += 1;
            }
        }
    }
    total
}

// ── Inversion counting ───────────────────────────────────────────────────

#[test]
fn test_count_inversions() {
    assert_eq!(count_inversions(&mut []), 0);
    assert_eq!(count_inversions(&mut [1, 2, 3]), 0);
    assert_eq!(count_inversions(&mut [3, 1, 2]), 2);
    assert_eq!(count_inversions(&mut [3, 2, 1]), 3);
    assert_eq!(count_inversions(&mut [2, 2, 1]), 2);
    assert_eq!(count_inversions(&mut [5, 0, 4, 1, 3, 2]), 9);
}

#[test]
fn test_count_inversions_sorts_in_place() {
    let mut v = [4, 1, 3, 2];
    count_inversions(&mut v);
    assert_eq!(v, [1, 2, 3, 4]);
}

// ── Initial order ────────────────────────────────────────────────────────

#[test]
fn test_initial_order_is_depth_first_preorder() {
    let (l, roots) = layered(
        &["A", "B", "A1", "A2", "B1", "A1x"],
        &[("A", "A1"), ("A", "A2"), ("B", "B1"), ("A1", "A1x")],
    );
    let layers = initial_order(&l, &roots);
    let ids: Vec<Vec<&str>> = layers
        .iter()
        .map(|layer| layer.iter().map(|&n| l.nodes[n].id.as_str()).collect())
        .collect();
    assert_eq!(ids, vec![vec!["A", "B"], vec!["A1", "A2", "B1"], vec!["A1x"]]);
}

#[test]
fn test_tree_preorder_has_no_crossings() {
    let (l, roots) = layered(
        &["ceo", "cto", "cfo", "dev1", "dev2", "acc1"],
        &[
            ("ceo", "cto"),
            ("ceo", "cfo"),
            ("cto", "dev1"),
            ("cto", "dev2"),
            ("cfo", "acc1"),
        ],
    );
    let order = order_ranks(&l, &roots, 24, 4);
    assert_eq!(order.initial_crossings, 0);
    assert_eq!(order.crossings, 0);
    assert_eq!(order.sweeps, 0);
}

// ── Crossing minimisation ────────────────────────────────────────────────

#[test]
fn test_sweeps_remove_dag_crossing() {
    // Preorder places P before Q, so A->Q crosses B->P.
    let (l, roots) = layered(&["A", "B", "P", "Q"], &[("A", "P"), ("A", "Q"), ("B", "P")]);
    let initial = initial_order(&l, &roots);
    assert_eq!(count_crossings(&l, &initial), 1);

    let order = order_ranks(&l, &roots, 24, 4);
    assert_eq!(order.initial_crossings, 1);
    assert_eq!(order.crossings, 0);
    assert_eq!(count_crossings(&l, &order.layers), 0);
    assert_eq!(order.ids(&l)[1], vec!["Q", "P"]);
}

#[test]
fn test_never_worse_than_initial() {
    let (l, roots) = layered(
        &["r1", "r2", "r3", "a", "b", "c", "d", "e", "x", "y"],
        &[
            ("r1", "c"),
            ("r1", "e"),
            ("r2", "a"),
            ("r2", "d"),
            ("r3", "b"),
            ("r3", "a"),
            ("r1", "b"),
            ("a", "y"),
            ("c", "x"),
            ("e", "x"),
            ("b", "y"),
        ],
    );
    let order = order_ranks(&l, &roots, 24, 4);
    assert!(order.crossings <= order.initial_crossings);
    assert_eq!(order.crossings, count_crossings(&l, &order.layers));
}

#[test]
fn test_fast_count_matches_brute_force() {
    let (l, roots) = layered(
        &["r1", "r2", "a", "b", "c", "d", "x", "y", "z"],
        &[
            ("r1", "d"),
            ("r1", "a"),
            ("r2", "c"),
            ("r2", "a"),
            ("r1", "b"),
            ("a", "z"),
            ("b", "x"),
            ("c", "y"),
            ("d", "x"),
            ("r2", "x"),
        ],
    );
    let initial = initial_order(&l, &roots);
    assert_eq!(count_crossings(&l, &initial), brute_force_crossings(&l, &initial));
    let order = order_ranks(&l, &roots, 24, 4);
    assert_eq!(order.crossings, brute_force_crossings(&l, &order.layers));
}

#[test]
fn test_order_is_a_permutation_of_each_rank() {
    let (l, roots) = layered(
        &["A", "B", "C", "D", "E", "F"],
        &[("A", "C"), ("B", "C"), ("A", "D"), ("B", "E"), ("C", "F"), ("A", "F")],
    );
    let order = order_ranks(&l, &roots, 24, 4);
    let mut seen: Vec<usize> = order.layers.iter().flatten().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..l.node_count()).collect::<Vec<_>>());
    for (rank, layer) in order.layers.iter().enumerate() {
        for (i, &n) in layer.iter().enumerate() {
            assert_eq!(l.nodes[n].rank, rank);
            assert_eq!(order.positions[n], i);
        }
    }
}

#[test]
fn test_sweep_budget_is_respected() {
    let (l, roots) = layered(&["A", "B", "P", "Q"], &[("A", "P"), ("A", "Q"), ("B", "P")]);
    let order = order_ranks(&l, &roots, 1, 4);
    assert!(order.sweeps <= 1);
}

#[test]
fn test_ordering_is_deterministic() {
    let ids = ["r1", "r2", "a", "b", "c", "x"];
    let pairs = [("r1", "b"), ("r2", "a"), ("r1", "c"), ("r2", "c"), ("a", "x"), ("b", "x")];
    let (l1, roots1) = layered(&ids, &pairs);
    let (l2, roots2) = layered(&ids, &pairs);
    assert_eq!(order_ranks(&l1, &roots1, 24, 4), order_ranks(&l2, &roots2, 24, 4));
}
