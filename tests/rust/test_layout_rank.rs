use super::*;
use crate::layout::types::{EdgeSpec, NodeSpec};

fn build(ids: &[&str], pairs: &[(&str, &str)]) -> OrgGraph {
    let nodes: Vec<NodeSpec> = ids.iter().map(|id| NodeSpec::new(*id, 10.0, 10.0)).collect();
    let edges: Vec<EdgeSpec> = pairs.iter().map(|(m, r)| EdgeSpec::new(*m, *r)).collect();
    OrgGraph::build(&nodes, &edges).unwrap()
}

fn rank(g: &OrgGraph, r: &Ranking, id: &str) -> usize {
    r.rank_by_id(g, id).unwrap()
}

#[test]
fn test_empty_graph_has_no_ranks() {
    let g = build(&[], &[]);
    let r = assign_ranks(&g);
    assert_eq!(r.rank_count, 0);
    assert!(r.ranks.is_empty());
}

#[test]
fn test_single_node() {
    let g = build(&["A"], &[]);
    let r = assign_ranks(&g);
    assert_eq!(rank(&g, &r, "A"), 0);
    assert_eq!(r.rank_count, 1);
}

#[test]
fn test_chain_gets_one_rank_per_node() {
    let g = build(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D")]);
    let r = assign_ranks(&g);
    assert_eq!(
        ["A", "B", "C", "D"].map(|id| rank(&g, &r, id)),
        [0, 1, 2, 3]
    );
    assert_eq!(r.rank_count, 4);
}

#[test]
fn test_longest_path_wins() {
    // CEO manages VP and Analyst directly; VP also manages Analyst.
    let g = build(
        &["CEO", "VP", "Analyst"],
        &[("CEO", "VP"), ("CEO", "Analyst"), ("VP", "Analyst")],
    );
    let r = assign_ranks(&g);
    assert_eq!(rank(&g, &r, "CEO"), 0);
    assert_eq!(rank(&g, &r, "VP"), 1);
    assert_eq!(rank(&g, &r, "Analyst"), 2);
}

#[test]
fn test_disconnected_components_start_at_zero() {
    let g = build(&["A", "B", "X", "Y", "Z"], &[("A", "B"), ("X", "Y"), ("Y", "Z")]);
    let r = assign_ranks(&g);
    assert_eq!(rank(&g, &r, "A"), 0);
    assert_eq!(rank(&g, &r, "X"), 0);
    assert_eq!(rank(&g, &r, "B"), 1);
    assert_eq!(rank(&g, &r, "Z"), 2);
    assert_eq!(r.rank_count, 3);
}

#[test]
fn test_every_edge_points_down_and_roots_are_zero() {
    let pairs = [
        ("a", "b"),
        ("a", "c"),
        ("b", "d"),
        ("c", "d"),
        ("d", "e"),
        ("a", "e"),
        ("f", "e"),
    ];
    let g = build(&["e", "d", "c", "b", "a", "f"], &pairs);
    let r = assign_ranks(&g);
    for (m, rep) in pairs {
        assert!(rank(&g, &r, rep) > rank(&g, &r, m), "{m} -> {rep}");
    }
    for root in g.root_ids() {
        assert_eq!(rank(&g, &r, root), 0);
    }
    // Ranks are contiguous from zero.
    for k in 0..r.rank_count {
        assert!(r.ranks.contains(&k));
    }
}

#[test]
fn test_unknown_id_has_no_rank() {
    let g = build(&["A"], &[]);
    let r = assign_ranks(&g);
    assert_eq!(r.rank_by_id(&g, "nope"), None);
}
