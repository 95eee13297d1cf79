use super::*;
use crate::config::LayoutConfig;
use crate::layout::normalize::insert_dummy_nodes;
use crate::layout::order::order_ranks;
use crate::layout::position::assign_coordinates;
use crate::layout::rank::assign_ranks;
use crate::layout::types::{EdgeSpec, NodeSpec};

fn routes(ids: &[&str], pairs: &[(&str, &str)], curved: bool) -> (OrgGraph, Coordinates, Vec<RoutedEdge>) {
    let config = LayoutConfig::default();
    let nodes: Vec<NodeSpec> = ids.iter().map(|id| NodeSpec::new(*id, 280.0, 140.0)).collect();
    let edges: Vec<EdgeSpec> = pairs.iter().map(|(m, r)| EdgeSpec::new(*m, *r)).collect();
    let graph = OrgGraph::build(&nodes, &edges).unwrap();
    let ranking = assign_ranks(&graph);
    let layered = insert_dummy_nodes(&graph, &ranking);
    let roots: Vec<usize> = graph.roots.iter().map(|r| r.index()).collect();
    let order = order_ranks(&layered, &roots, config.max_sweeps, config.patience);
    let coords = assign_coordinates(&layered, &order, &config);
    let routed = route_edges(&graph, &layered, &coords, curved);
    (graph, coords, routed)
}

#[test]
fn test_direct_edge_is_bottom_centre_to_top_centre() {
    let (g, coords, r) = routes(&["A", "B"], &[("A", "B")], false);
    assert_eq!(r.len(), 1);
    let a = g.index_of("A").unwrap().index();
    let b = g.index_of("B").unwrap().index();
    assert_eq!(
        r[0].path,
        vec![
            Point::new(coords.center_x[a], 140.0),
            Point::new(coords.center_x[b], 240.0),
        ]
    );
}

#[test]
fn test_curved_direct_edge_gets_midpoint() {
    let (_, _, r) = routes(&["A", "B"], &[("A", "B")], true);
    let path = &r[0].path;
    assert_eq!(path.len(), 3);
    assert_eq!(path[1].y, 190.0);
    assert_eq!(path[1].x, (path[0].x + path[2].x) / 2.0);
}

#[test]
fn test_long_edge_passes_through_dummy_slot() {
    let (g, coords, r) = routes(
        &["CEO", "Mgr", "Eng", "Direct"],
        &[("CEO", "Mgr"), ("Mgr", "Eng"), ("Mgr", "Direct"), ("CEO", "Direct")],
        false,
    );
    let long = r.iter().find(|e| e.source_id == "CEO" && e.target_id == "Direct").unwrap();
    assert_eq!(long.path.len(), 4);
    let ceo = g.index_of("CEO").unwrap().index();
    let direct = g.index_of("Direct").unwrap().index();
    assert_eq!(long.path[0], Point::new(coords.center_x[ceo], 140.0));
    assert_eq!(long.path[1].y, coords.rank_top[1]);
    assert_eq!(long.path[2].y, coords.rank_bottom(1));
    assert_eq!(long.path[1].x, long.path[2].x);
    assert_eq!(long.path[3], Point::new(coords.center_x[direct], coords.rank_top[2]));
}

#[test]
fn test_curving_leaves_long_edges_alone() {
    let (_, _, r) = routes(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("A", "C")], true);
    let long = r.iter().find(|e| e.source_id == "A" && e.target_id == "C").unwrap();
    assert_eq!(long.path.len(), 4);
}

#[test]
fn test_routes_follow_input_order_and_real_ids() {
    let pairs = [("A", "C"), ("A", "B"), ("B", "D"), ("A", "D")];
    let (_, _, r) = routes(&["A", "B", "C", "D"], &pairs, false);
    let ends: Vec<(&str, &str)> = r
        .iter()
        .map(|e| (e.source_id.as_str(), e.target_id.as_str()))
        .collect();
    assert_eq!(ends, pairs.to_vec());
}

#[test]
fn test_paths_always_descend() {
    let (_, _, r) = routes(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D"), ("A", "E"), ("D", "E")],
        false,
    );
    for e in &r {
        assert!(e.path.len() >= 2);
        for w in e.path.windows(2) {
            assert!(w[1].y >= w[0].y, "{} -> {} climbs", e.source_id, e.target_id);
        }
    }
}
