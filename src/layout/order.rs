//! Crossing minimisation.
//!
//! Seeds each rank from a depth-first preorder of the hierarchy, then runs
//! alternating barycenter sweeps, keeping the best ordering seen.

use std::cmp::Ordering as CmpOrdering;

use super::normalize::LayeredGraph;

/// Left-to-right order of every rank of a [`LayeredGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOrder {
    /// rank → layered node indices, left to right.
    pub layers: Vec<Vec<usize>>,
    /// layered node index → position within its rank.
    pub positions: Vec<usize>,
    /// Crossings of the depth-first seed ordering.
    pub initial_crossings: usize,
    /// Crossings of `layers`.
    pub crossings: usize,
    /// Down+up passes actually run.
    pub sweeps: usize,
}

impl RankOrder {
    /// Ordered ids per rank, dummies included.
    pub fn ids<'a>(&self, layered: &'a LayeredGraph) -> Vec<Vec<&'a str>> {
        self.layers
            .iter()
            .map(|layer| {
                layer
                    .iter()
                    .map(|&n| layered.nodes[n].id.as_str())
                    .collect()
            })
            .collect()
    }
}

/// Order every rank so adjacent-rank edge crossings are (heuristically) minimal.
///
/// `roots` seeds the depth-first preorder; `max_sweeps` bounds the number of
/// passes and `patience` stops early after that many passes without a new best.
pub fn order_ranks(
    layered: &LayeredGraph,
    roots: &[usize],
    max_sweeps: usize,
    patience: usize,
) -> RankOrder {
    let mut layers = initial_order(layered, roots);
    let initial_crossings = count_crossings(layered, &layers);

    let mut best = layers.clone();
    let mut best_crossings = initial_crossings;
    let mut stalled = 0usize;
    let mut sweeps = 0usize;
    let patience = patience.max(1);

    while sweeps < max_sweeps && best_crossings > 0 {
        sweeps += 1;
        sweep_down(layered, &mut layers);
        sweep_up(layered, &mut layers);

        let crossings = count_crossings(layered, &layers);
        if crossings < best_crossings {
            best_crossings = crossings;
            best.clone_from(&layers);
            stalled = 0;
        } else {
            stalled += 1;
            if stalled >= patience {
                break;
            }
        }
    }

    tracing::debug!(
        initial_crossings,
        crossings = best_crossings,
        sweeps,
        "ranks ordered"
    );

    let positions = positions_of(layered.node_count(), &best);
    RankOrder {
        layers: best,
        positions,
        initial_crossings,
        crossings: best_crossings,
        sweeps,
    }
}

/// Depth-first preorder from the roots; related subtrees end up adjacent.
pub fn initial_order(layered: &LayeredGraph, roots: &[usize]) -> Vec<Vec<usize>> {
    let mut layers: Vec<Vec<usize>> = vec![Vec::new(); layered.rank_count];
    let mut visited = vec![false; layered.node_count()];
    let mut stack: Vec<usize> = Vec::new();

    // Roots first, then anything unreachable from them in index order.
    let starts = roots.iter().copied().chain(0..layered.node_count());
    for start in starts {
        if visited[start] {
            continue;
        }
        stack.push(start);
        while let Some(n) = stack.pop() {
            if visited[n] {
                continue;
            }
            visited[n] = true;
            layers[layered.nodes[n].rank].push(n);
            // Reverse so the first child is visited first.
            for &child in layered.down[n].iter().rev() {
                if !visited[child] {
                    stack.push(child);
                }
            }
        }
    }
    layers
}

fn sweep_down(layered: &LayeredGraph, layers: &mut [Vec<usize>]) {
    for rank in 1..layers.len() {
        let (above, below) = layers.split_at_mut(rank);
        reorder_by_barycenter(&mut below[0], &above[rank - 1], &layered.up);
    }
}

fn sweep_up(layered: &LayeredGraph, layers: &mut [Vec<usize>]) {
    for rank in (0..layers.len().saturating_sub(1)).rev() {
        let (above, below) = layers.split_at_mut(rank + 1);
        reorder_by_barycenter(&mut above[rank], &below[0], &layered.down);
    }
}

/// Sort `layer` by the mean position of each node's neighbours in `fixed`.
///
/// Nodes without neighbours there keep their current position as key; ties
/// fall back to the current position.
fn reorder_by_barycenter(layer: &mut [usize], fixed: &[usize], neighbours: &[Vec<usize>]) {
    if layer.len() <= 1 {
        return;
    }
    let fixed_pos: std::collections::HashMap<usize, usize> =
        fixed.iter().enumerate().map(|(i, &n)| (n, i)).collect();

    let mut keyed: Vec<(f64, usize, usize)> = layer
        .iter()
        .enumerate()
        .map(|(current, &n)| {
            let (sum, count) = neighbours[n]
                .iter()
                .filter_map(|nb| fixed_pos.get(nb))
                .fold((0usize, 0usize), |(s, c), &p| (s + p, c + 1));
            let key = if count == 0 {
                current as f64
            } else {
                sum as f64 / count as f64
            };
            (key, current, n)
        })
        .collect();

    keyed.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(CmpOrdering::Equal)
            .then(a.1.cmp(&b.1))
    });
    for (slot, (_, _, n)) in layer.iter_mut().zip(keyed) {
        *slot = n;
    }
}

/// Total crossings between every pair of adjacent ranks.
pub fn count_crossings(layered: &LayeredGraph, layers: &[Vec<usize>]) -> usize {
    let positions = positions_of(layered.node_count(), layers);
    layers
        .windows(2)
        .map(|pair| {
            let mut pairs: Vec<(usize, usize)> = pair[0]
                .iter()
                .flat_map(|&u| {
                    let pu = positions[u];
                    layered.down[u].iter().map(move |&v| (pu, v))
                })
                .map(|(pu, v)| (pu, positions[v]))
                .collect();
            pairs.sort_unstable();
            let mut lower: Vec<usize> = pairs.into_iter().map(|(_, pl)| pl).collect();
            count_inversions(&mut lower)
        })
        .sum()
}

/// Number of pairs `i < j` with `values[i] > values[j]`, via merge sort.
///
/// Sorts `values` in place.
pub fn count_inversions(values: &mut [usize]) -> usize {
    let mut scratch = values.to_vec();
    merge_count(values, &mut scratch)
}

fn merge_count(values: &mut [usize], scratch: &mut [usize]) -> usize {
    let len = values.len();
    if len <= 1 {
        return 0;
    }
    let mid = len / 2;
    let mut inversions = {
        let (left, right) = values.split_at_mut(mid);
        let (s_left, s_right) = scratch.split_at_mut(mid);
        merge_count(left, s_left) + merge_count(right, s_right)
    };

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < len {
        if values[i] <= values[j] {
            scratch[k] = values[i];
            i += 1;
        } else {
            scratch[k] = values[j];
            inversions += mid - i;
            j += 1;
        }
        k += 1;
    }
    scratch[k..k + (mid - i)].copy_from_slice(&values[i..mid]);
    k += mid - i;
    scratch[k..k + (len - j)].copy_from_slice(&values[j..len]);
    values.copy_from_slice(&scratch[..len]);
    inversions
}

fn positions_of(node_count: usize, layers: &[Vec<usize>]) -> Vec<usize> {
    let mut positions = vec![0usize; node_count];
    for layer in layers {
        for (i, &n) in layer.iter().enumerate() {
            positions[n] = i;
        }
    }
    positions
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_order.rs"]
mod tests;
