use super::{trace_path, GraphNodeMap, NO_PARENT};

use std::{hash::Hash, fmt::Debug};
use log::{debug, trace};
use num_traits::Zero;
use rustc_hash::FxHashSet;



/// Greedy best-first search with backtracking
/// https://en.wikipedia.org/wiki/Best-first_search
///
/// From the start node, always step to the unvisited neighbor with the lowest
/// heuristic value. When a node has no unvisited neighbors, step back to the
/// node it was reached from. Ties keep the first neighbor in iteration order.
///
/// The search is not optimal: the first route that reaches the goal is
/// returned and a visited node is never expanded again.
///
/// Stops when the goal is reached, when node_count nodes have been visited, or
/// when backtracking runs out of parents at the start node.
/// Returns the path from start to goal with the accumulated edge cost, None if
/// the goal was not reached.
pub fn best_first<N, C, IT, NN, H, G>(start: N, node_count: usize, neighbors: NN, heuristic: H, goal: G) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    H: Fn(&N) -> C, // estimated distance from a node to the goal
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    let (node_map, goal_index) = build_best_first_graph(start, node_count, neighbors, heuristic, goal);

    let goal_index = goal_index?;
    let &(_, cost) = node_map.get_index(goal_index)?.1;
    Some((trace_path(&node_map, goal_index), cost))
}


/// Walks the graph greedily
/// Returns every node stepped onto with its parent index and cost, along with
/// the index of the goal node if it was reached
fn build_best_first_graph<N, C, IT, NN, H, G>(start: N, node_count: usize, neighbors: NN, heuristic: H, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + PartialOrd + Copy + Debug,
    H: Fn(&N) -> C,
    G: Fn(&N) -> bool,
    {

    // Nodes stepped onto, with the index of the node they were reached from
    // and the cost accumulated along the way
    let mut node_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    // Expanded nodes, indices into node_map
    let mut visited: FxHashSet<usize> = FxHashSet::default();

    let mut current = node_map.insert_full(start, (NO_PARENT, Zero::zero())).0;

    loop {
        let Some((node, &(parent, cost))) = node_map.get_index(current) else {
            return (node_map, None);
        };

        if goal_fn(node) {
            debug!("reached goal {:?} after visiting {} nodes", node, visited.len());
            return (node_map, Some(current));
        }
        if visited.len() >= node_count {
            debug!("visited all {} nodes without reaching the goal", node_count);
            return (node_map, None);
        }

        let node = node.clone();
        visited.insert(current);

        // Closest unvisited neighbor to the goal, first one wins a tie
        let mut best: Option<(N, C, C)> = None;
        for (neighbor, edge_cost) in neighbors(&node) {
            let seen = node_map
                .get_index_of(&neighbor)
                .is_some_and(|index| visited.contains(&index));
            if seen {
                continue;
            }

            let estimate = heuristic(&neighbor);
            trace!("{:?} -> {:?} estimate {:?}", node, neighbor, estimate);

            if best.as_ref().is_none_or(|&(_, _, best_estimate)| estimate < best_estimate) {
                best = Some((neighbor, edge_cost, estimate));
            }
        }

        match best {
            Some((neighbor, edge_cost, _)) => {
                debug!("advance {:?} -> {:?}", node, neighbor);
                current = node_map.insert_full(neighbor, (current, cost + edge_cost)).0;
            }
            None if parent == NO_PARENT => {
                // Dead end at the start node, nothing left to back out of
                debug!("no unvisited neighbors left around start {:?}", node);
                return (node_map, None);
            }
            None => {
                debug!("dead end at {:?}, backtracking", node);
                current = parent;
            }
        }
    }
}
