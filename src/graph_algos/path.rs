use super::{GraphNodeMap, NO_PARENT};

/// Construct the path from the goal node back to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn trace_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Vec<N>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start, parents always point at earlier entries
    while current_index != NO_PARENT {
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => break,
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
