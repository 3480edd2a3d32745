use crate::errors::PathPlannerError;
use crate::graph::{AdjacencyMap, CoordinateMap, Graph};
use crate::graph_algos::best_first;

use log::info;


/// Route found between two locations
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Location names from start to destination, both included
    pub nodes: Vec<String>,
    /// Summed length of the edges along the route
    pub distance: f64,
}

impl Route {
    pub fn start(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }
}


/// Find a route between two named locations with greedy best-first search
///
/// The graph is rebuilt from the mappings on every call. Returns an empty
/// vector when the destination is not reached, which is a normal outcome.
pub fn find_path(adjacency: &AdjacencyMap, coordinates: &CoordinateMap, start: &str, dest: &str) -> Result<Vec<String>, PathPlannerError> {
    let graph = Graph::build(adjacency, coordinates)?;
    let route = plan_route(&graph, start, dest)?;
    Ok(route.map(|r| r.nodes).unwrap_or_default())
}


/// Plan a route over an already built graph
/// Start and destination must both be nodes of the graph
pub fn plan_route(graph: &Graph, start: &str, dest: &str) -> Result<Option<Route>, PathPlannerError> {
    let start_index = graph
        .index_of(start)
        .ok_or_else(|| PathPlannerError::UnknownNode(start.to_string()))?;
    let dest_index = graph
        .index_of(dest)
        .ok_or_else(|| PathPlannerError::UnknownNode(dest.to_string()))?;
    let dest_point = graph
        .point(dest_index)
        .copied()
        .ok_or_else(|| PathPlannerError::MissingCoordinate(dest.to_string()))?;

    let found = best_first(
        start_index,
        graph.node_count(),
        |&node| graph.neighbors(node),
        |&node| graph.point(node).map_or(f64::INFINITY, |p| p.distance(&dest_point)),
        |&node| node == dest_index,
    );

    let Some((indices, distance)) = found else {
        info!("no route from {} to {}", start, dest);
        return Ok(None);
    };

    let nodes = indices
        .into_iter()
        .filter_map(|i| graph.name(i).map(str::to_string))
        .collect::<Vec<_>>();
    info!("route from {} to {} has {} stops, length {:.4}", start, dest, nodes.len(), distance);

    Ok(Some(Route { nodes, distance }))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    // Two squares joined at C, with an island pair E - F
    fn sample() -> (AdjacencyMap, CoordinateMap) {
        let adjacency: AdjacencyMap = [
            ("A", vec!["B", "D"]),
            ("B", vec!["C"]),
            ("C", vec!["D", "G"]),
            ("G", vec!["H"]),
            ("E", vec!["F"]),
        ]
        .into_iter()
        .map(|(n, adj)| (n.to_string(), adj.into_iter().map(String::from).collect()))
        .collect();

        let coordinates: CoordinateMap = [
            ("A", 0.0, 0.0),
            ("B", 1.0, 0.0),
            ("C", 1.0, 1.0),
            ("D", 0.0, 1.0),
            ("G", 2.0, 1.0),
            ("H", 2.0, 2.0),
            ("E", 9.0, 9.0),
            ("F", 9.0, 8.0),
        ]
        .into_iter()
        .map(|(n, x, y)| (n.to_string(), Point::new(x, y)))
        .collect();

        (adjacency, coordinates)
    }

    fn names(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_path_same_node() {
        let (adj, coords) = sample();
        assert_eq!(find_path(&adj, &coords, "C", "C").unwrap(), names(&["C"]));
        assert_eq!(find_path(&adj, &coords, "E", "E").unwrap(), names(&["E"]));
    }

    #[test]
    fn test_find_path_adjacent_either_direction() {
        let (adj, coords) = sample();
        assert_eq!(find_path(&adj, &coords, "A", "B").unwrap(), names(&["A", "B"]));
        assert_eq!(find_path(&adj, &coords, "B", "A").unwrap(), names(&["B", "A"]));
        assert_eq!(find_path(&adj, &coords, "H", "G").unwrap(), names(&["H", "G"]));
    }

    #[test]
    fn test_find_path_across_graph() {
        let (adj, coords) = sample();
        // From A both B and D are one unit from C, B is listed first
        assert_eq!(find_path(&adj, &coords, "A", "H").unwrap(), names(&["A", "B", "C", "G", "H"]));
    }

    #[test]
    fn test_find_path_disconnected() {
        let (adj, coords) = sample();
        assert!(find_path(&adj, &coords, "A", "F").unwrap().is_empty());
        assert!(find_path(&adj, &coords, "E", "H").unwrap().is_empty());
    }

    #[test]
    fn test_find_path_unknown_nodes() {
        let (adj, coords) = sample();
        assert_eq!(
            find_path(&adj, &coords, "Z", "A"),
            Err(PathPlannerError::UnknownNode("Z".to_string()))
        );
        assert_eq!(
            find_path(&adj, &coords, "A", "Z"),
            Err(PathPlannerError::UnknownNode("Z".to_string()))
        );
    }

    #[test]
    fn test_find_path_missing_coordinate() {
        let (mut adj, coords) = sample();
        adj.insert("H".to_string(), vec!["Ghost".to_string()]);

        assert_eq!(
            find_path(&adj, &coords, "A", "B"),
            Err(PathPlannerError::MissingCoordinate("Ghost".to_string()))
        );
    }

    #[test]
    fn test_plan_route_distance() {
        let (adj, coords) = sample();
        let graph = Graph::build(&adj, &coords).unwrap();

        let route = plan_route(&graph, "A", "H").unwrap().unwrap();
        assert_eq!(route.distance, 4.0);
        assert_eq!(route.start(), Some("A"));
        assert_eq!(route.destination(), Some("H"));

        assert!(plan_route(&graph, "A", "E").unwrap().is_none());
    }

    #[test]
    fn test_find_path_is_repeatable() {
        let (adj, coords) = sample();
        let first = find_path(&adj, &coords, "D", "H").unwrap();
        let second = find_path(&adj, &coords, "D", "H").unwrap();
        assert_eq!(first, second);
        assert_eq!(first, names(&["D", "C", "G", "H"]));
    }
}
