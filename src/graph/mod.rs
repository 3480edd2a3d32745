use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::PathPlannerError;
use crate::geometry::{Bounds, Point};

use log::debug;


/// Node name -> ordered neighbor names, as declared in the adjacency file
pub type AdjacencyMap = FxIndexMap<String, Vec<String>>;

/// Node name -> coordinate, as declared in the coordinate file
pub type CoordinateMap = FxIndexMap<String, Point>;


/// Undirected edge between two node indices, weighted by euclidean length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub weight: f64,
}


/// Undirected weighted graph of named locations
///
/// Nodes are stored in first seen order: adjacency keys (each followed by
/// its neighbors) and then nodes only present in the coordinate map.
/// Neighbor lists keep the order in which edges were declared.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: FxIndexMap<String, Point>,
    neighbors: Vec<FxIndexSet<usize>>,
}

impl Graph {

    /// Build the graph from parsed adjacency and coordinate data
    /// Every referenced node must have a coordinate
    pub fn build(adjacency: &AdjacencyMap, coordinates: &CoordinateMap) -> Result<Self, PathPlannerError> {
        let mut graph = Graph::default();

        for (name, adjacent) in adjacency {
            let a = graph.insert_node(name, coordinates)?;
            for neighbor in adjacent {
                let b = graph.insert_node(neighbor, coordinates)?;
                graph.insert_edge(a, b);
            }
        }

        // Locations without any declared connection are still part of the graph
        for (name, point) in coordinates {
            if !graph.nodes.contains_key(name) {
                graph.nodes.insert(name.clone(), *point);
                graph.neighbors.push(FxIndexSet::default());
            }
        }

        debug!("built graph with {} nodes and {} edges", graph.node_count(), graph.edge_count());
        Ok(graph)
    }

    fn insert_node(&mut self, name: &str, coordinates: &CoordinateMap) -> Result<usize, PathPlannerError> {
        if let Some(index) = self.nodes.get_index_of(name) {
            return Ok(index);
        }
        let point = coordinates
            .get(name)
            .ok_or_else(|| PathPlannerError::MissingCoordinate(name.to_string()))?;
        let (index, _) = self.nodes.insert_full(name.to_string(), *point);
        self.neighbors.push(FxIndexSet::default());
        Ok(index)
    }

    fn insert_edge(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.neighbors[a].insert(b);
        self.neighbors[b].insert(a);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.nodes.get_index_of(name)
    }

    /// Name of the node at index
    pub fn name(&self, index: usize) -> Option<&str> {
        self.nodes.get_index(index).map(|(name, _)| name.as_str())
    }

    pub fn point(&self, index: usize) -> Option<&Point> {
        self.nodes.get_index(index).map(|(_, point)| point)
    }

    /// Node names in graph order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Neighbors of a node with the length of the connecting edge
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let origin = self.nodes.get_index(index).map(|(_, p)| *p);
        self.neighbors
            .get(index)
            .into_iter()
            .flatten()
            .filter_map(move |&n| {
                let from = origin?;
                let (_, to) = self.nodes.get_index(n)?;
                Some((n, from.distance(to)))
            })
    }

    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors.get(a).is_some_and(|n| n.contains(&b))
    }

    /// Every undirected edge once, lower index first
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.node_count()).flat_map(move |a| {
            self.neighbors(a)
                .filter(move |&(b, _)| a < b)
                .map(move |(b, weight)| Edge { a, b, weight })
        })
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.nodes.values())
    }
}
