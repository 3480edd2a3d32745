//! Greedy best-first route finding between named locations.
//!
//! Locations come from an adjacency file and a coordinate file. Connections
//! are undirected and weighted by straight line distance. A route is found by
//! always stepping to the unvisited neighbor closest to the destination and
//! backing out of dead ends, which is quick but not guaranteed to be shortest.

pub mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod parse;
pub mod render;
pub mod route;
pub mod selection;

pub use config::DataConfig;
pub use errors::{ParseError, PathPlannerError, RenderError, SelectionError};
pub use graph::{AdjacencyMap, CoordinateMap, Graph};
pub use route::{find_path, plan_route, Route};
