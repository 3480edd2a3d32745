//! SVG drawing of a location graph with a highlighted route.
//!
//! Every edge and location is drawn. Route edges and stops get their own
//! colours, and the start and destination get their own marker shapes.

use crate::errors::RenderError;
use crate::geometry::{Bounds, Point};
use crate::graph::Graph;

use std::fmt::Write;
use std::path::Path;
use rustc_hash::FxHashSet;


const EDGE_COLOR: &str = "#a0aec0";
const NODE_COLOR: &str = "#4a5568";
const PATH_COLOR: &str = "#e53e3e";
const START_COLOR: &str = "#38a169";
const DEST_COLOR: &str = "#3182ce";
const LABEL_COLOR: &str = "#2d3748";


#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    /// Draw the second stored component on the horizontal axis
    /// Coordinate files listing latitude first need this to come out upright
    pub transpose: bool,
    pub labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            margin: 60.0,
            transpose: false,
            labels: true,
        }
    }
}


/// Maps graph coordinates onto the canvas, keeping the aspect ratio
struct Projection {
    bounds: Bounds,
    scale: f64,
    offset: Point,
    height: f64,
    transpose: bool,
}

impl Projection {

    fn new(bounds: Bounds, options: &RenderOptions) -> Self {
        let bounds = if options.transpose { bounds.transposed() } else { bounds };
        let inner_w = (options.width - 2.0 * options.margin).max(1.0);
        let inner_h = (options.height - 2.0 * options.margin).max(1.0);

        // A single point or a line still needs a finite scale
        let sx = if bounds.width() > 0.0 { inner_w / bounds.width() } else { f64::INFINITY };
        let sy = if bounds.height() > 0.0 { inner_h / bounds.height() } else { f64::INFINITY };
        let scale = match sx.min(sy) {
            s if s.is_finite() => s,
            _ => 1.0,
        };

        let offset = Point::new(
            options.margin + (inner_w - bounds.width() * scale) / 2.0,
            options.margin + (inner_h - bounds.height() * scale) / 2.0,
        );

        Self { bounds, scale, offset, height: options.height, transpose: options.transpose }
    }

    fn project(&self, point: &Point) -> Point {
        let p = if self.transpose { point.transposed() } else { *point };
        Point::new(
            self.offset.x + (p.x - self.bounds.min.x) * self.scale,
            // svg y grows downwards
            self.height - (self.offset.y + (p.y - self.bounds.min.y) * self.scale),
        )
    }
}


/// Render the whole graph with the route highlighted
/// An empty route draws the plain graph
pub fn render_svg(graph: &Graph, path: &[String], options: &RenderOptions) -> Result<String, RenderError> {
    let bounds = graph.bounds().unwrap_or(Bounds { min: Point::new(0.0, 0.0), max: Point::new(0.0, 0.0) });
    let projection = Projection::new(bounds, options);

    let stops: Vec<usize> = path.iter().filter_map(|name| graph.index_of(name)).collect();
    let on_route: FxHashSet<usize> = stops.iter().copied().collect();
    let route_edges: FxHashSet<(usize, usize)> = stops
        .windows(2)
        .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
        .collect();
    let start = stops.first().copied();
    let dest = stops.last().copied();

    let mut svg = String::new();
    write!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}" font-family="sans-serif">
  <rect width="100%" height="100%" fill="white" />
"#,
        options.width, options.height, options.width, options.height,
    )?;

    // Plain edges first so the route is painted over them
    svg.push_str("  <g class=\"edges\">\n");
    for edge in graph.edges().filter(|e| !route_edges.contains(&(e.a, e.b))) {
        write_edge(&mut svg, graph, &projection, edge.a, edge.b, EDGE_COLOR, 1.5)?;
    }
    svg.push_str("  </g>\n  <g class=\"route\">\n");
    for pair in stops.windows(2) {
        write_edge(&mut svg, graph, &projection, pair[0], pair[1], PATH_COLOR, 4.0)?;
    }
    svg.push_str("  </g>\n  <g class=\"nodes\">\n");

    for index in 0..graph.node_count() {
        let (Some(name), Some(point)) = (graph.name(index), graph.point(index)) else {
            continue;
        };
        let p = projection.project(point);
        let name = escape_xml(name);

        if Some(index) == start {
            write!(
                svg,
                "    <rect class=\"start\" data-id=\"{name}\" x=\"{:.1}\" y=\"{:.1}\" width=\"14\" height=\"14\" fill=\"{START_COLOR}\" stroke=\"black\" />\n",
                p.x - 7.0,
                p.y - 7.0,
            )?;
        } else if Some(index) == dest {
            write!(
                svg,
                "    <polygon class=\"dest\" data-id=\"{name}\" points=\"{}\" fill=\"{DEST_COLOR}\" stroke=\"black\" />\n",
                star_points(&p, 10.0, 4.5),
            )?;
        } else if on_route.contains(&index) {
            write!(
                svg,
                "    <circle class=\"stop\" data-id=\"{name}\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"6\" fill=\"{PATH_COLOR}\" />\n",
                p.x, p.y,
            )?;
        } else {
            write!(
                svg,
                "    <circle class=\"node\" data-id=\"{name}\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{NODE_COLOR}\" />\n",
                p.x, p.y,
            )?;
        }

        if options.labels {
            let weight = if on_route.contains(&index) { "bold" } else { "normal" };
            write!(
                svg,
                "    <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" font-weight=\"{weight}\" fill=\"{LABEL_COLOR}\">{name}</text>\n",
                p.x + 8.0,
                p.y - 8.0,
            )?;
        }
    }

    svg.push_str("  </g>\n</svg>\n");
    Ok(svg)
}


pub fn write_svg(path: &Path, svg: &str) -> Result<(), RenderError> {
    std::fs::write(path, svg).map_err(|source| RenderError::Io { path: path.to_path_buf(), source })
}


fn write_edge(svg: &mut String, graph: &Graph, projection: &Projection, a: usize, b: usize, color: &str, width: f64) -> Result<(), RenderError> {
    let (Some(pa), Some(pb)) = (graph.point(a), graph.point(b)) else {
        return Ok(());
    };
    let (pa, pb) = (projection.project(pa), projection.project(pb));
    write!(
        svg,
        "    <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{color}\" stroke-width=\"{width}\" stroke-linecap=\"round\" />\n",
        pa.x, pa.y, pb.x, pb.y,
    )?;
    Ok(())
}

/// Five pointed star around a centre, as an svg points list
fn star_points(center: &Point, outer: f64, inner: f64) -> String {
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = std::f64::consts::PI / 5.0 * i as f64 - std::f64::consts::FRAC_PI_2;
            format!("{:.1},{:.1}", center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyMap, CoordinateMap};

    fn graph() -> Graph {
        let adjacency: AdjacencyMap = [("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["D"])]
            .into_iter()
            .map(|(n, adj)| (n.to_string(), adj.into_iter().map(String::from).collect()))
            .collect();
        let coordinates: CoordinateMap = [("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 1.0, 1.0), ("D", 2.0, 1.0), ("E&F", 0.0, 2.0)]
            .into_iter()
            .map(|(n, x, y)| (n.to_string(), Point::new(x, y)))
            .collect();
        Graph::build(&adjacency, &coordinates).unwrap()
    }

    fn route(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_marks_route() {
        let svg = render_svg(&graph(), &route(&["A", "B", "C"]), &RenderOptions::default()).unwrap();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("class=\"start\"").count(), 1);
        assert_eq!(svg.matches("class=\"dest\"").count(), 1);
        assert_eq!(svg.matches("class=\"stop\"").count(), 1);
        assert_eq!(svg.matches("class=\"node\"").count(), 2);
        assert!(svg.contains("class=\"start\" data-id=\"A\""));
        assert!(svg.contains("class=\"dest\" data-id=\"C\""));

        // Two route edges, one plain edge
        assert_eq!(svg.matches(&format!("stroke=\"{PATH_COLOR}\"")).count(), 2);
        assert_eq!(svg.matches(&format!("stroke=\"{EDGE_COLOR}\"")).count(), 1);
    }

    #[test]
    fn test_render_empty_route() {
        let svg = render_svg(&graph(), &[], &RenderOptions::default()).unwrap();

        assert_eq!(svg.matches("class=\"node\"").count(), 5);
        assert!(!svg.contains("class=\"start\""));
        assert_eq!(svg.matches("<line").count(), 3);
    }

    #[test]
    fn test_render_escapes_names() {
        let svg = render_svg(&graph(), &[], &RenderOptions::default()).unwrap();
        assert!(svg.contains("E&amp;F"));
        assert!(!svg.contains("E&F"));
    }

    #[test]
    fn test_projection_flips_y_and_keeps_margin() {
        let options = RenderOptions { width: 220.0, height: 120.0, margin: 10.0, ..Default::default() };
        let bounds = Bounds { min: Point::new(0.0, 0.0), max: Point::new(2.0, 1.0) };
        let projection = Projection::new(bounds, &options);

        assert_eq!(projection.project(&Point::new(0.0, 0.0)), Point::new(10.0, 110.0));
        assert_eq!(projection.project(&Point::new(2.0, 1.0)), Point::new(210.0, 10.0));
    }

    #[test]
    fn test_projection_transpose() {
        let options = RenderOptions { width: 220.0, height: 120.0, margin: 10.0, transpose: true, ..Default::default() };
        let bounds = Bounds { min: Point::new(0.0, 0.0), max: Point::new(1.0, 2.0) };
        let projection = Projection::new(bounds, &options);

        assert_eq!(projection.project(&Point::new(1.0, 2.0)), Point::new(210.0, 10.0));
    }

    #[test]
    fn test_projection_single_point() {
        let point = Point::new(5.0, 5.0);
        let projection = Projection::new(Bounds { min: point, max: point }, &RenderOptions::default());
        let p = projection.project(&point);
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
