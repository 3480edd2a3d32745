//! wayfind - pick two locations and draw the greedy route between them

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::debug;
use thiserror::Error;

use wayfind::config::{DEFAULT_ADJACENCY_PATH, DEFAULT_COORDINATES_PATH};
use wayfind::render::{render_svg, write_svg, RenderOptions};
use wayfind::selection::{format_options, prompt_index, validate_index};
use wayfind::{parse, plan_route, DataConfig, Graph, ParseError, PathPlannerError, RenderError, SelectionError};


#[derive(Parser, Debug)]
#[command(name = "wayfind", version, about = "Find and draw a greedy route between two locations")]
struct Cli {
    /// Adjacency file: a location followed by the locations it connects to
    #[arg(long, env = "WAYFIND_ADJACENCY", default_value = DEFAULT_ADJACENCY_PATH)]
    adjacency: PathBuf,

    /// Coordinate file: a location followed by its two coordinates
    #[arg(long, env = "WAYFIND_COORDINATES", default_value = DEFAULT_COORDINATES_PATH)]
    coordinates: PathBuf,

    /// Index of the starting location, asked for when omitted
    #[arg(long, allow_negative_numbers = true)]
    start: Option<String>,

    /// Index of the destination, asked for when omitted
    #[arg(long, allow_negative_numbers = true)]
    dest: Option<String>,

    /// Where to write the svg drawing
    #[arg(long, short, default_value = "route.svg")]
    output: PathBuf,

    /// Skip writing the drawing
    #[arg(long)]
    no_render: bool,

    /// Plot the second coordinate horizontally (latitude first files)
    #[arg(long)]
    transpose: bool,

    /// More logging, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}


#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Plan(#[from] PathPlannerError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Render(#[from] RenderError),
}


fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}


fn run(cli: &Cli) -> Result<(), AppError> {
    let config = DataConfig::new(&cli.adjacency, &cli.coordinates);
    let (adjacency, coordinates) = parse::load(&config)?;
    let graph = Graph::build(&adjacency, &coordinates)?;
    debug!("{} locations, {} connections", graph.node_count(), graph.edge_count());

    // Options follow the coordinate file order
    let names: Vec<&str> = coordinates.keys().map(String::as_str).collect();
    let options = format_options(names.iter().copied());

    let start = select(cli.start.as_deref(), &options, "Enter the starting city index from the options above.", names.len())?;
    let dest = select(cli.dest.as_deref(), &options, "Enter the destination city index from the options above.", names.len())?;
    let (start, dest) = (names[start], names[dest]);

    let route = plan_route(&graph, start, dest)?;
    let path = match &route {
        Some(route) => {
            println!("Route: {}", route.nodes.join(" -> "));
            println!("Distance: {:.4}", route.distance);
            route.nodes.clone()
        }
        None => {
            println!("No route found from {start} to {dest}");
            Vec::new()
        }
    };

    if !cli.no_render {
        let options = RenderOptions { transpose: cli.transpose, ..Default::default() };
        let svg = render_svg(&graph, &path, &options)?;
        write_svg(&cli.output, &svg)?;
        println!("Wrote {}", cli.output.display());
    }

    Ok(())
}


/// Index given on the command line, or asked for interactively
fn select(given: Option<&str>, options: &str, prompt: &str, bound: usize) -> Result<usize, SelectionError> {
    match given {
        Some(input) => validate_index(input, bound),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            prompt_index(&mut stdin.lock(), &mut stdout.lock(), options, prompt, bound)
        }
    }
}
