//! Command-line front end: load a terrain map and a configuration, search,
//! and report the path.

pub mod args;
pub mod config;
pub mod error;

use std::fmt;

use tilepath_core::Point;
use tilepath_search::{Cost, SearchEngine};
use tilepath_terrain::TerrainMap;
use tracing::info;

pub use args::Args;
pub use config::Config;
pub use error::{CliError, Result};

/// Outcome of one search, ready for printing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// The map with the path drawn in.
    pub rendered: String,
    /// Number of moves; 0 when no path was found.
    pub steps: usize,
    pub cost: Cost,
    pub found: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)?;
        if self.found {
            write!(f, "\n{} steps, cost {}", self.steps, self.cost)
        } else {
            f.write_str("\nno path found")
        }
    }
}

/// Run the program for parsed arguments.
pub fn run(args: &Args) -> Result<Report> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Config::load(path)?
        }
        None => Config::default(),
    };
    let layout = std::fs::read_to_string(&args.map).map_err(|source| CliError::Read {
        path: args.map.clone(),
        source,
    })?;
    solve(&layout, args.endpoints, &config)
}

/// Parse `layout` and search it, between `endpoints` if given or between the
/// map's own start and goal markers otherwise.
pub fn solve(layout: &str, endpoints: Option<(Point, Point)>, config: &Config) -> Result<Report> {
    let map = TerrainMap::parse(layout)?;
    let costs = config.costs.validated()?;
    let mut engine = SearchEngine::new(map, costs);

    let path = match endpoints {
        Some((from, to)) => engine.find_path(from, to)?,
        None => engine.find_path_to_goal()?,
    };

    let report = Report {
        rendered: engine
            .grid()
            .render_path_with(&path, config.render.path_char),
        steps: path.len().saturating_sub(1),
        cost: engine.path_cost(&path),
        found: !path.is_empty(),
    };
    info!(
        found = report.found,
        steps = report.steps,
        cost = report.cost,
        explored = engine.closed_count(),
        "search finished"
    );
    Ok(report)
}
