//! ascent — step-by-step shortest paths over textual elevation maps.
//!
//! Reads a terrain map, runs A* with the selected heuristic, and prints
//! one labeled grid snapshot per path step. Failures to set the search
//! up (bad file, bad map, missing endpoints) are reported and the
//! process returns cleanly; an unreachable goal is a normal outcome with
//! its own message.

mod cli;
mod render;

use std::fs;

use clap::Parser;
use relief_core::TerrainMap;
use relief_paths::astar_path;

use cli::Args;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{err}");
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&args.map)
        .map_err(|err| format!("cannot read map file {}: {err}", args.map.display()))?;
    let map = TerrainMap::parse(&text)?;
    let (start, goal) = map.endpoints()?;
    log::debug!(
        "map: {} row(s), start {start}, goal {goal}, heuristic {:?}",
        map.row_count(),
        args.heuristic
    );

    match astar_path(&map, start, goal, args.heuristic) {
        Some(path) => {
            log::debug!("reached the goal in {} step(s)", path.len() - 1);
            print!("{}", render::frames(&map, &path));
        }
        None => println!("Goal State is not possible."),
    }
    Ok(())
}
