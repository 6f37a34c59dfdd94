//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;
use relief_paths::Heuristic;

/// Find and print a shortest path across a terrain elevation map.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Path to the map file (rows of ~ . : M S and one start digit 0-4).
    pub map: PathBuf,

    /// Heuristic selector: 0 = Euclidean, 1 = Manhattan, 2 = terrain-aware.
    #[arg(value_parser = parse_heuristic)]
    pub heuristic: Heuristic,
}

fn parse_heuristic(s: &str) -> Result<Heuristic, String> {
    s.parse::<u8>()
        .ok()
        .and_then(Heuristic::from_index)
        .ok_or_else(|| String::from("heuristic selector must be 0, 1, or 2"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parses_all_three() {
        assert_eq!(parse_heuristic("0"), Ok(Heuristic::Euclidean));
        assert_eq!(parse_heuristic("1"), Ok(Heuristic::Manhattan));
        assert_eq!(parse_heuristic("2"), Ok(Heuristic::TerrainAware));
    }

    #[test]
    fn selector_rejects_out_of_range() {
        assert!(parse_heuristic("3").is_err());
        assert!(parse_heuristic("-1").is_err());
        assert!(parse_heuristic("euclidean").is_err());
    }

    #[test]
    fn args_require_both_positionals() {
        assert!(Args::try_parse_from(["ascent", "map.txt", "1"]).is_ok());
        assert!(Args::try_parse_from(["ascent", "map.txt"]).is_err());
        assert!(Args::try_parse_from(["ascent"]).is_err());
    }
}
