//! A* pathfinding over elevation terrain grids.
//!
//! Movement is 8-directional between adjacent cells whose elevation
//! differs by at most one level; every move costs one. This crate
//! provides:
//!
//! - [`astar_path`] — the search engine (lazy-deletion frontier over a
//!   binary heap, visited-set discipline, deterministic tie-breaking)
//! - [`Heuristic`] — the three interchangeable remaining-cost estimates
//! - [`reconstruct`] — the predecessor-chain walk producing ordered
//!   [`PathStep`] snapshots
//! - [`Terrain`] — the map seam the engine consumes, implemented for
//!   [`relief_core::TerrainMap`]

mod astar;
mod distance;
mod heuristic;
mod path;
mod traits;

pub use astar::astar_path;
pub use distance::{euclidean, manhattan};
pub use heuristic::Heuristic;
pub use path::{PathStep, SearchState, reconstruct};
pub use traits::Terrain;
