//! **relief-core** — terrain map model and geometry for elevation-grid
//! pathfinding.
//!
//! This crate provides the foundational types shared across the *relief*
//! workspace: the [`Point`] coordinate primitive and the [`TerrainMap`]
//! parsed from text elevation maps.

pub mod geom;
pub mod terrain;

pub use geom::Point;
pub use terrain::{MapError, TerrainMap};
