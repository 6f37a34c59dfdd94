use relief_core::Point;

use crate::distance::{euclidean, manhattan};

/// Remaining-cost estimate used by the A* engine.
///
/// [`Euclidean`](Self::Euclidean) and [`Manhattan`](Self::Manhattan) are
/// admissible for the unit-cost movement rule and therefore keep the
/// search optimal; [`TerrainAware`](Self::TerrainAware) trades that
/// guarantee for a climb-sensitive estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Straight-line (L2) distance to the goal, elevation included.
    Euclidean,
    /// Taxicab (L1) distance to the goal, elevation included.
    Manhattan,
    /// Euclidean distance plus a step term derived from the elevation
    /// change relative to the node's predecessor.
    TerrainAware,
}

impl Heuristic {
    /// Map a numeric selector to its heuristic: 0 = Euclidean,
    /// 1 = Manhattan, 2 = terrain-aware.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Euclidean),
            1 => Some(Self::Manhattan),
            2 => Some(Self::TerrainAware),
            _ => None,
        }
    }

    /// Estimate the remaining cost from `node` to `goal`.
    ///
    /// `parent_height` is the elevation of the node's predecessor on the
    /// route under evaluation (the node's own elevation when seeding the
    /// start); only the terrain-aware variant reads it.
    pub fn estimate(
        self,
        node: Point,
        node_height: i32,
        goal: Point,
        goal_height: i32,
        parent_height: i32,
    ) -> f64 {
        match self {
            Self::Euclidean => euclidean(node, node_height, goal, goal_height),
            Self::Manhattan => manhattan(node, node_height, goal, goal_height) as f64,
            Self::TerrainAware => {
                // Climbing exactly one level *subtracts* one from the
                // estimate (parent − z = −1) while every other elevation
                // change adds its magnitude. Search results depend on
                // this asymmetry; do not smooth the first branch into an
                // absolute value.
                let step = if node_height - parent_height == 1 {
                    parent_height - node_height
                } else {
                    (node_height - parent_height).abs()
                };
                euclidean(node, node_height, goal, goal_height) + step as f64
            }
        }
    }
}
