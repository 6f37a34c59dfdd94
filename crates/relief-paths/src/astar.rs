use std::collections::{BinaryHeap, HashMap, HashSet};

use relief_core::Point;

use crate::heuristic::Heuristic;
use crate::path::{PathStep, SearchState, reconstruct};
use crate::traits::Terrain;

/// Maximum elevation change allowed between adjacent path cells.
const MAX_CLIMB: i32 = 1;

/// Frontier entry ordered by estimated total cost `f`, then path cost
/// `g`, then coordinate — a total order, so pops are deterministic.
#[derive(Clone, Copy)]
struct FrontierEntry {
    f: f64,
    g: i32,
    pos: Point,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the max-heap pops the smallest (f, g, pos) first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Compute the cheapest path from `start` to `goal` using A*.
///
/// Movement is 8-directional between cells whose elevation differs by at
/// most one level; every move costs one. Returns the full step sequence,
/// both endpoints included, or `None` when the goal cannot be reached —
/// frontier exhaustion is a normal outcome, not an error.
///
/// Duplicate frontier entries are expected: a cheaper route discovered
/// later pushes a fresh entry and the stale one is skipped at pop time
/// against the visited set, rather than decrease-keyed in place.
pub fn astar_path<T: Terrain>(
    terrain: &T,
    start: Point,
    goal: Point,
    heuristic: Heuristic,
) -> Option<Vec<PathStep>> {
    let start_height = terrain.height(start)?;
    let goal_height = terrain.height(goal)?;

    let mut states: HashMap<Point, SearchState> = HashMap::new();
    let mut visited: HashSet<Point> = HashSet::new();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(8);

    // Seed the start; its own elevation stands in for the missing parent.
    let f = heuristic.estimate(start, start_height, goal, goal_height, start_height);
    frontier.push(FrontierEntry { f, g: 0, pos: start });
    states.insert(start, SearchState { f, parent: None });

    while let Some(FrontierEntry { g, pos, .. }) = frontier.pop() {
        if !visited.insert(pos) {
            // Stale duplicate of an already-finalized coordinate.
            continue;
        }
        if pos == goal {
            return Some(reconstruct(&states, goal));
        }

        let Some(height) = terrain.height(pos) else {
            continue;
        };

        nbuf.clear();
        terrain.neighbors(pos, &mut nbuf);
        for &np in nbuf.iter() {
            if visited.contains(&np) {
                continue;
            }
            let Some(np_height) = terrain.height(np) else {
                continue;
            };
            if (height - np_height).abs() > MAX_CLIMB {
                continue;
            }

            let g1 = g + 1;
            let f1 = g1 as f64 + heuristic.estimate(np, np_height, goal, goal_height, height);
            // Record the route only if it beats the best one seen so far.
            if states.get(&np).is_none_or(|entry| entry.f > f1) {
                states.insert(np, SearchState { f: f1, parent: Some(pos) });
            }
            frontier.push(FrontierEntry { f: f1, g: g1, pos: np });
        }
    }

    None
}
