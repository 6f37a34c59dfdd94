use std::collections::HashMap;

use relief_core::Point;

/// Bookkeeping for one discovered coordinate: the best known estimated
/// total cost and the predecessor it was reached from (`None` for the
/// start). Entries are only rewritten while the coordinate is still on
/// the frontier, never after it is finalized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchState {
    pub f: f64,
    pub parent: Option<Point>,
}

/// One step on a reconstructed path: the cell reached and its index,
/// counted from zero at the start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub pos: Point,
    pub step: usize,
}

/// Walk predecessor links from `goal` back to the entry with no parent,
/// then reverse and number the steps from zero.
///
/// Iterative on purpose: path length must not be bounded by stack depth.
pub fn reconstruct(states: &HashMap<Point, SearchState>, goal: Point) -> Vec<PathStep> {
    let mut cells = Vec::new();
    let mut cur = Some(goal);
    while let Some(pos) = cur {
        cells.push(pos);
        cur = states.get(&pos).and_then(|s| s.parent);
    }
    cells.reverse();
    cells
        .into_iter()
        .enumerate()
        .map(|(step, pos)| PathStep { pos, step })
        .collect()
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_step_round_trip() {
        let step = PathStep {
            pos: Point::new(3, 7),
            step: 5,
        };
        let json = serde_json::to_string(&step).unwrap();
        let back: PathStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }

    #[test]
    fn search_state_round_trip() {
        let state = SearchState {
            f: 4.25,
            parent: Some(Point::new(1, 2)),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: SearchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
