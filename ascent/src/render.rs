//! Pure snapshot rendering of path frames.
//!
//! Each frame overlays exactly one path cell with its elevation digit on
//! top of the base rows; nothing is mutated and nothing needs restoring
//! afterwards.

use relief_core::terrain::height_symbol;
use relief_core::{Point, TerrainMap};
use relief_paths::PathStep;

/// Render every frame of the path, concatenated in step order.
pub fn frames(map: &TerrainMap, path: &[PathStep]) -> String {
    let base = base_rows(map);
    let mut out = String::new();
    for &step in path {
        frame_into(&mut out, map, &base, step);
    }
    out
}

/// Base rows for rendering: the start digit is shown as its terrain
/// symbol, so a digit in a frame always means "the path is here now".
fn base_rows(map: &TerrainMap) -> Vec<Vec<char>> {
    let mut rows: Vec<Vec<char>> = map.rows().to_vec();
    if let Some(start) = map.find_start() {
        if let Some(sym) = map.height(start).and_then(height_symbol) {
            rows[start.y as usize][start.x as usize] = sym;
        }
    }
    rows
}

/// Append one labeled frame: a blank line, `M_<step>`, then the rows
/// with the step's cell overlaid as its elevation digit.
fn frame_into(out: &mut String, map: &TerrainMap, base: &[Vec<char>], step: PathStep) {
    out.push_str(&format!("\nM_{}\n", step.step));
    for (y, row) in base.iter().enumerate() {
        for (x, &ch) in row.iter().enumerate() {
            let here = Point::new(x as i32, y as i32);
            if here == step.pos {
                let digit = map
                    .height(here)
                    .and_then(|h| char::from_digit(h as u32, 10));
                out.push(digit.unwrap_or(ch));
            } else {
                out.push(ch);
            }
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_digit_is_normalized_in_base_rows() {
        let map = TerrainMap::parse("2~\n~S").unwrap();
        let base = base_rows(&map);
        assert_eq!(base[0], vec![':', '~']);
        assert_eq!(base[1], vec!['~', 'S']);
    }

    #[test]
    fn frame_overlays_exactly_one_cell() {
        let map = TerrainMap::parse("3M\n~S").unwrap();
        let path = [
            PathStep { pos: Point::new(0, 0), step: 0 },
            PathStep { pos: Point::new(1, 1), step: 1 },
        ];
        let out = frames(&map, &path);
        assert_eq!(out, "\nM_0\n3M\n~S\n\nM_1\nMM\n~4\n");
    }

    #[test]
    fn goal_overlay_reads_as_elevation_four() {
        let map = TerrainMap::parse("3S").unwrap();
        let path = [PathStep { pos: Point::new(1, 0), step: 0 }];
        let out = frames(&map, &path);
        assert!(out.contains("\nM_0\nM4\n"));
    }

    #[test]
    fn elevation_four_start_renders_as_goal_symbol() {
        // A start at elevation 4 shares the goal's glyph in the base
        // rows, so two S appear once the path has moved on.
        let map = TerrainMap::parse("4M\n~S").unwrap();
        let path = [
            PathStep { pos: Point::new(0, 0), step: 0 },
            PathStep { pos: Point::new(1, 1), step: 1 },
        ];
        let out = frames(&map, &path);
        assert!(out.contains("\nM_0\n4M\n~S\n"));
        assert!(out.contains("\nM_1\nSM\n~4\n"));
    }

    #[test]
    fn ragged_rows_render_at_their_own_width() {
        let map = TerrainMap::parse("0.:M~\n.:M\n:MS").unwrap();
        let path = [PathStep { pos: Point::new(0, 0), step: 0 }];
        let out = frames(&map, &path);
        assert_eq!(out, "\nM_0\n0.:M~\n.:M\n:MS\n");
    }
}
