//! The [`TerrainMap`] type — a text elevation map parsed into rows of
//! terrain symbols.
//!
//! A map uses an eleven-symbol alphabet. Five symbols encode terrain at a
//! fixed elevation (`~`→0, `.`→1, `:`→2, `M`→3, `S`→4, with `S` doubling
//! as the goal marker) and the digits `0`-`4` mark the start cell at the
//! elevation they spell. Rows may have different lengths; bounds are
//! checked per row.

use std::fmt;

use crate::geom::Point;

/// Elevation encoded by a map symbol, or `None` for characters outside
/// the alphabet.
#[inline]
pub fn symbol_height(ch: char) -> Option<i32> {
    match ch {
        '~' => Some(0),
        '.' => Some(1),
        ':' => Some(2),
        'M' => Some(3),
        'S' => Some(4),
        '0'..='4' => Some(ch as i32 - '0' as i32),
        _ => None,
    }
}

/// Terrain symbol for an elevation level, or `None` outside 0..=4.
#[inline]
pub fn height_symbol(height: i32) -> Option<char> {
    match height {
        0 => Some('~'),
        1 => Some('.'),
        2 => Some(':'),
        3 => Some('M'),
        4 => Some('S'),
        _ => None,
    }
}

/// An immutable terrain map: ordered rows of validated symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainMap {
    rows: Vec<Vec<char>>,
}

impl TerrainMap {
    /// Parse map text into a terrain map.
    ///
    /// One row per line; line terminators are stripped. Every character
    /// must belong to the map alphabet. Rows may be ragged. Start/goal
    /// presence is *not* checked here — see [`endpoints`](Self::endpoints).
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let mut rows = Vec::new();
        for (y, line) in s.lines().enumerate() {
            let row: Vec<char> = line.chars().collect();
            for (x, &ch) in row.iter().enumerate() {
                if symbol_height(ch).is_none() {
                    return Err(MapError::InvalidSymbol {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                }
            }
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(MapError::Empty);
        }
        Ok(Self { rows })
    }

    /// The map rows, as parsed.
    #[inline]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The symbol at `p`, or `None` outside the row extents.
    pub fn symbol(&self, p: Point) -> Option<char> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.rows.get(p.y as usize)?.get(p.x as usize).copied()
    }

    /// The elevation (0..=4) at `p`, or `None` outside the row extents.
    pub fn height(&self, p: Point) -> Option<i32> {
        self.symbol(p).and_then(symbol_height)
    }

    /// Whether `p` lies inside the map (per-row bounds).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.symbol(p).is_some()
    }

    /// Locate the start cell: the first digit cell in row-major order
    /// (top to bottom, left to right).
    pub fn find_start(&self) -> Option<Point> {
        self.scan(|ch| ch.is_ascii_digit())
    }

    /// Locate the goal cell: the first `S` in row-major order.
    pub fn find_goal(&self) -> Option<Point> {
        self.scan(|ch| ch == 'S')
    }

    /// Both endpoints, as `(start, goal)`, surfacing the missing cases as
    /// errors for callers that treat them as preconditions.
    pub fn endpoints(&self) -> Result<(Point, Point), MapError> {
        let start = self.find_start().ok_or(MapError::MissingStart)?;
        let goal = self.find_goal().ok_or(MapError::MissingGoal)?;
        Ok((start, goal))
    }

    fn scan(&self, pred: impl Fn(char) -> bool) -> Option<Point> {
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &ch) in row.iter().enumerate() {
                if pred(ch) {
                    return Some(Point::new(x as i32, y as i32));
                }
            }
        }
        None
    }

    /// Append the in-bounds neighbours of `p` into `buf`, preserving the
    /// N, NE, E, SE, S, SW, W, NW probe order. The caller clears `buf`.
    pub fn neighbors8(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_8() {
            if self.contains(n) {
                buf.push(n);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// MapError
// ---------------------------------------------------------------------------

/// Reasons a map cannot be used for a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The map text contains no rows.
    Empty,
    /// A character outside the map alphabet.
    InvalidSymbol { ch: char, pos: Point },
    /// No digit (start) cell anywhere in the map.
    MissingStart,
    /// No `S` (goal) cell anywhere in the map.
    MissingGoal,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map is empty"),
            Self::InvalidSymbol { ch, pos } => write!(
                f,
                "map contains invalid symbol \u{201c}{ch}\u{201d} at {pos}; \
                 allowed symbols are ~ . : M S 0 1 2 3 4"
            ),
            Self::MissingStart => write!(f, "map has no start cell (a digit 0-4)"),
            Self::MissingGoal => write!(f, "map has no goal cell (S)"),
        }
    }
}

impl std::error::Error for MapError {}
