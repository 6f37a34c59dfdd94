use relief_core::{Point, TerrainMap};

/// Terrain interface consumed by the search engine — neighbour
/// enumeration and elevation lookup.
pub trait Terrain {
    /// Append the in-bounds neighbours of `p` into `buf`, in the fixed
    /// N, NE, E, SE, S, SW, W, NW order. The caller clears `buf` before
    /// calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Elevation (0..=4) at `p`, or `None` outside the map.
    fn height(&self, p: Point) -> Option<i32>;
}

impl Terrain for TerrainMap {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.neighbors8(p, buf);
    }

    fn height(&self, p: Point) -> Option<i32> {
        TerrainMap::height(self, p)
    }
}
