//! Hex adjacency on a square board
//!
//! The board is an axial hex grid stored in a square array. Cell `(i, j)`
//! touches `(i+1, j-1)` and `(i-1, j+1)` along the short diagonal, but not
//! `(i+1, j+1)`. Edge and corner cells keep the in-bounds part of the
//! interior pattern, listed per region in a fixed order.

use rustc_hash::FxHashMap;

use crate::board::Coord;

/// Offset lists `(di, dj)` for each board region, in neighbor order
const INTERIOR: &[(i8, i8)] = &[(-1, 0), (0, -1), (1, -1), (1, 0), (0, 1), (-1, 1)];
const TOP_LEFT_CORNER: &[(i8, i8)] = &[(0, 1), (1, 0)];
const BOTTOM_RIGHT_CORNER: &[(i8, i8)] = &[(0, -1), (-1, 0)];
const BOTTOM_LEFT_CORNER: &[(i8, i8)] = &[(-1, 0), (-1, 1), (0, 1)];
const TOP_RIGHT_CORNER: &[(i8, i8)] = &[(0, -1), (1, -1), (1, 0)];
const LEFT_EDGE: &[(i8, i8)] = &[(-1, 0), (-1, 1), (0, 1), (1, 0)];
const RIGHT_EDGE: &[(i8, i8)] = &[(-1, 0), (0, -1), (1, -1), (1, 0)];
const TOP_EDGE: &[(i8, i8)] = &[(0, -1), (1, -1), (1, 0), (0, 1)];
const BOTTOM_EDGE: &[(i8, i8)] = &[(0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Where a cell sits on the board
///
/// Top/bottom refer to `i = 0` / `i = n-1`, left/right to `j = 0` / `j = n-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRegion {
    Interior,
    TopLeftCorner,
    BottomRightCorner,
    BottomLeftCorner,
    TopRightCorner,
    LeftEdge,
    RightEdge,
    TopEdge,
    BottomEdge,
}

impl CellRegion {
    pub fn classify(coord: Coord, size: u8) -> Self {
        let last = size.saturating_sub(1);
        let top = coord.x == 0;
        let bottom = coord.x == last;
        let left = coord.y == 0;
        let right = coord.y == last;

        match (top, bottom, left, right) {
            (true, _, true, _) => CellRegion::TopLeftCorner,
            (_, true, _, true) => CellRegion::BottomRightCorner,
            (_, true, true, _) => CellRegion::BottomLeftCorner,
            (true, _, _, true) => CellRegion::TopRightCorner,
            (_, _, true, _) => CellRegion::LeftEdge,
            (_, _, _, true) => CellRegion::RightEdge,
            (true, _, _, _) => CellRegion::TopEdge,
            (_, true, _, _) => CellRegion::BottomEdge,
            _ => CellRegion::Interior,
        }
    }

    pub fn offsets(self) -> &'static [(i8, i8)] {
        match self {
            CellRegion::Interior => INTERIOR,
            CellRegion::TopLeftCorner => TOP_LEFT_CORNER,
            CellRegion::BottomRightCorner => BOTTOM_RIGHT_CORNER,
            CellRegion::BottomLeftCorner => BOTTOM_LEFT_CORNER,
            CellRegion::TopRightCorner => TOP_RIGHT_CORNER,
            CellRegion::LeftEdge => LEFT_EDGE,
            CellRegion::RightEdge => RIGHT_EDGE,
            CellRegion::TopEdge => TOP_EDGE,
            CellRegion::BottomEdge => BOTTOM_EDGE,
        }
    }
}

/// Immutable neighbor lists for every cell of a board
#[derive(Clone, Debug)]
pub struct AdjacencyMap {
    size: u8,
    links: FxHashMap<Coord, Vec<Coord>>,
}

impl AdjacencyMap {
    /// Board side this map was built for
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of cells with an entry
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Neighbor list, or None for a coordinate off the board
    pub fn get(&self, coord: Coord) -> Option<&[Coord]> {
        self.links.get(&coord).map(Vec::as_slice)
    }

    /// Neighbor list of an on-board coordinate
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside `[0, size) x [0, size)`.
    pub fn neighbors(&self, coord: Coord) -> &[Coord] {
        match self.get(coord) {
            Some(list) => list,
            None => panic!(
                "coordinate {} is outside the {}x{} board",
                coord, self.size, self.size
            ),
        }
    }

    /// Whether `b` appears in `a`'s neighbor list
    pub fn are_adjacent(&self, a: Coord, b: Coord) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &[Coord])> + '_ {
        self.links.iter().map(|(&coord, list)| (coord, list.as_slice()))
    }
}

/// Build the adjacency map for a `board_size x board_size` board
pub fn build_adjacency(board_size: u8) -> AdjacencyMap {
    let mut links = FxHashMap::default();

    for x in 0..board_size {
        for y in 0..board_size {
            let coord = Coord::new(x, y);
            let list = CellRegion::classify(coord, board_size)
                .offsets()
                .iter()
                .filter_map(|&(dx, dy)| coord.offset(dx, dy, board_size))
                .collect();
            links.insert(coord, list);
        }
    }

    AdjacencyMap {
        size: board_size,
        links,
    }
}
