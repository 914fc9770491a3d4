//! Square board geometry: coordinates, players and cell storage

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HexError, Result};

/// Smallest playable board side
pub const MIN_BOARD_SIZE: u8 = 2;

/// Largest playable board side
pub const MAX_BOARD_SIZE: u8 = 26;

/// Classic board side used when nothing else is configured
pub const DEFAULT_BOARD_SIZE: u8 = 7;

// ============================================================================
// COORDINATES
// ============================================================================

/// Grid address of one hex cell
///
/// `x` is the first array index and `y` the second. Red connects the rows
/// `y = 0` and `y = size - 1`, Blue connects the columns `x = 0` and
/// `x = size - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if this coordinate is on a board of the given side
    pub fn is_within(&self, size: u8) -> bool {
        self.x < size && self.y < size
    }

    /// Shift by a signed offset, staying on a board of the given side
    pub fn offset(&self, dx: i8, dy: i8, size: u8) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let shifted = Coord::new(x, y);
        shifted.is_within(size).then_some(shifted)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u8, u8)> for Coord {
    fn from((x, y): (u8, u8)) -> Self {
        Coord::new(x, y)
    }
}

// ============================================================================
// PLAYERS
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red = 0,
    Blue = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Index along the axis this player must span (`y` for Red, `x` for Blue)
    pub fn axis(self, coord: Coord) -> u8 {
        match self {
            Player::Red => coord.y,
            Player::Blue => coord.x,
        }
    }

    /// Index along the other axis
    pub fn cross_axis(self, coord: Coord) -> u8 {
        match self {
            Player::Red => coord.x,
            Player::Blue => coord.y,
        }
    }

    /// Whether the coordinate lies on this player's starting edge
    pub fn on_start_edge(self, coord: Coord) -> bool {
        self.axis(coord) == 0
    }

    /// Whether the coordinate lies on this player's far edge
    pub fn on_end_edge(self, coord: Coord, size: u8) -> bool {
        self.axis(coord) + 1 == size
    }

    /// Board marker used by the text renderer
    pub fn marker(self) -> char {
        match self {
            Player::Red => 'X',
            Player::Blue => 'O',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Player::Red),
            "b" | "blue" => Ok(Player::Blue),
            other => Err(format!("Unknown player: {} (expected red or blue)", other)),
        }
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Contents of one cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(player) => Some(player),
        }
    }
}

/// Square board of `size x size` cells (dense, x-major storage)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(size: u8) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(HexError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        let side = size as usize;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; side * side],
        })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        coord
            .is_within(self.size)
            .then(|| coord.x as usize * self.size as usize + coord.y as usize)
    }

    /// Get cell at coordinate (None if off the board)
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Check whether the given player owns the cell
    pub fn is_owned_by(&self, coord: Coord, player: Player) -> bool {
        self.get(coord) == Some(Cell::Stone(player))
    }

    /// Place a stone on an empty, on-board cell
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<()> {
        let index = self.index(coord).ok_or(HexError::OutOfBounds {
            coord,
            size: self.size,
        })?;
        if self.cells[index] != Cell::Empty {
            return Err(HexError::Occupied { coord });
        }
        self.cells[index] = Cell::Stone(player);
        Ok(())
    }

    /// Iterate all coordinates, x-major
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Coord::new(x, y)))
    }

    /// Iterate the player's stones, x-major
    pub fn stones(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        self.coords()
            .filter(move |&coord| self.is_owned_by(coord, player))
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_offset() {
        let c = Coord::new(0, 3);
        assert_eq!(c.offset(1, -1, 7), Some(Coord::new(1, 2)));
        assert_eq!(c.offset(-1, 0, 7), None);
        assert_eq!(Coord::new(6, 6).offset(0, 1, 7), None);
    }

    #[test]
    fn test_player_axes() {
        let c = Coord::new(2, 5);
        assert_eq!(Player::Red.axis(c), 5);
        assert_eq!(Player::Blue.axis(c), 2);
        assert_eq!(Player::Red.cross_axis(c), 2);
        assert!(Player::Red.on_start_edge(Coord::new(4, 0)));
        assert!(Player::Blue.on_start_edge(Coord::new(0, 4)));
        assert!(Player::Red.on_end_edge(Coord::new(0, 6), 7));
        assert!(!Player::Blue.on_end_edge(Coord::new(0, 6), 7));
    }

    #[test]
    fn test_player_parse() {
        assert_eq!("R".parse::<Player>(), Ok(Player::Red));
        assert_eq!("blue".parse::<Player>(), Ok(Player::Blue));
        assert!("green".parse::<Player>().is_err());
    }

    #[test]
    fn test_board_size_limits() {
        assert!(Board::new(1).is_err());
        assert!(Board::new(MAX_BOARD_SIZE + 1).is_err());
        assert_eq!(Board::new(7).unwrap().coords().count(), 49);
    }

    #[test]
    fn test_place() {
        let mut board = Board::new(7).unwrap();
        board.place(Coord::new(3, 4), Player::Red).unwrap();
        assert_eq!(board.get(Coord::new(3, 4)), Some(Cell::Stone(Player::Red)));
        assert_eq!(
            board.place(Coord::new(3, 4), Player::Blue),
            Err(HexError::Occupied { coord: Coord::new(3, 4) })
        );
        assert_eq!(
            board.place(Coord::new(7, 0), Player::Blue),
            Err(HexError::OutOfBounds { coord: Coord::new(7, 0), size: 7 })
        );
        assert_eq!(board.stone_count(), 1);
        assert_eq!(board.stones(Player::Red).collect::<Vec<_>>(), vec![Coord::new(3, 4)]);
        assert_eq!(board.stones(Player::Blue).count(), 0);
    }
}
