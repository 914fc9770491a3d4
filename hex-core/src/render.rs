//! Text rendering of the board as a sheared rhombus
//!
//! Each text line holds one `y` row with `x` running left to right, and
//! every line is shifted two columns further right than the one above:
//!
//! ```text
//! • - X
//!  \ / \
//!   O - •
//! ```

use crate::board::{Board, Cell, Coord};

const EMPTY_MARKER: char = '•';

fn marker(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_MARKER,
        Cell::Stone(player) => player.marker(),
    }
}

/// Render the board, one cell line per `y` with connector lines between
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();

    for y in 0..size {
        let indent = 2 * y as usize;
        let cells: Vec<String> = (0..size)
            .map(|x| marker(board.get(Coord::new(x, y)).unwrap_or_default()).to_string())
            .collect();
        out.push_str(&format!("{:indent$}{}\n", "", cells.join(" - "), indent = indent));

        if y + 1 < size {
            let mut connector = String::from("\\");
            for i in 0..(2 * size as usize - 2) {
                connector.push_str(if i % 2 == 0 { " /" } else { " \\" });
            }
            out.push_str(&format!("{:indent$}{}\n", "", connector, indent = indent + 1));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_render_small_board() {
        let mut board = Board::new(2).unwrap();
        board.place(Coord::new(1, 0), Player::Red).unwrap();
        board.place(Coord::new(0, 1), Player::Blue).unwrap();

        let expected = "• - X\n \\ / \\\n  O - •\n";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_render_layout() {
        let board = Board::new(7).unwrap();
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "• - • - • - • - • - • - •");
        assert_eq!(lines[1], " \\ / \\ / \\ / \\ / \\ / \\ / \\");
        assert!(lines[12].starts_with(&" ".repeat(12)));
        assert!(lines.iter().all(|line| !line.ends_with(' ')));
    }
}
