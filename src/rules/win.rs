//! Five-in-a-row detection
//!
//! The scan is local to the stone just played: for each of the four line
//! directions it walks a window of at most 9 cells centred on that stone
//! (4 before, the stone, 4 after), clipped to the board edge, and keeps a
//! running count of consecutive stones of the played color. The first
//! direction whose count reaches [`WIN_LENGTH`] decides the game.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Cells scanned on each side of the played stone
pub const SCAN_REACH: i32 = WIN_LENGTH as i32 - 1;

/// Line directions, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// (row, col) step between neighbouring cells on the line
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// A completed five: the direction it was found in and its cells in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub color: Stone,
    pub direction: Direction,
    pub cells: [Pos; WIN_LENGTH],
}

/// Find the five completed by the stone at `pos`, if any.
///
/// Only `color` is tested. An `Empty` color never wins.
pub fn find_five_line_at_pos(board: &Board, pos: Pos, color: Stone) -> Option<WinningLine> {
    if color == Stone::Empty {
        return None;
    }

    Direction::ALL.into_iter().find_map(|direction| {
        scan_direction(board, pos, color, direction).map(|cells| WinningLine {
            color,
            direction,
            cells,
        })
    })
}

/// Walk the clipped window through `pos` along `direction`.
fn scan_direction(
    board: &Board,
    pos: Pos,
    color: Stone,
    direction: Direction,
) -> Option<[Pos; WIN_LENGTH]> {
    let (dr, dc) = direction.step();
    let mut run: [Pos; WIN_LENGTH] = [pos; WIN_LENGTH];
    let mut count = 0usize;

    for offset in -SCAN_REACH..=SCAN_REACH {
        let r = pos.row as i32 + dr * offset;
        let c = pos.col as i32 + dc * offset;

        // Off-board cells only occur at the ends of the window
        if !Pos::is_valid(r, c) {
            count = 0;
            continue;
        }

        let cell = Pos::new(r as u8, c as u8);
        if board.get(cell) == color {
            run[count] = cell;
            count += 1;
            if count == WIN_LENGTH {
                return Some(run);
            }
        } else {
            count = 0;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8)], color: Stone) -> Board {
        let mut board = Board::new();
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), color);
        }
        board
    }

    fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
        find_five_line_at_pos(board, pos, color).is_some()
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(&[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)], Stone::Black);
        let line = find_five_line_at_pos(&board, Pos::new(7, 4), Stone::Black).unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.cells[0], Pos::new(7, 0));
        assert_eq!(line.cells[4], Pos::new(7, 4));
        assert!(!has_five_at_pos(&board, Pos::new(7, 4), Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], Stone::Black);
        let line = find_five_line_at_pos(&board, Pos::new(4, 0), Stone::Black).unwrap();
        assert_eq!(line.direction, Direction::Vertical);
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let board = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Stone::White);
        let line = find_five_line_at_pos(&board, Pos::new(4, 4), Stone::White).unwrap();
        assert_eq!(line.direction, Direction::Diagonal);
        assert_eq!(line.color, Stone::White);
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let board = board_with(&[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)], Stone::White);
        let line = find_five_line_at_pos(&board, Pos::new(6, 6), Stone::White).unwrap();
        assert_eq!(line.direction, Direction::AntiDiagonal);
        assert_eq!(line.cells, [
            Pos::new(4, 8),
            Pos::new(5, 7),
            Pos::new(6, 6),
            Pos::new(7, 5),
            Pos::new(8, 4),
        ]);
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(&[(7, 0), (7, 1), (7, 2), (7, 3)], Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(7, 3), Stone::Black));
    }

    #[test]
    fn test_run_centred_on_played_stone() {
        let board = board_with(&[(8, 10), (9, 10), (10, 10), (11, 10), (12, 10)], Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(10, 10), Stone::Black));
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = board_with(&[(7, 3), (7, 4), (7, 6), (7, 7), (7, 8)], Stone::Black);
        board.place_stone(Pos::new(7, 5), Stone::White);
        assert!(!has_five_at_pos(&board, Pos::new(7, 4), Stone::Black));
        assert!(!has_five_at_pos(&board, Pos::new(7, 6), Stone::Black));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let board = board_with(&[(2, 5), (2, 6), (2, 7), (2, 8), (2, 9), (2, 10)], Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(2, 7), Stone::Black));
    }

    #[test]
    fn test_run_outside_window_ignored() {
        // A finished five elsewhere on the row is out of reach of the window
        let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 9)], Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(0, 9), Stone::Black));
    }

    #[test]
    fn test_five_at_board_edge() {
        let board = board_with(&[(14, 10), (14, 11), (14, 12), (14, 13), (14, 14)], Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(14, 14), Stone::Black));
        assert!(has_five_at_pos(&board, Pos::new(14, 12), Stone::Black));
    }

    #[test]
    fn test_five_at_corner() {
        let board = board_with(&[(10, 10), (11, 11), (12, 12), (13, 13), (14, 14)], Stone::White);
        assert!(has_five_at_pos(&board, Pos::new(14, 14), Stone::White));
    }

    #[test]
    fn test_anti_diagonal_does_not_wrap() {
        // (0,3),(1,2),(2,1),(3,0) then the line leaves the board; (4,14) is not a continuation
        let board = board_with(&[(0, 3), (1, 2), (2, 1), (3, 0), (4, 14)], Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(3, 0), Stone::Black));
    }

    #[test]
    fn test_empty_color_never_wins() {
        let board = Board::new();
        assert!(find_five_line_at_pos(&board, Pos::new(7, 7), Stone::Empty).is_none());
    }
}
