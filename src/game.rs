//! Game state: grid occupancy, turn order and win determination
//!
//! [`GameState`] knows nothing about rendering or input. It accepts cell
//! coordinates, validates them against the rules and reports what happened.

use derive_more::{Display, Error};
use tracing::{debug, info, trace};

use crate::board::{Board, Pos, Stone};
use crate::rules::{find_five_line_at_pos, WinningLine};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the given color to move
    InProgress(Stone),
    /// The given color completed a five. Terminal until reset.
    Won(Stone),
}

/// Why a placement was refused. Both cases leave the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Rejection {
    #[display("Cell {_0} is already occupied")]
    Occupied(#[error(not(source))] Pos),

    #[display("Game is already over")]
    GameOver,
}

/// What a successful placement led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No five; `next` moves now
    Continue { next: Stone },
    /// The placed stone completed this line
    Win(WinningLine),
}

/// A stone that made it onto the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub pos: Pos,
    pub stone: Stone,
    pub outcome: Outcome,
}

impl Placement {
    /// Winning color, if this placement ended the game
    pub fn winner(&self) -> Option<Stone> {
        match self.outcome {
            Outcome::Win(line) => Some(line.color),
            Outcome::Continue { .. } => None,
        }
    }
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_turn: Stone,
    game_over: Option<WinningLine>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Stone::Black,
            game_over: None,
        }
    }

    /// Clear the board and hand the first move back to Black
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_turn = Stone::Black;
        self.game_over = None;
        info!("Game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color that places the next stone. Frozen at the winner once the game is over.
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    pub fn phase(&self) -> Phase {
        match self.game_over {
            Some(line) => Phase::Won(line.color),
            None => Phase::InProgress(self.current_turn),
        }
    }

    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn winner(&self) -> Option<Stone> {
        self.game_over.map(|line| line.color)
    }

    /// The five that ended the game
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.game_over.as_ref()
    }

    /// Stones on the board
    pub fn move_count(&self) -> u32 {
        self.board.stone_count()
    }

    /// Attempt to place the current color's stone at `pos`.
    ///
    /// `pos` must lie on the board. On success the turn passes to the other
    /// color, unless the stone completed a five, in which case the game ends
    /// and the turn stays with the winner.
    pub fn try_place(&mut self, pos: Pos) -> Result<Placement, Rejection> {
        if self.game_over.is_some() {
            trace!(%pos, "Placement rejected: game over");
            return Err(Rejection::GameOver);
        }

        if !self.board.is_empty(pos) {
            trace!(%pos, "Placement rejected: cell occupied");
            return Err(Rejection::Occupied(pos));
        }

        let stone = self.current_turn;
        self.board.place_stone(pos, stone);
        debug!(%pos, %stone, "Stone placed");

        let outcome = match find_five_line_at_pos(&self.board, pos, stone) {
            Some(line) => {
                self.game_over = Some(line);
                info!(winner = %stone, direction = ?line.direction, "Five in a row");
                Outcome::Win(line)
            }
            None => {
                self.current_turn = stone.opponent();
                Outcome::Continue {
                    next: self.current_turn,
                }
            }
        };

        Ok(Placement { pos, stone, outcome })
    }
}
