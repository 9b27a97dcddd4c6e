//! Game module - the per-tick state machine
//!
//! A [`Game`] owns the board, the current and next pieces, the score and the
//! terminal flag. Each [`Game::tick`] resolves at most one player command and
//! then one gravity step, in that order:
//!
//! 1. A finished game ignores everything.
//! 2. The command (if any) is applied when the board allows it; blocked moves
//!    and rotations are silently dropped.
//! 3. Gravity moves the piece down one row, or locks it: merge, clear rows,
//!    score, promote the next piece, spawn a new next piece, and end the game
//!    if the promoted piece is already blocked.
//!
//! A soft drop and gravity are independent checks, so a single tick can move
//! the piece down two rows.

use log::{debug, trace};

use crate::board::Board;
use crate::error::GameError;
use crate::piece::{rotate, Piece};
use crate::rng::{Randomizer, SeededRandomizer};
use crate::scoring::line_clear_points;
use crate::shapes::ShapeCatalog;
use crate::snapshot::{GameSnapshot, PieceView};
use crate::types::Command;

/// Lifecycle state. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Outcome of the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    /// The piece promoted after this lock was already blocked
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<R: Randomizer = SeededRandomizer> {
    board: Board,
    catalog: ShapeCatalog,
    rng: R,
    current: Piece,
    next: Piece,
    score: u32,
    lines: u32,
    status: GameStatus,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl Game<SeededRandomizer> {
    /// Create a new game on an empty `width x height` board, seeded from
    /// entropy.
    pub fn new(width: u16, height: u16) -> Result<Self, GameError> {
        Self::with_randomizer(width, height, SeededRandomizer::from_entropy())
    }

    /// Create a reproducible game
    pub fn with_seed(width: u16, height: u16, seed: u64) -> Result<Self, GameError> {
        Self::with_randomizer(width, height, SeededRandomizer::new(seed))
    }

    /// Seed of the piece sequence
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: Randomizer> Game<R> {
    /// Create a new game on an empty board with the given random source
    pub fn with_randomizer(width: u16, height: u16, rng: R) -> Result<Self, GameError> {
        let board = Board::new(width, height)?;
        Ok(Self::with_board(board, rng))
    }

    /// Start a game on an existing board.
    ///
    /// Spawns the current piece, then the next one. If the current piece is
    /// already blocked the game starts over.
    pub fn with_board(board: Board, mut rng: R) -> Self {
        let catalog = ShapeCatalog::standard();
        let current = Piece::spawn(&catalog, &mut rng, board.width());
        let next = Piece::spawn(&catalog, &mut rng, board.width());

        let status = if board.is_blocked(&current, 0, 0) {
            debug!(
                "spawned {:?} is blocked on a {}x{} board; game starts over",
                current.kind,
                board.width(),
                board.height()
            );
            GameStatus::GameOver
        } else {
            GameStatus::Running
        };

        Self {
            board,
            catalog,
            rng,
            current,
            next,
            score: 0,
            lines: 0,
            status,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance one tick: apply `command`, then gravity.
    pub fn tick(&mut self, command: Option<Command>) -> GameSnapshot {
        if !self.is_over() {
            if let Some(command) = command {
                self.apply_command(command);
            }
            self.apply_gravity();
        }
        self.snapshot()
    }

    /// Apply a player command without gravity.
    ///
    /// Returns whether the piece moved or rotated. Blocked commands and
    /// commands after game over return false and change nothing.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.is_over() {
            return false;
        }
        match command {
            Command::Left => self.try_move(-1, 0),
            Command::Right => self.try_move(1, 0),
            Command::SoftDrop => self.try_move(0, 1),
            Command::Rotate => self.try_rotate(),
        }
    }

    /// Try to shift the current piece
    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.board.is_blocked(&self.current, dx, dy) {
            trace!("move ({dx}, {dy}) blocked");
            return false;
        }
        self.current.col += dx;
        self.current.row += dy;
        true
    }

    /// Try to rotate the current piece clockwise, without wall kicks
    fn try_rotate(&mut self) -> bool {
        let rotated = rotate(&self.current);
        if self.board.is_blocked(&rotated, 0, 0) {
            trace!("rotation of {:?} blocked", self.current.kind);
            return false;
        }
        self.current = rotated;
        true
    }

    /// One automatic gravity step. Returns true if the piece locked.
    fn apply_gravity(&mut self) -> bool {
        if self.try_move(0, 1) {
            return false;
        }
        self.lock_current();
        true
    }

    /// Lock the current piece onto the board and handle line clears
    fn lock_current(&mut self) {
        self.board.merge(&self.current);

        let cleared = self.board.clear_full_lines();
        let points = line_clear_points(cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);
        if cleared > 0 {
            debug!("cleared {cleared} line(s), score {}", self.score);
        }

        let spawned = Piece::spawn(&self.catalog, &mut self.rng, self.board.width());
        self.current = std::mem::replace(&mut self.next, spawned);

        let game_over = self.board.is_blocked(&self.current, 0, 0);
        if game_over {
            self.status = GameStatus::GameOver;
            debug!(
                "game over: {:?} blocked at spawn, final score {}",
                self.current.kind, self.score
            );
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            points,
            game_over,
        });
    }

    /// Copy the observable state into an existing snapshot, reusing its
    /// board allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.current = PieceView::from(&self.current);
        out.next = PieceView::from(&self.next);
        out.score = self.score;
        out.lines = self.lines;
        out.is_over = self.is_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current: PieceView::from(&self.current),
            next: PieceView::from(&self.next),
            score: self.score,
            lines: self.lines,
            is_over: self.is_over(),
        }
    }
}
