//! Game session: the playfield state machine.
//!
//! Owns the board, the falling piece, score and pacing, and the lifecycle
//! flags. Every operation is total: calls that are not legal in the current
//! state (moving while paused, rotating with no piece, anything after game
//! over) do nothing. The only terminal condition is a blocked spawn, which
//! sets the game-over flag; `reset` is the sole way out of it.

use crate::board::Board;
use crate::pieces::{canonical_shape, rotated, PieceShape, SPAWN_POSITION};
use crate::rng::PiecePicker;
use crate::scoring::{line_clear_score, next_fall_interval};
use crate::types::{GameAction, PieceKind, DEFAULT_FALL_INTERVAL_MS};

/// The falling piece: kind, pivot position, and its current offsets.
///
/// The offsets start as the kind's canonical shape and are rewritten by
/// successful rotations, so the piece carries its own orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Pivot column.
    pub x: i8,
    /// Pivot row; may sit above the board while blocks overhang the margin.
    pub y: i8,
    /// Current `(dy, dx)` block offsets around the pivot.
    pub cells: PieceShape,
}

impl ActivePiece {
    fn at_spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            x,
            y,
            cells: canonical_shape(kind),
        }
    }

    /// Absolute `(x, y)` board coordinates of the four blocks.
    pub fn blocks(&self) -> [(i8, i8); 4] {
        self.cells
            .map(|(dy, dx)| (self.x + dx, self.y + dy))
    }
}

/// A complete game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<ActivePiece>,
    picker: PiecePicker,
    score: u32,
    fall_interval_ms: u32,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl GameSession {
    /// Create a session in its idle state; `start` (or `reset`) begins play.
    ///
    /// The seed fixes the whole spawn sequence, so a given seed replays the
    /// same game.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            picker: PiecePicker::new(seed),
            score: 0,
            fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            started: false,
            paused: false,
            game_over: false,
        }
    }

    /// Begin play and spawn the first piece. Idempotent after the first call.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    /// Return to a fresh running session: empty board, zero score, default
    /// gravity, no falling piece (the next tick spawns one).
    ///
    /// Always succeeds, from any state. The piece sequence continues from
    /// where it was rather than replaying.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.fall_interval_ms = DEFAULT_FALL_INTERVAL_MS;
        self.started = true;
        self.paused = false;
        self.game_over = false;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current gravity interval. The caller schedules `tick` at this pace and
    /// should re-read it after every engine call, since line clears shrink it.
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Draw a random kind and spawn it. See [`GameSession::spawn_kind`].
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let kind = self.picker.pick();
        self.spawn_kind(kind)
    }

    /// Spawn a specific kind at the spawn position with its canonical shape.
    ///
    /// If the spawn position overlaps settled cells the session ends: the
    /// game-over flag is set and no piece is installed. Public so tests can
    /// drive an exact piece sequence.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if self.game_over {
            return false;
        }

        let piece = ActivePiece::at_spawn(kind);
        if self.collides(&piece.cells, piece.x, piece.y) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Whether any block of `shape` at pivot (x, y) hits a wall, the floor,
    /// or a settled cell. The hidden margin above the board never collides.
    fn collides(&self, shape: &PieceShape, x: i8, y: i8) -> bool {
        shape
            .iter()
            .any(|&(dy, dx)| !self.board.is_open(x + dx, y + dy))
    }

    /// The falling piece, when one exists and the session accepts movement.
    fn movable_piece(&self) -> Option<ActivePiece> {
        if self.paused || self.game_over {
            return None;
        }
        self.active
    }

    /// Shift the piece one column left. A blocked shift is silently ignored.
    pub fn move_left(&mut self) {
        self.shift(-1);
    }

    /// Shift the piece one column right. A blocked shift is silently ignored.
    pub fn move_right(&mut self) {
        self.shift(1);
    }

    fn shift(&mut self, dx: i8) {
        let Some(piece) = self.movable_piece() else {
            return;
        };
        if !self.collides(&piece.cells, piece.x + dx, piece.y) {
            self.active = Some(ActivePiece {
                x: piece.x + dx,
                ..piece
            });
        }
    }

    /// Move the piece one row down. Unlike a lateral shift, a blocked descent
    /// settles the piece into the board instead of being ignored.
    pub fn soft_drop(&mut self) {
        let Some(piece) = self.movable_piece() else {
            return;
        };
        self.descend_or_merge(piece);
    }

    fn descend_or_merge(&mut self, piece: ActivePiece) {
        if self.collides(&piece.cells, piece.x, piece.y + 1) {
            self.merge_active();
        } else {
            self.active = Some(ActivePiece {
                y: piece.y + 1,
                ..piece
            });
        }
    }

    /// Rotate the piece 90 degrees around its pivot.
    ///
    /// If the rotated shape would collide at the current position the
    /// rotation is rejected and the piece is left exactly as it was. There is
    /// no kick search: a piece against a wall simply does not turn.
    pub fn rotate(&mut self) {
        let Some(piece) = self.movable_piece() else {
            return;
        };
        let turned = rotated(&piece.cells);
        if !self.collides(&turned, piece.x, piece.y) {
            self.active = Some(ActivePiece {
                cells: turned,
                ..piece
            });
        }
    }

    /// Drop the piece straight down to its resting position and settle it
    /// there, as one atomic operation.
    pub fn hard_drop(&mut self) {
        let Some(piece) = self.movable_piece() else {
            return;
        };

        let mut rest_y = piece.y;
        while !self.collides(&piece.cells, piece.x, rest_y + 1) {
            rest_y += 1;
        }

        self.active = Some(ActivePiece { y: rest_y, ..piece });
        self.merge_active();
    }

    /// Settle the falling piece into the board, then clear any completed
    /// rows, award their score, and speed up gravity.
    ///
    /// One transition: by the time this returns, board, score and gravity are
    /// all consistent. The active slot is left empty; the next tick spawns
    /// the replacement.
    fn merge_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board
            .write_piece(&piece.cells, piece.x, piece.y, piece.kind);

        let cleared = self.board.clear_full_rows();
        let lines = cleared.len();
        self.score += line_clear_score(lines);
        self.fall_interval_ms = next_fall_interval(self.fall_interval_ms, lines);
    }

    /// One gravity step, driven by the caller's timer.
    ///
    /// With no falling piece this spawns one (possibly ending the session)
    /// and returns; the fresh piece takes its first step on the next tick.
    /// Otherwise it is a plain downward step, settling the piece when the
    /// step is blocked.
    pub fn tick(&mut self) {
        if !self.started || self.paused || self.game_over {
            return;
        }

        let Some(piece) = self.active else {
            self.spawn_piece();
            return;
        };

        self.descend_or_merge(piece);
    }

    /// Suspend play. Ignored after game over.
    pub fn pause(&mut self) {
        if !self.game_over {
            self.paused = true;
        }
    }

    /// Resume play. Ignored after game over.
    pub fn resume(&mut self) {
        if !self.game_over {
            self.paused = false;
        }
    }

    /// Apply a player action.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => {
                if self.paused {
                    self.resume()
                } else {
                    self.pause()
                }
            }
            GameAction::Restart => self.reset(),
        }
    }
}
