//! Shared types and constants.
//!
//! Pure data with no dependencies, usable from the core engine, the terminal
//! front-end, and tests alike.
//!
//! # Playfield
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn pivot**: column 4, row 0
//!
//! Rows above the board (negative row indices) form a hidden margin: a fresh
//! piece may overhang it, and cells written there are discarded.
//!
//! # Timing
//!
//! Gravity starts at [`DEFAULT_FALL_INTERVAL_MS`] and speeds up by
//! [`SPEEDUP_PER_LINE_MS`] for every cleared row, never dropping below
//! [`MIN_FALL_INTERVAL_MS`].

/// Board width in cells (10 columns).
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows).
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at session start (milliseconds per row).
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 800;

/// Hard floor for the gravity interval.
pub const MIN_FALL_INTERVAL_MS: u32 = 100;

/// Gravity speed-up per cleared row.
pub const SPEEDUP_PER_LINE_MS: u32 = 20;

/// Points awarded for clearing N rows with a single merge.
///
/// Indexed by row count: 0 rows scores nothing, a quadruple scores 800.
pub const CLEAR_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven piece kinds
///
/// Each kind has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in a fixed order usable for uniform selection.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];
}

/// A cell on the game board.
///
/// `None` is empty; `Some(kind)` is a settled block carrying its color
/// identifier.
pub type Cell = Option<PieceKind>;

/// Player-facing actions applied to the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the falling piece one cell left.
    MoveLeft,
    /// Move the falling piece one cell right.
    MoveRight,
    /// Drop the falling piece one cell down.
    SoftDrop,
    /// Drop the falling piece to its resting position and settle it.
    HardDrop,
    /// Rotate the falling piece 90 degrees.
    Rotate,
    /// Toggle the pause state.
    Pause,
    /// Restart the session from a cleared board.
    Restart,
}
