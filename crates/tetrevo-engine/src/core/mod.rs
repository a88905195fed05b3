pub use self::{board::*, piece::*};

pub(crate) mod board;
pub(crate) mod piece;

/// Number of rows in the playfield. Row 0 is the floor.
pub const BOARD_ROWS: usize = 20;
/// Number of columns in the playfield.
pub const BOARD_COLS: usize = 10;
