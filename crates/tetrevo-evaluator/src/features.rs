//! Heuristic features of a trial placement.
//!
//! Four scalars describe a candidate move, in this fixed order: rows cleared,
//! holes, bumpiness, aggregate height. All four are measured on the
//! *pre-compaction* trial state: the piece's cells are on the board and the
//! column tops include them, but completed rows have not been removed. The
//! hole count compensates by treating rows in the trial's full-row set as
//! already cleared; the surface features deliberately do not, matching the
//! evaluation the weights are trained against.

use tetrevo_engine::{BOARD_COLS, Board, ColumnTops};

use crate::trial::{RowSet, TrialBoard, TrialOutcome};

/// Number of heuristic features.
pub const FEATURE_COUNT: usize = 4;

/// Feature vector of one trial placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// Rows completed by the placement.
    pub rows_cleared: u32,
    /// Covered empty cells after the placement.
    pub holes: u32,
    /// Sum of absolute height differences between adjacent columns.
    pub bumpiness: u32,
    /// Sum of all column heights.
    pub aggregate_height: u32,
}

impl Features {
    /// Measures a placement that [`TrialBoard::simulate`] just applied.
    #[must_use]
    pub fn extract(trial: &TrialBoard, outcome: &TrialOutcome) -> Self {
        let (bumpiness, aggregate_height) = surface_profile(trial.tops());
        Self {
            rows_cleared: outcome.rows_cleared(),
            holes: count_holes(trial.board(), trial.tops(), outcome.full_rows()),
            bumpiness,
            aggregate_height,
        }
    }

    /// The features in weight order, widened for scoring.
    #[must_use]
    pub fn as_array(self) -> [f32; FEATURE_COUNT] {
        [
            small_f32(self.rows_cleared),
            small_f32(self.holes),
            small_f32(self.bumpiness),
            small_f32(self.aggregate_height),
        ]
    }
}

// every feature is bounded by the cell count of the board, far below f32's
// exact-integer range
#[expect(clippy::cast_precision_loss)]
fn small_f32(value: u32) -> f32 {
    debug_assert!(value < 1 << 24);
    value as f32
}

/// Counts covered empty cells, honoring rows completed by the current trial.
///
/// Per column, scanning downward from the column top: rows in `full_rows` are
/// skipped (they are logically cleared even though still on the board), then
/// the contiguous empty run directly below the surface is skipped (open sky,
/// not holes), and every empty cell from there down to the floor counts.
#[must_use]
pub fn count_holes(board: &Board, tops: &ColumnTops, full_rows: RowSet) -> u32 {
    (0..BOARD_COLS)
        .map(|x| column_holes(board, full_rows, x, tops.get(x)))
        .sum()
}

fn column_holes(board: &Board, full_rows: RowSet, x: usize, top: u8) -> u32 {
    let empty = |y: i32| !board.is_occupied(x, usize::try_from(y).unwrap());
    let full = |y: i32| full_rows.contains(usize::try_from(y).unwrap());

    let mut y = i32::from(top);
    while y >= 0 && full(y) {
        y -= 1;
    }
    while y >= 0 && empty(y) {
        y -= 1;
    }
    let mut holes = 0;
    while y >= 0 {
        if empty(y) {
            holes += 1;
        }
        y -= 1;
    }
    holes
}

/// Bumpiness and aggregate height of a column-top profile.
#[must_use]
pub fn surface_profile(tops: &ColumnTops) -> (u32, u32) {
    let heights = tops.as_array();
    let bumpiness = heights
        .windows(2)
        .map(|w| u32::from(w[0].abs_diff(w[1])))
        .sum();
    let aggregate = heights.iter().copied().map(u32::from).sum();
    (bumpiness, aggregate)
}
