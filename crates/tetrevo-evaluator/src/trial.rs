//! Trial placement on a scratch board.
//!
//! [`TrialBoard`] holds a private copy of a board and its column-top profile
//! and plays candidate placements on it without ever touching the authoritative
//! game state. A successful [`TrialBoard::simulate`] leaves the piece's cells
//! written and the tops raised (completed rows are detected but **not**
//! compacted) so the feature extractor can inspect the post-placement surface.
//! [`TrialBoard::undo`] then restores the exact pre-trial state, which is what
//! allows one `TrialBoard` to score every candidate of a turn in sequence.

use arrayvec::ArrayVec;
use tetrevo_engine::{BOARD_ROWS, Board, ColumnTops, Move, PieceKind};

/// Set of row indices, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSet(u32);

impl RowSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub fn insert(&mut self, y: usize) {
        debug_assert!(y < BOARD_ROWS);
        self.0 |= 1 << y;
    }

    #[inline]
    #[must_use]
    pub fn contains(self, y: usize) -> bool {
        debug_assert!(y < BOARD_ROWS);
        (self.0 & (1 << y)) != 0
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }
}

/// Result of one successful trial placement.
///
/// Besides the cleared-row count this records everything [`TrialBoard::undo`]
/// needs for an exact rollback: the cells the placement wrote and the column
/// tops it replaced. Produced by one simulation call, consumed by the feature
/// extractor, then discarded.
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    rows_cleared: u32,
    full_rows: RowSet,
    // a tetromino writes exactly four cells
    cells: ArrayVec<(u8, u8), 4>,
    prev_tops: ColumnTops,
}

impl TrialOutcome {
    /// Rows completed by this placement.
    #[must_use]
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// The completed rows themselves. They are still physically present on the
    /// trial board; feature extraction treats them as already gone.
    #[must_use]
    pub fn full_rows(&self) -> RowSet {
        self.full_rows
    }
}

/// Scratch copy of a board for side-effect-free placement scoring.
#[derive(Debug, Clone)]
pub struct TrialBoard {
    board: Board,
    tops: ColumnTops,
}

impl TrialBoard {
    /// Copies the given board state into a fresh scratch area.
    #[must_use]
    pub fn new(board: &Board, tops: &ColumnTops) -> Self {
        Self {
            board: board.clone(),
            tops: *tops,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn tops(&self) -> &ColumnTops {
        &self.tops
    }

    /// Plays `mv` on the scratch board.
    ///
    /// The piece falls until it contacts the surface of one of its spanned
    /// columns, its cells are written, the tops are raised, and the rows the
    /// placement completed are collected (top of the piece's span first).
    ///
    /// Returns `None` when the placement would exceed the top of the
    /// playfield; the move loses the game and nothing is written. Callers
    /// score that case as the worst possible move.
    pub fn simulate(&mut self, kind: PieceKind, mv: Move) -> Option<TrialOutcome> {
        let geometry = &kind.orientations()[mv.orientation];

        let landing = (0..geometry.width())
            .map(|c| i32::from(self.tops.get(mv.column + c)) - i32::from(geometry.bottom()[c]))
            .max()
            .unwrap();
        let landing = usize::try_from(landing).unwrap();

        if landing + usize::from(geometry.height()) >= BOARD_ROWS {
            return None;
        }

        let prev_tops = self.tops;
        let mut cells = ArrayVec::new();
        for c in 0..geometry.width() {
            let x = mv.column + c;
            for y in landing + usize::from(geometry.bottom()[c])
                ..landing + usize::from(geometry.top()[c])
            {
                self.board.occupy(x, y);
                cells.push((u8::try_from(x).unwrap(), u8::try_from(y).unwrap()));
            }
            self.tops
                .set(x, u8::try_from(landing).unwrap() + geometry.top()[c]);
        }

        let mut full_rows = RowSet::EMPTY;
        for y in (landing..landing + usize::from(geometry.height())).rev() {
            if self.board.row_is_full(y) {
                full_rows.insert(y);
            }
        }

        Some(TrialOutcome {
            rows_cleared: full_rows.len(),
            full_rows,
            cells,
            prev_tops,
        })
    }

    /// Reverts a simulated placement, restoring board and tops exactly.
    pub fn undo(&mut self, outcome: &TrialOutcome) {
        for &(x, y) in &outcome.cells {
            self.board.vacate(usize::from(x), usize::from(y));
        }
        self.tops = outcome.prev_tops;
    }
}
