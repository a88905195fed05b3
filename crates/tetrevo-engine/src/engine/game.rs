use crate::{
    BOARD_COLS, BOARD_ROWS, TopOutError,
    core::{
        board::{Board, ColumnTops},
        piece::PieceKind,
    },
};

use super::piece_stream::{PieceStream, Seed};

/// A placement of the current piece: an orientation index into the piece's
/// geometry table and the leftmost column the piece occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub orientation: usize,
    pub column: usize,
}

/// Enumerates every legal placement of `kind`, orientations in table order,
/// columns left to right within each orientation.
///
/// A placement is legal when the piece fits horizontally
/// (`column + width <= BOARD_COLS`); vertical overflow is only discovered when
/// the placement is simulated or committed. The result is never empty: every
/// orientation is at most four columns wide.
#[must_use]
pub fn legal_moves(kind: PieceKind) -> Vec<Move> {
    let mut moves = Vec::new();
    for (orientation, geometry) in kind.orientations().iter().enumerate() {
        for column in 0..=BOARD_COLS - geometry.width() {
            moves.push(Move {
                orientation,
                column,
            });
        }
    }
    moves
}

/// The authoritative game state.
///
/// Owns the board being played for real, its column-top profile, the current
/// piece, and the piece stream. [`Game::commit`] applies a placement
/// permanently: completed rows are physically removed and everything above
/// slides down. Candidate-move scoring never touches this state; it works on
/// scratch copies of [`Game::board`] and [`Game::column_tops`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    tops: ColumnTops,
    current: PieceKind,
    pieces: PieceStream,
    rows_cleared: u32,
    pieces_placed: u32,
    lost: bool,
}

impl Game {
    /// Creates a game on an empty board with the piece sequence of `seed`.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self::with_board(Board::EMPTY, seed)
    }

    /// Like [`Self::new`], but starting from a prepared board.
    #[must_use]
    pub fn with_board(board: Board, seed: Seed) -> Self {
        let tops = ColumnTops::of(&board);
        let mut pieces = PieceStream::with_seed(seed);
        let current = pieces.next_kind();
        Self {
            board,
            tops,
            current,
            pieces,
            rows_cleared: 0,
            pieces_placed: 0,
            lost: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn column_tops(&self) -> &ColumnTops {
        &self.tops
    }

    #[must_use]
    pub fn current_piece(&self) -> PieceKind {
        self.current
    }

    /// Overrides the current piece. Intended for tests and scripted scenarios.
    pub fn set_current_piece(&mut self, kind: PieceKind) {
        self.current = kind;
    }

    /// Total rows cleared since the last reset.
    #[must_use]
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Total pieces committed since the last reset.
    #[must_use]
    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.lost
    }

    /// Enumerates the legal placements of the current piece.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self.current)
    }

    /// Commits a placement of the current piece.
    ///
    /// The piece falls until it rests on the surface, its cells are written,
    /// completed rows are physically removed, the column tops are brought back
    /// in sync, and the next piece is drawn. Returns the number of rows
    /// cleared by the move.
    ///
    /// If the placement would exceed the top of the playfield nothing is
    /// written, the game transitions to lost, and `Err` is returned.
    pub fn commit(&mut self, mv: Move) -> Result<u32, TopOutError> {
        debug_assert!(!self.lost);
        let geometry = &self.current.orientations()[mv.orientation];

        // highest point of contact across the spanned columns
        let landing = (0..geometry.width())
            .map(|c| i32::from(self.tops.get(mv.column + c)) - i32::from(geometry.bottom()[c]))
            .max()
            .unwrap();
        let landing = usize::try_from(landing).unwrap();

        if landing + usize::from(geometry.height()) >= BOARD_ROWS {
            self.lost = true;
            return Err(TopOutError);
        }

        for c in 0..geometry.width() {
            let x = mv.column + c;
            for y in landing + usize::from(geometry.bottom()[c])
                ..landing + usize::from(geometry.top()[c])
            {
                self.board.occupy(x, y);
            }
            self.tops
                .set(x, u8::try_from(landing).unwrap() + geometry.top()[c]);
        }

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            // row removal lowers an unpredictable set of columns
            self.tops = ColumnTops::of(&self.board);
        }

        self.rows_cleared += cleared;
        self.pieces_placed += 1;
        self.current = self.pieces.next_kind();
        Ok(cleared)
    }

    /// Returns to a fresh board while keeping the piece stream running.
    ///
    /// Counters and the lost flag are cleared and a new current piece is
    /// drawn; the stream is intentionally not re-seeded, so consecutive games
    /// of one `Game` see independent piece sequences.
    pub fn reset(&mut self) {
        self.board = Board::EMPTY;
        self.tops = ColumnTops::EMPTY;
        self.rows_cleared = 0;
        self.pieces_placed = 0;
        self.lost = false;
        self.current = self.pieces.next_kind();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Seed {
        "000102030405060708090a0b0c0d0e0f".parse().unwrap()
    }

    #[test]
    fn legal_move_counts_follow_piece_widths() {
        // I: widths 1 and 4 -> 10 + 7 placements
        assert_eq!(legal_moves(PieceKind::I).len(), 17);
        // O: single 2-wide orientation
        assert_eq!(legal_moves(PieceKind::O).len(), 9);
        // T: widths 2, 3, 2, 3
        assert_eq!(legal_moves(PieceKind::T).len(), 34);
    }

    #[test]
    fn legal_moves_are_ordered_and_in_bounds() {
        for kind in PieceKind::ALL {
            let moves = legal_moves(kind);
            assert!(!moves.is_empty());
            for mv in &moves {
                let width = kind.orientations()[mv.orientation].width();
                assert!(mv.column + width <= BOARD_COLS);
            }
            // orientations appear in table order
            let orientations: Vec<usize> = moves.iter().map(|m| m.orientation).collect();
            let mut sorted = orientations.clone();
            sorted.sort_unstable();
            assert_eq!(orientations, sorted);
        }
    }

    #[test]
    fn commit_drops_piece_to_the_floor() {
        let mut game = Game::new(seed());
        game.set_current_piece(PieceKind::O);
        let cleared = game
            .commit(Move {
                orientation: 0,
                column: 4,
            })
            .unwrap();
        assert_eq!(cleared, 0);
        assert_eq!(game.pieces_placed(), 1);
        for (x, y) in [(4, 0), (5, 0), (4, 1), (5, 1)] {
            assert!(game.board().is_occupied(x, y));
        }
        assert_eq!(game.column_tops().as_array(), &[0, 0, 0, 0, 2, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn commit_stacks_on_existing_surface() {
        let board = Board::from_ascii(
            "
            ###.......
            ###.......
            ",
        );
        let mut game = Game::with_board(board, seed());
        game.set_current_piece(PieceKind::O);
        game.commit(Move {
            orientation: 0,
            column: 1,
        })
        .unwrap();
        // column 1 and 2 are at height 2, so the O lands on top of them
        assert_eq!(game.column_tops().as_array(), &[2, 4, 4, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn commit_clears_completed_row_and_compacts() {
        let board = Board::from_ascii(
            "
            #########.
            ",
        );
        let mut game = Game::with_board(board, seed());
        game.set_current_piece(PieceKind::I);
        // vertical I into the open column completes the bottom row
        let cleared = game
            .commit(Move {
                orientation: 0,
                column: 9,
            })
            .unwrap();
        assert_eq!(cleared, 1);
        assert_eq!(game.rows_cleared(), 1);
        assert_eq!(
            game.board(),
            &Board::from_ascii(
                "
                .........#
                .........#
                .........#
                ",
            ),
        );
        assert_eq!(game.column_tops().as_array(), &[0, 0, 0, 0, 0, 0, 0, 0, 0, 3]);
    }

    #[test]
    fn commit_clearing_every_occupied_row_empties_the_board() {
        let board = Board::from_ascii(
            "
            #########.
            #########.
            #########.
            #########.
            ",
        );
        let mut game = Game::with_board(board, seed());
        game.set_current_piece(PieceKind::I);
        let cleared = game
            .commit(Move {
                orientation: 0,
                column: 9,
            })
            .unwrap();
        assert_eq!(cleared, 4);
        assert_eq!(game.board(), &Board::EMPTY);
        assert_eq!(game.column_tops(), &ColumnTops::EMPTY);
    }

    #[test]
    fn commit_overflow_loses_without_writing() {
        let mut tall = Board::EMPTY;
        for y in 0..17 {
            for x in 0..BOARD_COLS {
                tall.occupy(x, y);
            }
        }
        // no row is full; carve one hole per row so nothing clears
        for y in 0..17 {
            tall.vacate(y % BOARD_COLS, y);
        }
        let mut game = Game::with_board(tall.clone(), seed());
        game.set_current_piece(PieceKind::I);
        let result = game.commit(Move {
            orientation: 0,
            column: 5,
        });
        assert!(result.is_err());
        assert!(game.has_lost());
        assert_eq!(game.board(), &tall);
        assert_eq!(game.pieces_placed(), 0);
    }

    #[test]
    fn reset_clears_state_but_keeps_the_stream_running() {
        let mut game = Game::new(seed());
        game.set_current_piece(PieceKind::O);
        game.commit(Move {
            orientation: 0,
            column: 0,
        })
        .unwrap();
        game.reset();
        assert!(!game.has_lost());
        assert_eq!(game.board(), &Board::EMPTY);
        assert_eq!(game.column_tops(), &ColumnTops::EMPTY);
        assert_eq!(game.rows_cleared(), 0);
        assert_eq!(game.pieces_placed(), 0);
    }

    #[test]
    fn same_seed_replays_the_same_game_openings() {
        let a = Game::new(seed());
        let b = Game::new(seed());
        assert_eq!(a.current_piece(), b.current_piece());
        let mut a = a;
        let mut b = b;
        for _ in 0..20 {
            assert_eq!(a.current_piece(), b.current_piece());
            let mv = a.legal_moves()[0];
            if a.commit(mv).is_err() {
                let _ = b.commit(mv);
                break;
            }
            b.commit(mv).unwrap();
        }
    }
}
