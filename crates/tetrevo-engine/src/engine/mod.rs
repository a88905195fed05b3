//! Authoritative game state and piece sequencing.
//!
//! [`Game`] owns the board actually being played: committing a move here is
//! permanent, including physical removal of completed rows. Trial evaluation
//! of candidate moves happens elsewhere, on scratch copies of this state.
//! [`PieceStream`] supplies the pseudo-random piece sequence from an explicit
//! [`Seed`], so whole games are reproducible.

pub use self::{game::*, piece_stream::*};

mod game;
mod piece_stream;
