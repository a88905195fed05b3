//! Greedy move selection over one-placement trials.

use tetrevo_engine::{Game, Move};

use crate::{features::Features, trial::TrialBoard, weights::Weights};

/// Picks the best placement of the current piece, or `None` when every legal
/// placement would overflow the board (the terminal game state).
///
/// Candidates are examined in the order the engine enumerates them; each is
/// trial-played on a scratch copy, scored, and rolled back before the next.
/// The arg-max uses a strict `>` comparison, so the first of several
/// equally-scored placements wins. Overflowing placements are never chosen
/// while any surviving placement exists.
#[must_use]
pub fn best_move(game: &Game, weights: &Weights) -> Option<Move> {
    let mut trial = TrialBoard::new(game.board(), game.column_tops());
    let mut best: Option<(Move, f32)> = None;

    for mv in game.legal_moves() {
        let Some(outcome) = trial.simulate(game.current_piece(), mv) else {
            // losing move; worst possible score, never selected over a
            // survivor and not selectable at all
            continue;
        };
        let score = weights.score(&Features::extract(&trial, &outcome));
        trial.undo(&outcome);

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }

    best.map(|(mv, _)| mv)
}

/// Plays one complete game with the given weights, committing the selected
/// move each turn, and returns the total rows cleared.
pub fn play_game(game: &mut Game, weights: &Weights) -> u32 {
    while !game.has_lost() {
        let Some(mv) = best_move(game, weights) else {
            break;
        };
        if game.commit(mv).is_err() {
            break;
        }
    }
    game.rows_cleared()
}
