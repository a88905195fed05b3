//! Placement evaluation: trial simulation, heuristic features, and move
//! selection.
//!
//! Every legal placement of the current piece is played out on a scratch copy
//! of the board ([`trial`]), reduced to four scalar features ([`features`]),
//! and scored by a weighted sum ([`weights`]); the selector ([`selector`])
//! commits the arg-max. Trial evaluation is strictly side-effect free with
//! respect to the authoritative game: each candidate is undone before the next
//! is examined, and the chosen move is re-applied for real by the caller.

pub use self::{features::*, selector::*, trial::*, weights::*};

pub mod features;
pub mod selector;
pub mod trial;
pub mod weights;
