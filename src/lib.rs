#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod board;
pub mod cards;
pub mod state;
pub mod loader;
pub mod events;
pub mod rng;
pub mod driver;

pub mod engine {
    pub mod apply;
    pub mod eval;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, EndsTag, SlideTag, Square};
pub use crate::cards::{Card, Deck};
pub use crate::driver::run_simulation;
pub use crate::engine::apply::apply;
pub use crate::engine::eval::evaluate;
pub use crate::events::{Event, EventSink, NullSink, Recorder};
pub use crate::loader::{load_board_from_file, load_deck_from_file, parse_board, parse_deck};
pub use crate::rng::simulation_rng;
pub use crate::state::{Game, GameResult, Outcome, PawnLocation, Player, MAX_PLAYERS, NUM_PAWNS};
pub use crate::types::{CardKind, Color, PawnRef, PawnState};
