//! GUI module for the Gomoku game
//!
//! Native egui/eframe front end: the orchestrator that sequences human and
//! computer turns, the board widget, and the surrounding panels.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameOutcome, GameState, MoveRejected, COMPUTER_MOVE_DELAY};
