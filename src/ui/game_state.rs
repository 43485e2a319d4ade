//! Game orchestration for the GUI
//!
//! Owns the board and the selector, sequences the human (Black) and the
//! computer (White), and applies the computer's reply after a short pacing
//! delay so the exchange reads naturally on screen.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::rules::win;
use crate::selector::{MoveChoice, MoveSelector};

/// Pacing delay before the computer's reply is applied.
///
/// Purely cosmetic; the selector itself returns immediately.
pub const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Why a requested placement was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("the game is over")]
    GameOver,
    #[error("waiting for the computer's move")]
    ComputerPending,
    #[error("that cell is occupied or off the board")]
    InvalidCell,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win {
        winner: Stone,
        line: Option<[Pos; 5]>,
    },
    Draw,
}

/// Main game state driving the human-vs-computer loop
pub struct GameState {
    pub board: Board,
    pub selector: MoveSelector,
    pub human: Stone,
    pub computer: Stone,
    pub game_over: Option<GameOutcome>,
    /// Stats from the selector's most recent run, for the debug panel
    pub last_choice: Option<MoveChoice>,
    pub message: Option<String>,
    /// When set, the computer's reply is due at this instant
    reply_due: Option<Instant>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            selector: MoveSelector::new(),
            human: Stone::Black,
            computer: Stone::White,
            game_over: None,
            last_choice: None,
            message: None,
            reply_due: None,
        }
    }

    /// Whether the computer's reply is scheduled but not yet applied
    #[inline]
    pub fn is_computer_pending(&self) -> bool {
        self.reply_due.is_some()
    }

    /// Time until the pending reply fires, for repaint scheduling
    pub fn reply_due_in(&self) -> Option<Duration> {
        self.reply_due
            .map(|due| due.saturating_duration_since(Instant::now()))
    }

    /// Attempt to play the human's stone at the clicked cell.
    ///
    /// All placements are gated through [`Board::is_valid_move`]; the board
    /// itself never sees an invalid call. On success the computer's reply
    /// is scheduled [`COMPUTER_MOVE_DELAY`] from now and applied by
    /// [`GameState::poll_computer`].
    pub fn try_place(&mut self, row: i32, col: i32) -> Result<(), MoveRejected> {
        if self.game_over.is_some() {
            return Err(MoveRejected::GameOver);
        }
        if self.is_computer_pending() {
            return Err(MoveRejected::ComputerPending);
        }
        if !self.board.is_valid_move(row, col) {
            return Err(MoveRejected::InvalidCell);
        }

        self.place(Pos::new(row as u8, col as u8), self.human);

        if self.game_over.is_none() {
            self.reply_due = Some(Instant::now() + COMPUTER_MOVE_DELAY);
        }
        Ok(())
    }

    /// Apply the computer's move once its pacing delay has elapsed.
    ///
    /// Called from the UI update loop; a no-op until the delay passes.
    pub fn poll_computer(&mut self) {
        let Some(due) = self.reply_due else {
            return;
        };
        if Instant::now() < due {
            return;
        }
        self.reply_due = None;

        if self.game_over.is_some() {
            return;
        }

        let choice = self
            .selector
            .choose_move_with_stats(&self.board, self.computer);
        self.last_choice = Some(choice);

        match choice.best_move {
            Some(pos) => self.place(pos, self.computer),
            // A full board means an immediate draw, never a retry
            None => self.game_over = Some(GameOutcome::Draw),
        }
    }

    fn place(&mut self, pos: Pos, stone: Stone) {
        let won = self.board.apply_move(pos, stone);
        debug!(?stone, row = pos.row, col = pos.col, "move applied");

        if won {
            let line = win::find_five_line_at(&self.board, pos, stone);
            self.game_over = Some(GameOutcome::Win { winner: stone, line });
            info!(?stone, "game over: five in a row");
        } else if self.board.is_draw() {
            self.game_over = Some(GameOutcome::Draw);
            info!("game over: draw");
        }
    }

    /// Take back the last human/computer move pair.
    ///
    /// If the computer's reply is still pending it is cancelled and only
    /// the unanswered human move comes back. A no-op once the game is over
    /// or before any move has been played.
    pub fn undo(&mut self) {
        if self.game_over.is_some() {
            return;
        }

        let undo_count = if self.reply_due.take().is_some() { 1 } else { 2 };

        let mut undone = false;
        for _ in 0..undo_count {
            undone |= self.board.undo_last_move().is_some();
        }
        if undone {
            self.last_choice = None;
            self.message = None;
            debug!(moves = undo_count, "undo");
        }
    }

    /// Start a fresh game
    pub fn restart(&mut self) {
        self.board.reset();
        self.game_over = None;
        self.last_choice = None;
        self.message = None;
        self.reply_due = None;
        info!("new game");
    }

    /// One-line status for the side panel
    pub fn status_text(&self) -> &'static str {
        match self.game_over {
            Some(GameOutcome::Win { winner, .. }) if winner == self.human => "Black wins!",
            Some(GameOutcome::Win { .. }) => "White (computer) wins!",
            Some(GameOutcome::Draw) => "Draw!",
            None if self.is_computer_pending() => "Computer is thinking...",
            None => "Your turn: Black to play",
        }
    }

    #[cfg(test)]
    fn force_reply_due(&mut self) {
        if self.reply_due.is_some() {
            self.reply_due = Some(Instant::now());
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_move_schedules_reply() {
        let mut state = GameState::new();
        assert!(state.try_place(7, 7).is_ok());

        assert_eq!(state.board.get(Pos::new(7, 7)), Stone::Black);
        assert!(state.is_computer_pending());
    }

    #[test]
    fn test_second_click_rejected_while_pending() {
        let mut state = GameState::new();
        state.try_place(7, 7).unwrap();
        assert_eq!(state.try_place(8, 8), Err(MoveRejected::ComputerPending));
    }

    #[test]
    fn test_invalid_cells_rejected() {
        let mut state = GameState::new();
        assert_eq!(state.try_place(-1, 7), Err(MoveRejected::InvalidCell));
        assert_eq!(state.try_place(7, 15), Err(MoveRejected::InvalidCell));

        state.try_place(7, 7).unwrap();
        state.force_reply_due();
        state.poll_computer();
        assert_eq!(state.try_place(7, 7), Err(MoveRejected::InvalidCell));
    }

    #[test]
    fn test_poll_applies_computer_reply() {
        let mut state = GameState::new();
        state.try_place(7, 7).unwrap();
        state.force_reply_due();
        state.poll_computer();

        assert!(!state.is_computer_pending());
        assert_eq!(state.board.move_count(), 2);
        let reply = state.last_choice.unwrap().best_move.unwrap();
        assert_eq!(state.board.get(reply), Stone::White);
    }

    #[test]
    fn test_poll_before_delay_is_noop() {
        let mut state = GameState::new();
        state.try_place(7, 7).unwrap();
        // Delay has not elapsed
        state.poll_computer();
        assert_eq!(state.board.move_count(), 1);
        assert!(state.is_computer_pending());
    }

    #[test]
    fn test_undo_takes_back_move_pair() {
        let mut state = GameState::new();
        state.try_place(7, 7).unwrap();
        state.force_reply_due();
        state.poll_computer();
        assert_eq!(state.board.move_count(), 2);

        state.undo();
        assert_eq!(state.board.move_count(), 0);
        assert_eq!(state.board.current_turn(), Stone::Black);
    }

    #[test]
    fn test_undo_while_pending_cancels_reply() {
        let mut state = GameState::new();
        state.try_place(7, 7).unwrap();

        state.undo();
        assert_eq!(state.board.move_count(), 0);
        assert!(!state.is_computer_pending());

        // The cancelled reply must not fire later
        state.poll_computer();
        assert_eq!(state.board.move_count(), 0);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state = GameState::new();
        // Hand the human a win: four in a row, then the completing move
        for col in 3..7 {
            state.board.apply_move(Pos::new(7, col), Stone::Black);
        }
        state.try_place(7, 7).unwrap();

        match state.game_over {
            Some(GameOutcome::Win { winner, line }) => {
                assert_eq!(winner, Stone::Black);
                assert!(line.is_some());
            }
            other => panic!("expected a win, got {:?}", other),
        }
        assert!(!state.is_computer_pending());
        assert_eq!(state.try_place(0, 0), Err(MoveRejected::GameOver));

        // Undo stays a no-op on a finished game
        let count = state.board.move_count();
        state.undo();
        assert_eq!(state.board.move_count(), count);
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut state = GameState::new();
        state.try_place(7, 7).unwrap();
        state.force_reply_due();
        state.poll_computer();

        state.restart();
        assert_eq!(state.board.move_count(), 0);
        assert!(state.game_over.is_none());
        assert!(state.last_choice.is_none());
        assert!(!state.is_computer_pending());
    }

    #[test]
    fn test_status_text_tracks_phase() {
        let mut state = GameState::new();
        assert_eq!(state.status_text(), "Your turn: Black to play");

        state.try_place(7, 7).unwrap();
        assert_eq!(state.status_text(), "Computer is thinking...");

        state.force_reply_due();
        state.poll_computer();
        assert_eq!(state.status_text(), "Your turn: Black to play");
    }
}
