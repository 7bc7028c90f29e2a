use super::board::{Board, CELL_COUNT};
use super::types::{GameStatus, Mark, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if self.board.get(index) != Some(Mark::Empty) {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(index, self.current_mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if matches!(self.status, GameStatus::XWon | GameStatus::OWon) {
            check_win_with_line(&self.board)
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
