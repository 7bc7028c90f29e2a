mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot::{BotInput, MAXIMIZING_MARK, MINIMIZING_MARK, calculate_move, minimax};
pub use game_state::GameState;
pub use types::{FirstPlayerMode, GameMode, GameStatus, Mark, SearchResult, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, is_draw, is_winning_for};
