use super::board::Board;
use super::game_state::GameState;
use super::types::{Mark, SearchResult};
use super::win_detector::is_winning_for;

pub const MAXIMIZING_MARK: Mark = Mark::O;
pub const MINIMIZING_MARK: Mark = Mark::X;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board().clone(),
            current_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(input: &BotInput) -> Option<usize> {
    if input.current_mark == Mark::Empty {
        return None;
    }
    let mut board = input.board.clone();
    minimax(&mut board, input.current_mark).index
}

pub fn minimax(board: &mut Board, mark_to_move: Mark) -> SearchResult {
    if is_winning_for(board, MAXIMIZING_MARK) {
        return SearchResult {
            index: None,
            score: WIN_SCORE,
        };
    }
    if is_winning_for(board, MINIMIZING_MARK) {
        return SearchResult {
            index: None,
            score: LOSS_SCORE,
        };
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return SearchResult {
            index: None,
            score: DRAW_SCORE,
        };
    }

    let next_mark = mark_to_move.opponent().unwrap();
    let maximizing = mark_to_move == MAXIMIZING_MARK;

    let mut best_index = moves[0];
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    // Strict comparisons keep the first move of equal score in ascending
    // index order.
    for &index in &moves {
        board.place(index, mark_to_move);
        let score = minimax(board, next_mark).score;
        board.clear(index);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        } else if score < best_score {
            best_score = score;
            best_index = index;
        }
    }

    SearchResult {
        index: Some(best_index),
        score: best_score,
    }
}
