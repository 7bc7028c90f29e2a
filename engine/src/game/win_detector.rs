use super::board::Board;
use super::types::{Mark, WinningLine};

#[rustfmt::skip]
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

pub fn is_winning_for(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == mark))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&line| {
        let mark = cells[line[0]];
        if mark != Mark::Empty && cells[line[1]] == mark && cells[line[2]] == mark {
            Some(WinningLine { mark, cells: line })
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Mark::{Empty as E, O, X};

    #[test]
    fn test_detects_every_row() {
        for row in 0..3 {
            let mut board = Board::new();
            for col in 0..3 {
                board.place(row * 3 + col, X);
            }

            assert!(is_winning_for(&board, X));
            assert_eq!(check_win(&board), Some(X));
        }
    }

    #[test]
    fn test_detects_every_column() {
        for col in 0..3 {
            let mut board = Board::new();
            for row in 0..3 {
                board.place(row * 3 + col, O);
            }

            assert!(is_winning_for(&board, O));
            assert_eq!(check_win(&board), Some(O));
        }
    }

    #[test]
    fn test_detects_both_diagonals() {
        #[rustfmt::skip]
        let main_diagonal = Board::from_cells([
            X, O, E,
            O, X, E,
            E, E, X,
        ]);
        #[rustfmt::skip]
        let anti_diagonal = Board::from_cells([
            O, E, X,
            E, X, O,
            X, E, E,
        ]);

        assert_eq!(check_win(&main_diagonal), Some(X));
        assert_eq!(check_win(&anti_diagonal), Some(X));
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = Board::new();

        assert_eq!(check_win(&board), None);
        assert!(!is_winning_for(&board, X));
        assert!(!is_winning_for(&board, O));
    }

    #[test]
    fn test_empty_mark_never_wins() {
        let board = Board::new();

        assert!(!is_winning_for(&board, Mark::Empty));
    }

    #[test]
    fn test_win_is_never_reported_for_both_marks() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, X, X,
            O, O, E,
            E, E, E,
        ]);

        assert!(is_winning_for(&board, X));
        assert!(!is_winning_for(&board, O));
    }

    #[test]
    fn test_winning_line_reports_cells() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            O, X, X,
            E, O, X,
            E, E, O,
        ]);

        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, O);
        assert_eq!(line.cells, [0, 4, 8]);
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, X,
            X, O, O,
            O, X, X,
        ]);

        assert!(is_draw(&board));
        assert!(!is_winning_for(&board, X));
        assert!(!is_winning_for(&board, O));
    }

    #[test]
    fn test_full_board_with_winner_is_not_a_draw() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, X, X,
            O, O, X,
            O, X, O,
        ]);

        assert!(!is_draw(&board));
        assert_eq!(check_win(&board), Some(X));
    }

    #[test]
    fn test_partial_board_is_not_a_draw() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, E,
            E, E, E,
            E, E, E,
        ]);

        assert!(!is_draw(&board));
    }
}
