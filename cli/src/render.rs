use engine::game::{CELL_COUNT, GameStatus, Mark};
use engine::session::{GameOverNotification, GameStateUpdate};

pub fn render_board(cells: &[Mark; CELL_COUNT]) -> String {
    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let base = row * 3;
        out.push_str(&format!(
            " {} | {} | {} \n",
            cells[base],
            cells[base + 1],
            cells[base + 2]
        ));
    }
    out
}

pub fn render_state(update: &GameStateUpdate) -> String {
    let mut out = render_board(&update.cells);

    if update.status == GameStatus::InProgress {
        let prompt = if update.bot_mark == Some(update.current_mark) {
            "Computer is thinking...".to_string()
        } else if update.bot_mark.is_some() {
            format!("Your move, place {} (0-8)", update.current_mark)
        } else {
            format!("{} to move (0-8)", update.current_mark)
        };
        out.push_str(&prompt);
        out.push('\n');
    }

    out
}

pub fn render_game_over(notification: &GameOverNotification) -> String {
    match notification.status {
        GameStatus::Draw => "Draw!".to_string(),
        GameStatus::XWon | GameStatus::OWon => {
            let winner = notification.winner.map(|m| m.as_char()).unwrap_or('?');
            match notification.winning_line {
                Some(line) => format!(
                    "{} wins on cells {}, {}, {}!",
                    winner, line.cells[0], line.cells[1], line.cells[2]
                ),
                None => format!("{} wins!", winner),
            }
        }
        GameStatus::InProgress => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::game::Mark::{Empty as E, O, X};
    use engine::game::WinningLine;

    #[test]
    fn test_render_board_layout() {
        #[rustfmt::skip]
        let cells = [
            X, E, O,
            E, X, E,
            O, E, E,
        ];

        let rendered = render_board(&cells);

        assert_eq!(
            rendered,
            " X | . | O \n---+---+---\n . | X | . \n---+---+---\n O | . | . \n"
        );
    }

    #[test]
    fn test_render_game_over_win_names_the_line() {
        let notification = GameOverNotification {
            status: GameStatus::OWon,
            winner: Some(O),
            winning_line: Some(WinningLine {
                mark: O,
                cells: [0, 4, 8],
            }),
        };

        assert_eq!(render_game_over(&notification), "O wins on cells 0, 4, 8!");
    }

    #[test]
    fn test_render_game_over_draw() {
        let notification = GameOverNotification {
            status: GameStatus::Draw,
            winner: None,
            winning_line: None,
        };

        assert_eq!(render_game_over(&notification), "Draw!");
    }
}
