use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Notify};

use super::{GameBroadcaster, SessionRng, SessionSettings};
use crate::game::{
    BotInput, CELL_COUNT, FirstPlayerMode, GameMode, GameState, GameStatus, Mark, WinningLine,
    calculate_move,
};

#[derive(Debug, Clone)]
pub struct GameStateUpdate {
    pub cells: [Mark; CELL_COUNT],
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub bot_mark: Option<Mark>,
}

#[derive(Debug, Clone)]
pub struct GameOverNotification {
    pub status: GameStatus,
    pub winner: Option<Mark>,
    pub winning_line: Option<WinningLine>,
}

#[derive(Clone)]
pub struct SessionState {
    game_state: Arc<Mutex<GameState>>,
    bot_mark: Option<Mark>,
    bot_delay_ms: u64,
    turn_notify: Arc<Notify>,
}

pub fn create_session(settings: &SessionSettings, rng: &mut SessionRng) -> SessionState {
    let bot_mark = match settings.mode {
        GameMode::HumanVsHuman => None,
        GameMode::HumanVsBot => match settings.first_player_mode {
            FirstPlayerMode::Human => Some(Mark::O),
            FirstPlayerMode::Random => Some(if rng.random_bool() { Mark::X } else { Mark::O }),
        },
    };

    SessionState {
        game_state: Arc::new(Mutex::new(GameState::new())),
        bot_mark,
        bot_delay_ms: settings.bot_delay_ms,
        turn_notify: Arc::new(Notify::new()),
    }
}

impl SessionState {
    pub fn bot_mark(&self) -> Option<Mark> {
        self.bot_mark
    }

    pub async fn apply_human_move(&self, index: usize) -> Result<(), String> {
        let mut game_state = self.game_state.lock().await;

        if game_state.status() == GameStatus::InProgress
            && self.bot_mark == Some(game_state.current_mark())
        {
            return Err("It is the computer's turn".to_string());
        }

        let mark = game_state.current_mark();
        game_state.place_mark(mark, index)?;
        drop(game_state);

        self.turn_notify.notify_one();
        Ok(())
    }

    pub async fn reset(&self) {
        let mut game_state = self.game_state.lock().await;
        *game_state = GameState::new();
        drop(game_state);

        self.turn_notify.notify_one();
    }

    pub async fn snapshot(&self) -> GameStateUpdate {
        let game_state = self.game_state.lock().await;
        GameStateUpdate {
            cells: *game_state.board().cells(),
            current_mark: game_state.current_mark(),
            status: game_state.status(),
            last_move: game_state.last_move(),
            bot_mark: self.bot_mark,
        }
    }
}

pub async fn run_game_loop<B: GameBroadcaster>(
    session: SessionState,
    broadcaster: B,
) -> GameOverNotification {
    loop {
        broadcaster.broadcast_state(session.snapshot().await).await;

        let (is_game_over, is_bot_turn) = {
            let game_state = session.game_state.lock().await;
            let is_over = game_state.status() != GameStatus::InProgress;
            let is_bot = session.bot_mark == Some(game_state.current_mark());
            (is_over, is_bot)
        };

        if is_game_over {
            break;
        }

        if is_bot_turn {
            play_bot_turn(&session).await;
        } else {
            session.turn_notify.notified().await;
        }
    }

    let notification = build_game_over_notification(&session).await;
    broadcaster.broadcast_game_over(notification.clone()).await;
    notification
}

async fn play_bot_turn(session: &SessionState) {
    if session.bot_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(session.bot_delay_ms)).await;
    }

    // The input is read after the delay so a reset that lands while the
    // computer is "thinking" is searched from the fresh board.
    let (input, bot_mark) = {
        let game_state = session.game_state.lock().await;
        match session.bot_mark {
            Some(mark) if mark == game_state.current_mark() => {
                (BotInput::from_game_state(&game_state), mark)
            }
            _ => return,
        }
    };

    let calculated_move = tokio::task::spawn_blocking(move || calculate_move(&input)).await;

    if let Ok(Some(index)) = calculated_move {
        let mut game_state = session.game_state.lock().await;
        let _ = game_state.place_mark(bot_mark, index);
    }
}

async fn build_game_over_notification(session: &SessionState) -> GameOverNotification {
    let game_state = session.game_state.lock().await;
    GameOverNotification {
        status: game_state.status(),
        winner: game_state.winner(),
        winning_line: game_state.winning_line(),
    }
}
