mod game_session;
mod session_rng;

use std::future::Future;

use crate::game::{FirstPlayerMode, GameMode};

pub use game_session::{
    GameOverNotification, GameStateUpdate, SessionState, create_session, run_game_loop,
};
pub use session_rng::SessionRng;

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: GameStateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub mode: GameMode,
    pub first_player_mode: FirstPlayerMode,
    pub bot_delay_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsBot,
            first_player_mode: FirstPlayerMode::Human,
            bot_delay_ms: 0,
        }
    }
}
