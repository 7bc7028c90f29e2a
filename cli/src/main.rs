mod config;
mod render;

use clap::Parser;
use engine::game::GameMode;
use engine::log;
use engine::logger;
use engine::session::{
    GameBroadcaster, GameOverNotification, GameStateUpdate, SessionRng, SessionSettings,
    SessionState, create_session, run_game_loop,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    two_players: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Clone)]
struct TerminalBroadcaster;

impl GameBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, state: GameStateUpdate) {
        println!("{}", render::render_state(&state));
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        println!("{}", render::render_game_over(&notification));
    }
}

enum Command {
    KeepPlaying,
    Quit,
}

async fn handle_command(session: &SessionState, input: &str) -> Command {
    match input {
        "" => Command::KeepPlaying,
        "quit" | "exit" => Command::Quit,
        "reset" => {
            session.reset().await;
            Command::KeepPlaying
        }
        text => {
            match text.parse::<usize>() {
                Ok(index) => {
                    if let Err(error) = session.apply_human_move(index).await {
                        log!("Rejected move {}: {}", index, error);
                    }
                }
                Err(_) => {
                    println!("Commands: a cell number 0-8, 'reset', 'quit'.");
                }
            }
            Command::KeepPlaying
        }
    }
}

async fn wait_for_restart(
    session: &SessionState,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<bool, Box<dyn std::error::Error>> {
    println!("Type 'reset' to play again or 'quit' to exit.");

    loop {
        let Some(line) = lines.next_line().await? else {
            return Ok(false);
        };
        match line.trim() {
            "reset" => {
                session.reset().await;
                return Ok(true);
            }
            "quit" | "exit" => return Ok(false),
            _ => println!("Type 'reset' or 'quit'."),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(config::get_config_path);
    let mut app_config = config::load_config(&config_path)?;
    if args.two_players {
        app_config.mode = GameMode::HumanVsHuman;
    }

    let mut rng = match app_config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let settings = SessionSettings {
        mode: app_config.mode,
        first_player_mode: app_config.first_player,
        bot_delay_ms: app_config.bot_delay_ms,
    };

    log!("Starting {:?} game", app_config.mode);
    println!("Enter a cell number 0-8 to place your mark, 'reset' to restart, 'quit' to exit.");

    let session = create_session(&settings, &mut rng);
    let broadcaster = TerminalBroadcaster;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut game_handle = tokio::spawn(run_game_loop(session.clone(), broadcaster.clone()));

    loop {
        tokio::select! {
            result = &mut game_handle => {
                result?;
                if !wait_for_restart(&session, &mut lines).await? {
                    return Ok(());
                }
                game_handle = tokio::spawn(run_game_loop(session.clone(), broadcaster.clone()));
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    game_handle.abort();
                    return Ok(());
                };
                if let Command::Quit = handle_command(&session, line.trim()).await {
                    game_handle.abort();
                    return Ok(());
                }
            }
        }
    }
}
