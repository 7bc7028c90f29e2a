use engine::game::{FirstPlayerMode, GameMode};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub mode: GameMode,
    pub first_player: FirstPlayerMode,
    pub bot_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsBot,
            first_player: FirstPlayerMode::Human,
            bot_delay_ms: 500,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > 10_000 {
            return Err("Bot delay must not exceed 10000 ms".to_string());
        }
        Ok(())
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(error) => return Err(format!("Failed to read config file: {}", error)),
    };

    let config: AppConfig = serde_yaml_ng::from_str(&content)
        .map_err(|error| format!("Failed to deserialize config: {}", error))?;

    config
        .validate()
        .map_err(|error| format!("Config validation error: {}", error))?;

    Ok(config)
}
