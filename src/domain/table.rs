use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::time_ctrl::TimeRules;

/// Максимум игроков за столом: 10×2 + 5 общих = 25 ≤ 52.
pub const MAX_PLAYERS_LIMIT: usize = 10;

/// Ошибки конфигурации стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректный конфиг: {0}")]
    Invalid(String),
}

/// Конфиг стола: сколько мест, какие лимиты, тайминг хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub max_players: usize,
    /// Минимальная ставка раунда.
    pub minimum_bet: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Индекс дилера в порядке посадки (берётся по модулю числа игроков).
    pub dealer_index: usize,
    pub time: TimeRules,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_players: MAX_PLAYERS_LIMIT,
            minimum_bet: Chips(5),
            small_blind: Chips(5),
            big_blind: Chips(10),
            dealer_index: 0,
            time: TimeRules::standard(),
        }
    }
}

impl TableConfig {
    /// Загрузить конфиг из JSON; отсутствующие поля берутся по умолчанию.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_PLAYERS_LIMIT).contains(&self.max_players) {
            return Err(ConfigError::Invalid(format!(
                "max_players должен быть в диапазоне 2..={MAX_PLAYERS_LIMIT}, получено {}",
                self.max_players
            )));
        }
        if self.minimum_bet.is_zero() {
            return Err(ConfigError::Invalid("minimum_bet должен быть больше нуля".into()));
        }
        if self.big_blind <= self.small_blind {
            return Err(ConfigError::Invalid(format!(
                "big_blind ({}) должен быть больше small_blind ({})",
                self.big_blind, self.small_blind
            )));
        }
        if self.time.turn_time_limit_secs == 0 {
            return Err(ConfigError::Invalid("turn_time_limit_secs должен быть больше нуля".into()));
        }
        Ok(())
    }

    /// Сколько ставит малый блайнд при старте раздачи.
    pub fn small_blind_post(&self) -> Chips {
        self.small_blind.max(self.minimum_bet)
    }

    /// Сколько ставит большой блайнд при старте раздачи.
    pub fn big_blind_post(&self) -> Chips {
        self.big_blind.max(self.minimum_bet + self.minimum_bet)
    }
}
