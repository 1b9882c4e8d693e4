// src/time_ctrl/time_rules.rs
//! Конфигурация тайминга хода.

use serde::{Deserialize, Serialize};

/// Правила тайминга для одного стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimeRules {
    /// Сколько секунд даётся на решение (каждый ход).
    pub turn_time_limit_secs: u32,
}

impl TimeRules {
    pub const fn new(turn_time_limit_secs: u32) -> Self {
        Self {
            turn_time_limit_secs,
        }
    }

    /// Стандартный профиль: 15 секунд на ход.
    pub const fn standard() -> Self {
        Self::new(15)
    }
}

impl Default for TimeRules {
    fn default() -> Self {
        Self::standard()
    }
}
