use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::GameState;
use crate::domain::player::Player;
use crate::domain::PlayerId;
use crate::engine::actions::PlayerAction;

/// Тип записи в истории раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogEntryType {
    PlayerAction,
    GameStateChange,
    PotUpdate,
    RoundEnd,
}

/// Детали записи; вариант всегда соответствует типу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogDetails {
    PlayerAction {
        player_id: PlayerId,
        action: PlayerAction,
    },
    GameStateChange {
        new_state: GameState,
    },
    PotUpdate {
        pot: Chips,
    },
    RoundEnd {
        winner_ids: Vec<PlayerId>,
        final_pot: Chips,
    },
}

impl LogDetails {
    pub fn entry_type(&self) -> LogEntryType {
        match self {
            LogDetails::PlayerAction { .. } => LogEntryType::PlayerAction,
            LogDetails::GameStateChange { .. } => LogEntryType::GameStateChange,
            LogDetails::PotUpdate { .. } => LogEntryType::PotUpdate,
            LogDetails::RoundEnd { .. } => LogEntryType::RoundEnd,
        }
    }
}

/// Снимок игрока на момент записи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub player_id: PlayerId,
    pub chips: Chips,
    pub cards: Vec<Card>,
    pub is_folded: bool,
    pub bet_amount: Chips,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            player_id: p.id,
            chips: p.chips,
            cards: p.hand.clone(),
            is_folded: p.is_folded,
            bet_amount: p.bet_amount,
        }
    }
}

/// Запись истории. После добавления не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameLogEntry {
    pub index: u32,
    pub timestamp: DateTime<Utc>,
    pub details: LogDetails,
    pub players: Vec<PlayerSnapshot>,
    pub community_cards: Vec<Card>,
}

impl GameLogEntry {
    pub fn entry_type(&self) -> LogEntryType {
        self.details.entry_type()
    }
}

/// Журнал раздачи: только добавление, наружу – только чтение.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryRecorder {
    entries: Vec<GameLogEntry>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Добавить запись с полным снимком игроков и борда.
    pub fn record(&mut self, details: LogDetails, players: &[Player], community_cards: &[Card]) {
        let index = self.entries.len() as u32;
        self.entries.push(GameLogEntry {
            index,
            timestamp: Utc::now(),
            details,
            players: players.iter().map(PlayerSnapshot::from).collect(),
            community_cards: community_cards.to_vec(),
        });
    }

    pub fn entries(&self) -> &[GameLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<GameLogEntry> {
        self.entries
    }
}
