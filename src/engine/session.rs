// src/engine/session.rs

use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::table::{ConfigError, TableConfig};
use crate::domain::{PlayerId, SeatNumber, TableId};
use crate::engine::errors::EngineError;
use crate::engine::game_loop::Table;
use crate::engine::hand_history::GameLogEntry;
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;
use crate::infra::rng::SystemRng;

/// Ошибки уровня сессии (над столом одной раздачи).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    /// Нет текущей раздачи.
    #[error("Нет активной раздачи")]
    NoActiveHand,

    /// Действие запрещено, пока раздача не закончена.
    #[error("Раздача ещё не закончена")]
    HandInProgress,

    #[error("Некорректная конфигурация: {0}")]
    Config(String),

    /// Проброшенная ошибка стола.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        SessionError::Config(e.to_string())
    }
}

/// Архив одной сыгранной раздачи.
#[derive(Clone, Debug)]
pub struct HandRecord {
    pub table_id: TableId,
    pub entries: Vec<GameLogEntry>,
}

/// Сессия: состав игроков и их фишки между раздачами.
/// - каждая раздача – новый `Table`;
/// - дилер сдвигается на одно место каждую раздачу;
/// - после раздачи фишки переносятся обратно в ростер.
pub struct Session<R: RandomSource = SystemRng> {
    config: TableConfig,
    roster: Vec<Player>,
    current: Option<Table>,
    history: Vec<HandRecord>,
    dealer_index: usize,
    hand_count: u32,
    ids: IdGenerator,
    rng: R,
}

impl Session<SystemRng> {
    pub fn new(config: TableConfig) -> Result<Self, SessionError> {
        Self::with_rng(config, SystemRng)
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_rng(config: TableConfig, rng: R) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            dealer_index: config.dealer_index,
            config,
            roster: Vec::new(),
            current: None,
            history: Vec::new(),
            hand_count: 0,
            ids: IdGenerator::new(),
            rng,
        })
    }

    // ------------------------------------------------------------------
    // Состав
    // ------------------------------------------------------------------

    /// Добавить игрока в ростер; место – наименьшее свободное.
    pub fn add_player(&mut self, mut player: Player) -> Result<SeatNumber, SessionError> {
        if self.roster.iter().any(|p| p.id == player.id) {
            return Err(EngineError::PlayerAlreadySeated(player.id).into());
        }
        let max = self.config.max_players;
        let seat = (1..=max as SeatNumber)
            .find(|s| self.roster.iter().all(|p| p.seat_number != *s))
            .ok_or(EngineError::TableFull(max))?;

        player.seat_number = seat;
        let pos = self
            .roster
            .iter()
            .position(|p| p.seat_number > seat)
            .unwrap_or(self.roster.len());
        self.roster.insert(pos, player);
        Ok(seat)
    }

    /// Убрать игрока (только между раздачами).
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<Player, SessionError> {
        if self.hand_in_progress() {
            return Err(SessionError::HandInProgress);
        }
        let idx = self
            .roster
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))?;
        Ok(self.roster.remove(idx))
    }

    /// Ростер. Фишки актуальны на конец последней раздачи.
    pub fn players(&self) -> &[Player] {
        &self.roster
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == player_id)
    }

    // ------------------------------------------------------------------
    // Раздачи
    // ------------------------------------------------------------------

    /// Новый стол для следующей раздачи. Незаконченная предыдущая
    /// раздача сначала доигрывается до расчёта.
    ///
    /// За стол садятся все игроки с фишками. Стол возвращается до
    /// `start_game`, чтобы вызывающий успел подписаться на события.
    pub fn start_new_hand(&mut self) -> Result<&mut Table, SessionError> {
        if self.current.is_some() {
            self.end_current_hand()?;
        }

        let funded: Vec<Player> = self
            .roster
            .iter()
            .filter(|p| !p.chips.is_zero())
            .cloned()
            .collect();
        if funded.len() < 2 {
            return Err(EngineError::InsufficientPlayers(funded.len()).into());
        }

        let mut config = self.config.clone();
        config.dealer_index = self.dealer_index % funded.len();
        let mut table = Table::with_rng(self.ids.next_table_id(), config, &mut self.rng)?;

        for mut player in funded {
            let seat = player.seat_number;
            player.hand.clear();
            player.is_folded = false;
            player.bet_amount = Chips::ZERO;
            player.show_cards = false;
            table.seat_player(player, Some(seat))?;
        }

        self.dealer_index = self.dealer_index.wrapping_add(1);
        self.hand_count += 1;
        Ok(self.current.insert(table))
    }

    pub fn current_hand(&self) -> Option<&Table> {
        self.current.as_ref()
    }

    pub fn current_hand_mut(&mut self) -> Option<&mut Table> {
        self.current.as_mut()
    }

    /// Довести текущую раздачу до `Ended`, перенести фишки в ростер
    /// и заархивировать историю.
    pub fn end_current_hand(&mut self) -> Result<&HandRecord, SessionError> {
        let table = self.current.as_mut().ok_or(SessionError::NoActiveHand)?;

        while table.state().is_hand_running() {
            table.proceed_to_next_round()?;
        }

        let Some(table) = self.current.take() else {
            return Err(SessionError::NoActiveHand);
        };
        for player in self.roster.iter_mut() {
            if let Some(seated) = table.player(player.id) {
                player.chips = seated.chips;
            }
        }

        let table_id = table.id();
        self.history.push(HandRecord {
            table_id,
            entries: table.into_history(),
        });
        self.history.last().ok_or(SessionError::NoActiveHand)
    }

    pub fn hand_in_progress(&self) -> bool {
        self.current.is_some()
    }

    /// Сколько раздач было начато.
    pub fn hand_count(&self) -> u32 {
        self.hand_count
    }

    /// Архив законченных раздач.
    pub fn history(&self) -> &[HandRecord] {
        &self.history
    }
}
