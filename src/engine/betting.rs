use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::table::TableConfig;

/// Состояние ставок текущей раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Текущая ставка стола, до которой должны дотянуться игроки.
    pub current_bet: Chips,
    pub minimum_bet: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Индексы блайндов в порядке посадки.
    pub small_blind_index: usize,
    pub big_blind_index: usize,
}

impl BettingState {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            current_bet: Chips::ZERO,
            minimum_bet: config.minimum_bet,
            small_blind: config.small_blind,
            big_blind: config.big_blind,
            small_blind_index: 0,
            big_blind_index: 0,
        }
    }

    /// Раунд ставок окончен, если каждый не сфолдивший игрок уравнял
    /// текущую ставку. Единственный оставшийся игрок – тоже конец раунда.
    pub fn is_round_over(&self, players: &[Player]) -> bool {
        let active: Vec<&Player> = players.iter().filter(|p| !p.is_folded).collect();
        active.len() <= 1 || active.iter().all(|p| p.bet_amount == self.current_bet)
    }

    /// Новая улица: ставки раунда обнуляются.
    pub fn reset_for_street(&mut self, players: &mut [Player]) {
        self.current_bet = Chips::ZERO;
        for p in players.iter_mut() {
            p.bet_amount = Chips::ZERO;
        }
    }
}
