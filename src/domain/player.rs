use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatNumber};

/// Игрок за столом в рамках одной раздачи.
///
/// Фишки переживают раздачу (их забирает сессия), всё остальное
/// сбрасывается вместе со столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub chips: Chips,
    /// Карманные карты: 0 или 2.
    pub hand: Vec<Card>,
    pub is_folded: bool,
    /// Вклад в текущем раунде ставок.
    pub bet_amount: Chips,
    /// Номер места (с 1), назначается при посадке.
    pub seat_number: SeatNumber,
    pub show_cards: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, chips: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            chips,
            hand: Vec::new(),
            is_folded: false,
            bet_amount: Chips::ZERO,
            seat_number: 0,
            show_cards: false,
        }
    }

    /// Сколько не хватает до текущей ставки стола.
    pub fn owes(&self, current_bet: Chips) -> Chips {
        current_bet.saturating_sub(self.bet_amount)
    }

    /// Может ли игрок ещё что-то делать в раздаче.
    pub fn can_act(&self) -> bool {
        !self.is_folded && !self.chips.is_zero()
    }

    pub fn hand_string(&self) -> String {
        self.hand
            .iter()
            .map(|c| c.pretty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
