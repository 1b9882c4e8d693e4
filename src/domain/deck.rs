use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Колода карт. Раздача идёт с конца вектора, колода не пополняется
/// посреди раздачи: `dealt + remaining == 52`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Новая колода: все 52 карты, сразу перемешанные.
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        deck.shuffle(rng);
        deck
    }

    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 2..A, Diamonds 2..A, Clubs 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Fisher-Yates: для i от последнего индекса до 1 меняем card[i]
    /// со случайной card[j], j ∈ [0, i].
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.pick_index(i).min(i);
            self.cards.swap(i, j);
        }
    }

    /// Взять верхнюю (последнюю) карту.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::DeckExhausted)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn dealt(&self) -> usize {
        DECK_SIZE - self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
