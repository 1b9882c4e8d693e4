//! Оценка силы покерных рук (Texas Hold'em).
//!
//! Для движка это внешний оракул: по набору карт возвращает сравнимую
//! силу и категорию. Движок работает через трейт `HandEvaluator`,
//! `StandardEvaluator` – реализация по умолчанию.

pub mod evaluator;
pub mod hand_rank;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;

pub use evaluator::evaluate_best_hand;
pub use hand_rank::HandCategory;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Для оценки нужно от 5 до 7 карт, передано {0}")]
    CardCount(usize),
}

/// Сила руки: числовое значение для сравнения + категория.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandStrength {
    pub value: u32,
    pub category: HandCategory,
}

impl HandStrength {
    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

/// Оракул силы рук.
pub trait HandEvaluator {
    fn evaluate(&self, cards: &[Card]) -> Result<HandStrength, EvalError>;
}

/// Полный перебор 5-карточных комбинаций.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn evaluate(&self, cards: &[Card]) -> Result<HandStrength, EvalError> {
        let rank = evaluate_best_hand(cards)?;
        Ok(HandStrength {
            value: rank.0,
            category: rank.category(),
        })
    }
}
