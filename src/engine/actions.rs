use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId};
use crate::engine::errors::EngineError;

/// Тип действия без суммы – для внешних вызывающих, у которых
/// действие и сумма приходят раздельно.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Fold,
    Call,
    Raise,
    Bet,
    Check,
    Show,
    Hide,
}

/// Действие игрока. Сумма обязательна ровно там, где она нужна.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerAction {
    Fold,
    Call,
    Check,
    Show,
    Hide,
    /// Рейз до суммы `amount` (итоговая ставка игрока в раунде).
    Raise(Chips),
    /// Ставка на префлопе (в том числе постинг блайндов).
    Bet(Chips),
}

impl PlayerAction {
    /// Собрать действие из пары (тип, сумма).
    pub fn from_parts(kind: ActionKind, amount: Option<Chips>) -> Result<Self, EngineError> {
        Ok(match kind {
            ActionKind::Fold => PlayerAction::Fold,
            ActionKind::Call => PlayerAction::Call,
            ActionKind::Check => PlayerAction::Check,
            ActionKind::Show => PlayerAction::Show,
            ActionKind::Hide => PlayerAction::Hide,
            ActionKind::Raise => PlayerAction::Raise(amount.ok_or(EngineError::MissingAmount(kind))?),
            ActionKind::Bet => PlayerAction::Bet(amount.ok_or(EngineError::MissingAmount(kind))?),
        })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Show => ActionKind::Show,
            PlayerAction::Hide => ActionKind::Hide,
            PlayerAction::Raise(_) => ActionKind::Raise,
            PlayerAction::Bet(_) => ActionKind::Bet,
        }
    }

    pub fn amount(&self) -> Option<Chips> {
        match self {
            PlayerAction::Raise(a) | PlayerAction::Bet(a) => Some(*a),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount() {
            Some(amount) => write!(f, "{:?} {}", self.kind(), amount),
            None => write!(f, "{:?}", self.kind()),
        }
    }
}

/// Отложенное действие, которое подписчик шины просит выполнить
/// после завершения текущей операции стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reaction {
    pub player_id: PlayerId,
    pub action: PlayerAction,
}

impl Reaction {
    pub fn new(player_id: PlayerId, action: PlayerAction) -> Self {
        Self { player_id, action }
    }
}
