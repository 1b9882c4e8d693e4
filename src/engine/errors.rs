use crate::domain::{Chips, GameState, PlayerId, SeatNumber};
use crate::engine::actions::ActionKind;
use crate::eval::EvalError;

use thiserror::Error;

/// Ошибки движка стола. Любая ошибка действия возвращается до изменения
/// фишек и банка.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Игрок {0} не найден за столом")]
    PlayerNotFound(PlayerId),

    #[error("Сейчас не ход игрока {player_id}, ходит игрок {current}")]
    NotPlayersTurn { player_id: PlayerId, current: PlayerId },

    #[error("Для действия {0:?} нужно указать сумму")]
    MissingAmount(ActionKind),

    #[error("Недостаточно фишек: нужно {needed}, есть {available}")]
    InsufficientChips { needed: Chips, available: Chips },

    #[error("Ставка {amount} меньше минимальной {minimum}")]
    BelowMinimumBet { amount: Chips, minimum: Chips },

    #[error("Блайнд {amount} меньше допустимого {required}")]
    BlindAmountTooLow { amount: Chips, required: Chips },

    #[error("Рейз до {amount} не превышает уже поставленные {bet_amount}")]
    RaiseNotAboveBet { amount: Chips, bet_amount: Chips },

    #[error("Действие {action:?} недопустимо в состоянии {state}")]
    InvalidStateForAction { action: ActionKind, state: GameState },

    #[error("Место {0} уже занято")]
    SeatTaken(SeatNumber),

    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatNumber),

    #[error("Стол заполнен (максимум {0} игроков)")]
    TableFull(usize),

    #[error("Игрок {0} уже сидит за столом")]
    PlayerAlreadySeated(PlayerId),

    #[error("Недостаточно игроков для раздачи: {0}")]
    InsufficientPlayers(usize),

    #[error("Раздача уже идёт")]
    HandAlreadyInProgress,

    #[error("Колода закончилась")]
    DeckExhausted,

    #[error("Недопустимое состояние раздачи: {0}")]
    InvalidGameState(GameState),

    #[error("Ошибка оценки руки: {0}")]
    Evaluation(#[from] EvalError),
}
