//! Движок одного стола: ставки, переход улиц, шоудаун, события, история.
//!
//! Высокоуровневый объект: `Table`
//! Основные операции:
//!   - `seat_player` / `remove_player` – посадка между раздачами
//!   - `start_game` – раздать карты и поставить блайнды
//!   - `player_action` / `submit` – применить действие игрока
//!   - `proceed_to_next_round` – принудительный шаг машины состояний
//!   - `tick` – протекание времени хода
//!
//! Над одиночной раздачей – `Session`: игроки и фишки между раздачами.

pub mod actions;
pub mod betting;
pub mod errors;
pub mod events;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod session;
pub mod showdown;
pub mod validation;

pub use actions::{ActionKind, PlayerAction, Reaction};
pub use errors::EngineError;
pub use events::{EventBus, SubscriptionId, TableEvent, Topic};
pub use game_loop::Table;
pub use hand_history::{GameLogEntry, LogDetails, LogEntryType, PlayerSnapshot};
pub use pot::Pot;
pub use session::{HandRecord, Session, SessionError};
pub use showdown::Winner;

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`); тесты подставляют свои.
pub trait RandomSource {
    /// Случайный индекс в диапазоне `0..=upper_inclusive`.
    fn pick_index(&mut self, upper_inclusive: usize) -> usize;
}
