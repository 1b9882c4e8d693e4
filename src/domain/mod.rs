//! Доменная модель стола: карты, колода, игроки, состояние раздачи, конфиг.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

pub type PlayerId = u64;
pub type TableId = u64;
/// Номер места за столом (с 1).
pub type SeatNumber = u8;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
