// src/time_ctrl/mod.rs
//! Контроль времени хода.
//!
//! Здесь собираем:
//! - правила (`TimeRules`);
//! - таймер хода с явным состоянием (`TurnTimer`);
//! - политику авто-действия по таймауту (`timeout_action`).
//!
//! Время не берётся из системных часов: стол двигает его через `Table::tick`.

pub mod auto_action;
pub mod clock;
pub mod time_rules;

pub use auto_action::timeout_action;
pub use clock::{ArmedTurn, TimeoutState, TimerHandle, TurnTimer};
pub use time_rules::TimeRules;
