//! Движок одного покерного стола (Texas Hold'em).
//!
//! Раздача за раздачей:
//! - посадка игроков и блайнды;
//! - проверка и применение ставок;
//! - улицы PreFlop → Flop → Turn → River → Showdown;
//! - расчёт банка, история раздачи, события стола, таймаут хода.
//!
//! Точка входа – `engine::Table` (одна раздача) и `engine::Session`
//! (фишки и ростер между раздачами).

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod time_ctrl;
