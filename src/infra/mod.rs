//! Инфраструктурный слой вокруг покерного движка:
//! - генерация ID;
//! - RNG-реализации для движка;
//! - логирование событий стола.

pub mod ids;
pub mod logging;
pub mod rng;

pub use ids::IdGenerator;
pub use logging::log_subscriber;
pub use rng::{DeterministicRng, SystemRng};
