use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Общий банк раздачи. Сайд-потов нет: all-in игроки считаются как обычные.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self { total: Chips::ZERO }
    }

    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    /// Разделить банк между `winners` победителями (в порядке мест) и
    /// обнулить его. Остаток раздаётся по одной фишке первым победителям.
    pub fn split_among(&mut self, winners: usize) -> Vec<Chips> {
        if winners == 0 {
            return Vec::new();
        }
        let (share, remainder) = self.total.split_even(winners);
        let prizes = (0..winners as u64)
            .map(|i| if i < remainder.0 { share + Chips(1) } else { share })
            .collect();
        self.total = Chips::ZERO;
        prizes
    }
}
