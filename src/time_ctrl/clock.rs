// src/time_ctrl/clock.rs
//! Таймер хода. На столе одновременно взведён максимум один таймер;
//! каждое взведение получает новый handle, старый становится недействительным.

use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Идентификатор конкретного взведения таймера.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Взведённый таймер.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArmedTurn {
    pub handle: TimerHandle,
    pub player_id: PlayerId,
    pub remaining_secs: u32,
}

/// Результат "протекания" времени.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeoutState {
    /// Таймер не взведён.
    Idle,
    /// Время ещё не вышло.
    Ongoing { remaining_secs: u32 },
    /// Время вышло; таймер уже снят.
    Expired { player_id: PlayerId, handle: TimerHandle },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TurnTimer {
    armed: Option<ArmedTurn>,
    generation: u64,
}

impl TurnTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Взвести таймер на ход игрока. Предыдущий таймер (если был) отменяется.
    pub fn arm(&mut self, player_id: PlayerId, limit_secs: u32) -> TimerHandle {
        self.generation += 1;
        let handle = TimerHandle(self.generation);
        self.armed = Some(ArmedTurn {
            handle,
            player_id,
            remaining_secs: limit_secs,
        });
        handle
    }

    /// Снять таймер. Возвращает handle отменённого взведения.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.armed.take().map(|a| a.handle)
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn armed(&self) -> Option<&ArmedTurn> {
        self.armed.as_ref()
    }

    /// Актуален ли handle (не перевзведён и не отменён).
    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.armed.as_ref().map_or(false, |a| a.handle == handle)
    }

    /// Симулируем протекание `delta_secs` для взведённого таймера.
    pub fn elapse(&mut self, delta_secs: u32) -> TimeoutState {
        let Some(armed) = self.armed.as_mut() else {
            return TimeoutState::Idle;
        };

        if delta_secs < armed.remaining_secs {
            armed.remaining_secs -= delta_secs;
            return TimeoutState::Ongoing {
                remaining_secs: armed.remaining_secs,
            };
        }

        let player_id = armed.player_id;
        let handle = armed.handle;
        self.armed = None;
        TimeoutState::Expired { player_id, handle }
    }
}
