use core::fmt;

use serde::{Deserialize, Serialize};

/// Состояние раздачи. Переходы строго линейные и только вперёд.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    WaitingForPlayers,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    Ended,
}

impl GameState {
    /// Следующее состояние по линейной цепочке (для Ended – None).
    pub fn next(self) -> Option<GameState> {
        use GameState::*;
        match self {
            WaitingForPlayers => Some(PreFlop),
            PreFlop => Some(Flop),
            Flop => Some(Turn),
            Turn => Some(River),
            River => Some(Showdown),
            Showdown => Some(Ended),
            Ended => None,
        }
    }

    /// Сколько общих карт открывается при входе в это состояние.
    pub fn community_cards_to_deal(self) -> usize {
        match self {
            GameState::Flop => 3,
            GameState::Turn | GameState::River => 1,
            _ => 0,
        }
    }

    /// Идёт ли раздача (карты розданы, ещё не расчёт).
    pub fn is_hand_running(self) -> bool {
        !matches!(self, GameState::WaitingForPlayers | GameState::Ended)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameState::WaitingForPlayers => "waiting",
            GameState::PreFlop => "pre-flop",
            GameState::Flop => "flop",
            GameState::Turn => "turn",
            GameState::River => "river",
            GameState::Showdown => "showdown",
            GameState::Ended => "ended",
        };
        f.write_str(s)
    }
}

/// Ранг руки. Упакованное u32 – чем больше, тем сильнее.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);
