//! Шина событий стола: типизированные события и синхронная доставка
//! всем подписчикам в порядке подписки.
//!
//! Подписчик не может менять стол напрямую. Вместо этого он возвращает
//! `Reaction`, и стол прогоняет её через обычный `player_action`
//! после завершения текущей операции.

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, GameState, PlayerId, SeatNumber};
use crate::engine::actions::{PlayerAction, Reaction};
use crate::engine::showdown::Winner;

/// Тема события – для подписки на конкретный вид.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Topic {
    PlayerJoined,
    PlayerLeft,
    PlayerTurn,
    PlayerAction,
    TurnExpired,
    GameStateChanged,
    GameEnded,
}

impl Topic {
    /// Темы, связанные с ходом игрока; снимаются при завершении раздачи.
    pub const TURN_RELATED: [Topic; 2] = [Topic::PlayerTurn, Topic::TurnExpired];
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableEvent {
    PlayerJoined {
        player_id: PlayerId,
        seat_number: SeatNumber,
    },
    PlayerLeft {
        player_id: PlayerId,
    },
    /// Ход игрока; `to_call` – сколько ему не хватает до ставки стола.
    PlayerTurn {
        player_id: PlayerId,
        to_call: Chips,
        state: GameState,
    },
    PlayerActed {
        player_id: PlayerId,
        action: PlayerAction,
    },
    TurnExpired {
        player_id: PlayerId,
    },
    GameStateChanged {
        new_state: GameState,
    },
    GameEnded {
        winners: Vec<Winner>,
        community_cards: Vec<Card>,
    },
}

impl TableEvent {
    pub fn topic(&self) -> Topic {
        match self {
            TableEvent::PlayerJoined { .. } => Topic::PlayerJoined,
            TableEvent::PlayerLeft { .. } => Topic::PlayerLeft,
            TableEvent::PlayerTurn { .. } => Topic::PlayerTurn,
            TableEvent::PlayerActed { .. } => Topic::PlayerAction,
            TableEvent::TurnExpired { .. } => Topic::TurnExpired,
            TableEvent::GameStateChanged { .. } => Topic::GameStateChanged,
            TableEvent::GameEnded { .. } => Topic::GameEnded,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub type Handler = Box<dyn FnMut(&TableEvent) -> Option<Reaction>>;

struct Subscriber {
    id: SubscriptionId,
    /// None – подписка на все темы.
    topic: Option<Topic>,
    handler: Handler,
}

/// Синхронная шина. Число подписчиков не ограничено.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, topic: Topic, handler: F) -> SubscriptionId
    where
        F: FnMut(&TableEvent) -> Option<Reaction> + 'static,
    {
        self.add(Some(topic), Box::new(handler))
    }

    pub fn subscribe_all<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&TableEvent) -> Option<Reaction> + 'static,
    {
        self.add(None, Box::new(handler))
    }

    fn add(&mut self, topic: Option<Topic>, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber { id, topic, handler });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Снять всех подписчиков конкретной темы. Подписки "на всё" остаются.
    pub fn unsubscribe_topic(&mut self, topic: Topic) -> usize {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.topic != Some(topic));
        before - self.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn subscribers_for(&self, topic: Topic) -> usize {
        self.subscribers
            .iter()
            .filter(|s| s.topic.map_or(true, |t| t == topic))
            .count()
    }

    /// Доставить событие всем подходящим подписчикам; вернуть их реакции
    /// в порядке доставки.
    pub fn publish(&mut self, event: &TableEvent) -> Vec<Reaction> {
        let topic = event.topic();
        let mut reactions = Vec::new();
        for sub in self.subscribers.iter_mut() {
            if sub.topic.map_or(true, |t| t == topic) {
                if let Some(r) = (sub.handler)(event) {
                    reactions.push(r);
                }
            }
        }
        reactions
    }
}
