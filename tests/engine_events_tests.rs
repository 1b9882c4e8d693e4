use std::cell::{Cell, RefCell};
use std::rc::Rc;

use holdem_table::domain::{
    chips::Chips,
    hand::GameState,
    player::Player,
    table::TableConfig,
};
use holdem_table::engine::{
    actions::{PlayerAction, Reaction},
    events::{EventBus, TableEvent, Topic},
    RandomSource, Table,
};

#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn pick_index(&mut self, upper_inclusive: usize) -> usize {
        upper_inclusive
    }
}

fn empty_table() -> Table {
    Table::with_rng(1, TableConfig::default(), &mut DummyRng).expect("валидный конфиг")
}

fn seat_two(table: &mut Table) {
    for id in 1..=2 {
        table
            .seat_player(Player::new(id, format!("P{id}"), Chips(100)), None)
            .expect("место есть");
    }
}

/// Бот: показывает карты на шоудауне, иначе колл/чек.
fn call_check_bot(event: &TableEvent) -> Option<Reaction> {
    let TableEvent::PlayerTurn {
        player_id,
        to_call,
        state,
    } = *event
    else {
        return None;
    };
    let action = if state == GameState::Showdown {
        PlayerAction::Show
    } else if to_call.is_zero() {
        PlayerAction::Check
    } else {
        PlayerAction::Call
    };
    Some(Reaction::new(player_id, action))
}

//
// Шина событий
//
#[test]
fn bus_supports_many_subscribers() {
    let mut table = empty_table();
    seat_two(&mut table);

    let counters: Vec<Rc<Cell<u32>>> = (0..150).map(|_| Rc::new(Cell::new(0))).collect();
    for counter in &counters {
        let counter = Rc::clone(counter);
        table.events_mut().subscribe(Topic::PlayerAction, move |_| {
            counter.set(counter.get() + 1);
            None
        });
    }
    // +1 – логирующий подписчик на все темы.
    assert_eq!(table.events().subscribers_for(Topic::PlayerAction), 151);

    table.start_game().expect("старт");

    // Два блайнда – два события действия.
    assert!(counters.iter().all(|c| c.get() == 2));
}

#[test]
fn events_are_delivered_in_order() {
    let mut table = empty_table();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    table.events_mut().subscribe_all(move |event| {
        sink.borrow_mut().push(event.clone());
        None
    });

    seat_two(&mut table);
    table.start_game().expect("старт");

    assert_eq!(
        *seen.borrow(),
        vec![
            TableEvent::PlayerJoined {
                player_id: 1,
                seat_number: 1,
            },
            TableEvent::PlayerJoined {
                player_id: 2,
                seat_number: 2,
            },
            TableEvent::GameStateChanged {
                new_state: GameState::PreFlop,
            },
            TableEvent::PlayerActed {
                player_id: 1,
                action: PlayerAction::Bet(Chips(5)),
            },
            TableEvent::PlayerActed {
                player_id: 2,
                action: PlayerAction::Bet(Chips(10)),
            },
            TableEvent::PlayerTurn {
                player_id: 1,
                to_call: Chips(5),
                state: GameState::PreFlop,
            },
        ]
    );
}

#[test]
fn unsubscribe_by_id_and_by_topic() {
    let mut bus = EventBus::new();
    let hits = Rc::new(Cell::new(0));

    let h = Rc::clone(&hits);
    let id = bus.subscribe(Topic::GameStateChanged, move |_| {
        h.set(h.get() + 1);
        None
    });
    for _ in 0..3 {
        bus.subscribe(Topic::PlayerTurn, |_| None);
    }
    bus.subscribe(Topic::TurnExpired, |_| None);
    bus.subscribe_all(|_| None);

    let event = TableEvent::GameStateChanged {
        new_state: GameState::Flop,
    };
    bus.publish(&event);
    assert_eq!(hits.get(), 1);

    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id), "повторная отписка – no-op");
    bus.publish(&event);
    assert_eq!(hits.get(), 1);

    assert_eq!(bus.unsubscribe_topic(Topic::PlayerTurn), 3);
    assert_eq!(bus.subscribers_for(Topic::PlayerTurn), 1, "подписка на всё остаётся");
    assert_eq!(bus.subscribers_for(Topic::TurnExpired), 2);
    assert_eq!(bus.subscriber_count(), 2);
}

#[test]
fn publish_collects_reactions_in_order() {
    let mut bus = EventBus::new();
    bus.subscribe(Topic::PlayerTurn, |_| Some(Reaction::new(1, PlayerAction::Check)));
    bus.subscribe(Topic::PlayerLeft, |_| Some(Reaction::new(2, PlayerAction::Fold)));
    bus.subscribe_all(|_| Some(Reaction::new(3, PlayerAction::Call)));

    let reactions = bus.publish(&TableEvent::PlayerTurn {
        player_id: 1,
        to_call: Chips::ZERO,
        state: GameState::Flop,
    });
    assert_eq!(
        reactions,
        vec![
            Reaction::new(1, PlayerAction::Check),
            Reaction::new(3, PlayerAction::Call),
        ]
    );
}

//
// Реакции подписчиков меняют стол через обычный путь действий
//
#[test]
fn bots_play_a_full_hand_through_reactions() {
    let mut table = empty_table();
    seat_two(&mut table);
    table.events_mut().subscribe(Topic::PlayerTurn, call_check_bot);

    let ended = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ended);
    table.events_mut().subscribe(Topic::GameEnded, move |_| {
        flag.set(true);
        None
    });

    table.start_game().expect("старт");

    assert_eq!(table.state(), GameState::Ended);
    assert!(ended.get());
    assert_eq!(table.community_cards().len(), 5);
    // Без перемешивания у P2 старший стрит-флеш.
    assert_eq!(table.player(2).map(|p| p.chips), Some(Chips(110)));
    assert_eq!(table.player(1).map(|p| p.chips), Some(Chips(90)));
    assert!(!table.timer().is_armed());
}

#[test]
fn turn_listeners_are_dropped_when_hand_ends() {
    let mut table = empty_table();
    seat_two(&mut table);
    table.events_mut().subscribe(Topic::PlayerTurn, call_check_bot);
    table.events_mut().subscribe(Topic::TurnExpired, |_| None);
    table.events_mut().subscribe(Topic::GameStateChanged, |_| None);

    table.start_game().expect("старт");
    assert_eq!(table.state(), GameState::Ended);

    // Остался только логирующий подписчик на всё.
    assert_eq!(table.events().subscribers_for(Topic::PlayerTurn), 1);
    assert_eq!(table.events().subscribers_for(Topic::TurnExpired), 1);
    assert_eq!(table.events().subscribers_for(Topic::GameStateChanged), 2);
}

#[test]
fn rejected_reactions_are_dropped_without_side_effects() {
    let mut table = empty_table();
    seat_two(&mut table);
    // На каждое действие – заведомо невозможный рейз игрока 2.
    table.events_mut().subscribe(Topic::PlayerAction, |_| {
        Some(Reaction::new(2, PlayerAction::Raise(Chips(1_000))))
    });

    table.start_game().expect("старт не ломается из-за реакций");
    assert_eq!(table.pot(), Chips(15));
    assert_eq!(table.current_player().map(|p| p.id), Some(1));

    table.player_action(1, PlayerAction::Call).expect("колл");
    assert_eq!(table.state(), GameState::Flop);
    assert_eq!(table.pot(), Chips(20));
    assert_eq!(table.total_chips(), Chips(200));
    assert_eq!(table.current_player().map(|p| p.id), Some(2));
}

#[test]
fn player_left_is_published() {
    let mut table = empty_table();
    seat_two(&mut table);
    let left = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&left);
    table.events_mut().subscribe(Topic::PlayerLeft, move |event| {
        if let TableEvent::PlayerLeft { player_id } = event {
            sink.borrow_mut().push(*player_id);
        }
        None
    });

    table.remove_player(2).expect("между раздачами");
    assert_eq!(*left.borrow(), vec![2]);
}
