use std::cell::RefCell;
use std::rc::Rc;

use holdem_table::domain::{
    chips::Chips,
    hand::GameState,
    player::Player,
    table::TableConfig,
};
use holdem_table::engine::{
    actions::PlayerAction,
    betting::BettingState,
    events::{TableEvent, Topic},
    RandomSource, Table,
};
use holdem_table::time_ctrl::{timeout_action, TimeRules, TimeoutState, TurnTimer};

#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn pick_index(&mut self, upper_inclusive: usize) -> usize {
        upper_inclusive
    }
}

fn heads_up(config: TableConfig) -> Table {
    let mut table = Table::with_rng(1, config, &mut DummyRng).expect("валидный конфиг");
    for id in 1..=2 {
        table
            .seat_player(Player::new(id, format!("P{id}"), Chips(100)), None)
            .expect("место есть");
    }
    table.start_game().expect("старт");
    table
}

//
// clock.rs
//
#[test]
fn timer_counts_down_and_expires_once() {
    let mut timer = TurnTimer::new();
    assert_eq!(timer.elapse(5), TimeoutState::Idle);

    let handle = timer.arm(7, 10);
    assert!(timer.is_current(handle));
    assert_eq!(timer.elapse(4), TimeoutState::Ongoing { remaining_secs: 6 });
    assert_eq!(timer.elapse(6), TimeoutState::Expired { player_id: 7, handle });
    assert!(!timer.is_armed());
    assert_eq!(timer.elapse(1), TimeoutState::Idle);
}

#[test]
fn rearming_invalidates_previous_handle() {
    let mut timer = TurnTimer::new();
    let first = timer.arm(1, 15);
    let second = timer.arm(2, 15);

    assert_ne!(first, second);
    assert!(!timer.is_current(first));
    assert!(timer.is_current(second));
    assert_eq!(timer.cancel(), Some(second));
    assert_eq!(timer.cancel(), None);
}

//
// auto_action.rs
//
#[test]
fn default_action_policy() {
    let config = TableConfig::default();
    let mut betting = BettingState::new(&config);
    betting.small_blind_index = 0;
    betting.big_blind_index = 1;

    let fresh = Player::new(1, "p", Chips(100));
    assert_eq!(
        timeout_action(GameState::PreFlop, &betting, 0, &fresh),
        PlayerAction::Bet(Chips(5))
    );
    assert_eq!(
        timeout_action(GameState::PreFlop, &betting, 1, &fresh),
        PlayerAction::Bet(Chips(10))
    );

    betting.current_bet = Chips(10);
    assert_eq!(timeout_action(GameState::PreFlop, &betting, 2, &fresh), PlayerAction::Fold);

    let mut even = fresh.clone();
    even.bet_amount = Chips(10);
    assert_eq!(timeout_action(GameState::Flop, &betting, 2, &even), PlayerAction::Check);

    betting.current_bet = Chips::ZERO;
    assert_eq!(timeout_action(GameState::Showdown, &betting, 2, &fresh), PlayerAction::Hide);
}

//
// Таймаут на столе
//
#[test]
fn timer_is_armed_for_acting_player() {
    let table = heads_up(TableConfig::default());
    let armed = table.timer().armed().expect("таймер взведён");
    assert_eq!(armed.player_id, 1);
    assert_eq!(armed.remaining_secs, 15);
}

#[test]
fn expiry_folds_player_who_owes() {
    let mut table = heads_up(TableConfig::default());
    let expired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&expired);
    table.events_mut().subscribe(Topic::TurnExpired, move |event| {
        if let TableEvent::TurnExpired { player_id } = event {
            sink.borrow_mut().push(*player_id);
        }
        None
    });

    assert_eq!(table.tick(14), Ok(None));
    assert_eq!(table.tick(1), Ok(Some(PlayerAction::Fold)));

    assert_eq!(*expired.borrow(), vec![1]);
    assert!(table.player(1).map_or(false, |p| p.is_folded));
    assert_eq!(table.state(), GameState::Showdown);
}

#[test]
fn expiry_checks_when_nothing_is_owed() {
    let mut table = heads_up(TableConfig::default());
    table.player_action(1, PlayerAction::Call).expect("колл");
    assert_eq!(table.state(), GameState::Flop);

    assert_eq!(table.tick(15), Ok(Some(PlayerAction::Check)));
    assert_eq!(table.state(), GameState::Turn);
}

#[test]
fn expiry_at_showdown_hides_cards() {
    let mut table = heads_up(TableConfig::default());
    table.player_action(1, PlayerAction::Call).expect("колл");
    table.player_action(2, PlayerAction::Check).expect("чек");
    table.player_action(1, PlayerAction::Check).expect("чек");
    table.player_action(2, PlayerAction::Check).expect("чек");
    assert_eq!(table.state(), GameState::Showdown);

    assert_eq!(table.tick(15), Ok(Some(PlayerAction::Hide)));
    assert_eq!(table.state(), GameState::Ended);
    assert!(table.player(1).map_or(false, |p| !p.show_cards));
}

#[test]
fn real_action_rearms_timer_for_next_player() {
    let mut table = heads_up(TableConfig::default());
    assert_eq!(table.tick(10), Ok(None));

    table.player_action(1, PlayerAction::Call).expect("колл");
    let armed = table.timer().armed().expect("таймер следующего игрока");
    assert_eq!(armed.player_id, 2);
    assert_eq!(armed.remaining_secs, 15);

    assert_eq!(table.tick(10), Ok(None));
    assert_eq!(table.tick(5), Ok(Some(PlayerAction::Check)));
}

#[test]
fn turn_limit_comes_from_config() {
    let config = TableConfig {
        time: TimeRules::new(5),
        ..TableConfig::default()
    };
    let mut table = heads_up(config);
    assert_eq!(table.tick(4), Ok(None));
    assert_eq!(table.tick(1), Ok(Some(PlayerAction::Fold)));
}

#[test]
fn no_timeouts_after_hand_ends() {
    let mut table = heads_up(TableConfig::default());
    table.tick(15).expect("фолд по таймауту");
    table.proceed_to_next_round().expect("расчёт");
    assert_eq!(table.state(), GameState::Ended);

    assert!(!table.timer().is_armed());
    assert_eq!(table.tick(1_000), Ok(None));
}
