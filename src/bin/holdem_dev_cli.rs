// src/bin/holdem_dev_cli.rs

use env_logger::Env;

use holdem_table::domain::chips::Chips;
use holdem_table::domain::hand::GameState;
use holdem_table::domain::player::Player;
use holdem_table::domain::table::TableConfig;
use holdem_table::domain::PlayerId;
use holdem_table::engine::{PlayerAction, Reaction, Session, SessionError, TableEvent, Topic};
use holdem_table::infra::IdGenerator;

const HANDS: usize = 5;
/// Сколько секунд "проходит" за один шаг симуляции.
const TICK_SECS: u32 = 1;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("holdem_dev_cli: ошибка: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), SessionError> {
    println!("holdem_dev_cli: стартуем dev-CLI одного стола…");

    let ids = IdGenerator::new();
    let mut session = Session::new(TableConfig::default())?;

    let names = ["Alice", "Bob", "Carol", "Dave"];
    let mut player_ids = Vec::new();
    for name in names {
        let id = ids.next_player_id();
        session.add_player(Player::new(id, name, Chips::new(1_000)))?;
        player_ids.push(id);
    }

    // Последний игрок "засыпает": за него ходит таймаут.
    let sleepy = player_ids[player_ids.len() - 1];

    for hand_no in 1..=HANDS {
        println!();
        println!("================ HAND #{hand_no} ================");

        let table = match session.start_new_hand() {
            Ok(t) => t,
            Err(e) => {
                println!("Раздача не началась: {e}");
                break;
            }
        };
        table
            .events_mut()
            .subscribe(Topic::PlayerTurn, move |event| call_check_bot(sleepy, event));
        table.start_game()?;

        let mut ticks = 0u32;
        while table.state().is_hand_running() {
            if let Some(action) = table.tick(TICK_SECS)? {
                println!("  таймаут: авто-действие {action}");
            }
            ticks += 1;
        }
        println!("Раздача закончена за {ticks} сек. симулированного времени");

        let record = session.end_current_hand()?;
        println!("История: {} записей (table={})", record.entries.len(), record.table_id);
        print_stacks(&session);
    }

    println!();
    println!("Сыграно раздач: {}", session.hand_count());
    Ok(())
}

/// Бот: на шоудауне показывает карты, иначе колл/чек.
fn call_check_bot(sleepy: PlayerId, event: &TableEvent) -> Option<Reaction> {
    let TableEvent::PlayerTurn {
        player_id,
        to_call,
        state,
    } = *event
    else {
        return None;
    };
    if player_id == sleepy {
        return None;
    }

    let action = if state == GameState::Showdown {
        PlayerAction::Show
    } else if to_call.is_zero() {
        PlayerAction::Check
    } else {
        PlayerAction::Call
    };
    Some(Reaction::new(player_id, action))
}

fn print_stacks<R: holdem_table::engine::RandomSource>(session: &Session<R>) {
    for p in session.players() {
        println!("  seat {:>2} | {:<6} | chips={}", p.seat_number, p.name, p.chips);
    }
}
