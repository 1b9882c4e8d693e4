//! Подписчик шины событий, который пишет всё в `log`.
//! Ставится на каждый стол при создании.

use log::{debug, info};

use crate::domain::TableId;
use crate::engine::actions::Reaction;
use crate::engine::events::TableEvent;

/// Обработчик для `EventBus::subscribe_all`. Никогда не реагирует действием.
pub fn log_subscriber(table_id: TableId) -> impl FnMut(&TableEvent) -> Option<Reaction> {
    move |event| {
        log_event(table_id, event);
        None
    }
}

pub fn log_event(table_id: TableId, event: &TableEvent) {
    match event {
        TableEvent::PlayerJoined {
            player_id,
            seat_number,
        } => info!("table={table_id} event=player_joined player={player_id} seat={seat_number}"),
        TableEvent::PlayerLeft { player_id } => {
            info!("table={table_id} event=player_left player={player_id}")
        }
        TableEvent::PlayerTurn {
            player_id,
            to_call,
            state,
        } => debug!("table={table_id} event=player_turn player={player_id} to_call={to_call} state={state}"),
        TableEvent::PlayerActed { player_id, action } => {
            info!("table={table_id} event=player_action player={player_id} action={action}")
        }
        TableEvent::TurnExpired { player_id } => {
            info!("table={table_id} event=turn_expired player={player_id}")
        }
        TableEvent::GameStateChanged { new_state } => {
            info!("table={table_id} event=state_changed state={new_state}")
        }
        TableEvent::GameEnded {
            winners,
            community_cards,
        } => {
            let board: Vec<String> = community_cards.iter().map(|c| c.to_string()).collect();
            info!("table={table_id} event=game_ended board=[{}]", board.join(" "));
            for w in winners {
                let hand = w.strength.map(|s| s.name()).unwrap_or("без вскрытия");
                info!(
                    "table={table_id} winner={} name={} hand={} won={}",
                    w.player_id, w.name, hand, w.amount_won
                );
            }
        }
    }
}
