// src/time_ctrl/auto_action.rs
//! Какое действие сделать за игрока, у которого вышло время.

use crate::domain::{Chips, GameState, Player};
use crate::engine::actions::PlayerAction;
use crate::engine::betting::BettingState;

/// Действие по таймауту:
/// - первый ход блайнда на префлопе (ещё ничего не поставил) – минимальный пост;
/// - на шоудауне – не показывать карты;
/// - должен доплатить – fold, иначе check.
pub fn timeout_action(
    state: GameState,
    betting: &BettingState,
    player_index: usize,
    player: &Player,
) -> PlayerAction {
    if state == GameState::PreFlop && player.bet_amount.is_zero() {
        if player_index == betting.small_blind_index {
            return PlayerAction::Bet(betting.minimum_bet);
        }
        if player_index == betting.big_blind_index {
            return PlayerAction::Bet(betting.minimum_bet + betting.minimum_bet);
        }
    }

    if player.owes(betting.current_bet) > Chips::ZERO {
        return PlayerAction::Fold;
    }

    if state == GameState::Showdown {
        PlayerAction::Hide
    } else {
        PlayerAction::Check
    }
}
