use crate::domain::chips::Chips;
use crate::domain::hand::GameState;
use crate::domain::player::Player;
use crate::engine::actions::PlayerAction;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Что нужно сделать со столом, если действие прошло проверку.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionEffect {
    Fold,
    Check,
    /// Перенести `chips` из стека в банк, ставка игрока становится `bet_amount`,
    /// ставка стола – `current_bet` (если меняется).
    Commit {
        chips: Chips,
        bet_amount: Chips,
        current_bet: Option<Chips>,
    },
    ShowCards(bool),
}

/// Проверить действие игрока и посчитать эффект. Ничего не меняет:
/// стол применяет эффект только после успешной проверки.
pub fn validate_action(
    state: GameState,
    betting: &BettingState,
    player_index: usize,
    player: &Player,
    action: &PlayerAction,
) -> Result<ActionEffect, EngineError> {
    if !state.is_hand_running() {
        return Err(EngineError::InvalidStateForAction {
            action: action.kind(),
            state,
        });
    }

    match *action {
        PlayerAction::Fold => Ok(ActionEffect::Fold),

        // Ставка игрока не сверяется с текущей: check "из-под ставки" допускается.
        PlayerAction::Check => Ok(ActionEffect::Check),

        PlayerAction::Call => {
            let call_amount = player.owes(betting.current_bet);
            ensure_chips(player, call_amount)?;
            Ok(ActionEffect::Commit {
                chips: call_amount,
                bet_amount: player.bet_amount + call_amount,
                current_bet: None,
            })
        }

        PlayerAction::Raise(amount) => {
            if amount <= player.bet_amount {
                return Err(EngineError::RaiseNotAboveBet {
                    amount,
                    bet_amount: player.bet_amount,
                });
            }
            let raise_amount = amount - player.bet_amount;
            ensure_chips(player, raise_amount)?;
            // Ставка стола растёт на дельту рейза, а не выставляется в amount.
            Ok(ActionEffect::Commit {
                chips: raise_amount,
                bet_amount: amount,
                current_bet: Some(betting.current_bet + raise_amount),
            })
        }

        PlayerAction::Bet(amount) => {
            if state != GameState::PreFlop {
                return Err(EngineError::InvalidStateForAction {
                    action: action.kind(),
                    state,
                });
            }
            if amount < betting.minimum_bet {
                return Err(EngineError::BelowMinimumBet {
                    amount,
                    minimum: betting.minimum_bet,
                });
            }
            if player_index == betting.small_blind_index && amount < betting.small_blind {
                return Err(EngineError::BlindAmountTooLow {
                    amount,
                    required: betting.small_blind,
                });
            }
            if player_index == betting.big_blind_index {
                let required = betting.big_blind.max(betting.current_bet);
                if amount < required {
                    return Err(EngineError::BlindAmountTooLow { amount, required });
                }
            }
            ensure_chips(player, amount)?;
            Ok(ActionEffect::Commit {
                chips: amount,
                bet_amount: amount,
                current_bet: Some(amount),
            })
        }

        PlayerAction::Show | PlayerAction::Hide => {
            if state != GameState::Showdown {
                return Err(EngineError::InvalidStateForAction {
                    action: action.kind(),
                    state,
                });
            }
            Ok(ActionEffect::ShowCards(matches!(action, PlayerAction::Show)))
        }
    }
}

fn ensure_chips(player: &Player, needed: Chips) -> Result<(), EngineError> {
    if player.chips < needed {
        return Err(EngineError::InsufficientChips {
            needed,
            available: player.chips,
        });
    }
    Ok(())
}
