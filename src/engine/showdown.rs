use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;
use crate::engine::events::TableEvent;
use crate::engine::game_loop::Table;
use crate::engine::hand_history::LogDetails;
use crate::eval::HandStrength;

/// Итог раздачи для одного победителя.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Winner {
    pub player_id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    /// `None`, если все остальные сфолдили и руки не вскрывались.
    pub strength: Option<HandStrength>,
    pub amount_won: Chips,
}

impl Table {
    /// Расчёт банка.
    ///
    /// Один оставшийся игрок забирает всё без оценки. Иначе каждая рука
    /// (карманные + общие карты) оценивается оракулом, банк делится поровну
    /// между лучшими; лишние фишки – первым победителям по порядку мест.
    pub(crate) fn determine_winners(&mut self) -> Result<Vec<Winner>, EngineError> {
        let remaining: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_folded)
            .map(|(i, _)| i)
            .collect();

        let mut best: Vec<(usize, Option<HandStrength>)> = Vec::new();
        if let [only] = remaining.as_slice() {
            best.push((*only, None));
        } else {
            for &idx in &remaining {
                let player = &self.players[idx];
                let mut cards = player.hand.clone();
                cards.extend_from_slice(&self.community_cards);
                let strength = self.evaluator.evaluate(&cards)?;

                let top = best.first().and_then(|(_, s)| s.map(|s| s.value));
                match top {
                    Some(value) if strength.value < value => {}
                    Some(value) if strength.value == value => best.push((idx, Some(strength))),
                    _ => {
                        best.clear();
                        best.push((idx, Some(strength)));
                    }
                }
            }
        }

        if best.is_empty() {
            return Err(EngineError::InvalidGameState(self.state));
        }

        let final_pot = self.pot.total;
        let prizes = self.pot.split_among(best.len());

        let mut winners = Vec::with_capacity(best.len());
        for ((idx, strength), amount_won) in best.into_iter().zip(prizes) {
            let player = &mut self.players[idx];
            player.chips += amount_won;
            winners.push(Winner {
                player_id: player.id,
                name: player.name.clone(),
                hand: player.hand.clone(),
                strength,
                amount_won,
            });
        }

        self.history.record(
            LogDetails::RoundEnd {
                winner_ids: winners.iter().map(|w| w.player_id).collect(),
                final_pot,
            },
            &self.players,
            &self.community_cards,
        );
        self.publish(TableEvent::GameEnded {
            winners: winners.clone(),
            community_cards: self.community_cards.clone(),
        });

        Ok(winners)
    }
}
