use std::collections::VecDeque;

use log::warn;

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::GameState;
use crate::domain::player::Player;
use crate::domain::table::{ConfigError, TableConfig};
use crate::domain::{PlayerId, SeatNumber, TableId};
use crate::engine::actions::{ActionKind, PlayerAction, Reaction};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::events::{EventBus, TableEvent, Topic};
use crate::engine::hand_history::{GameLogEntry, HistoryRecorder, LogDetails};
use crate::engine::positions::{blind_indices, next_eligible_index, next_player_index};
use crate::engine::pot::Pot;
use crate::engine::validation::{validate_action, ActionEffect};
use crate::engine::RandomSource;
use crate::eval::{HandEvaluator, StandardEvaluator};
use crate::infra::logging::log_subscriber;
use crate::infra::rng::SystemRng;
use crate::time_ctrl::{timeout_action, TimeoutState, TurnTimer};

/// Стол на одну раздачу: игроки, колода, банк, машина состояний
/// PreFlop → Flop → Turn → River → Showdown → Ended.
///
/// Все изменения идут через `start_game`, `player_action`,
/// `proceed_to_next_round` и `tick`; каждая операция выполняется целиком,
/// реакции подписчиков применяются после неё по очереди.
pub struct Table {
    pub(crate) id: TableId,
    pub(crate) config: TableConfig,
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Deck,
    pub(crate) pot: Pot,
    pub(crate) community_cards: Vec<Card>,
    pub(crate) state: GameState,
    pub(crate) current_player_index: usize,
    pub(crate) dealer_index: usize,
    pub(crate) betting: BettingState,
    pub(crate) history: HistoryRecorder,
    pub(crate) events: EventBus,
    pub(crate) timer: TurnTimer,
    pub(crate) evaluator: Box<dyn HandEvaluator>,
    pending: VecDeque<Reaction>,
    /// Во время постинга блайндов ходы не объявляются.
    announce_turns: bool,
}

impl Table {
    /// Новый стол с системным RNG.
    pub fn new(id: TableId, config: TableConfig) -> Result<Self, ConfigError> {
        Self::with_rng(id, config, &mut SystemRng)
    }

    pub fn with_rng<R: RandomSource>(
        id: TableId,
        config: TableConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut events = EventBus::new();
        events.subscribe_all(log_subscriber(id));

        Ok(Self {
            id,
            betting: BettingState::new(&config),
            dealer_index: config.dealer_index,
            config,
            players: Vec::new(),
            deck: Deck::new(rng),
            pot: Pot::new(),
            community_cards: Vec::new(),
            state: GameState::WaitingForPlayers,
            current_player_index: 0,
            history: HistoryRecorder::new(),
            events,
            timer: TurnTimer::new(),
            evaluator: Box::new(StandardEvaluator),
            pending: VecDeque::new(),
            announce_turns: true,
        })
    }

    /// Подменить оракул силы рук.
    pub fn with_evaluator<E: HandEvaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    // ------------------------------------------------------------------
    // Посадка
    // ------------------------------------------------------------------

    /// Посадить игрока. Без номера – на наименьшее свободное место.
    pub fn seat_player(
        &mut self,
        mut player: Player,
        seat_number: Option<SeatNumber>,
    ) -> Result<SeatNumber, EngineError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(EngineError::HandAlreadyInProgress);
        }
        let max = self.config.max_players;
        if self.players.len() >= max {
            return Err(EngineError::TableFull(max));
        }
        if self.players.iter().any(|p| p.id == player.id) {
            return Err(EngineError::PlayerAlreadySeated(player.id));
        }

        let seat = match seat_number {
            Some(s) => {
                if s == 0 || s as usize > max {
                    return Err(EngineError::InvalidSeat(s));
                }
                if self.players.iter().any(|p| p.seat_number == s) {
                    return Err(EngineError::SeatTaken(s));
                }
                s
            }
            None => (1..=max as SeatNumber)
                .find(|s| self.players.iter().all(|p| p.seat_number != *s))
                .ok_or(EngineError::TableFull(max))?,
        };

        player.seat_number = seat;
        let player_id = player.id;
        // Порядок в векторе = порядок мест = порядок ходов.
        let pos = self
            .players
            .iter()
            .position(|p| p.seat_number > seat)
            .unwrap_or(self.players.len());
        self.players.insert(pos, player);

        self.publish(TableEvent::PlayerJoined {
            player_id,
            seat_number: seat,
        });
        self.drain_reactions();
        Ok(seat)
    }

    /// Убрать игрока из-за стола (только вне раздачи).
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<Player, EngineError> {
        if self.state.is_hand_running() {
            return Err(EngineError::HandAlreadyInProgress);
        }
        let idx = self.index_of(player_id)?;
        let player = self.players.remove(idx);
        self.publish(TableEvent::PlayerLeft { player_id });
        self.drain_reactions();
        Ok(player)
    }

    // ------------------------------------------------------------------
    // Старт раздачи
    // ------------------------------------------------------------------

    /// Старт раздачи:
    /// - раздаёт по 2 карманные карты;
    /// - назначает блайнды от дилера;
    /// - постит блайнды обычными Bet-действиями;
    /// - передаёт ход игроку после большого блайнда.
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(EngineError::HandAlreadyInProgress);
        }
        let n = self.players.len();
        if n < 2 {
            return Err(EngineError::InsufficientPlayers(n));
        }

        let dealer = self.dealer_index % n;
        let (sb, bb) = blind_indices(n, dealer);
        let sb_post = self.config.small_blind_post();
        let bb_post = self.config.big_blind_post();

        // Блайнды проверяем до раздачи карт, чтобы не оставить стол наполовину собранным.
        for (idx, post) in [(sb, sb_post), (bb, bb_post)] {
            let available = self.players[idx].chips;
            if available < post {
                return Err(EngineError::InsufficientChips {
                    needed: post,
                    available,
                });
            }
        }

        for p in self.players.iter_mut() {
            p.hand.clear();
            p.is_folded = false;
            p.bet_amount = Chips::ZERO;
            p.show_cards = false;
        }
        for p in self.players.iter_mut() {
            let first = self.deck.draw()?;
            let second = self.deck.draw()?;
            p.hand = vec![first, second];
        }

        self.dealer_index = dealer;
        self.betting.small_blind_index = sb;
        self.betting.big_blind_index = bb;
        self.enter_state(GameState::PreFlop);

        self.announce_turns = false;
        let posted = self.post_blind(sb, sb_post).and_then(|_| self.post_blind(bb, bb_post));
        self.announce_turns = true;
        posted?;

        self.announce_turn();
        self.drain_reactions();
        Ok(())
    }

    fn post_blind(&mut self, idx: usize, amount: Chips) -> Result<(), EngineError> {
        self.current_player_index = idx;
        let player_id = self.players[idx].id;
        self.apply_action(player_id, PlayerAction::Bet(amount))
    }

    // ------------------------------------------------------------------
    // Действия игроков
    // ------------------------------------------------------------------

    /// Применить действие игрока, затем – накопившиеся реакции подписчиков.
    pub fn player_action(&mut self, player_id: PlayerId, action: PlayerAction) -> Result<(), EngineError> {
        let result = self.apply_action(player_id, action);
        self.drain_reactions();
        result
    }

    /// Вариант для вызывающих с раздельными типом и суммой.
    /// Игрок и очередь хода проверяются раньше суммы.
    pub fn submit(
        &mut self,
        player_id: PlayerId,
        kind: ActionKind,
        amount: Option<Chips>,
    ) -> Result<(), EngineError> {
        self.actor_index(player_id)?;
        let action = PlayerAction::from_parts(kind, amount)?;
        self.player_action(player_id, action)
    }

    /// Единственная точка изменения стола действием игрока.
    fn apply_action(&mut self, player_id: PlayerId, action: PlayerAction) -> Result<(), EngineError> {
        let idx = self.actor_index(player_id)?;

        if action == PlayerAction::Fold && self.active_count() == 1 && !self.players[idx].is_folded {
            return Err(EngineError::InvalidStateForAction {
                action: ActionKind::Fold,
                state: self.state,
            });
        }

        let effect = validate_action(self.state, &self.betting, idx, &self.players[idx], &action)?;

        // Игрок успел: таймер хода больше не нужен.
        self.timer.cancel();

        let moved_chips = match effect {
            ActionEffect::Fold => {
                self.players[idx].is_folded = true;
                false
            }
            ActionEffect::Check => {
                let player = &self.players[idx];
                if player.bet_amount < self.betting.current_bet {
                    warn!(
                        "table={} player={} check при недоставке: bet={} current_bet={}",
                        self.id, player.id, player.bet_amount, self.betting.current_bet
                    );
                }
                false
            }
            ActionEffect::Commit {
                chips,
                bet_amount,
                current_bet,
            } => {
                let player = &mut self.players[idx];
                player.chips -= chips;
                player.bet_amount = bet_amount;
                self.pot.add(chips);
                if let Some(cb) = current_bet {
                    self.betting.current_bet = cb;
                }
                true
            }
            ActionEffect::ShowCards(show) => {
                self.players[idx].show_cards = show;
                false
            }
        };

        self.history.record(
            LogDetails::PlayerAction { player_id, action },
            &self.players,
            &self.community_cards,
        );
        if moved_chips {
            self.history.record(
                LogDetails::PotUpdate { pot: self.pot.total },
                &self.players,
                &self.community_cards,
            );
        }
        self.publish(TableEvent::PlayerActed { player_id, action });

        self.after_action()
    }

    /// Учёт после действия:
    /// (a) остался один не сфолдивший – сразу Showdown;
    /// (b) иначе, если раунд ставок закрыт – шаг машины состояний;
    /// (c) ход следующему, кто может действовать.
    fn after_action(&mut self) -> Result<(), EngineError> {
        if self.active_count() == 1 {
            if !matches!(self.state, GameState::Showdown | GameState::Ended) {
                self.enter_state(GameState::Showdown);
            }
        } else if self.is_betting_round_over() {
            self.advance()?;
        }

        if self.state != GameState::Ended {
            self.current_player_index = next_eligible_index(&self.players, self.current_player_index);
            if self.announce_turns {
                self.announce_turn();
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Машина состояний
    // ------------------------------------------------------------------

    /// Принудительный шаг вперёд (используется сессией, чтобы довести
    /// брошенную раздачу до расчёта).
    pub fn proceed_to_next_round(&mut self) -> Result<(), EngineError> {
        self.advance()?;
        if self.state.is_hand_running() {
            if !self.players[self.current_player_index].can_act() {
                self.current_player_index = next_eligible_index(&self.players, self.current_player_index);
            }
            self.announce_turn();
        }
        self.drain_reactions();
        Ok(())
    }

    fn advance(&mut self) -> Result<(), EngineError> {
        match self.state {
            GameState::WaitingForPlayers => Err(EngineError::InvalidGameState(self.state)),
            GameState::PreFlop | GameState::Flop | GameState::Turn | GameState::River => {
                let next = self
                    .state
                    .next()
                    .ok_or(EngineError::InvalidGameState(self.state))?;
                for _ in 0..next.community_cards_to_deal() {
                    let card = self.deck.draw()?;
                    self.community_cards.push(card);
                }
                self.enter_state(next);
                Ok(())
            }
            GameState::Showdown => {
                self.determine_winners()?;
                self.enter_state(GameState::Ended);
                self.shutdown_turns();
                Ok(())
            }
            GameState::Ended => {
                self.timer.cancel();
                Ok(())
            }
        }
    }

    fn enter_state(&mut self, new_state: GameState) {
        self.state = new_state;
        if matches!(
            new_state,
            GameState::Flop | GameState::Turn | GameState::River | GameState::Showdown
        ) {
            self.betting.reset_for_street(&mut self.players);
        }
        self.history.record(
            LogDetails::GameStateChange { new_state },
            &self.players,
            &self.community_cards,
        );
        self.publish(TableEvent::GameStateChanged { new_state });
    }

    /// Раздача закончена: таймер снят, подписчики хода отписаны.
    fn shutdown_turns(&mut self) {
        self.timer.cancel();
        for topic in Topic::TURN_RELATED {
            self.events.unsubscribe_topic(topic);
        }
    }

    fn announce_turn(&mut self) {
        if !self.state.is_hand_running() {
            return;
        }
        let Some(player) = self.players.get(self.current_player_index) else {
            return;
        };
        let player_id = player.id;
        let to_call = player.owes(self.betting.current_bet);
        self.timer.arm(player_id, self.config.time.turn_time_limit_secs);
        self.publish(TableEvent::PlayerTurn {
            player_id,
            to_call,
            state: self.state,
        });
    }

    // ------------------------------------------------------------------
    // Таймаут хода
    // ------------------------------------------------------------------

    /// Прошло `delta_secs` секунд. Если время хода вышло – действие по
    /// умолчанию через обычный путь действий; если оно отклонено – fold.
    pub fn tick(&mut self, delta_secs: u32) -> Result<Option<PlayerAction>, EngineError> {
        let TimeoutState::Expired { player_id, .. } = self.timer.elapse(delta_secs) else {
            return Ok(None);
        };

        self.publish(TableEvent::TurnExpired { player_id });

        let idx = self.actor_index(player_id)?;
        let action = timeout_action(self.state, &self.betting, idx, &self.players[idx]);
        let applied = match self.apply_action(player_id, action) {
            Ok(()) => action,
            Err(err) => {
                warn!(
                    "table={} player={} авто-действие {} отклонено: {}; fold",
                    self.id, player_id, action, err
                );
                self.apply_action(player_id, PlayerAction::Fold)?;
                PlayerAction::Fold
            }
        };
        self.drain_reactions();
        Ok(Some(applied))
    }

    // ------------------------------------------------------------------
    // Шина событий
    // ------------------------------------------------------------------

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    pub(crate) fn publish(&mut self, event: TableEvent) {
        let reactions = self.events.publish(&event);
        self.pending.extend(reactions);
    }

    /// Реакции подписчиков выполняются строго по одной, после текущей операции.
    fn drain_reactions(&mut self) {
        while let Some(reaction) = self.pending.pop_front() {
            if let Err(err) = self.apply_action(reaction.player_id, reaction.action) {
                warn!(
                    "table={} реакция {} игрока {} отклонена: {}",
                    self.id, reaction.action, reaction.player_id, err
                );
            }
        }
    }

    // ------------------------------------------------------------------
    // Чтение состояния
    // ------------------------------------------------------------------

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn pot(&self) -> Chips {
        self.pot.total
    }

    pub fn current_bet(&self) -> Chips {
        self.betting.current_bet
    }

    pub fn minimum_bet(&self) -> Chips {
        self.betting.minimum_bet
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }

    pub fn small_blind_index(&self) -> usize {
        self.betting.small_blind_index
    }

    pub fn big_blind_index(&self) -> usize {
        self.betting.big_blind_index
    }

    pub fn timer(&self) -> &TurnTimer {
        &self.timer
    }

    /// Сумма банка и всех стеков – не меняется внутри раздачи.
    pub fn total_chips(&self) -> Chips {
        self.pot.total + self.players.iter().map(|p| p.chips).sum()
    }

    pub fn is_betting_round_over(&self) -> bool {
        self.betting.is_round_over(&self.players)
    }

    pub fn get_next_player_index(&self, index: usize) -> usize {
        next_player_index(&self.players, index)
    }

    pub fn hand_history(&self) -> &[GameLogEntry] {
        self.history.entries()
    }

    pub fn into_history(self) -> Vec<GameLogEntry> {
        self.history.into_entries()
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded).count()
    }

    fn index_of(&self, player_id: PlayerId) -> Result<usize, EngineError> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))
    }

    /// Индекс игрока, если он за столом и сейчас его ход.
    fn actor_index(&self, player_id: PlayerId) -> Result<usize, EngineError> {
        let idx = self.index_of(player_id)?;
        if idx != self.current_player_index {
            let current = self
                .players
                .get(self.current_player_index)
                .map(|p| p.id)
                .unwrap_or_default();
            return Err(EngineError::NotPlayersTurn { player_id, current });
        }
        Ok(idx)
    }
}
