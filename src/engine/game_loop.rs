use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::{Deck, DeckError};
use crate::domain::hand::{HandStrength, HandSummary, Phase, PlayerHandResult};
use crate::domain::player::{Player, PlayerStatus};
use crate::domain::table::{ConfigError, TableConfig};
use crate::domain::SeatIndex;
use crate::eval::{describe_hand, HandEvaluator, SevenCardEvaluator};
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::{is_round_complete, no_one_left_to_bet, BettingState};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{first_actor_from, next_seat, seat_after, seats_from};
use crate::engine::showdown::{best_hands, rank_contenders, split_pot};
use crate::engine::validation::{resolve_action, DecisionPoint};
use crate::engine::RandomSource;

/// Статус раздачи для внешнего кода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandStatus {
    Ongoing,
    Finished(HandSummary),
}

/// Стол и текущая раздача.
///
/// Единственный владелец всего состояния: места, колода, банк, ставки,
/// фаза и указатель хода меняются только через методы этого типа.
pub struct PokerGame<E: HandEvaluator = SevenCardEvaluator> {
    /// Места за столом. Индекс = `SeatIndex`, список не меняется.
    pub players: Vec<Player>,
    pub big_blind: Chips,
    pub deck: Deck,
    pub community_cards: Vec<Card>,
    /// Банк раздачи: внутри раздачи только растёт, обнуляется при старте новой.
    pub pot: Chips,
    pub betting: BettingState,
    pub phase: Phase,
    pub button_position: SeatIndex,
    /// Чей ход (сырой указатель; см. [`PokerGame::active_player`]).
    pub active_player_index: SeatIndex,
    /// Номер текущей раздачи, первая раздача = 1.
    pub hand_number: u64,
    pub history: HandHistory,
    pub last_summary: Option<HandSummary>,
    evaluator: E,
}

impl PokerGame<SevenCardEvaluator> {
    pub fn new(players: Vec<Player>, big_blind: Chips) -> Self {
        Self::with_evaluator(players, big_blind, SevenCardEvaluator)
    }

    /// Стол из проверенного конфига.
    pub fn from_config(config: &TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.players(), config.big_blind))
    }
}

impl<E: HandEvaluator> PokerGame<E> {
    pub fn with_evaluator(players: Vec<Player>, big_blind: Chips, evaluator: E) -> Self {
        Self {
            players,
            big_blind,
            deck: Deck::standard_52(),
            community_cards: Vec::new(),
            pot: Chips::ZERO,
            betting: BettingState::new(big_blind),
            phase: Phase::Setup,
            button_position: 0,
            active_player_index: 0,
            hand_number: 0,
            history: HandHistory::new(),
            last_summary: None,
            evaluator,
        }
    }

    pub fn seat_count(&self) -> usize {
        self.players.len()
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }

    pub fn current_bet(&self) -> Chips {
        self.betting.current_bet
    }

    pub fn min_raise(&self) -> Chips {
        self.betting.min_raise
    }

    /// Место, от которого ждём решения, если такое есть.
    pub fn active_player(&self) -> Option<SeatIndex> {
        let seat = self.active_player_index;
        let can_act = self.players.get(seat).is_some_and(|p| p.can_act());
        (self.phase.is_betting() && can_act).then_some(seat)
    }

    /// Сколько игроков ещё могут действовать (не fold, не all-in, не out).
    pub fn num_active_players(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// Сколько игроков претендуют на банк.
    pub fn num_players_in_hand(&self) -> usize {
        self.players.iter().filter(|p| p.is_in_hand()).count()
    }

    /// Игроки, у которых остались фишки.
    pub fn num_funded_players(&self) -> usize {
        self.players.iter().filter(|p| !p.stack.is_zero()).count()
    }

    pub fn is_hand_over(&self) -> bool {
        self.phase == Phase::Showdown
    }

    /// Чей ход и что ему можно.
    pub fn decision_point(&self) -> Option<DecisionPoint> {
        let seat = self.active_player()?;
        Some(DecisionPoint::new(seat, &self.players[seat], self.phase, &self.betting))
    }

    /// Проверка завершения раунда ставок. Ничего не меняет.
    pub fn is_betting_round_complete(&self) -> bool {
        if self.players.is_empty() {
            return true;
        }
        is_round_complete(
            &self.players,
            self.betting.current_bet,
            self.active_player_index,
            self.wrap_seat(),
        )
    }

    /// Место сразу после кнопки: с него начинаются постфлоп-улицы
    /// и на нём замыкается круг торговли.
    fn wrap_seat(&self) -> SeatIndex {
        next_seat(self.button_position, self.players.len())
    }

    /// Старт новой раздачи с перемешанной колодой.
    pub fn start_new_hand<R: RandomSource>(&mut self, rng: &mut R) -> Result<HandStatus, EngineError> {
        self.start_new_hand_with_deck(Deck::shuffled(rng))
    }

    /// Старт новой раздачи с заданной колодой:
    /// - сброс состояния стола и игроков;
    /// - сдвиг кнопки;
    /// - раздача карманных карт;
    /// - большой блайнд с места после кнопки;
    /// - указатель хода на первое активное место через два от кнопки.
    pub fn start_new_hand_with_deck(&mut self, deck: Deck) -> Result<HandStatus, EngineError> {
        let funded = self.num_funded_players();
        if funded < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }
        // Карманные карты проверяем заранее, чтобы не оставить стол полуразданным.
        if deck.len() < funded * 2 {
            return Err(EngineError::DeckExhausted(DeckError::Exhausted {
                requested: funded * 2,
                remaining: deck.len(),
            }));
        }

        let seat_count = self.players.len();

        self.deck = deck;
        self.community_cards.clear();
        self.pot = Chips::ZERO;
        self.betting = BettingState::new(self.big_blind);
        self.phase = Phase::Setup;
        self.history = HandHistory::new();
        self.last_summary = None;
        self.hand_number += 1;

        for player in self.players.iter_mut() {
            player.reset_for_new_hand();
        }

        // OUT-места кнопка не пропускает.
        self.button_position = next_seat(self.button_position, seat_count);

        log::info!(
            "====== Раздача #{}: кнопка на месте {} ({}) ======",
            self.hand_number,
            self.button_position,
            self.players[self.button_position].name
        );
        self.history.push(HandEventKind::HandStarted {
            hand_number: self.hand_number,
            button: self.button_position,
        });

        self.deal_hole_cards()?;
        self.post_forced_bet();

        self.phase = Phase::PreFlop;
        self.history.push(HandEventKind::StreetChanged { phase: Phase::PreFlop });

        self.active_player_index = seat_after(self.button_position, 2, seat_count);
        if !self.seek_actor() || no_one_left_to_bet(&self.players, self.betting.current_bet) {
            log::debug!("Префлоп: торговаться некому, раунд закрыт сразу");
            return self.complete_round();
        }

        Ok(HandStatus::Ongoing)
    }

    /// По две карты каждому, кто не OUT, в порядке мест.
    fn deal_hole_cards(&mut self) -> Result<(), EngineError> {
        for seat in 0..self.players.len() {
            if self.players[seat].status == PlayerStatus::Out {
                continue;
            }
            let cards = self.deck.deal(2)?;
            log::debug!("{} получает {} {}", self.players[seat].name, cards[0], cards[1]);
            self.players[seat].hole_cards = cards.clone();
            self.history.push(HandEventKind::HoleCardsDealt { seat, cards });
        }
        Ok(())
    }

    /// Большой блайнд с места после кнопки. С пустого стека ничего не ставится.
    fn post_forced_bet(&mut self) {
        let seat = self.wrap_seat();
        let big_blind = self.big_blind;
        let player = &mut self.players[seat];
        if player.stack.is_zero() {
            log::debug!("{} без фишек – блайнд не ставится", player.name);
            return;
        }

        let (_, paid) = player.apply_action(&PlayerActionKind::Bet(big_blind), big_blind);
        self.pot += paid;
        self.betting.current_bet = paid;

        log::info!("{} ставит big blind: {}", player.name, paid);
        self.history.push(HandEventKind::BlindPosted { seat, amount: paid });
    }

    /// Сдвинуть указатель (включая текущее место) на ближайшего, кто может
    /// действовать. Если таких нет – указатель не трогаем и возвращаем false.
    fn seek_actor(&mut self) -> bool {
        match first_actor_from(&self.players, self.active_player_index) {
            Some(seat) => {
                self.active_player_index = seat;
                true
            }
            None => false,
        }
    }

    /// Применить действие игрока, чей сейчас ход.
    ///
    /// Нелегальное действие отклоняется без изменений состояния.
    /// Возвращает статус раздачи (идёт / закончилась).
    pub fn apply_action(&mut self, action: PlayerActionKind) -> Result<HandStatus, EngineError> {
        if !self.phase.is_betting() {
            return Err(EngineError::NoActiveHand);
        }

        let seat = self.active_player_index;
        let player = self
            .players
            .get(seat)
            .ok_or(EngineError::Internal("указатель хода вне стола"))?;
        if !player.can_act() {
            return Err(EngineError::NoEligibleActor);
        }

        let resolved = match resolve_action(player, &action, &self.betting) {
            Ok(resolved) => resolved,
            Err(e) => {
                log::warn!("{}: {} отклонено – {}", player.name, action, e);
                return Err(e);
            }
        };

        if let Some(total) = resolved.new_current_bet {
            self.betting.raise_to(total);
        }

        let player = &mut self.players[seat];
        let (recorded, committed) = player.apply_action(&resolved.kind, resolved.chips);
        self.pot += committed;

        log::info!(
            "{}: {} (внесено {}, стек {}, банк {})",
            player.name,
            recorded,
            committed,
            player.stack,
            self.pot
        );
        self.history.push(HandEventKind::PlayerActed {
            seat,
            requested: action,
            recorded,
            committed,
            stack_after: player.stack,
            pot_after: self.pot,
        });

        self.active_player_index = next_seat(seat, self.players.len());

        if self.is_betting_round_complete() {
            self.complete_round()
        } else {
            self.seek_actor();
            Ok(HandStatus::Ongoing)
        }
    }

    /// Раунд ставок закончен: сброс ставок и переход вперёд.
    ///
    /// Если на новой улице торговаться некому (все в all-in или активный
    /// остался один), улицы открываются дальше без ожидания решений,
    /// вплоть до шоудауна.
    fn complete_round(&mut self) -> Result<HandStatus, EngineError> {
        loop {
            for player in self.players.iter_mut() {
                player.bet_amount = Chips::ZERO;
            }
            self.betting.reset_for_street(self.big_blind);

            if self.num_players_in_hand() <= 1 {
                return self.showdown();
            }

            let (next, cards) = self
                .phase
                .next()
                .ok_or(EngineError::Internal("переход после шоудауна"))?;

            if next == Phase::Showdown {
                return self.showdown();
            }

            let dealt = self.deck.deal(cards)?;
            self.community_cards.extend_from_slice(&dealt);
            self.phase = next;

            log::info!(
                "--- {}: {} ---",
                next,
                self.community_cards
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            self.history.push(HandEventKind::StreetChanged { phase: next });
            self.history.push(HandEventKind::BoardDealt { phase: next, cards: dealt });

            self.active_player_index = self.wrap_seat();
            if self.seek_actor() && !no_one_left_to_bet(&self.players, self.betting.current_bet) {
                return Ok(HandStatus::Ongoing);
            }
            log::debug!("{}: торговаться некому, открываем дальше", next);
        }
    }

    /// Шоудаун: единственный оставшийся забирает банк без вскрытия,
    /// иначе сравниваем руки и делим банк между лучшими.
    fn showdown(&mut self) -> Result<HandStatus, EngineError> {
        let phase_reached = self.phase;
        self.phase = Phase::Showdown;
        self.history.push(HandEventKind::StreetChanged { phase: Phase::Showdown });

        let seat_count = self.players.len();
        // Порядок оценки – по кругу с места после кнопки.
        let contenders: Vec<SeatIndex> = seats_from(self.wrap_seat(), seat_count)
            .filter(|&seat| self.players[seat].is_in_hand())
            .collect();

        if contenders.is_empty() {
            return Err(EngineError::Internal("на шоудауне нет претендентов на банк"));
        }

        let mut strengths: HashMap<SeatIndex, HandStrength> = HashMap::new();
        let winners = if contenders.len() == 1 {
            contenders
        } else {
            let ranked = rank_contenders(
                &self.evaluator,
                &self.players,
                &contenders,
                &self.community_cards,
            );
            for &(seat, strength) in &ranked {
                let player = &self.players[seat];
                log::info!(
                    "{}: {} – {}",
                    player.name,
                    player.hole_cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "),
                    describe_hand(strength)
                );
                self.history.push(HandEventKind::ShowdownReveal {
                    seat,
                    hole_cards: player.hole_cards.clone(),
                    strength,
                });
                strengths.insert(seat, strength);
            }
            best_hands(&ranked)
        };

        let pot = self.pot;
        let shares = split_pot(pot, winners.len());
        let mut won: HashMap<SeatIndex, Chips> = HashMap::new();

        for (&seat, &share) in winners.iter().zip(shares.iter()) {
            let player = &mut self.players[seat];
            player.stack += share;
            won.insert(seat, share);

            log::info!("{} выигрывает {}", player.name, share);
            self.history.push(HandEventKind::PotAwarded { seat, amount: share });
        }

        self.history.push(HandEventKind::HandFinished {
            hand_number: self.hand_number,
        });

        let results = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, p)| PlayerHandResult {
                seat,
                name: p.name.clone(),
                strength: strengths.get(&seat).copied(),
                won: won.get(&seat).copied().unwrap_or(Chips::ZERO),
                is_winner: won.contains_key(&seat),
            })
            .collect();

        let summary = HandSummary {
            hand_number: self.hand_number,
            phase_reached,
            board: self.community_cards.clone(),
            total_pot: pot,
            results,
        };
        self.last_summary = Some(summary.clone());

        Ok(HandStatus::Finished(summary))
    }
}
