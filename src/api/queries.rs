use std::collections::HashSet;

use crate::domain::player::{Player, PlayerStatus};
use crate::domain::SeatIndex;
use crate::engine::{HandEventKind, PokerGame};
use crate::eval::HandEvaluator;

use super::dto::{HoleCardsView, PlayerViewDto, TableViewDto};

/// Сформировать DTO стола глазами `viewer`.
///
/// Свои карты `viewer` видит всегда; чужие – только если они вскрыты
/// на шоудауне. `viewer = None` – взгляд зрителя.
pub fn build_table_view<E: HandEvaluator>(game: &PokerGame<E>, viewer: Option<SeatIndex>) -> TableViewDto {
    let revealed: HashSet<SeatIndex> = game
        .history
        .events
        .iter()
        .filter_map(|e| match &e.kind {
            HandEventKind::ShowdownReveal { seat, .. } => Some(*seat),
            _ => None,
        })
        .collect();

    let active_seat = game.active_player();

    let players = game
        .players
        .iter()
        .enumerate()
        .map(|(seat, p)| PlayerViewDto {
            seat,
            name: p.name.clone(),
            stack: p.stack,
            bet_amount: p.bet_amount,
            status: p.status,
            is_button: seat == game.button_position,
            is_to_act: active_seat == Some(seat),
            cards: cards_view(p, viewer == Some(seat) || revealed.contains(&seat)),
        })
        .collect();

    TableViewDto {
        hand_number: game.hand_number,
        phase: game.phase,
        pot: game.pot(),
        current_bet: game.current_bet(),
        min_raise: game.min_raise(),
        big_blind: game.big_blind,
        button: game.button_position,
        active_seat,
        community_cards: game.community_cards.clone(),
        players,
        decision: game.decision_point(),
        last_hand: game.last_summary.clone(),
    }
}

fn cards_view(player: &Player, visible: bool) -> HoleCardsView {
    match player.status {
        PlayerStatus::Out => HoleCardsView::Out,
        PlayerStatus::Folded => HoleCardsView::Folded,
        _ if player.hole_cards.is_empty() => HoleCardsView::Hidden,
        _ if visible => HoleCardsView::Visible(player.hole_cards.clone()),
        _ => HoleCardsView::Hidden,
    }
}

/// Стол в JSON (для логов, отладки, внешних клиентов).
pub fn to_json(view: &TableViewDto) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}
