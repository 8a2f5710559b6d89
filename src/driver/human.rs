use dialoguer::{Input, Select};

use crate::api::{HoleCardsView, TableViewDto};
use crate::domain::chips::Chips;
use crate::engine::{DecisionPoint, EngineError, PlayerActionKind};

/// Человек за терминалом.
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanDecider;

impl HumanDecider {
    fn amount(&self, point: &DecisionPoint) -> Result<Chips, dialoguer::Error> {
        let min = point.min_total.0;
        let max = point.max_total.0;
        let value = Input::<u64>::new()
            .with_prompt(format!("Общий уровень ставки ({min}..={max})"))
            .validate_with(move |v: &u64| -> Result<(), String> {
                if *v < min {
                    Err(format!("Меньше минимума {min}"))
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(Chips(value))
    }

    fn ask(&self, view: &TableViewDto, point: &DecisionPoint) -> Result<PlayerActionKind, dialoguer::Error> {
        let hole = view
            .players
            .get(point.seat)
            .and_then(|p| match &p.cards {
                HoleCardsView::Visible(cards) => Some(
                    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "),
                ),
                _ => None,
            })
            .unwrap_or_default();
        let board = view
            .community_cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let mut choices: Vec<(String, PlayerActionKind)> = vec![("Fold".into(), PlayerActionKind::Fold)];
        if point.can_check {
            choices.push(("Check".into(), PlayerActionKind::Check));
        } else {
            choices.push((format!("Call {}", point.to_call), PlayerActionKind::Call));
        }
        let aggressive = if point.facing_bet() { "Raise" } else { "Bet" };
        choices.push((aggressive.into(), PlayerActionKind::Raise(Chips::ZERO)));
        choices.push((format!("All-in ({})", point.max_total), PlayerActionKind::AllIn));

        let labels: Vec<&str> = choices.iter().map(|(label, _)| label.as_str()).collect();
        let selection = Select::new()
            .with_prompt(format!(
                "\n{} [{}] | борд: {} | банк {} | стек {}",
                point.name, hole, board, view.pot, point.stack
            ))
            .items(&labels[..])
            .default(if point.can_check { 1 } else { 0 })
            .interact()?;

        match &choices[selection].1 {
            PlayerActionKind::Raise(_) => {
                let total = self.amount(point)?;
                Ok(if point.facing_bet() {
                    PlayerActionKind::Raise(total)
                } else {
                    PlayerActionKind::Bet(total)
                })
            }
            other => Ok(other.clone()),
        }
    }
}

impl super::Decider for HumanDecider {
    fn decide(&mut self, view: &TableViewDto, point: &DecisionPoint) -> PlayerActionKind {
        match self.ask(view, point) {
            Ok(action) => action,
            Err(e) => {
                log::error!("Ввод не удался ({e}) – {} делает fold", point.name);
                PlayerActionKind::Fold
            }
        }
    }

    fn on_rejected(&mut self, _point: &DecisionPoint, error: &EngineError) {
        println!("Действие отклонено: {error}");
    }
}
