//! View models derived from the selector.

use crate::cards::CardId;
use crate::core::{GameTable, PocketType};
use crate::effects::CardTarget;
use crate::selector::{get_modifier_context, get_playable_cards, is_card_current, TargetSelector, TargetSelectorMode};

/// Cards offered by a card-choice modifier, shown next to `anchor`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardChoice {
    pub anchor: CardId,
    pub cards: Vec<CardId>,
}

/// Build the card choice of the current modifier chain, if any.
///
/// A choice anchored to the hidden deck is shown next to the last card a
/// modifier targeted instead.
#[must_use]
pub fn card_choice(table: &GameTable) -> Option<CardChoice> {
    let selector = &table.selector;
    if selector.mode == TargetSelectorMode::Start {
        return None;
    }
    let anchor = get_modifier_context(selector, |c| c.card_choice)?;
    if !is_card_current(selector, anchor) {
        return None;
    }

    let mut anchor = anchor;
    if table.card(anchor)?.pocket_type() == Some(PocketType::HiddenDeck) {
        let last_target = selector
            .modifiers
            .iter()
            .flat_map(|m| m.targets.iter())
            .filter_map(|target| match target {
                CardTarget::Card(card) => Some(*card),
                _ => None,
            })
            .last();
        if let Some(card) = last_target {
            anchor = card;
        }
    }

    let unplayed = TargetSelector {
        playing_card: None,
        ..selector.clone()
    };
    Some(CardChoice {
        anchor,
        cards: get_playable_cards(&unplayed),
    })
}

/// Train advance the current chain would cause, for the preview.
///
/// Hidden while an animation plays.
#[must_use]
pub fn train_advance_preview(table: &GameTable) -> Option<i32> {
    if table.animation.is_some() {
        return None;
    }
    get_modifier_context(&table.selector, |c| c.train_advance).filter(|advance| *advance != 0)
}
