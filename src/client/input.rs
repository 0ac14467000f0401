//! Mapping UI input to selector updates.
//!
//! Each function looks at the table and returns the update a click should
//! dispatch, or `None` when the click does nothing. They never fail: an
//! illegal click is simply ignored.

use crate::cards::Card;
use crate::core::{GameTable, Player, PocketType};
use crate::selector::{
    is_valid_card_target, is_valid_equip_target, is_valid_player_target, selector_can_confirm,
    selector_can_play_card, selector_can_undo, GamePrompt, SelectorUpdate, TargetSelectorMode,
};

/// Check if the table accepts input at all.
///
/// Input is blocked once the game is over, for spectators, while the
/// selector is finished, while a prompt is open and while an animation
/// plays.
#[must_use]
pub fn is_click_allowed(table: &GameTable) -> bool {
    !table.is_game_over()
        && table.self_player.is_some()
        && table.selector.mode != TargetSelectorMode::Finish
        && table.selector.prompt.is_none()
        && table.animation.is_none()
}

/// Clicks on a character pocket target the owner's first character card.
fn redirect_character<'a>(table: &'a GameTable, card: &'a Card) -> &'a Card {
    if card.pocket_type() != Some(PocketType::PlayerCharacter) {
        return card;
    }
    card.owner()
        .and_then(|owner| table.player(owner))
        .and_then(|player| player.character_card())
        .and_then(|id| table.card(id))
        .unwrap_or(card)
}

/// Update for a click on a card.
#[must_use]
pub fn click_card_update(table: &GameTable, card: &Card) -> Option<SelectorUpdate> {
    if !is_click_allowed(table) {
        return None;
    }
    let selector = &table.selector;
    match selector.mode {
        TargetSelectorMode::Target | TargetSelectorMode::Modifier => {
            let target = redirect_character(table, card);
            is_valid_card_target(table, target).then(|| SelectorUpdate::AddCardTarget(target.id))
        }
        TargetSelectorMode::Preselect => {
            let can_play = selector_can_play_card(selector, card);
            let can_pick = is_valid_card_target(table, card);
            match (can_play, can_pick) {
                (true, true) => Some(SelectorUpdate::SetPrompt(GamePrompt::PlayPick { card: card.id })),
                (true, false) => card.as_known().map(SelectorUpdate::SelectPlayingCard),
                (false, true) => Some(SelectorUpdate::AddCardTarget(card.id)),
                (false, false) => None,
            }
        }
        TargetSelectorMode::Start | TargetSelectorMode::Middle => selector_can_play_card(selector, card)
            .then(|| card.as_known().map(SelectorUpdate::SelectPlayingCard))
            .flatten(),
        TargetSelectorMode::Equip | TargetSelectorMode::Finish => None,
    }
}

/// Update for a click on a player.
#[must_use]
pub fn click_player_update(table: &GameTable, player: &Player) -> Option<SelectorUpdate> {
    if !is_click_allowed(table) {
        return None;
    }
    match table.selector.mode {
        TargetSelectorMode::Preselect | TargetSelectorMode::Target | TargetSelectorMode::Modifier => {
            is_valid_player_target(table, player).then_some(SelectorUpdate::AddPlayerTarget(player.id))
        }
        TargetSelectorMode::Equip => {
            is_valid_equip_target(table, player).then_some(SelectorUpdate::AddEquipTarget(player.id))
        }
        _ => None,
    }
}

/// Update for the confirm button.
#[must_use]
pub fn confirm_update(table: &GameTable) -> Option<SelectorUpdate> {
    (is_click_allowed(table) && selector_can_confirm(&table.selector)).then_some(SelectorUpdate::ConfirmSelection)
}

/// Update for the undo button.
#[must_use]
pub fn undo_update(table: &GameTable) -> Option<SelectorUpdate> {
    (is_click_allowed(table) && selector_can_undo(table)).then_some(SelectorUpdate::UndoSelection)
}

/// Answer an open play-or-pick prompt.
///
/// `play` plays the card; otherwise it is picked as a target.
#[must_use]
pub fn resolve_play_pick(table: &GameTable, play: bool) -> Option<SelectorUpdate> {
    let GamePrompt::PlayPick { card } = table.selector.prompt else {
        return None;
    };
    if play {
        table
            .card(card)
            .and_then(Card::as_known)
            .map(SelectorUpdate::SelectPlayingCard)
    } else {
        Some(SelectorUpdate::AddCardTarget(card))
    }
}

/// Answer an open yes/no prompt.
///
/// Yes keeps the selection and lets the action go out with the prompt
/// bypassed; no starts the selection over.
#[must_use]
pub fn answer_yes_no(table: &GameTable, yes: bool) -> Option<SelectorUpdate> {
    let GamePrompt::YesNo { message, .. } = &table.selector.prompt else {
        return None;
    };
    if yes {
        Some(SelectorUpdate::SetPrompt(GamePrompt::YesNo {
            message: message.clone(),
            response: true,
        }))
    } else {
        Some(SelectorUpdate::UndoSelection)
    }
}
