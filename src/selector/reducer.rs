//! Selector reducer: `(table, update) -> selector`.
//!
//! ## Auto targets
//!
//! After every change to the active target list the reducer walks the
//! remaining effects and fills in every target the player has no real
//! choice for. The walk stops at the first effect that needs input, or
//! advances the mode once every effect has a target:
//!
//! - `Preselect` ends the preselection
//! - `Target` finishes
//! - `Modifier` tries to select the card the modifier chain leads to
//!
//! Each step either appends a target or returns, so the walk is bounded
//! by the effect count.

use im::Vector;
use tracing::{debug, trace, warn};

use super::query::{get_modifier_context, get_playable_cards, get_target_selector_status, is_card_current};
use super::state::{GamePrompt, ModifierPair, Preselection, TargetSelector, TargetSelectorMode};
use crate::cards::{CardId, KnownCard, TagType};
use crate::core::{GameTable, PlayerId, RequestStatus};
use crate::effects::{dispatch, CardTarget, Effect, FilterContext};
use crate::error::{Result, SelectorError};

/// Events the selector reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorUpdate {
    /// A new request arrived from the server.
    SetRequest(RequestStatus),
    /// Open or answer a prompt.
    SetPrompt(GamePrompt),
    /// Close the target at the cursor as it is.
    ConfirmSelection,
    /// Start over from the current request.
    UndoSelection,
    /// Play a card (or a modifier).
    SelectPlayingCard(KnownCard),
    /// Pick a card for the effect at the cursor.
    AddCardTarget(CardId),
    /// Pick a player for the effect at the cursor.
    AddPlayerTarget(PlayerId),
    /// Pick the player receiving the equipment.
    AddEquipTarget(PlayerId),
}

/// Compute the selector that follows `update`.
///
/// The table is only read; callers install the returned selector.
///
/// # Errors
///
/// Returns an error when the update does not fit the selector's mode or
/// the request names conflicting forced cards.
pub fn reduce(table: &GameTable, update: SelectorUpdate) -> Result<TargetSelector> {
    debug!(mode = ?table.selector.mode, ?update, "selector update");
    let selector = table.selector.clone();

    let next = match update {
        SelectorUpdate::SetRequest(request) => handle_set_request(table, request)?,
        SelectorUpdate::SetPrompt(prompt) => TargetSelector { prompt, ..selector },
        SelectorUpdate::ConfirmSelection => {
            let selector = edit_selector_targets(selector, |effect, targets, index| {
                let confirmed = dispatch::confirm_selection(targets.get(index), effect)?;
                replace_at_cursor(targets, index, confirmed);
                Ok(())
            })?;
            handle_auto_targets(table, selector)?
        }
        SelectorUpdate::UndoSelection => handle_set_request(table, selector.request)?,
        SelectorUpdate::SelectPlayingCard(card) => handle_select_playing_card(table, selector, card)?,
        SelectorUpdate::AddCardTarget(card) => {
            let selector = edit_selector_targets(clear_play_pick(selector), |effect, targets, index| {
                let target = dispatch::append_card_target(targets.get(index), effect, card)?;
                replace_at_cursor(targets, index, target);
                Ok(())
            })?;
            handle_end_preselection(table, selector, true)?
        }
        SelectorUpdate::AddPlayerTarget(player) => {
            let selector = edit_selector_targets(clear_play_pick(selector), |effect, targets, index| {
                let target = dispatch::append_player_target(targets.get(index), effect, player)?;
                replace_at_cursor(targets, index, target);
                Ok(())
            })?;
            handle_end_preselection(table, selector, true)?
        }
        SelectorUpdate::AddEquipTarget(player) => {
            if selector.mode != TargetSelectorMode::Equip {
                return Err(SelectorError::NotInEquipMode(selector.mode));
            }
            TargetSelector {
                targets: Vector::unit(CardTarget::Player(player)),
                mode: TargetSelectorMode::Finish,
                ..selector
            }
        }
    };

    if next.mode != table.selector.mode {
        debug!(from = ?table.selector.mode, to = ?next.mode, "selector mode changed");
    }
    Ok(next)
}

/// Build the selector for a new request.
///
/// A response whose chains start with a card tagged `Preselect` opens in
/// `Preselect` mode with that card seeded.
///
/// # Errors
///
/// Returns `MultiplePreselectCards` when two different forced cards are
/// offered, and `CardNotFound`/`UnknownCard` when a chain names a card
/// the table cannot show.
pub fn handle_set_request(table: &GameTable, request: RequestStatus) -> Result<TargetSelector> {
    let selector = TargetSelector::new(request);
    if !selector.is_response() {
        return Ok(selector);
    }

    let mut preselect: Option<KnownCard> = None;
    for info in selector.request.playable_cards() {
        let card = table.get_card(info.first_card())?;
        if !card.has_tag(TagType::Preselect) {
            continue;
        }
        match preselect.as_ref().map(|first| first.id) {
            None => preselect = Some(card.as_known().ok_or(SelectorError::UnknownCard(card.id))?),
            Some(first) if first != card.id => {
                return Err(SelectorError::MultiplePreselectCards {
                    first,
                    second: card.id,
                });
            }
            Some(_) => {}
        }
    }

    match preselect {
        Some(card) => {
            debug!(card = %card.id, "preselecting forced card");
            let selector = TargetSelector {
                mode: TargetSelectorMode::Preselect,
                preselection: Some(Preselection {
                    card,
                    targets: Vector::new(),
                }),
                ..selector
            };
            handle_auto_targets(table, selector)
        }
        None => Ok(selector),
    }
}

fn clear_play_pick(selector: TargetSelector) -> TargetSelector {
    if matches!(selector.prompt, GamePrompt::PlayPick { .. }) {
        TargetSelector {
            prompt: GamePrompt::None,
            ..selector
        }
    } else {
        selector
    }
}

/// Drop everything from the cursor on and put `target` there.
fn replace_at_cursor(targets: &mut Vector<CardTarget>, index: usize, target: CardTarget) {
    targets.truncate(index);
    targets.push_back(target);
}

/// Run `edit` on the target list the mode makes active.
///
/// `edit` receives the effect at the cursor, the list and the cursor.
fn edit_selector_targets(
    mut selector: TargetSelector,
    edit: impl FnOnce(&Effect, &mut Vector<CardTarget>, usize) -> Result<()>,
) -> Result<TargetSelector> {
    let (effect, index) = {
        let status = get_target_selector_status(&selector);
        let effect = status.current_effect().cloned().ok_or(SelectorError::NoPendingEffect {
            index: status.index,
            len: status.effects.len(),
        })?;
        (effect, status.index)
    };

    let mode = selector.mode;
    let targets = match mode {
        TargetSelectorMode::Preselect => selector.preselection.as_mut().map(|p| &mut p.targets),
        TargetSelectorMode::Modifier => selector.modifiers.back_mut().map(|m| &mut m.targets),
        TargetSelectorMode::Target => Some(&mut selector.targets),
        _ => None,
    }
    .ok_or(SelectorError::NotInTargetingMode(mode))?;

    edit(&effect, targets, index)?;
    Ok(selector)
}

/// Fill in forced targets until input is needed or the list is complete.
fn handle_auto_targets(table: &GameTable, mut selector: TargetSelector) -> Result<TargetSelector> {
    let bound = get_target_selector_status(&selector).effects.len() + 1;
    for _ in 0..bound {
        let status = get_target_selector_status(&selector);
        if status.is_complete() {
            return match selector.mode {
                TargetSelectorMode::Preselect => handle_end_preselection(table, selector, false),
                TargetSelectorMode::Target => Ok(selector.with_mode(TargetSelectorMode::Finish)),
                TargetSelectorMode::Modifier => handle_auto_select(table, selector),
                _ => Ok(selector),
            };
        }
        if status.index < status.targets.len() {
            return Ok(selector);
        }
        let Some(effect) = status.current_effect() else {
            return Ok(selector);
        };
        let Some(target) = dispatch::build_auto_target(FilterContext::new(table, &selector), effect) else {
            return Ok(selector);
        };
        trace!(?target, index = status.index, "auto target");
        selector = edit_selector_targets(selector, |_, targets, _| {
            targets.push_back(target);
            Ok(())
        })?;
    }
    warn!(mode = ?selector.mode, "auto targets did not settle");
    Ok(selector)
}

/// Leave `Preselect` once its card has a target or is complete.
///
/// `remove` is set when the player picked a target: the card is then
/// committed. When the walk completes the card by itself, a normal card
/// is set aside in `Middle` and its targets reused if it gets played.
fn handle_end_preselection(table: &GameTable, selector: TargetSelector, remove: bool) -> Result<TargetSelector> {
    let preselection = match (&selector.mode, &selector.preselection) {
        (TargetSelectorMode::Preselect, Some(preselection)) => preselection.clone(),
        _ => return handle_auto_targets(table, selector),
    };

    if preselection.card.is_modifier(selector.is_response()) {
        let next = TargetSelector {
            modifiers: Vector::unit(ModifierPair {
                card: preselection.card.clone(),
                targets: preselection.targets.clone(),
            }),
            preselection: if remove { None } else { Some(preselection) },
            mode: TargetSelectorMode::Modifier,
            ..selector
        };
        handle_auto_targets(table, next)
    } else if remove {
        let next = TargetSelector {
            playing_card: Some(preselection.card),
            targets: preselection.targets,
            preselection: None,
            modifiers: Vector::new(),
            mode: TargetSelectorMode::Target,
            ..selector
        };
        handle_auto_targets(table, next)
    } else {
        Ok(selector.with_mode(TargetSelectorMode::Middle))
    }
}

/// Settle in `Middle`, then play the card the modifier chain leads to.
fn handle_auto_select(table: &GameTable, selector: TargetSelector) -> Result<TargetSelector> {
    let selector = selector.with_mode(TargetSelectorMode::Middle);
    if !table.config.auto_select {
        return Ok(selector);
    }

    let next_card = get_modifier_context(&selector, |c| c.playing_card)
        .or_else(|| get_modifier_context(&selector, |c| c.repeat_card));
    let Some(card_id) = next_card else {
        return Ok(selector);
    };
    let Some(card) = table.card(card_id).and_then(|card| card.as_known()) else {
        return Ok(selector);
    };
    if is_card_current(&selector, card.id) || !get_playable_cards(&selector).contains(&card.id) {
        return Ok(selector);
    }

    debug!(card = %card.id, "auto selecting card");
    handle_select_playing_card(table, selector, card)
}

fn handle_select_playing_card(table: &GameTable, selector: TargetSelector, card: KnownCard) -> Result<TargetSelector> {
    let reused = selector
        .preselection
        .as_ref()
        .filter(|p| p.card.id == card.id)
        .map(|p| p.targets.clone())
        .unwrap_or_default();

    let selector = TargetSelector {
        prompt: GamePrompt::None,
        preselection: None,
        ..selector
    };

    if card.is_equip_card() {
        let mode = if card.data.equip_target.is_empty() {
            TargetSelectorMode::Finish
        } else {
            TargetSelectorMode::Equip
        };
        Ok(TargetSelector {
            playing_card: Some(card),
            mode,
            ..selector
        })
    } else if card.is_modifier(selector.is_response()) {
        let mut modifiers = selector.modifiers.clone();
        modifiers.push_back(ModifierPair { card, targets: reused });
        handle_auto_targets(
            table,
            TargetSelector {
                modifiers,
                mode: TargetSelectorMode::Modifier,
                ..selector
            },
        )
    } else {
        handle_auto_targets(
            table,
            TargetSelector {
                playing_card: Some(card),
                targets: reused,
                mode: TargetSelectorMode::Target,
                ..selector
            },
        )
    }
}
