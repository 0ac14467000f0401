//! Per target-kind selection logic.
//!
//! For each `TargetType` this module knows how to:
//! - validate a clicked card or player
//! - append the click to the target list
//! - build a target automatically when the choice is forced
//! - confirm a partially filled target
//!
//! All functions are pure over a table/selector snapshot.

use super::effect::{CardList, CardTarget, Effect, TargetType};
use super::targeting::FilterContext;
use crate::cards::{Card, CardId};
use crate::core::{Player, PlayerId};
use crate::error::{Result, SelectorError};
use crate::selector::query::is_card_current;

/// Check if a target can still take more cards.
///
/// An open target keeps the selection cursor on its effect.
#[must_use]
pub fn is_target_open(target: &CardTarget, effect: &Effect) -> bool {
    match (target, effect.target) {
        (CardTarget::Cards(cards), TargetType::Cards { count }) => cards.len() < usize::from(count),
        (CardTarget::MaxCards { cards, open }, TargetType::MaxCards { max }) => {
            *open && cards.len() < usize::from(max)
        }
        _ => false,
    }
}

/// Append a card pick for `effect`.
///
/// `last` is the open target at the cursor, if any. Multi-card kinds
/// extend it; every other kind starts a new target. The returned target
/// replaces whatever sits at the cursor.
pub fn append_card_target(last: Option<&CardTarget>, effect: &Effect, card: CardId) -> Result<CardTarget> {
    match effect.target {
        TargetType::Card => Ok(CardTarget::Card(card)),
        TargetType::ExtraCard => Ok(CardTarget::ExtraCard(Some(card))),
        TargetType::Cards { .. } => {
            let mut cards = match last {
                Some(CardTarget::Cards(cards)) => cards.clone(),
                _ => CardList::new(),
            };
            cards.push(card);
            Ok(CardTarget::Cards(cards))
        }
        TargetType::MaxCards { max } => {
            let mut cards = match last {
                Some(CardTarget::MaxCards { cards, .. }) => cards.clone(),
                _ => CardList::new(),
            };
            cards.push(card);
            let open = cards.len() < usize::from(max);
            Ok(CardTarget::MaxCards { cards, open })
        }
        other => Err(SelectorError::CardTargetNotAccepted(other)),
    }
}

/// Append a player pick for `effect`.
pub fn append_player_target(_last: Option<&CardTarget>, effect: &Effect, player: PlayerId) -> Result<CardTarget> {
    match effect.target {
        TargetType::Player => Ok(CardTarget::Player(player)),
        TargetType::ConditionalPlayer => Ok(CardTarget::ConditionalPlayer(Some(player))),
        other => Err(SelectorError::PlayerTargetNotAccepted(other)),
    }
}

/// Build the target for `effect` when the player has no real choice.
///
/// Returns `None` when the slot needs player input. Singleton candidate
/// sets only resolve with `auto_targets` enabled; targets that need no
/// candidate at all always resolve.
#[must_use]
pub fn build_auto_target(ctx: FilterContext<'_>, effect: &Effect) -> Option<CardTarget> {
    let auto = ctx.table.config.auto_targets;
    match effect.target {
        TargetType::None => Some(CardTarget::None),
        TargetType::Players => Some(CardTarget::Players),
        TargetType::Player => match valid_players(ctx, effect).as_slice() {
            [player] if auto => Some(CardTarget::Player(*player)),
            _ => None,
        },
        TargetType::ConditionalPlayer => match valid_players(ctx, effect).as_slice() {
            [] => Some(CardTarget::ConditionalPlayer(None)),
            [player] if auto => Some(CardTarget::ConditionalPlayer(Some(*player))),
            _ => None,
        },
        TargetType::Card => match valid_cards(ctx, effect, None).as_slice() {
            [card] if auto => Some(CardTarget::Card(*card)),
            _ => None,
        },
        TargetType::ExtraCard => valid_cards(ctx, effect, None)
            .is_empty()
            .then_some(CardTarget::ExtraCard(None)),
        TargetType::Cards { count } => {
            if count == 0 {
                return Some(CardTarget::Cards(CardList::new()));
            }
            let cards = valid_cards(ctx, effect, None);
            (auto && cards.len() == usize::from(count)).then(|| CardTarget::Cards(CardList::from_vec(cards)))
        }
        TargetType::MaxCards { max } => (max == 0 || valid_cards(ctx, effect, None).is_empty()).then(|| {
            CardTarget::MaxCards {
                cards: CardList::new(),
                open: false,
            }
        }),
    }
}

/// Check if the target at the cursor can be confirmed as it is.
#[must_use]
pub fn is_confirmable(last: Option<&CardTarget>, effect: &Effect) -> bool {
    match last {
        Some(target) => matches!(target, CardTarget::MaxCards { .. }) && is_target_open(target, effect),
        None => matches!(effect.target, TargetType::ExtraCard | TargetType::MaxCards { .. }),
    }
}

/// Finalize the target at the cursor.
///
/// Closes an open `MaxCards` target, or produces the empty target of an
/// optional effect when nothing was picked.
pub fn confirm_selection(last: Option<&CardTarget>, effect: &Effect) -> Result<CardTarget> {
    if !is_confirmable(last, effect) {
        return Err(SelectorError::NotConfirmable(effect.target));
    }
    Ok(match (last, effect.target) {
        (Some(CardTarget::MaxCards { cards, .. }), _) => CardTarget::MaxCards {
            cards: cards.clone(),
            open: false,
        },
        (_, TargetType::ExtraCard) => CardTarget::ExtraCard(None),
        _ => CardTarget::MaxCards {
            cards: CardList::new(),
            open: false,
        },
    })
}

/// Check if a card is a legal pick for `effect` at the cursor.
#[must_use]
pub fn is_valid_card_target(ctx: FilterContext<'_>, effect: &Effect, last: Option<&CardTarget>, card: &Card) -> bool {
    effect.target.accepts_cards()
        && !is_card_current(ctx.selector, card.id)
        && !last.is_some_and(|target| target.cards().contains(&card.id))
        && ctx.card_matches(effect, card)
}

/// Check if a player is a legal pick for `effect`.
#[must_use]
pub fn is_valid_player_target(ctx: FilterContext<'_>, effect: &Effect, player: &Player) -> bool {
    effect.target.accepts_players() && ctx.player_matches(&effect.player_filter, player)
}

/// Legal player picks for `effect`, sorted by id.
#[must_use]
pub fn valid_players(ctx: FilterContext<'_>, effect: &Effect) -> Vec<PlayerId> {
    if !effect.target.accepts_players() {
        return Vec::new();
    }
    ctx.matching_players(&effect.player_filter)
}

/// Legal card picks for `effect` given the open target, sorted by id.
#[must_use]
pub fn valid_cards(ctx: FilterContext<'_>, effect: &Effect, last: Option<&CardTarget>) -> Vec<CardId> {
    ctx.matching_cards(|card| is_valid_card_target(ctx, effect, last, card))
}
