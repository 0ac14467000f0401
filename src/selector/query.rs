//! Read-only questions about a selector.
//!
//! The UI asks these to highlight cards and players and to enable the
//! confirm and undo buttons. The reducer asks the same ones so both sides
//! agree on what is legal.

use im::Vector;
use rustc_hash::FxHashSet;

use super::reducer::handle_set_request;
use super::state::{ModifierPair, TargetSelector, TargetSelectorMode};
use crate::cards::{Card, CardId, KnownCard};
use crate::core::{GameTable, ModifierContext, PlayableCardInfo, Player};
use crate::effects::dispatch;
use crate::effects::{CardTarget, Effect, FilterContext};

/// Where the selection cursor is.
#[derive(Clone, Copy, Debug)]
pub struct TargetSelectorStatus<'a> {
    /// Effects of the card being targeted.
    pub effects: &'a [Effect],
    /// Targets gathered for it so far.
    pub targets: &'a Vector<CardTarget>,
    /// Effect currently being filled.
    pub index: usize,
}

impl<'a> TargetSelectorStatus<'a> {
    /// Effect at the cursor, if any is left.
    #[must_use]
    pub fn current_effect(&self) -> Option<&'a Effect> {
        self.effects.get(self.index)
    }

    /// Open target at the cursor, if the current effect has one.
    #[must_use]
    pub fn open_target(&self) -> Option<&'a CardTarget> {
        self.targets.get(self.index)
    }

    /// Check if every effect has a closed target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.index >= self.effects.len()
    }
}

fn active_card_and_targets(selector: &TargetSelector) -> (Option<&KnownCard>, &Vector<CardTarget>) {
    match selector.mode {
        TargetSelectorMode::Preselect => {
            if let Some(preselection) = &selector.preselection {
                return (Some(&preselection.card), &preselection.targets);
            }
        }
        TargetSelectorMode::Modifier => {
            if let Some(modifier) = selector.modifiers.back() {
                return (Some(&modifier.card), &modifier.targets);
            }
        }
        _ => {}
    }
    (selector.playing_card.as_ref(), &selector.targets)
}

/// Get the active effect list, its targets and the cursor.
///
/// The cursor is `targets.len()`, or one less while the last target is
/// still open for more picks.
#[must_use]
pub fn get_target_selector_status(selector: &TargetSelector) -> TargetSelectorStatus<'_> {
    let (card, targets) = active_card_and_targets(selector);
    let effects = card.map_or(&[][..], |card| card.data.effects_for(selector.is_response()));

    let mut index = targets.len();
    if let Some(last) = targets.back() {
        if effects
            .get(index - 1)
            .is_some_and(|effect| dispatch::is_target_open(last, effect))
        {
            index -= 1;
        }
    }
    TargetSelectorStatus { effects, targets, index }
}

/// Check if the selector answers a server request.
#[must_use]
pub fn is_response(selector: &TargetSelector) -> bool {
    selector.is_response()
}

/// Check if a card is part of the selection in progress.
#[must_use]
pub fn is_card_current(selector: &TargetSelector, card: CardId) -> bool {
    selector.playing_card.as_ref().is_some_and(|c| c.id == card)
        || selector.modifiers.iter().any(|m| m.card.id == card)
        || selector.preselection.as_ref().is_some_and(|p| p.card.id == card)
}

fn chain_matches(info: &PlayableCardInfo, modifiers: &Vector<ModifierPair>) -> bool {
    info.modifiers.len() >= modifiers.len()
        && modifiers
            .iter()
            .zip(&info.modifiers)
            .all(|(modifier, id)| modifier.card.id == *id)
}

/// Cards that can be played next, given the modifiers already played.
///
/// Empty once a card is being played.
#[must_use]
pub fn get_playable_cards(selector: &TargetSelector) -> Vec<CardId> {
    if selector.playing_card.is_some() {
        return Vec::new();
    }
    let depth = selector.modifiers.len();
    let mut seen = FxHashSet::default();
    selector
        .request
        .playable_cards()
        .iter()
        .filter(|info| chain_matches(info, &selector.modifiers))
        .filter_map(|info| info.card_at(depth))
        .filter(|card| seen.insert(*card))
        .collect()
}

/// Read a value from the context of the chains matching the current
/// selection. The first chain providing the value wins.
pub fn get_modifier_context<T>(selector: &TargetSelector, field: impl Fn(&ModifierContext) -> Option<T>) -> Option<T> {
    if selector.modifiers.is_empty() && selector.playing_card.is_none() {
        return None;
    }
    let playing = selector.playing_card.as_ref().map(|c| c.id);
    selector
        .request
        .playable_cards()
        .iter()
        .filter(|info| chain_matches(info, &selector.modifiers))
        .filter(|info| playing.map_or(true, |id| info.card == id))
        .find_map(|info| field(&info.context))
}

/// Check if a card can be clicked to play it.
#[must_use]
pub fn selector_can_play_card(selector: &TargetSelector, card: &Card) -> bool {
    selector.mode.is_picking_card()
        && card.is_known()
        && selector.playing_card.as_ref().map_or(true, |c| c.id != card.id)
        && !selector.modifiers.iter().any(|m| m.card.id == card.id)
        && get_playable_cards(selector).contains(&card.id)
}

/// Check if a card is a legal target for the effect at the cursor.
#[must_use]
pub fn is_valid_card_target(table: &GameTable, card: &Card) -> bool {
    let selector = &table.selector;
    if !selector.mode.is_targeting() {
        return false;
    }
    let status = get_target_selector_status(selector);
    status.current_effect().is_some_and(|effect| {
        dispatch::is_valid_card_target(FilterContext::new(table, selector), effect, status.open_target(), card)
    })
}

/// Check if a player is a legal target for the effect at the cursor.
#[must_use]
pub fn is_valid_player_target(table: &GameTable, player: &Player) -> bool {
    let selector = &table.selector;
    if !selector.mode.is_targeting() {
        return false;
    }
    let status = get_target_selector_status(selector);
    status.current_effect().is_some_and(|effect| {
        dispatch::is_valid_player_target(FilterContext::new(table, selector), effect, player)
    })
}

/// Check if a player can receive the equipment being played.
#[must_use]
pub fn is_valid_equip_target(table: &GameTable, player: &Player) -> bool {
    let selector = &table.selector;
    if selector.mode != TargetSelectorMode::Equip {
        return false;
    }
    selector.playing_card.as_ref().is_some_and(|card| {
        FilterContext::new(table, selector).player_matches(&card.data.equip_target, player)
    })
}

/// Check if the target at the cursor can be confirmed as it is.
#[must_use]
pub fn selector_can_confirm(selector: &TargetSelector) -> bool {
    if !selector.mode.is_targeting() || !selector.prompt.is_none() {
        return false;
    }
    let status = get_target_selector_status(selector);
    status
        .current_effect()
        .is_some_and(|effect| dispatch::is_confirmable(status.open_target(), effect))
}

/// Check if undoing would change anything.
///
/// Undo rebuilds the selector from its request, so it is pointless when
/// the rebuilt selector equals the current one.
#[must_use]
pub fn selector_can_undo(table: &GameTable) -> bool {
    let selector = &table.selector;
    handle_set_request(table, selector.request.clone()).is_ok_and(|fresh| fresh != *selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardData;
    use crate::core::{PlayerId, PocketId, PocketType, RequestStatus, StatusReadyArgs};
    use crate::effects::CardList;
    use std::sync::Arc;

    fn known(id: u32, data: CardData) -> KnownCard {
        KnownCard {
            id: CardId(id),
            pocket: Some(PocketId::player(PocketType::PlayerHand, PlayerId(1))),
            data: Arc::new(data),
        }
    }

    fn ready(chains: Vec<PlayableCardInfo>) -> TargetSelector {
        TargetSelector::new(RequestStatus::Ready(StatusReadyArgs { play_cards: chains }))
    }

    #[test]
    fn test_status_empty_selector() {
        let selector = TargetSelector::default();
        let status = get_target_selector_status(&selector);
        assert!(status.effects.is_empty());
        assert_eq!(status.index, 0);
        assert!(status.is_complete());
    }

    #[test]
    fn test_status_index_stays_on_open_target() {
        let mut selector = ready(vec![]).with_mode(TargetSelectorMode::Target);
        selector.playing_card = Some(known(1, CardData::new("brawl").with_effect(Effect::cards(2))));

        selector.targets.push_back(CardTarget::Cards(CardList::from_slice(&[CardId(5)])));
        assert_eq!(get_target_selector_status(&selector).index, 0);

        selector.targets = Vector::unit(CardTarget::Cards(CardList::from_slice(&[CardId(5), CardId(6)])));
        assert_eq!(get_target_selector_status(&selector).index, 1);
    }

    #[test]
    fn test_status_follows_mode() {
        let mut selector = ready(vec![]).with_mode(TargetSelectorMode::Modifier);
        selector.playing_card = Some(known(1, CardData::new("bang").with_effect(Effect::player())));
        selector
            .modifiers
            .push_back(ModifierPair::new(known(2, CardData::new("mod").with_effect(Effect::none()).with_effect(Effect::none()))));

        let status = get_target_selector_status(&selector);
        assert_eq!(status.effects.len(), 2);
    }

    #[test]
    fn test_status_uses_response_effects() {
        use crate::core::RequestArgs;
        let mut selector =
            TargetSelector::new(RequestStatus::Response(RequestArgs::default())).with_mode(TargetSelectorMode::Target);
        selector.playing_card = Some(known(
            1,
            CardData::new("missed").with_effect(Effect::player()).with_response(Effect::none()).with_response(Effect::none()),
        ));
        assert_eq!(get_target_selector_status(&selector).effects.len(), 2);
    }

    #[test]
    fn test_playable_cards_follow_modifier_chain() {
        let mut selector = ready(vec![
            PlayableCardInfo::new(CardId(1)),
            PlayableCardInfo::new(CardId(2)).with_modifiers([CardId(9)]),
            PlayableCardInfo::new(CardId(3)).with_modifiers([CardId(9)]),
            PlayableCardInfo::new(CardId(4)).with_modifiers([CardId(8)]),
        ]);
        assert_eq!(get_playable_cards(&selector), vec![CardId(1), CardId(9), CardId(8)]);

        selector.modifiers.push_back(ModifierPair::new(known(9, CardData::new("mod"))));
        assert_eq!(get_playable_cards(&selector), vec![CardId(2), CardId(3)]);

        selector.playing_card = Some(known(2, CardData::new("bang")));
        assert!(get_playable_cards(&selector).is_empty());
    }

    #[test]
    fn test_modifier_context() {
        let context = ModifierContext {
            card_choice: Some(CardId(9)),
            ..ModifierContext::default()
        };
        let mut selector = ready(vec![
            PlayableCardInfo::new(CardId(1)),
            PlayableCardInfo::new(CardId(2)).with_modifiers([CardId(9)]).with_context(context),
        ]);
        assert_eq!(get_modifier_context(&selector, |c| c.card_choice), None);

        selector.modifiers.push_back(ModifierPair::new(known(9, CardData::new("choice"))));
        assert_eq!(get_modifier_context(&selector, |c| c.card_choice), Some(CardId(9)));
        assert_eq!(get_modifier_context(&selector, |c| c.playing_card), None);
    }

    #[test]
    fn test_is_card_current() {
        let mut selector = ready(vec![]);
        assert!(!is_card_current(&selector, CardId(1)));
        selector.modifiers.push_back(ModifierPair::new(known(1, CardData::new("mod"))));
        assert!(is_card_current(&selector, CardId(1)));
        selector.playing_card = Some(known(2, CardData::new("bang")));
        assert!(is_card_current(&selector, CardId(2)));
    }

    #[test]
    fn test_can_play_card_requires_known_playable() {
        let selector = ready(vec![PlayableCardInfo::new(CardId(1))]);
        let pocket = PocketId::player(PocketType::PlayerHand, PlayerId(1));

        let card = Card::known(CardId(1), pocket, CardData::new("beer"));
        assert!(selector_can_play_card(&selector, &card));

        let other = Card::known(CardId(2), pocket, CardData::new("beer"));
        assert!(!selector_can_play_card(&selector, &other));

        let hidden = Card::unknown(CardId(1), pocket);
        assert!(!selector_can_play_card(&selector, &hidden));

        let targeting = selector.with_mode(TargetSelectorMode::Target);
        assert!(!selector_can_play_card(&targeting, &card));
    }

    #[test]
    fn test_can_confirm_optional_effect() {
        let mut selector = ready(vec![]).with_mode(TargetSelectorMode::Target);
        selector.playing_card = Some(known(1, CardData::new("pick").with_effect(Effect::max_cards(2))));
        assert!(selector_can_confirm(&selector));

        selector.playing_card = Some(known(1, CardData::new("bang").with_effect(Effect::player())));
        assert!(!selector_can_confirm(&selector));

        let finished = selector.with_mode(TargetSelectorMode::Finish);
        assert!(!selector_can_confirm(&finished));
    }
}
