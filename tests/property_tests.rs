//! Property tests for the selector reducer.

mod common;

use proptest::prelude::*;

use bang_selector::cards::{CardData, CardId};
use bang_selector::core::{GameTable, PlayerId};
use bang_selector::effects::{CardFilter, Effect, PlayerFilter, TargetType};
use bang_selector::selector::{
    get_target_selector_status, handle_set_request, is_valid_card_target, is_valid_player_target, reduce,
    selector_can_confirm, SelectorUpdate, TargetSelectorMode,
};

use common::{add_hand_card, add_table_card, ready, table_with_players};

/// Effects with exactly one legal target on the two-player fixture.
fn forced_effect() -> impl Strategy<Value = Effect> {
    prop_oneof![
        Just(Effect::none()),
        Just(Effect::new(TargetType::Players)),
        Just(Effect::player().with_player_filter(PlayerFilter::NotSelf)),
        Just(Effect::new(TargetType::ConditionalPlayer).with_player_filter(PlayerFilter::NotSelf)),
        Just(Effect::card().with_card_filter(CardFilter::Table)),
        Just(Effect::cards(1).with_card_filter(CardFilter::Table)),
    ]
}

/// Effects with several legal targets on the four-player fixture.
fn open_effect() -> impl Strategy<Value = Effect> {
    prop_oneof![
        Just(Effect::none()),
        Just(Effect::player()),
        Just(Effect::player().with_player_filter(PlayerFilter::NotSelf)),
        Just(Effect::card().with_card_filter(CardFilter::Table)),
        (2u8..4).prop_map(|n| Effect::cards(n).with_card_filter(CardFilter::Table)),
        (1u8..4).prop_map(|n| Effect::max_cards(n).with_card_filter(CardFilter::Table)),
    ]
}

/// Player input at some step: a player click, a card click or confirm,
/// with an index into the legal candidates.
#[derive(Clone, Copy, Debug)]
enum Pick {
    Player(usize),
    Card(usize),
    Confirm,
}

fn pick() -> impl Strategy<Value = Pick> {
    prop_oneof![
        (0usize..8).prop_map(Pick::Player),
        (0usize..8).prop_map(Pick::Card),
        Just(Pick::Confirm),
    ]
}

fn open_table(effects: Vec<Effect>) -> GameTable {
    let mut table = table_with_players(4);
    for id in 20..26 {
        add_table_card(&mut table, id, 2 + id % 3);
    }
    let data = effects.into_iter().fold(CardData::new("combo"), CardData::with_effect);
    let card = add_hand_card(&mut table, 10, data);
    table.selector = handle_set_request(&table, ready(&[10])).unwrap();
    table.selector = reduce(&table, SelectorUpdate::SelectPlayingCard(card)).unwrap();
    table
}

/// Turn a pick into an update, if the pick is legal right now.
fn pick_update(table: &GameTable, pick: Pick) -> Option<SelectorUpdate> {
    match pick {
        Pick::Player(n) => {
            let mut players: Vec<PlayerId> = table
                .players
                .values()
                .filter(|p| is_valid_player_target(table, p))
                .map(|p| p.id)
                .collect();
            players.sort_unstable();
            (!players.is_empty()).then(|| SelectorUpdate::AddPlayerTarget(players[n % players.len()]))
        }
        Pick::Card(n) => {
            let mut cards: Vec<CardId> = table
                .cards
                .values()
                .filter(|c| is_valid_card_target(table, c))
                .map(|c| c.id)
                .collect();
            cards.sort_unstable();
            (!cards.is_empty()).then(|| SelectorUpdate::AddCardTarget(cards[n % cards.len()]))
        }
        Pick::Confirm => selector_can_confirm(&table.selector).then_some(SelectorUpdate::ConfirmSelection),
    }
}

proptest! {
    /// Invariant: with one legal target per effect, playing the card
    /// finishes without any input.
    #[test]
    fn auto_targets_converge(effects in prop::collection::vec(forced_effect(), 0..6)) {
        let mut table = table_with_players(2);
        add_table_card(&mut table, 20, 2);
        let count = effects.len();
        let data = effects.into_iter().fold(CardData::new("forced"), CardData::with_effect);
        let card = add_hand_card(&mut table, 10, data);

        let selector = reduce(&table, SelectorUpdate::SelectPlayingCard(card)).unwrap();
        prop_assert_eq!(selector.mode, TargetSelectorMode::Finish);
        prop_assert_eq!(selector.targets.len(), count);
    }

    /// Invariant: the status index never moves back while picking, and
    /// undo from any reached state equals a fresh request.
    #[test]
    fn picks_advance_and_undo_resets(
        effects in prop::collection::vec(open_effect(), 1..5),
        picks in prop::collection::vec(pick(), 0..12),
    ) {
        let mut table = open_table(effects);
        let request = table.selector.request.clone();
        let mut index = get_target_selector_status(&table.selector).index;

        for pick in picks {
            if table.selector.mode != TargetSelectorMode::Target {
                break;
            }
            let Some(update) = pick_update(&table, pick) else {
                continue;
            };
            table.selector = reduce(&table, update).unwrap();

            let next = get_target_selector_status(&table.selector).index;
            prop_assert!(next >= index, "index went from {} to {}", index, next);
            index = next;

            let undone = reduce(&table, SelectorUpdate::UndoSelection).unwrap();
            prop_assert_eq!(undone, handle_set_request(&table, request.clone()).unwrap());
        }
    }
}
