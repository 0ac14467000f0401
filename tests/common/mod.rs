//! Shared table fixtures for integration tests.

#![allow(dead_code)]

use bang_selector::cards::{Card, CardData, CardId, KnownCard};
use bang_selector::core::{
    GameTable, PlayableCardInfo, Player, PlayerId, PocketId, PocketType, RequestArgs, RequestStatus,
    StatusReadyArgs,
};

/// The player using the client in every fixture.
pub const ME: PlayerId = PlayerId(1);

/// A table with players `1..=players` seated in order, seen by player 1.
pub fn table_with_players(players: u32) -> GameTable {
    let mut table = GameTable::new(Some(ME));
    for id in 1..=players {
        table.add_player(Player::new(PlayerId(id)));
    }
    table
}

/// Put a known card in player 1's hand.
pub fn add_hand_card(table: &mut GameTable, id: u32, data: CardData) -> KnownCard {
    let card = Card::known(CardId(id), PocketId::player(PocketType::PlayerHand, ME), data);
    table.add_card(card.clone());
    card.as_known().expect("known card")
}

/// Put a plain known card on a player's table.
pub fn add_table_card(table: &mut GameTable, id: u32, owner: u32) {
    table.add_card(Card::known(
        CardId(id),
        PocketId::player(PocketType::PlayerTable, PlayerId(owner)),
        CardData::new("barrel"),
    ));
}

/// Free turn where each card can be played on its own.
pub fn ready(cards: &[u32]) -> RequestStatus {
    RequestStatus::Ready(StatusReadyArgs {
        play_cards: cards.iter().map(|id| PlayableCardInfo::new(CardId(*id))).collect(),
    })
}

/// Request answered by one of the given chains.
pub fn respond(chains: Vec<PlayableCardInfo>) -> RequestStatus {
    RequestStatus::Response(RequestArgs {
        respond_cards: chains,
        ..RequestArgs::default()
    })
}
