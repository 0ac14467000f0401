//! Pockets: the places a card can sit.
//!
//! A pocket is either owned by a player (hand, table, character) or
//! shared by the whole table (decks, selection, shop, train).

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Kind of pocket a card sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PocketType {
    PlayerHand,
    PlayerTable,
    PlayerCharacter,
    PlayerBackup,
    MainDeck,
    DiscardPile,
    Selection,
    ShopDeck,
    ShopSelection,
    HiddenDeck,
    Train,
    Stations,
}

impl PocketType {
    /// Check if pockets of this type belong to a player.
    #[must_use]
    pub const fn is_player_pocket(self) -> bool {
        matches!(
            self,
            PocketType::PlayerHand
                | PocketType::PlayerTable
                | PocketType::PlayerCharacter
                | PocketType::PlayerBackup
        )
    }
}

/// A concrete pocket: type plus owner for player pockets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PocketId {
    pub pocket: PocketType,
    #[serde(default)]
    pub player: Option<PlayerId>,
}

impl PocketId {
    /// Create a player-owned pocket.
    #[must_use]
    pub const fn player(pocket: PocketType, player: PlayerId) -> Self {
        Self { pocket, player: Some(player) }
    }

    /// Create a shared table pocket.
    #[must_use]
    pub const fn table(pocket: PocketType) -> Self {
        Self { pocket, player: None }
    }
}

impl std::fmt::Display for PocketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.player {
            Some(player) => write!(f, "{:?}({})", self.pocket, player),
            None => write!(f, "{:?}", self.pocket),
        }
    }
}
