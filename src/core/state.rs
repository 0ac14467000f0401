//! Game table: the snapshot the selector reads.
//!
//! ## GameTable
//!
//! Everything the client knows about the game:
//! - Cards and their pockets
//! - Players, their status and seat order
//! - Table status flags and the running animation
//! - Selector configuration and the current `TargetSelector`
//!
//! The table is owned by the UI layer and updated from server messages.
//! The selector core only ever reads it, and replaces `selector` with
//! the value the reducer returns.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::animation::Animation;
use super::config::SelectorConfig;
use super::player::{Player, PlayerId};
use super::pocket::PocketId;
use crate::cards::{Card, CardId};
use crate::error::{Result, SelectorError};
use crate::selector::TargetSelector;

/// Table-wide status flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFlag {
    GameOver,
}

/// Table-wide status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStatus {
    pub flags: SmallVec<[TableFlag; 2]>,
    pub train_position: i32,
}

/// Snapshot of the whole table.
///
/// Uses `im` persistent maps so a snapshot is O(1) to clone.
#[derive(Clone, Debug, Default)]
pub struct GameTable {
    pub cards: ImHashMap<CardId, Card>,
    pub players: ImHashMap<PlayerId, Player>,

    /// Every seated player in seat order, dead ones included.
    pub seats: Vector<PlayerId>,

    /// Alive players in seat order. Kept in sync with `seats` by
    /// `add_player` and `update_player`.
    pub alive_players: Vector<PlayerId>,

    /// The player using this client. `None` for spectators.
    pub self_player: Option<PlayerId>,

    pub status: TableStatus,

    /// Animation currently playing, if any.
    pub animation: Option<Animation>,

    pub config: SelectorConfig,

    pub selector: TargetSelector,
}

impl GameTable {
    /// Create an empty table.
    #[must_use]
    pub fn new(self_player: Option<PlayerId>) -> Self {
        Self {
            self_player,
            ..Self::default()
        }
    }

    /// Set the configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: SelectorConfig) -> Self {
        self.config = config;
        self
    }

    // === Players ===

    /// Seat a player at the end of the seat order.
    ///
    /// Re-adding a seated player replaces it in place.
    pub fn add_player(&mut self, player: Player) {
        if !self.seats.contains(&player.id) {
            self.seats.push_back(player.id);
        }
        self.players.insert(player.id, player);
        self.sync_alive_players();
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Get a player, failing if the id is unknown to the table.
    pub fn get_player(&self, id: PlayerId) -> Result<&Player> {
        self.player(id).ok_or(SelectorError::PlayerNotFound(id))
    }

    /// Modify a player in place. No-op for unknown ids.
    pub fn update_player(&mut self, id: PlayerId, update: impl FnOnce(&mut Player)) {
        let Some(player) = self.players.get_mut(&id) else {
            return;
        };
        let was_alive = player.is_alive();
        update(player);
        if player.is_alive() != was_alive {
            self.sync_alive_players();
        }
    }

    fn sync_alive_players(&mut self) {
        let players = &self.players;
        self.alive_players = self
            .seats
            .iter()
            .copied()
            .filter(|id| players.get(id).is_some_and(Player::is_alive))
            .collect();
    }

    // === Cards ===

    /// Add or move a card, keeping its owners' pocket lists in sync.
    ///
    /// A card already on the table leaves its previous pocket list first.
    pub fn add_card(&mut self, card: Card) {
        let previous = self.cards.get(&card.id).and_then(|old| old.pocket);
        if previous != card.pocket {
            if let Some(PocketId { pocket, player: Some(owner) }) = previous {
                self.update_player(owner, |player| {
                    if let Some(list) = player.pocket_mut(pocket) {
                        list.retain(|id| *id != card.id);
                    }
                });
            }
        }
        if let Some(PocketId { pocket, player: Some(owner) }) = card.pocket {
            self.update_player(owner, |player| {
                if let Some(list) = player.pocket_mut(pocket) {
                    if !list.contains(&card.id) {
                        list.push_back(card.id);
                    }
                }
            });
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card, failing if the id is unknown to the table.
    pub fn get_card(&self, id: CardId) -> Result<&Card> {
        self.card(id).ok_or(SelectorError::CardNotFound(id))
    }

    // === Status ===

    /// Check a table flag.
    #[must_use]
    pub fn has_flag(&self, flag: TableFlag) -> bool {
        self.status.flags.contains(&flag)
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.has_flag(TableFlag::GameOver)
    }

    /// Replace the selector, returning the table (builder pattern).
    #[must_use]
    pub fn with_selector(mut self, selector: TargetSelector) -> Self {
        self.selector = selector;
        self
    }
}
