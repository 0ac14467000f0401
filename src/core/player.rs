//! Players seated at the table.
//!
//! ## PlayerId
//!
//! Server-assigned player identifier. Ids are opaque: they are not seat
//! indices, seat order lives in `GameTable::seats`.
//!
//! ## Player
//!
//! Status (hp, flags, range modifiers) and the pockets a player owns.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pocket::PocketType;
use crate::cards::CardId;

/// Player identifier assigned by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Status flags reported by the server for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerFlag {
    Dead,
    Ghost,
    Removed,
    Winner,
    Disconnected,
}

/// Mutable per-player status.
///
/// Range values follow the usual convention: `weapon_range` is the base
/// reach of the player's weapon, `range_mod` extends every reach check
/// made *by* the player and `distance_mod` increases the distance others
/// see *to* the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub hp: i32,
    #[serde(default)]
    pub flags: SmallVec<[PlayerFlag; 2]>,
    #[serde(default = "default_weapon_range")]
    pub weapon_range: i32,
    #[serde(default)]
    pub range_mod: i32,
    #[serde(default)]
    pub distance_mod: i32,
}

fn default_weapon_range() -> i32 {
    1
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self {
            hp: 4,
            flags: SmallVec::new(),
            weapon_range: default_weapon_range(),
            range_mod: 0,
            distance_mod: 0,
        }
    }
}

/// Pockets owned by a single player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPockets {
    #[serde(default)]
    pub hand: Vector<CardId>,
    #[serde(default)]
    pub table: Vector<CardId>,
    #[serde(default)]
    pub character: Vector<CardId>,
}

/// A player at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub status: PlayerStatus,
    #[serde(default)]
    pub pockets: PlayerPockets,
}

impl Player {
    /// Create a player with default status and empty pockets.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            status: PlayerStatus::default(),
            pockets: PlayerPockets::default(),
        }
    }

    /// Add a status flag (builder pattern).
    #[must_use]
    pub fn with_flag(mut self, flag: PlayerFlag) -> Self {
        if !self.has_flag(flag) {
            self.status.flags.push(flag);
        }
        self
    }

    /// Check if the player has a status flag.
    #[must_use]
    pub fn has_flag(&self, flag: PlayerFlag) -> bool {
        self.status.flags.contains(&flag)
    }

    /// A ghost keeps playing after death.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.has_flag(PlayerFlag::Removed)
            && (!self.has_flag(PlayerFlag::Dead) || self.has_flag(PlayerFlag::Ghost))
    }

    /// Check if the player holds any card in hand or on the table.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.pockets.hand.is_empty() || !self.pockets.table.is_empty()
    }

    /// First character card, the one that stands for the player.
    #[must_use]
    pub fn character_card(&self) -> Option<CardId> {
        self.pockets.character.front().copied()
    }

    /// The card list kept for a player-owned pocket.
    ///
    /// `None` for pockets the player does not track (backup characters and
    /// the shared decks).
    pub fn pocket_mut(&mut self, pocket: PocketType) -> Option<&mut Vector<CardId>> {
        match pocket {
            PocketType::PlayerHand => Some(&mut self.pockets.hand),
            PocketType::PlayerTable => Some(&mut self.pockets.table),
            PocketType::PlayerCharacter => Some(&mut self.pockets.character),
            _ => None,
        }
    }
}
