//! Table animations.
//!
//! The selector core never plays animations. It only needs to know that
//! one is running, because input is blocked until it ends.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::pocket::PocketType;
use crate::cards::CardId;

/// An animation currently played by the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    MoveCard {
        card: CardId,
        pocket: PocketType,
        player: Option<PlayerId>,
        duration: u32,
    },
    MoveCubes {
        num_cubes: u32,
        origin_card: Option<CardId>,
        target_card: Option<CardId>,
        duration: u32,
    },
    DeckShuffle {
        pocket: PocketType,
        cards: Vec<CardId>,
        duration: u32,
    },
    MovePlayers {
        players: Vec<PlayerId>,
        duration: u32,
    },
    MoveTrain {
        position: i32,
        duration: u32,
    },
}
