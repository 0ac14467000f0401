//! Card instances on the table.
//!
//! A `Card` is whatever the client knows about one card id: where it sits
//! and, if it is face up for this client, its `CardData`. `KnownCard` is
//! the same card with the data guaranteed, which is what the selector
//! stores for the card being played.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{CardData, CardId, TagType};
use crate::core::{PlayerId, PocketId, PocketType};

/// A card as seen by this client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Current pocket. `None` while the card is off the table.
    #[serde(default)]
    pub pocket: Option<PocketId>,

    /// Card data, present only for face-up cards.
    #[serde(default)]
    pub data: Option<Arc<CardData>>,
}

impl Card {
    /// Create a face-up card.
    #[must_use]
    pub fn known(id: CardId, pocket: PocketId, data: CardData) -> Self {
        Self {
            id,
            pocket: Some(pocket),
            data: Some(Arc::new(data)),
        }
    }

    /// Create a face-down card.
    #[must_use]
    pub fn unknown(id: CardId, pocket: PocketId) -> Self {
        Self {
            id,
            pocket: Some(pocket),
            data: None,
        }
    }

    /// Check if the card's data is visible.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.data.is_some()
    }

    /// View as a known card, if face up.
    #[must_use]
    pub fn as_known(&self) -> Option<KnownCard> {
        self.data.as_ref().map(|data| KnownCard {
            id: self.id,
            pocket: self.pocket,
            data: Arc::clone(data),
        })
    }

    /// Pocket type the card sits in.
    #[must_use]
    pub fn pocket_type(&self) -> Option<PocketType> {
        self.pocket.map(|p| p.pocket)
    }

    /// Player owning the card's pocket. `None` for table pockets.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.pocket.and_then(|p| p.player)
    }

    /// Check if the card is face up and carries a tag.
    ///
    /// Unknown cards never carry tags.
    #[must_use]
    pub fn has_tag(&self, tag: TagType) -> bool {
        self.data.as_ref().is_some_and(|data| data.has_tag(tag))
    }
}

/// A card whose data is known.
///
/// Cloning is cheap: the data is shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnownCard {
    pub id: CardId,
    pub pocket: Option<PocketId>,
    pub data: Arc<CardData>,
}

impl KnownCard {
    /// Check if playing this card equips it instead of resolving effects.
    ///
    /// Equipment is played from the hand, the shop or the train.
    #[must_use]
    pub fn is_equip_card(&self) -> bool {
        self.data.color.is_equipment()
            && matches!(
                self.pocket.map(|p| p.pocket),
                Some(PocketType::PlayerHand | PocketType::ShopSelection | PocketType::Train)
            )
    }

    /// Check if this card acts as a modifier in the given context.
    #[must_use]
    pub fn is_modifier(&self, is_response: bool) -> bool {
        self.data.modifier_for(is_response).is_some()
    }

    /// Check if the card carries a tag.
    #[must_use]
    pub fn has_tag(&self, tag: TagType) -> bool {
        self.data.has_tag(tag)
    }
}

impl From<KnownCard> for Card {
    fn from(card: KnownCard) -> Self {
        Self {
            id: card.id,
            pocket: card.pocket,
            data: Some(card.data),
        }
    }
}
