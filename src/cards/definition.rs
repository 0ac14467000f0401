//! Card data - what a face-up card declares.
//!
//! `CardData` is sent by the server when a card becomes visible to this
//! client. It lists the effects the card needs targets for, both when it
//! is played freely and when it answers a request, plus its modifier
//! behavior, equip targets and tags.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::{Effect, PlayerFilter};

/// Server-assigned card identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card border color. Blue, green and black cards stay on the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardColor {
    #[default]
    None,
    Brown,
    Blue,
    Green,
    Black,
    Orange,
    Train,
}

impl CardColor {
    /// Cards of these colors are equipped rather than played.
    #[must_use]
    pub const fn is_equipment(self) -> bool {
        matches!(
            self,
            CardColor::Blue | CardColor::Green | CardColor::Black | CardColor::Orange | CardColor::Train
        )
    }
}

/// Card tags. Only a few carry meaning for target selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagType {
    /// The card is forced: a request containing it opens in preselect mode.
    Preselect,
    Bangcard,
    Missed,
    Beer,
    Indians,
    Duel,
    Weapon,
    Horse,
    Drawing,
    Shopchoice,
}

/// How a modifier card alters the card played after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierType {
    Bangmod,
    Bandolier,
    Leevankliff,
    Discount,
    Shopchoice,
    CardChoice,
    Traincost,
    Locomotive,
    Sgtblaze,
    Skipplayer,
}

/// Static data of a known card.
///
/// ## Example
///
/// ```
/// use bang_selector::cards::{CardData, TagType};
/// use bang_selector::effects::Effect;
///
/// let bang = CardData::new("bang")
///     .with_effect(Effect::player())
///     .with_tag(TagType::Bangcard, 0);
///
/// assert_eq!(bang.effects.len(), 1);
/// assert!(bang.has_tag(TagType::Bangcard));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardData {
    pub name: String,
    pub color: CardColor,

    /// Effects targeted when the card is played on its own turn.
    pub effects: Vec<Effect>,

    /// Effects targeted when the card answers a request.
    pub responses: Vec<Effect>,

    /// Modifier behavior on the player's own turn.
    pub modifier: Option<ModifierType>,

    /// Modifier behavior while answering a request.
    pub modifier_response: Option<ModifierType>,

    /// Filters for the player an equipment goes to.
    /// Empty means the card is equipped in front of its owner.
    pub equip_target: Vec<PlayerFilter>,

    pub tags: SmallVec<[(TagType, i16); 2]>,
}

impl CardData {
    /// Create card data with a name and no effects.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the card color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: CardColor) -> Self {
        self.color = color;
        self
    }

    /// Add a free-play effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Add a response effect (builder pattern).
    #[must_use]
    pub fn with_response(mut self, effect: Effect) -> Self {
        self.responses.push(effect);
        self
    }

    /// Set the free-play modifier type (builder pattern).
    #[must_use]
    pub fn with_modifier(mut self, modifier: ModifierType) -> Self {
        self.modifier = Some(modifier);
        self
    }

    /// Set the response modifier type (builder pattern).
    #[must_use]
    pub fn with_modifier_response(mut self, modifier: ModifierType) -> Self {
        self.modifier_response = Some(modifier);
        self
    }

    /// Add an equip target filter (builder pattern).
    #[must_use]
    pub fn with_equip_target(mut self, filter: PlayerFilter) -> Self {
        self.equip_target.push(filter);
        self
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: TagType, value: i16) -> Self {
        self.tags.push((tag, value));
        self
    }

    /// Check if the card carries a tag.
    #[must_use]
    pub fn has_tag(&self, tag: TagType) -> bool {
        self.tags.iter().any(|(t, _)| *t == tag)
    }

    /// Get a tag's value.
    #[must_use]
    pub fn tag_value(&self, tag: TagType) -> Option<i16> {
        self.tags.iter().find(|(t, _)| *t == tag).map(|(_, v)| *v)
    }

    /// Effect list for the given context.
    #[must_use]
    pub fn effects_for(&self, is_response: bool) -> &[Effect] {
        if is_response {
            &self.responses
        } else {
            &self.effects
        }
    }

    /// Modifier type for the given context.
    #[must_use]
    pub fn modifier_for(&self, is_response: bool) -> Option<ModifierType> {
        if is_response {
            self.modifier_response
        } else {
            self.modifier
        }
    }
}
