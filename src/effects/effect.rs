//! Effect and target definitions.
//!
//! A card declares an ordered list of effects. Each effect says what kind
//! of target it needs (`TargetType`) and which candidates are legal
//! (player and card filters). Selection fills one `CardTarget` per effect,
//! in order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::targeting::{CardFilter, PlayerFilter};
use crate::cards::CardId;
use crate::core::PlayerId;

/// Inline list of picked cards. Most multi-card effects pick two or three.
pub type CardList = SmallVec<[CardId; 4]>;

/// The kind of target an effect needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// No target. Always resolved automatically.
    #[default]
    None,
    /// One player.
    Player,
    /// One player if any is legal, otherwise nothing.
    ConditionalPlayer,
    /// Every legal player. Resolved automatically.
    Players,
    /// One card.
    Card,
    /// One optional card; confirming skips it.
    ExtraCard,
    /// Exactly `count` distinct cards.
    Cards { count: u8 },
    /// Up to `max` distinct cards; confirming stops early.
    MaxCards { max: u8 },
}

impl TargetType {
    /// Check if this kind is filled by clicking cards.
    #[must_use]
    pub const fn accepts_cards(self) -> bool {
        matches!(
            self,
            TargetType::Card | TargetType::ExtraCard | TargetType::Cards { .. } | TargetType::MaxCards { .. }
        )
    }

    /// Check if this kind is filled by clicking players.
    #[must_use]
    pub const fn accepts_players(self) -> bool {
        matches!(self, TargetType::Player | TargetType::ConditionalPlayer)
    }
}

/// One target-requiring unit of a card.
///
/// ## Example
///
/// ```
/// use bang_selector::effects::{Effect, PlayerFilter, TargetType};
///
/// let bang = Effect::player()
///     .with_player_filter(PlayerFilter::Reachable)
///     .with_player_filter(PlayerFilter::NotSelf);
///
/// assert_eq!(bang.target, TargetType::Player);
/// assert_eq!(bang.player_filter.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Effect {
    pub target: TargetType,
    /// Filters on the target player, or on the owner of a target card.
    pub player_filter: Vec<PlayerFilter>,
    /// Filters on the target card.
    pub card_filter: Vec<CardFilter>,
}

impl Effect {
    /// Create an effect with a target kind and no filters.
    #[must_use]
    pub fn new(target: TargetType) -> Self {
        Self {
            target,
            player_filter: Vec::new(),
            card_filter: Vec::new(),
        }
    }

    /// Effect without a target.
    #[must_use]
    pub fn none() -> Self {
        Self::new(TargetType::None)
    }

    /// Effect targeting one player.
    #[must_use]
    pub fn player() -> Self {
        Self::new(TargetType::Player)
    }

    /// Effect targeting one card.
    #[must_use]
    pub fn card() -> Self {
        Self::new(TargetType::Card)
    }

    /// Effect targeting exactly `count` cards.
    #[must_use]
    pub fn cards(count: u8) -> Self {
        Self::new(TargetType::Cards { count })
    }

    /// Effect targeting up to `max` cards.
    #[must_use]
    pub fn max_cards(max: u8) -> Self {
        Self::new(TargetType::MaxCards { max })
    }

    /// Add a player filter (builder pattern).
    #[must_use]
    pub fn with_player_filter(mut self, filter: PlayerFilter) -> Self {
        self.player_filter.push(filter);
        self
    }

    /// Add a card filter (builder pattern).
    #[must_use]
    pub fn with_card_filter(mut self, filter: CardFilter) -> Self {
        self.card_filter.push(filter);
        self
    }
}

/// A resolved (or partially resolved) target for one effect.
///
/// Multi-card targets stay *open* while more cards can be added; see
/// `dispatch::is_target_open`. The open state of `MaxCards` is local to
/// the client and is not sent on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTarget {
    None,
    Player(PlayerId),
    ConditionalPlayer(Option<PlayerId>),
    Players,
    Card(CardId),
    ExtraCard(Option<CardId>),
    Cards(CardList),
    MaxCards {
        cards: CardList,
        #[serde(skip)]
        open: bool,
    },
}

impl CardTarget {
    /// Cards referenced by this target, in pick order.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        match self {
            CardTarget::Card(card) | CardTarget::ExtraCard(Some(card)) => std::slice::from_ref(card),
            CardTarget::Cards(cards) | CardTarget::MaxCards { cards, .. } => cards,
            _ => &[],
        }
    }

    /// Player referenced by this target.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            CardTarget::Player(player) | CardTarget::ConditionalPlayer(Some(player)) => Some(*player),
            _ => None,
        }
    }
}
