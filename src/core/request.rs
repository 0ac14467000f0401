//! Server requests answered by the selector.
//!
//! The server either tells the client it is free to play (`Ready`, with
//! the list of playable card chains) or asks it to answer a request
//! (`Response`, with the chains allowed as an answer). Each chain is a
//! `PlayableCardInfo`: the modifiers to play first, then the card.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// Identifier of a request timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerId(pub u32);

/// Timer attached to a timed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTimer {
    pub timer_id: TimerId,
    /// Duration in milliseconds.
    pub duration: u32,
}

/// Extra data the server attaches to a playable chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierContext {
    /// Card whose choice pocket is shown next to it.
    pub card_choice: Option<CardId>,
    /// Card that gets played once the modifiers are done.
    pub playing_card: Option<CardId>,
    /// Card played again once the modifiers are done.
    pub repeat_card: Option<CardId>,
    /// Train card paid for by this chain.
    pub traincost: Option<CardId>,
    /// Train advance this chain would cause.
    pub train_advance: Option<i32>,
}

/// One playable chain: modifiers in play order, then the card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayableCardInfo {
    pub card: CardId,
    #[serde(default)]
    pub modifiers: Vec<CardId>,
    #[serde(default)]
    pub context: ModifierContext,
}

impl PlayableCardInfo {
    /// Create a chain for a card with no modifiers.
    #[must_use]
    pub fn new(card: CardId) -> Self {
        Self {
            card,
            modifiers: Vec::new(),
            context: ModifierContext::default(),
        }
    }

    /// Set the modifier chain (builder pattern).
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = CardId>) -> Self {
        self.modifiers = modifiers.into_iter().collect();
        self
    }

    /// Set the context (builder pattern).
    #[must_use]
    pub fn with_context(mut self, context: ModifierContext) -> Self {
        self.context = context;
        self
    }

    /// First card the player has to play for this chain.
    #[must_use]
    pub fn first_card(&self) -> CardId {
        self.modifiers.first().copied().unwrap_or(self.card)
    }

    /// Card at `depth` in the chain, counting modifiers first.
    #[must_use]
    pub fn card_at(&self, depth: usize) -> Option<CardId> {
        match depth.cmp(&self.modifiers.len()) {
            std::cmp::Ordering::Less => Some(self.modifiers[depth]),
            std::cmp::Ordering::Equal => Some(self.card),
            std::cmp::Ordering::Greater => None,
        }
    }
}

/// Arguments of a request the player must answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestArgs {
    pub origin_card: Option<CardId>,
    pub origin: Option<PlayerId>,
    pub target: Option<PlayerId>,
    /// Localization key of the status line. Opaque to the selector.
    pub status_text: String,
    pub respond_cards: Vec<PlayableCardInfo>,
    pub highlight_cards: Vec<CardId>,
    pub timer: Option<RequestTimer>,
}

/// Arguments of a free turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusReadyArgs {
    pub play_cards: Vec<PlayableCardInfo>,
}

/// The request a selector answers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Nothing to do.
    #[default]
    None,
    /// Free turn.
    Ready(StatusReadyArgs),
    /// Answer to a server request.
    Response(RequestArgs),
}

impl RequestStatus {
    /// Check if this is a server request to answer.
    #[must_use]
    pub fn is_response(&self) -> bool {
        matches!(self, RequestStatus::Response(_))
    }

    /// Playable chains for this request.
    #[must_use]
    pub fn playable_cards(&self) -> &[PlayableCardInfo] {
        match self {
            RequestStatus::None => &[],
            RequestStatus::Ready(args) => &args.play_cards,
            RequestStatus::Response(args) => &args.respond_cards,
        }
    }

    /// Timer of a timed response.
    #[must_use]
    pub fn timer_id(&self) -> Option<TimerId> {
        match self {
            RequestStatus::Response(args) => args.timer.map(|t| t.timer_id),
            _ => None,
        }
    }
}
