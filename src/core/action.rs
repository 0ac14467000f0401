//! Game action: the message a finished selection produces.
//!
//! A game action names the played card, each modifier played before it
//! with that modifier's targets, the card's own targets, the timer of the
//! request being answered and whether a yes/no prompt was accepted.
//!
//! This is the only boundary contract of the selector: it must survive a
//! trip through the transport unchanged.

use serde::{Deserialize, Serialize};

use super::request::TimerId;
use crate::cards::CardId;
use crate::effects::CardTarget;

/// A modifier card with its targets, as sent on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierTargets {
    pub card: CardId,
    pub targets: Vec<CardTarget>,
}

/// A complete game action.
///
/// ## Example
///
/// ```
/// use bang_selector::cards::CardId;
/// use bang_selector::core::{GameAction, PlayerId};
/// use bang_selector::effects::CardTarget;
///
/// let action = GameAction::new(CardId(10)).with_target(CardTarget::Player(PlayerId(2)));
/// assert_eq!(action.targets.len(), 1);
/// assert!(!action.bypass_prompt);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAction {
    pub card: CardId,
    pub modifiers: Vec<ModifierTargets>,
    pub targets: Vec<CardTarget>,
    pub timer_id: Option<TimerId>,
    pub bypass_prompt: bool,
}

impl GameAction {
    /// Create an action playing a card with no targets.
    #[must_use]
    pub fn new(card: CardId) -> Self {
        Self {
            card,
            modifiers: Vec::new(),
            targets: Vec::new(),
            timer_id: None,
            bypass_prompt: false,
        }
    }

    /// Add a target (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: CardTarget) -> Self {
        self.targets.push(target);
        self
    }

    /// Add a modifier (builder pattern).
    #[must_use]
    pub fn with_modifier(mut self, card: CardId, targets: Vec<CardTarget>) -> Self {
        self.modifiers.push(ModifierTargets { card, targets });
        self
    }
}

/// Messages the client sends to the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientMessage {
    GameAction(GameAction),
}

impl ClientMessage {
    /// Encode as JSON for the transport.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
