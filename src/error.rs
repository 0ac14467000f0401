//! Error types for the target selector.
//!
//! Every variant here is a desynchronization between the UI and the
//! selector state (or a malformed request from the server). Normal
//! "nothing to do" outcomes, like a click on an invalid target, are
//! `None` values instead and never reach this type.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::effects::TargetType;
use crate::selector::TargetSelectorMode;

#[derive(Error, Debug)]
pub enum SelectorError {
    #[error("target selector is not in targeting mode (mode: {0:?})")]
    NotInTargetingMode(TargetSelectorMode),

    #[error("target selector is not in equipping mode (mode: {0:?})")]
    NotInEquipMode(TargetSelectorMode),

    #[error("multiple preselect cards in response: {first} and {second}")]
    MultiplePreselectCards { first: CardId, second: CardId },

    #[error("no pending effect to target (index {index}, {len} effects)")]
    NoPendingEffect { index: usize, len: usize },

    #[error("effect {0:?} does not accept a card target")]
    CardTargetNotAccepted(TargetType),

    #[error("effect {0:?} does not accept a player target")]
    PlayerTargetNotAccepted(TargetType),

    #[error("target selection cannot be confirmed for effect {0:?}")]
    NotConfirmable(TargetType),

    #[error("card not found: {0}")]
    CardNotFound(CardId),

    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("card {0} is not known")]
    UnknownCard(CardId),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to send message: {0}")]
    Send(String),
}

pub type Result<T> = std::result::Result<T, SelectorError>;
