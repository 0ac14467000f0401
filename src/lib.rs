//! # bang-selector
//!
//! Target selection core for a networked card game client.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: The reducer maps `(table, update)` to a new
//!    `TargetSelector`. It never mutates the table.
//!
//! 2. **Bounded Auto Targets**: Forced targets are filled by a loop bounded
//!    by the effect count, so every transition terminates.
//!
//! 3. **Errors Are Values**: A selector update that does not fit the
//!    current mode is a `SelectorError`, never a silent no-op. Clicks that
//!    do nothing are `None`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) snapshot cloning via `im-rs`,
//!   so every transition can return a fresh selector.
//!
//! - **Send Once**: A finished selector yields one `GameAction`; the
//!   `ActionSender` sends it once per observed selector.
//!
//! ## Modules
//!
//! - `core`: Players, pockets, requests, actions, animations, table
//! - `cards`: Card data and instances
//! - `effects`: Effects, targets, filters and per-kind target dispatch
//! - `selector`: Selector state, queries and the reducer
//! - `client`: Input mapping, action emission, session, view models
//! - `error`: `SelectorError`

pub mod core;
pub mod cards;
pub mod effects;
pub mod selector;
pub mod client;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Animation, ClientMessage, GameAction, GameTable, ModifierContext, PlayableCardInfo, Player, PlayerId,
    PocketId, PocketType, RequestArgs, RequestStatus, SelectorConfig, StatusReadyArgs, TimerId,
};

pub use crate::cards::{Card, CardColor, CardData, CardId, KnownCard, ModifierType, TagType};

pub use crate::effects::{CardFilter, CardTarget, Effect, PlayerFilter, TargetType};

pub use crate::selector::{
    reduce, GamePrompt, SelectorUpdate, TargetSelector, TargetSelectorMode, TargetSelectorStatus,
};

pub use crate::client::{ActionSender, GameSession, MessageSink};

pub use crate::error::{Result, SelectorError};
