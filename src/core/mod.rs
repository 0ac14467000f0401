//! Core client types: players, pockets, requests, actions, table state.
//!
//! These are the snapshot types the selector reads and the wire types it
//! produces. They carry no selection logic.

pub mod player;
pub mod pocket;
pub mod config;
pub mod request;
pub mod action;
pub mod animation;
pub mod state;

pub use player::{Player, PlayerFlag, PlayerId, PlayerPockets, PlayerStatus};
pub use pocket::{PocketId, PocketType};
pub use config::SelectorConfig;
pub use request::{
    ModifierContext, PlayableCardInfo, RequestArgs, RequestStatus, RequestTimer, StatusReadyArgs, TimerId,
};
pub use action::{ClientMessage, GameAction, ModifierTargets};
pub use animation::Animation;
pub use state::{GameTable, TableFlag, TableStatus};
