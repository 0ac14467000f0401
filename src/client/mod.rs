//! Client glue around the selector core.
//!
//! - `input`: UI clicks to `SelectorUpdate`s
//! - `emit`: Game action derivation and send-once emission
//! - `session`: Table ownership and update application
//! - `view`: Card choice and train preview view models

pub mod emit;
pub mod input;
pub mod session;
pub mod view;

pub use emit::{selector_game_action, ActionSender, MessageSink};
pub use session::GameSession;
pub use view::{card_choice, train_advance_preview, CardChoice};
