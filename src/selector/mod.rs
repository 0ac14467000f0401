//! Target selection state machine.
//!
//! - `state`: The `TargetSelector` value and its modes
//! - `query`: Predicates the UI and the reducer share
//! - `reducer`: Pure transitions driven by `SelectorUpdate`

pub mod state;
pub mod query;
pub mod reducer;

pub use query::{
    get_modifier_context, get_playable_cards, get_target_selector_status, is_card_current, is_response,
    is_valid_card_target, is_valid_equip_target, is_valid_player_target, selector_can_confirm,
    selector_can_play_card, selector_can_undo, TargetSelectorStatus,
};
pub use reducer::{handle_set_request, reduce, SelectorUpdate};
pub use state::{GamePrompt, ModifierPair, Preselection, TargetSelector, TargetSelectorMode};
