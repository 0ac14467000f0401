//! Card system: identifiers, card data and table instances.
//!
//! ## Key Types
//!
//! - `CardId`: Server-assigned card identifier
//! - `CardData`: Effects, modifiers, equip targets and tags of a face-up card
//! - `Card`: A card on the table, face up or face down
//! - `KnownCard`: A card with its data guaranteed

pub mod definition;
pub mod instance;

pub use definition::{CardColor, CardData, CardId, ModifierType, TagType};
pub use instance::{Card, KnownCard};
