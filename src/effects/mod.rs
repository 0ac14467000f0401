//! Effect targeting for card selection.
//!
//! - `Effect`, `TargetType`: What a card needs targets for
//! - `CardTarget`: A filled (or partially filled) target
//! - `PlayerFilter`, `CardFilter`, `FilterContext`: Candidate legality
//! - `dispatch`: Per target-kind append/auto/confirm logic
//!
//! Nothing here mutates state: every function reads a table snapshot
//! and returns a value.

mod effect;
mod targeting;
pub mod dispatch;

pub use effect::{CardList, CardTarget, Effect, TargetType};
pub use targeting::{CardFilter, FilterContext, PlayerFilter};
