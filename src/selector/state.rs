//! Target selector state.
//!
//! The selector answers one request. Its `mode` says which part is being
//! edited:
//!
//! - `Start`: nothing picked yet
//! - `Middle`: between cards (modifiers done, or a preselection set aside)
//! - `Preselect`: gathering targets for a forced card
//! - `Modifier`: gathering targets for the last modifier
//! - `Target`: gathering targets for the played card
//! - `Equip`: choosing the player an equipment goes to
//! - `Finish`: one game action is derivable
//!
//! Selectors are values. Every transition returns a new selector; the
//! `im` vectors make those copies cheap.

use im::Vector;

use crate::cards::{CardId, KnownCard};
use crate::core::RequestStatus;
use crate::effects::CardTarget;

/// Selection mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TargetSelectorMode {
    #[default]
    Start,
    Middle,
    Preselect,
    Modifier,
    Target,
    Equip,
    Finish,
}

impl TargetSelectorMode {
    /// Check if this mode edits a target list.
    #[must_use]
    pub const fn is_targeting(self) -> bool {
        matches!(
            self,
            TargetSelectorMode::Preselect | TargetSelectorMode::Modifier | TargetSelectorMode::Target
        )
    }

    /// Check if a card can be picked for play in this mode.
    #[must_use]
    pub const fn is_picking_card(self) -> bool {
        matches!(
            self,
            TargetSelectorMode::Start | TargetSelectorMode::Middle | TargetSelectorMode::Preselect
        )
    }
}

/// A question the player must answer before selection goes on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GamePrompt {
    #[default]
    None,
    /// Server warning about the action; answering yes resends it with
    /// `bypass_prompt` set.
    YesNo { message: String, response: bool },
    /// The clicked card can be either played or picked as a target.
    PlayPick { card: CardId },
}

impl GamePrompt {
    /// Check if no prompt is open.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, GamePrompt::None)
    }
}

/// A forced card and the targets gathered for it so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preselection {
    pub card: KnownCard,
    pub targets: Vector<CardTarget>,
}

/// A modifier card and its targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModifierPair {
    pub card: KnownCard,
    pub targets: Vector<CardTarget>,
}

impl ModifierPair {
    /// Create a modifier entry with no targets yet.
    #[must_use]
    pub fn new(card: KnownCard) -> Self {
        Self {
            card,
            targets: Vector::new(),
        }
    }
}

/// State of target selection for one request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetSelector {
    pub mode: TargetSelectorMode,
    pub request: RequestStatus,
    pub prompt: GamePrompt,
    pub preselection: Option<Preselection>,
    pub playing_card: Option<KnownCard>,
    pub modifiers: Vector<ModifierPair>,
    pub targets: Vector<CardTarget>,
}

impl TargetSelector {
    /// Create a fresh selector for a request.
    #[must_use]
    pub fn new(request: RequestStatus) -> Self {
        Self {
            request,
            ..Self::default()
        }
    }

    /// Return the selector with another mode.
    #[must_use]
    pub fn with_mode(self, mode: TargetSelectorMode) -> Self {
        Self { mode, ..self }
    }

    /// Check if this selector answers a server request.
    #[must_use]
    pub fn is_response(&self) -> bool {
        self.request.is_response()
    }
}
