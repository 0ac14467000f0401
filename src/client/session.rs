//! Game session: the table, the selector and the outbound channel.
//!
//! The session is the only place that replaces `table.selector`. Every
//! update goes through the reducer, the new selector is installed and the
//! `ActionSender` gets to see it.

use tracing::warn;

use super::emit::{ActionSender, MessageSink};
use super::input;
use crate::cards::CardId;
use crate::core::{GameTable, PlayerId, RequestStatus};
use crate::error::Result;
use crate::selector::{reduce, GamePrompt, SelectorUpdate};

/// A client-side game session.
#[derive(Debug)]
pub struct GameSession<S> {
    table: GameTable,
    sender: ActionSender<S>,
}

impl<S: MessageSink> GameSession<S> {
    /// Create a session over a table.
    pub fn new(table: GameTable, sink: S) -> Self {
        Self {
            table,
            sender: ActionSender::new(sink),
        }
    }

    /// The current table.
    pub fn table(&self) -> &GameTable {
        &self.table
    }

    /// The outbound sink.
    pub fn sink(&self) -> &S {
        self.sender.sink()
    }

    /// Apply a server-driven change to the table (cards, players,
    /// animation). The selector is not touched.
    pub fn update_table(&mut self, update: impl FnOnce(&mut GameTable)) {
        update(&mut self.table);
    }

    /// Reduce an update and install the resulting selector.
    ///
    /// Returns whether a game action was sent.
    ///
    /// # Errors
    ///
    /// Returns the reducer's error when the update does not fit the
    /// selector; the selector is left unchanged. Send failures are
    /// returned as well.
    pub fn apply(&mut self, update: SelectorUpdate) -> Result<bool> {
        let selector = reduce(&self.table, update).inspect_err(|err| {
            warn!(error = %err, mode = ?self.table.selector.mode, "rejected selector update");
        })?;
        self.table.selector = selector;
        self.sender.observe(&self.table.selector)
    }

    /// Start answering a new request.
    pub fn set_request(&mut self, request: RequestStatus) -> Result<bool> {
        self.apply(SelectorUpdate::SetRequest(request))
    }

    /// Show a yes/no prompt sent back by the server for the last action.
    pub fn show_prompt(&mut self, message: impl Into<String>) -> Result<bool> {
        self.apply(SelectorUpdate::SetPrompt(GamePrompt::YesNo {
            message: message.into(),
            response: false,
        }))
    }

    fn apply_input(&mut self, update: Option<SelectorUpdate>) -> Result<bool> {
        match update {
            Some(update) => self.apply(update),
            None => Ok(false),
        }
    }

    /// Handle a click on a card. Clicks that do nothing return `Ok(false)`.
    pub fn click_card(&mut self, card: CardId) -> Result<bool> {
        let update = self
            .table
            .card(card)
            .and_then(|card| input::click_card_update(&self.table, card));
        self.apply_input(update)
    }

    /// Handle a click on a player.
    pub fn click_player(&mut self, player: PlayerId) -> Result<bool> {
        let update = self
            .table
            .player(player)
            .and_then(|player| input::click_player_update(&self.table, player));
        self.apply_input(update)
    }

    /// Handle the confirm button.
    pub fn confirm(&mut self) -> Result<bool> {
        let update = input::confirm_update(&self.table);
        self.apply_input(update)
    }

    /// Handle the undo button.
    pub fn undo(&mut self) -> Result<bool> {
        let update = input::undo_update(&self.table);
        self.apply_input(update)
    }

    /// Answer the play-or-pick prompt.
    pub fn resolve_play_pick(&mut self, play: bool) -> Result<bool> {
        let update = input::resolve_play_pick(&self.table, play);
        self.apply_input(update)
    }

    /// Answer the yes/no prompt.
    pub fn answer_yes_no(&mut self, yes: bool) -> Result<bool> {
        let update = input::answer_yes_no(&self.table, yes);
        self.apply_input(update)
    }
}
