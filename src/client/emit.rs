//! Action emission.
//!
//! A finished selector describes exactly one game action. `ActionSender`
//! watches the selectors the session installs and sends that action once:
//! observing the same selector again (a re-render) sends nothing.

use tracing::debug;

use crate::core::{ClientMessage, GameAction, ModifierTargets};
use crate::error::Result;
use crate::selector::{GamePrompt, TargetSelector, TargetSelectorMode};

/// Outbound side of the transport.
pub trait MessageSink {
    /// Send a message to the server.
    fn send_message(&mut self, message: ClientMessage) -> Result<()>;
}

impl MessageSink for Vec<ClientMessage> {
    fn send_message(&mut self, message: ClientMessage) -> Result<()> {
        self.push(message);
        Ok(())
    }
}

/// Derive the game action of a finished selector.
///
/// `None` until the mode is `Finish`, and while a yes/no prompt is open
/// without having been accepted.
#[must_use]
pub fn selector_game_action(selector: &TargetSelector) -> Option<GameAction> {
    if selector.mode != TargetSelectorMode::Finish {
        return None;
    }
    let bypass_prompt = match &selector.prompt {
        GamePrompt::YesNo { response: true, .. } => true,
        GamePrompt::YesNo { response: false, .. } => return None,
        _ => false,
    };
    let card = selector.playing_card.as_ref()?;

    Some(GameAction {
        card: card.id,
        modifiers: selector
            .modifiers
            .iter()
            .map(|m| ModifierTargets {
                card: m.card.id,
                targets: m.targets.iter().cloned().collect(),
            })
            .collect(),
        targets: selector.targets.iter().cloned().collect(),
        timer_id: selector.request.timer_id(),
        bypass_prompt,
    })
}

/// Sends the action of each newly observed finished selector once.
#[derive(Debug)]
pub struct ActionSender<S> {
    sink: S,
    last_observed: Option<TargetSelector>,
}

impl<S: MessageSink> ActionSender<S> {
    /// Create a sender writing to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            last_observed: None,
        }
    }

    /// Observe the current selector, sending its action if it is new.
    ///
    /// Returns whether a message was sent. The selector counts as observed
    /// before the send is attempted: if the sink fails, the error is
    /// returned and observing the same selector again sends nothing.
    pub fn observe(&mut self, selector: &TargetSelector) -> Result<bool> {
        if self.last_observed.as_ref() == Some(selector) {
            return Ok(false);
        }
        self.last_observed = Some(selector.clone());

        let Some(action) = selector_game_action(selector) else {
            return Ok(false);
        };
        debug!(card = %action.card, targets = action.targets.len(), "sending game action");
        self.sink.send_message(ClientMessage::GameAction(action))?;
        Ok(true)
    }

    /// The underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
