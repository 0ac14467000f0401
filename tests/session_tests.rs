//! Session and wire integration tests.
//!
//! These check what leaves the client: how many actions are sent, with
//! which fields, and that they survive the JSON transport.

mod common;

use bang_selector::cards::{CardData, CardId};
use bang_selector::client::{GameSession, MessageSink};
use bang_selector::core::{
    ClientMessage, GameAction, PlayableCardInfo, PlayerId, RequestArgs, RequestStatus, RequestTimer,
    SelectorConfig, TimerId,
};
use bang_selector::effects::{CardFilter, CardList, CardTarget, Effect, PlayerFilter};
use bang_selector::error::{Result, SelectorError};
use bang_selector::selector::TargetSelectorMode;

use common::{add_hand_card, add_table_card, ready, table_with_players};

/// Sink encoding every message to JSON, the way the transport does.
#[derive(Default)]
struct JsonSink {
    sent: Vec<String>,
}

impl MessageSink for JsonSink {
    fn send_message(&mut self, message: ClientMessage) -> Result<()> {
        self.sent.push(message.to_json()?);
        Ok(())
    }
}

/// Sink whose transport is down.
struct ClosedSink;

impl MessageSink for ClosedSink {
    fn send_message(&mut self, _message: ClientMessage) -> Result<()> {
        Err(SelectorError::Send("connection closed".into()))
    }
}

fn bang_table() -> bang_selector::core::GameTable {
    let mut table = table_with_players(3);
    add_hand_card(
        &mut table,
        10,
        CardData::new("bang").with_effect(Effect::player().with_player_filter(PlayerFilter::NotSelf)),
    );
    table
}

// =============================================================================
// Yes/No Prompt
// =============================================================================

/// Accepting a server prompt resends the action with the prompt bypassed.
#[test]
fn test_yes_no_prompt_bypass() {
    let mut session = GameSession::new(bang_table(), Vec::new());
    session.set_request(ready(&[10])).unwrap();
    session.click_card(CardId(10)).unwrap();
    assert!(session.click_player(PlayerId(3)).unwrap());

    assert!(!session.show_prompt("prompt_target_ghost").unwrap());
    assert!(session.answer_yes_no(true).unwrap());

    let sent = session.sink();
    assert_eq!(sent.len(), 2);
    let ClientMessage::GameAction(first) = &sent[0];
    let ClientMessage::GameAction(second) = &sent[1];
    assert!(!first.bypass_prompt);
    assert!(second.bypass_prompt);
    assert_eq!(first.targets, second.targets);
}

/// Declining a server prompt starts the selection over.
#[test]
fn test_yes_no_prompt_decline() {
    let mut session = GameSession::new(bang_table(), Vec::new());
    session.set_request(ready(&[10])).unwrap();
    session.click_card(CardId(10)).unwrap();
    session.click_player(PlayerId(2)).unwrap();
    session.show_prompt("prompt_target_ghost").unwrap();

    assert!(!session.answer_yes_no(false).unwrap());
    assert_eq!(session.table().selector.mode, TargetSelectorMode::Start);
    assert!(session.table().selector.prompt.is_none());
    assert_eq!(session.sink().len(), 1);
}

// =============================================================================
// Undo
// =============================================================================

#[test]
fn test_undo_returns_to_start() {
    let mut session = GameSession::new(bang_table(), Vec::new());
    session.set_request(ready(&[10])).unwrap();
    assert!(!session.undo().unwrap());

    session.click_card(CardId(10)).unwrap();
    assert_eq!(session.table().selector.mode, TargetSelectorMode::Target);
    session.undo().unwrap();
    assert_eq!(session.table().selector.mode, TargetSelectorMode::Start);
    assert!(session.table().selector.playing_card.is_none());
}

// =============================================================================
// Wire Format
// =============================================================================

/// A timed response carries its timer id; the JSON decodes to the same
/// action.
#[test]
fn test_response_action_round_trip() {
    let mut table = table_with_players(2);
    for id in 20..23 {
        add_table_card(&mut table, id, 2);
    }
    add_hand_card(
        &mut table,
        10,
        CardData::new("discard")
            .with_response(Effect::max_cards(2).with_card_filter(CardFilter::Table))
            .with_response(Effect::player().with_player_filter(PlayerFilter::NotSelf)),
    );
    let request = RequestStatus::Response(RequestArgs {
        respond_cards: vec![PlayableCardInfo::new(CardId(10))],
        timer: Some(RequestTimer {
            timer_id: TimerId(7),
            duration: 2000,
        }),
        ..RequestArgs::default()
    });

    let mut session = GameSession::new(table, JsonSink::default());
    session.set_request(request).unwrap();
    session.click_card(CardId(10)).unwrap();
    session.click_card(CardId(22)).unwrap();
    assert!(session.confirm().unwrap());

    let sent = &session.sink().sent;
    assert_eq!(sent.len(), 1);
    let ClientMessage::GameAction(action) = ClientMessage::from_json(&sent[0]).unwrap();

    let expected = GameAction {
        card: CardId(10),
        modifiers: Vec::new(),
        targets: vec![
            CardTarget::MaxCards {
                cards: CardList::from_slice(&[CardId(22)]),
                open: false,
            },
            CardTarget::Player(PlayerId(2)),
        ],
        timer_id: Some(TimerId(7)),
        bypass_prompt: false,
    };
    assert_eq!(action, expected);
}

#[test]
fn test_send_failure_is_returned() {
    let mut session = GameSession::new(bang_table(), ClosedSink);
    session.set_request(ready(&[10])).unwrap();
    session.click_card(CardId(10)).unwrap();

    let err = session.click_player(PlayerId(2)).unwrap_err();
    assert!(matches!(err, SelectorError::Send(_)));
    assert_eq!(session.table().selector.mode, TargetSelectorMode::Finish);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_from_json_disables_auto_targets() {
    let config = SelectorConfig::from_json(r#"{"auto_targets": false}"#).unwrap();
    assert!(!config.auto_targets);
    assert!(config.auto_select);

    let mut table = table_with_players(2).with_config(config);
    add_hand_card(
        &mut table,
        10,
        CardData::new("bang").with_effect(Effect::player().with_player_filter(PlayerFilter::NotSelf)),
    );
    let mut session = GameSession::new(table, Vec::new());
    session.set_request(ready(&[10])).unwrap();
    session.click_card(CardId(10)).unwrap();
    assert_eq!(session.table().selector.mode, TargetSelectorMode::Target);

    assert!(matches!(SelectorConfig::from_json("{"), Err(SelectorError::Config(_))));
}
