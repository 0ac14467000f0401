//! Target filters and candidate evaluation.
//!
//! Defines which players and cards an effect may target:
//! - `PlayerFilter`: Conditions on a target player (or a card's owner)
//! - `CardFilter`: Conditions on a target card
//! - `FilterContext`: Evaluates filters against a table snapshot

use serde::{Deserialize, Serialize};

use super::effect::Effect;
use crate::cards::{Card, CardColor, CardId, TagType};
use crate::core::{GameTable, Player, PlayerId, PocketType};
use crate::selector::TargetSelector;

/// Filters on a player.
///
/// Players must be alive unless the filter list contains `Dead`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerFilter {
    Alive,
    Dead,
    /// The player using this client.
    SelfPlayer,
    NotSelf,
    /// Within weapon range of this client's player.
    Reachable,
    /// At distance 1 (plus range modifiers).
    Range1,
    /// At distance 2 (plus range modifiers).
    Range2,
    /// Holds at least one card in hand or on the table.
    NotEmpty,
    /// The player who issued the request being answered.
    Origin,
}

/// Filters on a card.
///
/// Pocket filters (`Hand`, `Table`, `Character`, `Selection`) are
/// alternatives; with none of them a card must sit in a hand or on a
/// player's table. All other filters must hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFilter {
    Hand,
    Table,
    Character,
    Selection,
    /// Owned by this client's player.
    SelfOwned,
    /// Not owned by this client's player.
    NotSelf,
    /// Face up with an equipment color.
    Blue,
    /// Face up and brown.
    Brown,
    /// Face up with the given tag.
    Tagged(TagType),
}

impl CardFilter {
    fn pocket(self) -> Option<PocketType> {
        match self {
            CardFilter::Hand => Some(PocketType::PlayerHand),
            CardFilter::Table => Some(PocketType::PlayerTable),
            CardFilter::Character => Some(PocketType::PlayerCharacter),
            CardFilter::Selection => Some(PocketType::Selection),
            _ => None,
        }
    }
}

const DEFAULT_CARD_POCKETS: [PocketType; 2] = [PocketType::PlayerHand, PocketType::PlayerTable];

/// Filter evaluation against one table snapshot and selector.
///
/// The selector is passed separately from the table so that the reducer
/// can evaluate candidates for a selector it has not published yet.
#[derive(Clone, Copy, Debug)]
pub struct FilterContext<'a> {
    pub table: &'a GameTable,
    pub selector: &'a TargetSelector,
}

impl<'a> FilterContext<'a> {
    /// Create a context for a table and the selector being evaluated.
    #[must_use]
    pub fn new(table: &'a GameTable, selector: &'a TargetSelector) -> Self {
        Self { table, selector }
    }

    /// Seat distance between two alive players, including the target's
    /// distance modifier. `None` if either is not seated.
    #[must_use]
    pub fn distance(&self, from: PlayerId, to: PlayerId) -> Option<i32> {
        if from == to {
            return Some(0);
        }
        let seats = &self.table.alive_players;
        let from_seat = seats.index_of(&from)?;
        let to_seat = seats.index_of(&to)?;
        let diff = from_seat.abs_diff(to_seat);
        let seat_distance = diff.min(seats.len() - diff) as i32;
        let distance_mod = self.table.player(to).map_or(0, |p| p.status.distance_mod);
        Some(seat_distance + distance_mod)
    }

    fn within(&self, target: PlayerId, base_range: impl Fn(&Player) -> i32) -> bool {
        let Some(origin) = self.table.self_player.and_then(|id| self.table.player(id)) else {
            return false;
        };
        let reach = base_range(origin) + origin.status.range_mod;
        self.distance(origin.id, target).is_some_and(|d| d <= reach)
    }

    fn request_origin(&self) -> Option<PlayerId> {
        match &self.selector.request {
            crate::core::RequestStatus::Response(args) => args.origin,
            _ => None,
        }
    }

    /// Check if a player passes a filter list.
    #[must_use]
    pub fn player_matches(&self, filters: &[PlayerFilter], player: &Player) -> bool {
        if filters.contains(&PlayerFilter::Dead) == player.is_alive() {
            return false;
        }
        let self_player = self.table.self_player;
        filters.iter().all(|filter| match filter {
            PlayerFilter::Alive => player.is_alive(),
            PlayerFilter::Dead => !player.is_alive(),
            PlayerFilter::SelfPlayer => self_player == Some(player.id),
            PlayerFilter::NotSelf => self_player != Some(player.id),
            PlayerFilter::Reachable => self.within(player.id, |p| p.status.weapon_range),
            PlayerFilter::Range1 => self.within(player.id, |_| 1),
            PlayerFilter::Range2 => self.within(player.id, |_| 2),
            PlayerFilter::NotEmpty => player.has_cards(),
            PlayerFilter::Origin => self.request_origin() == Some(player.id),
        })
    }

    /// Check if a card passes an effect's card and owner filters.
    #[must_use]
    pub fn card_matches(&self, effect: &Effect, card: &Card) -> bool {
        let Some(pocket) = card.pocket_type() else {
            return false;
        };

        let mut pocket_filters = effect.card_filter.iter().filter_map(|f| f.pocket()).peekable();
        let pocket_ok = if pocket_filters.peek().is_some() {
            pocket_filters.any(|p| p == pocket)
        } else {
            DEFAULT_CARD_POCKETS.contains(&pocket)
        };
        if !pocket_ok {
            return false;
        }

        let owner = card.owner();
        if let Some(owner_id) = owner {
            match self.table.player(owner_id) {
                Some(player) if self.player_matches(&effect.player_filter, player) => {}
                _ => return false,
            }
        }

        let self_player = self.table.self_player;
        let color = card.data.as_ref().map(|d| d.color);
        effect.card_filter.iter().all(|filter| match filter {
            CardFilter::Hand | CardFilter::Table | CardFilter::Character | CardFilter::Selection => true,
            CardFilter::SelfOwned => owner.is_some() && owner == self_player,
            CardFilter::NotSelf => owner.is_none() || owner != self_player,
            CardFilter::Blue => color.is_some_and(CardColor::is_equipment),
            CardFilter::Brown => color == Some(CardColor::Brown),
            CardFilter::Tagged(tag) => card.has_tag(*tag),
        })
    }

    /// All players passing a filter list, sorted by id.
    #[must_use]
    pub fn matching_players(&self, filters: &[PlayerFilter]) -> Vec<PlayerId> {
        let mut players: Vec<PlayerId> = self
            .table
            .players
            .values()
            .filter(|p| self.player_matches(filters, p))
            .map(|p| p.id)
            .collect();
        players.sort_unstable();
        players
    }

    /// All cards passing `accept`, sorted by id.
    #[must_use]
    pub fn matching_cards(&self, accept: impl Fn(&Card) -> bool) -> Vec<CardId> {
        let mut cards: Vec<CardId> = self
            .table
            .cards
            .values()
            .filter(|c| accept(c))
            .map(|c| c.id)
            .collect();
        cards.sort_unstable();
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardData;
    use crate::core::{PlayerFlag, PocketId};

    /// Four players seated 1-2-3-4, this client is player 1.
    fn table() -> GameTable {
        let mut table = GameTable::new(Some(PlayerId(1)));
        for id in 1..=4 {
            table.add_player(Player::new(PlayerId(id)));
        }
        table
    }

    fn ctx<'a>(table: &'a GameTable) -> FilterContext<'a> {
        FilterContext::new(table, &table.selector)
    }

    #[test]
    fn test_distance_is_circular() {
        let table = table();
        let ctx = ctx(&table);
        assert_eq!(ctx.distance(PlayerId(1), PlayerId(2)), Some(1));
        assert_eq!(ctx.distance(PlayerId(1), PlayerId(3)), Some(2));
        assert_eq!(ctx.distance(PlayerId(1), PlayerId(4)), Some(1));
        assert_eq!(ctx.distance(PlayerId(1), PlayerId(1)), Some(0));
    }

    #[test]
    fn test_distance_mod() {
        let mut table = table();
        table.update_player(PlayerId(2), |p| p.status.distance_mod = 1);
        assert_eq!(ctx(&table).distance(PlayerId(1), PlayerId(2)), Some(2));
    }

    #[test]
    fn test_reachable() {
        let table = table();
        let ctx = ctx(&table);
        let filters = [PlayerFilter::Reachable, PlayerFilter::NotSelf];
        assert_eq!(ctx.matching_players(&filters), vec![PlayerId(2), PlayerId(4)]);
    }

    #[test]
    fn test_range_mod_extends_reach() {
        let mut table = table();
        table.update_player(PlayerId(1), |p| p.status.range_mod = 1);
        let filters = [PlayerFilter::Range1, PlayerFilter::NotSelf];
        assert_eq!(
            ctx(&table).matching_players(&filters),
            vec![PlayerId(2), PlayerId(3), PlayerId(4)]
        );
    }

    #[test]
    fn test_dead_players_need_dead_filter() {
        let mut table = table();
        table.update_player(PlayerId(3), |p| p.status.flags.push(PlayerFlag::Dead));
        let ctx = ctx(&table);
        assert_eq!(ctx.matching_players(&[PlayerFilter::Dead]), vec![PlayerId(3)]);
        assert!(!ctx.matching_players(&[]).contains(&PlayerId(3)));
    }

    #[test]
    fn test_card_default_pockets() {
        let mut table = table();
        table.add_card(Card::unknown(CardId(10), PocketId::player(PocketType::PlayerHand, PlayerId(2))));
        table.add_card(Card::unknown(CardId(11), PocketId::table(PocketType::MainDeck)));
        table.add_card(Card::known(
            CardId(12),
            PocketId::player(PocketType::PlayerTable, PlayerId(3)),
            CardData::new("barrel").with_color(CardColor::Blue),
        ));

        let ctx = ctx(&table);
        let effect = Effect::card();
        assert_eq!(
            ctx.matching_cards(|c| ctx.card_matches(&effect, c)),
            vec![CardId(10), CardId(12)]
        );

        let blue_on_table = Effect::card()
            .with_card_filter(CardFilter::Table)
            .with_card_filter(CardFilter::Blue);
        assert_eq!(ctx.matching_cards(|c| ctx.card_matches(&blue_on_table, c)), vec![CardId(12)]);
    }

    #[test]
    fn test_card_owner_filters() {
        let mut table = table();
        table.add_card(Card::unknown(CardId(10), PocketId::player(PocketType::PlayerHand, PlayerId(1))));
        table.add_card(Card::unknown(CardId(11), PocketId::player(PocketType::PlayerHand, PlayerId(3))));

        let ctx = ctx(&table);
        let own = Effect::card().with_card_filter(CardFilter::SelfOwned);
        assert_eq!(ctx.matching_cards(|c| ctx.card_matches(&own, c)), vec![CardId(10)]);

        let reachable = Effect::card().with_player_filter(PlayerFilter::Range1).with_card_filter(CardFilter::NotSelf);
        assert!(ctx.matching_cards(|c| ctx.card_matches(&reachable, c)).is_empty());
    }
}
