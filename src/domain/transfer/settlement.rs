use rust_decimal::Decimal;

use super::errors::{TransferError, TransferResult};
use super::fees::{self, FeeSplit};
use crate::domain::player::Player;
use crate::domain::team::{Team, TeamEvent};

/// Fully validated, fully priced outcome of a trade
///
/// Holds the mutated copies of both teams and the player; the trade engine
/// persists these values verbatim under the row locks it already holds.
#[derive(Debug)]
pub struct TradeOutcome {
    pub price: Decimal,
    pub commission: Decimal,
    pub seller_revenue: Decimal,
    pub buyer: Team,
    pub seller: Team,
    pub player: Player,
    pub events: Vec<TeamEvent>,
}

/// Validates and settles a trade in memory
///
/// The checks run in a fixed order so that a caller failing several
/// preconditions at once always sees the same error:
/// roster ceiling, listing, self-trade, roster floor, funds.
///
/// `new_market_value` is the player's post-sale valuation, supplied by the
/// caller so the settlement itself stays deterministic.
pub fn execute(
    mut buyer: Team,
    mut seller: Team,
    mut player: Player,
    new_market_value: Decimal,
) -> TransferResult<TradeOutcome> {
    debug_assert_eq!(player.team_id(), seller.id());

    if !buyer.has_roster_room() {
        return Err(TransferError::RosterFull);
    }

    let price = match player.listing().asking_price() {
        Some(price) => price,
        None => return Err(TransferError::PlayerNotForSale),
    };

    if seller.id() == buyer.id() {
        return Err(TransferError::SelfTrade);
    }

    if !seller.roster_above_floor() {
        return Err(TransferError::SellerRosterAtFloor);
    }

    if !buyer.can_afford(price) {
        return Err(TransferError::InsufficientFunds);
    }

    let FeeSplit {
        commission,
        seller_revenue,
    } = fees::split(price);

    let purchased = buyer.complete_purchase(player.id(), price)?;
    let sold = seller.complete_sale(player.id(), seller_revenue)?;
    player.transfer_to(buyer.id(), new_market_value);

    Ok(TradeOutcome {
        price,
        commission,
        seller_revenue,
        buyer,
        seller,
        player,
        events: vec![purchased, sold],
    })
}
