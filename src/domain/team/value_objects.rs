use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Hard floor a sale may not cross: a team keeps at least 15 players.
pub const ROSTER_FLOOR: i32 = 15;

/// Hard ceiling a purchase may not cross: a team holds at most 25 players.
pub const ROSTER_CEILING: i32 = 25;

/// Roster size delivered by the roster-generation collaborator.
pub const INITIAL_ROSTER_SIZE: i32 = 20;

/// Starting budget for a newly created team.
pub const INITIAL_BUDGET: Decimal = dec!(5_000_000);

/// Whether a team at this roster size may take one more player.
pub fn has_room_to_buy(roster_size: i32) -> bool {
    roster_size < ROSTER_CEILING
}

/// Whether a team at this roster size may give one player up.
pub fn has_room_to_sell(roster_size: i32) -> bool {
    roster_size > ROSTER_FLOOR
}
