use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::events::TeamEvent;
use super::value_objects::{has_room_to_buy, has_room_to_sell};
use crate::domain::transfer::errors::TransferError;

/// Team aggregate root
///
/// A team owns a money balance and a roster of players. Teams are created
/// by the roster-generation collaborator (which also sets `is_ready` once
/// the initial 20 players exist); the trade engine is the only component
/// that mutates the balance and roster count afterwards.
///
/// # Invariants
/// - Roster size stays within [15, 25] once trading starts: a sale may not
///   drop it below the floor, a purchase may not push it past the ceiling
/// - The balance never goes negative: a purchase requires covering funds
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    user_id: Uuid,
    name: String,
    country: String,
    budget: Decimal,
    total_players: i32,
    is_ready: bool,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Whether this team can afford the given asking price.
    pub fn can_afford(&self, price: Decimal) -> bool {
        self.budget >= price
    }

    /// Whether this team may take one more player.
    pub fn has_roster_room(&self) -> bool {
        has_room_to_buy(self.total_players)
    }

    /// Whether this team may give one player up.
    pub fn roster_above_floor(&self) -> bool {
        has_room_to_sell(self.total_players)
    }

    /// Applies the buyer side of a trade: debit the full asking price and
    /// count the incoming player.
    ///
    /// # Errors
    /// `RosterFull` at the roster ceiling, `InsufficientFunds` if the
    /// budget does not cover the price. On error nothing is mutated.
    pub fn complete_purchase(
        &mut self,
        player_id: Uuid,
        price: Decimal,
    ) -> Result<TeamEvent, TransferError> {
        if !self.has_roster_room() {
            return Err(TransferError::RosterFull);
        }
        if !self.can_afford(price) {
            return Err(TransferError::InsufficientFunds);
        }

        self.budget -= price;
        self.total_players += 1;

        Ok(TeamEvent::PlayerPurchased {
            team_id: self.id,
            player_id,
            price,
        })
    }

    /// Applies the seller side of a trade: credit the revenue and release
    /// the outgoing player.
    ///
    /// # Errors
    /// `SellerRosterAtFloor` if selling would breach the roster floor.
    /// On error nothing is mutated.
    pub fn complete_sale(
        &mut self,
        player_id: Uuid,
        revenue: Decimal,
    ) -> Result<TeamEvent, TransferError> {
        if !self.roster_above_floor() {
            return Err(TransferError::SellerRosterAtFloor);
        }

        self.budget += revenue;
        self.total_players -= 1;

        Ok(TeamEvent::PlayerSold {
            team_id: self.id,
            player_id,
            revenue,
        })
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn budget(&self) -> Decimal {
        self.budget
    }

    pub fn total_players(&self) -> i32 {
        self.total_players
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Bypasses business rules validation since the data was validated when
    /// it was written. Only to be used by repository implementations and the
    /// trade engine's row mapping.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        user_id: Uuid,
        name: String,
        country: String,
        budget: Decimal,
        total_players: i32,
        is_ready: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            country,
            budget,
            total_players,
            is_ready,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn team_with(budget: Decimal, total_players: i32) -> Team {
        Team::from_persistence(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Test FC".to_string(),
            "Spain".to_string(),
            budget,
            total_players,
            true,
            Utc::now(),
        )
    }

    #[test]
    fn purchase_debits_price_and_counts_the_player() {
        let mut team = team_with(dec!(2_000_000), 20);
        let player_id = Uuid::new_v4();

        let event = team
            .complete_purchase(player_id, dec!(1_000_000))
            .expect("purchase succeeds");

        assert_eq!(team.budget(), dec!(1_000_000));
        assert_eq!(team.total_players(), 21);
        match event {
            TeamEvent::PlayerPurchased {
                player_id: pid,
                price,
                ..
            } => {
                assert_eq!(pid, player_id);
                assert_eq!(price, dec!(1_000_000));
            }
            other => panic!("expected PlayerPurchased, got {:?}", other),
        }
    }

    #[test]
    fn purchase_rejected_at_roster_ceiling() {
        let mut team = team_with(dec!(10_000_000), 25);

        let result = team.complete_purchase(Uuid::new_v4(), dec!(1));

        assert!(matches!(result, Err(TransferError::RosterFull)));
        assert_eq!(team.budget(), dec!(10_000_000));
        assert_eq!(team.total_players(), 25);
    }

    #[test]
    fn purchase_allowed_one_below_the_ceiling() {
        let mut team = team_with(dec!(10_000_000), 24);
        assert!(team.complete_purchase(Uuid::new_v4(), dec!(1)).is_ok());
        assert_eq!(team.total_players(), 25);
    }

    #[test]
    fn purchase_with_exact_budget_succeeds() {
        let mut team = team_with(dec!(1_000_000), 20);
        assert!(team
            .complete_purchase(Uuid::new_v4(), dec!(1_000_000))
            .is_ok());
        assert_eq!(team.budget(), Decimal::ZERO);
    }

    #[test]
    fn purchase_one_short_of_the_price_fails() {
        let mut team = team_with(dec!(999_999), 20);

        let result = team.complete_purchase(Uuid::new_v4(), dec!(1_000_000));

        assert!(matches!(result, Err(TransferError::InsufficientFunds)));
        assert_eq!(team.budget(), dec!(999_999));
        assert_eq!(team.total_players(), 20);
    }

    #[test]
    fn sale_credits_revenue_and_releases_the_player() {
        let mut team = team_with(dec!(5_000_000), 16);

        let event = team
            .complete_sale(Uuid::new_v4(), dec!(950_000))
            .expect("sale succeeds");

        assert_eq!(team.budget(), dec!(5_950_000));
        assert_eq!(team.total_players(), 15);
        assert!(matches!(event, TeamEvent::PlayerSold { .. }));
    }

    #[test]
    fn sale_rejected_at_roster_floor() {
        let mut team = team_with(dec!(5_000_000), 15);

        let result = team.complete_sale(Uuid::new_v4(), dec!(950_000));

        assert!(matches!(result, Err(TransferError::SellerRosterAtFloor)));
        assert_eq!(team.budget(), dec!(5_000_000));
        assert_eq!(team.total_players(), 15);
    }

    #[test]
    fn getters() {
        let team = team_with(dec!(5_000_000), 20);
        assert_eq!(team.name(), "Test FC");
        assert_eq!(team.country(), "Spain");
        assert!(team.is_ready());
        assert!(team.can_afford(dec!(5_000_000)));
        assert!(!team.can_afford(dec!(5_000_001)));
    }
}
