use rust_decimal::Decimal;
use uuid::Uuid;

use super::value_objects::{ListingState, Position};
use crate::domain::transfer::errors::TransferError;

/// Player aggregate root
///
/// A player belongs to exactly one team at a time; ownership is reassigned
/// atomically when a trade commits. The listing state is the player's open
/// offer to sell at a fixed asking price; at most one active listing per
/// player, by construction.
#[derive(Debug, Clone)]
pub struct Player {
    id: Uuid,
    team_id: Uuid,
    first_name: String,
    last_name: String,
    nationality: String,
    position: Position,
    age: i32,
    market_value: Decimal,
    listing: ListingState,
}

impl Player {
    /// Puts the player up for sale at the given asking price.
    ///
    /// # Errors
    /// `InvalidPrice` if the price is not positive, `AlreadyListed` if an
    /// offer is already open.
    pub fn list_for_sale(&mut self, asking_price: Decimal) -> Result<(), TransferError> {
        if asking_price <= Decimal::ZERO {
            return Err(TransferError::InvalidPrice);
        }
        if self.listing.is_listed() {
            return Err(TransferError::AlreadyListed);
        }
        self.listing = ListingState::Listed { asking_price };
        Ok(())
    }

    /// Withdraws the player's open offer.
    ///
    /// # Errors
    /// `NotListed` if there is no offer to withdraw.
    pub fn withdraw_listing(&mut self) -> Result<(), TransferError> {
        if !self.listing.is_listed() {
            return Err(TransferError::NotListed);
        }
        self.listing = ListingState::Unlisted;
        Ok(())
    }

    /// Moves the player to the buying team, consuming the listing and
    /// applying the post-sale valuation.
    pub fn transfer_to(&mut self, buyer_team_id: Uuid, new_market_value: Decimal) {
        self.team_id = buyer_team_id;
        self.listing = ListingState::Unlisted;
        self.market_value = new_market_value;
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn market_value(&self) -> Decimal {
        self.market_value
    }

    pub fn listing(&self) -> ListingState {
        self.listing
    }

    /// Reconstructs a Player from persistence layer data
    ///
    /// Bypasses business rules validation since the data was validated when
    /// it was written. Only to be used by repository implementations and the
    /// trade engine's row mapping.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        team_id: Uuid,
        first_name: String,
        last_name: String,
        nationality: String,
        position: Position,
        age: i32,
        market_value: Decimal,
        listing: ListingState,
    ) -> Self {
        Self {
            id,
            team_id,
            first_name,
            last_name,
            nationality,
            position,
            age,
            market_value,
            listing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn unlisted_player(team_id: Uuid) -> Player {
        Player::from_persistence(
            Uuid::new_v4(),
            team_id,
            "Diego".to_string(),
            "Silva".to_string(),
            "Brazil".to_string(),
            Position::Midfielder,
            24,
            dec!(800_000),
            ListingState::Unlisted,
        )
    }

    #[test]
    fn list_for_sale_sets_the_asking_price() {
        let mut player = unlisted_player(Uuid::new_v4());

        player.list_for_sale(dec!(1_000_000)).expect("listing succeeds");

        assert!(player.listing().is_listed());
        assert_eq!(player.listing().asking_price(), Some(dec!(1_000_000)));
    }

    #[test]
    fn list_for_sale_rejects_non_positive_prices() {
        let mut player = unlisted_player(Uuid::new_v4());

        assert!(matches!(
            player.list_for_sale(Decimal::ZERO),
            Err(TransferError::InvalidPrice)
        ));
        assert!(matches!(
            player.list_for_sale(dec!(-100)),
            Err(TransferError::InvalidPrice)
        ));
        assert!(!player.listing().is_listed());
    }

    #[test]
    fn double_listing_rejected() {
        let mut player = unlisted_player(Uuid::new_v4());
        player.list_for_sale(dec!(500_000)).unwrap();

        let result = player.list_for_sale(dec!(600_000));

        assert!(matches!(result, Err(TransferError::AlreadyListed)));
        // the original offer stands
        assert_eq!(player.listing().asking_price(), Some(dec!(500_000)));
    }

    #[test]
    fn withdraw_clears_the_listing() {
        let mut player = unlisted_player(Uuid::new_v4());
        player.list_for_sale(dec!(500_000)).unwrap();

        player.withdraw_listing().expect("withdraw succeeds");

        assert!(!player.listing().is_listed());
        assert_eq!(player.listing().asking_price(), None);
    }

    #[test]
    fn withdraw_without_listing_rejected() {
        let mut player = unlisted_player(Uuid::new_v4());
        assert!(matches!(
            player.withdraw_listing(),
            Err(TransferError::NotListed)
        ));
    }

    #[test]
    fn transfer_moves_ownership_and_consumes_the_listing() {
        let seller_team = Uuid::new_v4();
        let buyer_team = Uuid::new_v4();
        let mut player = unlisted_player(seller_team);
        player.list_for_sale(dec!(1_000_000)).unwrap();

        player.transfer_to(buyer_team, dec!(850_000));

        assert_eq!(player.team_id(), buyer_team);
        assert!(!player.listing().is_listed());
        assert_eq!(player.market_value(), dec!(850_000));
    }
}
