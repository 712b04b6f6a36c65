use rust_decimal::Decimal;
use uuid::Uuid;

/// Domain events that occur within the Team aggregate
///
/// Emitted by the balance/roster mutations a completed trade applies.
/// The trade engine logs them as part of the commit record.
#[derive(Debug, Clone)]
pub enum TeamEvent {
    /// Fired on the buyer side of a completed trade
    PlayerPurchased {
        team_id: Uuid,
        player_id: Uuid,
        /// Full asking price debited from the buyer
        price: Decimal,
    },
    /// Fired on the seller side of a completed trade
    PlayerSold {
        team_id: Uuid,
        player_id: Uuid,
        /// Asking price minus commission, credited to the seller
        revenue: Decimal,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> Uuid {
        match self {
            TeamEvent::PlayerPurchased { team_id, .. } => *team_id,
            TeamEvent::PlayerSold { team_id, .. } => *team_id,
        }
    }
}
