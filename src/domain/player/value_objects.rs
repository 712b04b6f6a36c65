use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Playing position of a player
///
/// A generated starting roster holds 3 goalkeepers, 6 defenders,
/// 6 midfielders, and 5 attackers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "player_position", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

impl Position {
    /// How many players of this position a starting roster contains.
    pub fn starting_count(&self) -> usize {
        match self {
            Position::Goalkeeper => 3,
            Position::Defender => 6,
            Position::Midfielder => 6,
            Position::Attacker => 5,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Goalkeeper => write!(f, "goalkeeper"),
            Position::Defender => write!(f, "defender"),
            Position::Midfielder => write!(f, "midfielder"),
            Position::Attacker => write!(f, "attacker"),
        }
    }
}

/// Sale state of a player
///
/// Modeled as a tagged state so an asking price can only exist while the
/// player is actually listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingState {
    Unlisted,
    Listed { asking_price: Decimal },
}

impl ListingState {
    pub fn is_listed(&self) -> bool {
        matches!(self, ListingState::Listed { .. })
    }

    /// The asking price while listed, `None` otherwise.
    pub fn asking_price(&self) -> Option<Decimal> {
        match self {
            ListingState::Listed { asking_price } => Some(*asking_price),
            ListingState::Unlisted => None,
        }
    }

    /// Reconstructs the state from its two storage columns. The store's
    /// CHECK constraint keeps the columns consistent; a price without the
    /// flag reads as unlisted.
    pub fn from_columns(is_listed: bool, asking_price: Option<Decimal>) -> Self {
        match (is_listed, asking_price) {
            (true, Some(asking_price)) => ListingState::Listed { asking_price },
            _ => ListingState::Unlisted,
        }
    }

    /// The two storage columns this state persists as.
    pub fn columns(&self) -> (bool, Option<Decimal>) {
        match self {
            ListingState::Listed { asking_price } => (true, Some(*asking_price)),
            ListingState::Unlisted => (false, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn starting_counts_sum_to_a_full_roster() {
        let total: usize = [
            Position::Goalkeeper,
            Position::Defender,
            Position::Midfielder,
            Position::Attacker,
        ]
        .iter()
        .map(Position::starting_count)
        .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::Goalkeeper.to_string(), "goalkeeper");
        assert_eq!(Position::Attacker.to_string(), "attacker");
    }

    #[test]
    fn listed_state_carries_its_price() {
        let state = ListingState::Listed {
            asking_price: dec!(750_000),
        };
        assert!(state.is_listed());
        assert_eq!(state.asking_price(), Some(dec!(750_000)));
        assert_eq!(state.columns(), (true, Some(dec!(750_000))));
    }

    #[test]
    fn unlisted_state_has_no_price() {
        let state = ListingState::Unlisted;
        assert!(!state.is_listed());
        assert_eq!(state.asking_price(), None);
        assert_eq!(state.columns(), (false, None));
    }

    #[test]
    fn columns_round_trip() {
        let listed = ListingState::from_columns(true, Some(dec!(100)));
        assert_eq!(
            listed,
            ListingState::Listed {
                asking_price: dec!(100)
            }
        );

        let unlisted = ListingState::from_columns(false, None);
        assert_eq!(unlisted, ListingState::Unlisted);
    }

    #[test]
    fn orphaned_price_reads_as_unlisted() {
        assert_eq!(
            ListingState::from_columns(false, Some(dec!(100))),
            ListingState::Unlisted
        );
        assert_eq!(ListingState::from_columns(true, None), ListingState::Unlisted);
    }
}
