use thiserror::Error;

/// Errors that can occur on the transfer market
///
/// Three categories share this enum:
/// - validation failures rejected before any store access (`InvalidPrice`)
/// - business-rule violations detected inside the store read path; these
///   roll back the surrounding transaction with zero side effects
/// - store failures (`TransientStore`, `Store`); only `TransientStore` may
///   be retried
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Price must be a positive number")]
    InvalidPrice,

    #[error("Player not found or does not belong to your team")]
    NotOwner,

    #[error("Player is already on the transfer list")]
    AlreadyListed,

    #[error("Player is not on the transfer list")]
    NotListed,

    #[error("Your team not found")]
    BuyerTeamNotFound,

    #[error("Your team is full (max 25 players)")]
    RosterFull,

    #[error("Player not found")]
    PlayerNotFound,

    #[error("Player is not for sale")]
    PlayerNotForSale,

    #[error("You cannot buy your own player")]
    SelfTrade,

    #[error("Seller team cannot sell more players (min 15 limit reached)")]
    SellerRosterAtFloor,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Transfer could not be committed, try again: {0}")]
    TransientStore(sqlx::Error),

    #[error("Storage error: {0}")]
    Store(#[from] sqlx::Error),
}

impl TransferError {
    /// Classifies a store failure. Serialization failures (SQLSTATE 40001)
    /// and deadlocks (40P01) abort the transaction without committing
    /// anything and are safe to retry with a fresh read.
    pub fn from_store(err: sqlx::Error) -> Self {
        if let Some(db) = err.as_database_error() {
            if matches!(db.code().as_deref(), Some("40001") | Some("40P01")) {
                return TransferError::TransientStore(err);
            }
        }
        TransferError::Store(err)
    }

    /// Whether the failed operation may be retried with a fresh read.
    pub fn is_transient(&self) -> bool {
        matches!(self, TransferError::TransientStore(_))
    }
}

pub type TransferResult<T> = Result<T, TransferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_store_error_is_not_transient() {
        let err = TransferError::from_store(sqlx::Error::RowNotFound);
        assert!(matches!(err, TransferError::Store(_)));
        assert!(!err.is_transient());
    }

    #[test]
    fn business_errors_are_not_transient() {
        assert!(!TransferError::InsufficientFunds.is_transient());
        assert!(!TransferError::PlayerNotForSale.is_transient());
    }

    #[test]
    fn messages_match_the_user_facing_wording() {
        assert_eq!(
            TransferError::RosterFull.to_string(),
            "Your team is full (max 25 players)"
        );
        assert_eq!(
            TransferError::SellerRosterAtFloor.to_string(),
            "Seller team cannot sell more players (min 15 limit reached)"
        );
    }
}
