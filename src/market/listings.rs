use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::domain::player::Player;
use crate::domain::transfer::{TransferError, TransferResult};
use crate::infrastructure::repositories::postgres_player_repository::PlayerRow;

/// Creates and withdraws sale listings
///
/// Both operations are single-row updates guarded by an ownership check
/// read immediately before the write; the write itself re-asserts the
/// listing flag so a lost race resolves to the same error as a stale
/// request. Cross-entity atomicity is not needed here; that discipline
/// belongs to the trade engine alone.
pub struct ListingManager {
    pool: PgPool,
}

impl ListingManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Puts a player owned by `user_id` up for sale at `asking_price`.
    ///
    /// # Errors
    /// `InvalidPrice` (rejected before any store access), `NotOwner`,
    /// `AlreadyListed`.
    pub async fn list(
        &self,
        user_id: Uuid,
        player_id: Uuid,
        asking_price: Decimal,
    ) -> TransferResult<Player> {
        if asking_price <= Decimal::ZERO {
            return Err(TransferError::InvalidPrice);
        }

        let mut player = self.owned_player(user_id, player_id).await?;
        player.list_for_sale(asking_price)?;

        let (is_listed, price) = player.listing().columns();
        let result = sqlx::query(
            "UPDATE players SET is_listed = $2, asking_price = $3
             WHERE id = $1 AND is_listed = FALSE",
        )
        .bind(player.id())
        .bind(is_listed)
        .bind(price)
        .execute(&self.pool)
        .await
        .map_err(TransferError::from_store)?;

        if result.rows_affected() == 0 {
            return Err(TransferError::AlreadyListed);
        }

        info!(player = %player.id(), price = %asking_price, "player listed for sale");
        Ok(player)
    }

    /// Withdraws the open offer on a player owned by `user_id`.
    ///
    /// # Errors
    /// `NotOwner`, `NotListed`.
    pub async fn unlist(&self, user_id: Uuid, player_id: Uuid) -> TransferResult<Player> {
        let mut player = self.owned_player(user_id, player_id).await?;
        player.withdraw_listing()?;

        let result = sqlx::query(
            "UPDATE players SET is_listed = FALSE, asking_price = NULL
             WHERE id = $1 AND is_listed = TRUE",
        )
        .bind(player.id())
        .execute(&self.pool)
        .await
        .map_err(TransferError::from_store)?;

        if result.rows_affected() == 0 {
            return Err(TransferError::NotListed);
        }

        info!(player = %player.id(), "listing withdrawn");
        Ok(player)
    }

    /// Resolves a player only if its team belongs to `user_id`.
    async fn owned_player(&self, user_id: Uuid, player_id: Uuid) -> TransferResult<Player> {
        let row: Option<PlayerRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.team_id, p.first_name, p.last_name, p.nationality,
                   p.position, p.age, p.market_value, p.is_listed, p.asking_price
            FROM players p
            JOIN teams t ON t.id = p.team_id
            WHERE p.id = $1 AND t.user_id = $2
            "#,
        )
        .bind(player_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(TransferError::from_store)?;

        row.map(PlayerRow::into_player)
            .ok_or(TransferError::NotOwner)
    }
}
