use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::history;
use super::valuation::{RandomAppreciation, ValuationPolicy};
use crate::domain::player::Player;
use crate::domain::team::Team;
use crate::domain::transfer::settlement::{self, TradeOutcome};
use crate::domain::transfer::{TradeReceipt, TransferError, TransferRecord, TransferResult};
use crate::infrastructure::repositories::postgres_player_repository::PlayerRow;
use crate::infrastructure::repositories::postgres_team_repository::{TeamRow, TEAM_COLUMNS};

/// Executes player purchases as single atomic units
///
/// Every read a purchase depends on happens inside the transaction that
/// performs the writes, under `FOR UPDATE` row locks. Two buyers racing for
/// the same player serialize on the player row; the loser re-reads a
/// consumed listing and fails with `PlayerNotForSale`. Opposing trades can
/// take the two team locks in opposite orders; the store reports that as a
/// deadlock, which is retried once like any other transient conflict.
pub struct TradeEngine {
    pool: PgPool,
    valuation: Box<dyn ValuationPolicy>,
}

impl TradeEngine {
    pub fn new(pool: PgPool) -> Self {
        Self::with_policy(pool, RandomAppreciation)
    }

    pub fn with_policy(pool: PgPool, valuation: impl ValuationPolicy + 'static) -> Self {
        Self {
            pool,
            valuation: Box::new(valuation),
        }
    }

    /// Buys the listed player for the team owned by `buyer_user_id`.
    ///
    /// Either every mutation commits (both balances, both roster counts,
    /// the player's owner and listing state, the valuation bump, and one
    /// trade record) or none do. A transient store conflict is retried
    /// once with a fresh read; user-facing failures are never retried.
    #[instrument(skip(self))]
    pub async fn buy(
        &self,
        buyer_user_id: Uuid,
        player_id: Uuid,
    ) -> TransferResult<TradeReceipt> {
        match self.try_buy(buyer_user_id, player_id).await {
            Err(err) if err.is_transient() => {
                warn!(player = %player_id, error = %err, "transient conflict, retrying buy");
                self.try_buy(buyer_user_id, player_id).await
            }
            other => other,
        }
    }

    async fn try_buy(
        &self,
        buyer_user_id: Uuid,
        player_id: Uuid,
    ) -> TransferResult<TradeReceipt> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(TransferError::from_store)?;

        // An early return drops the transaction, rolling everything back.
        let buyer = self.lock_buyer_team(&mut tx, buyer_user_id).await?;

        // checked before the player is even resolved
        if !buyer.has_roster_room() {
            return Err(TransferError::RosterFull);
        }

        let player = self.lock_player(&mut tx, player_id).await?;
        let seller = self.lock_seller_team(&mut tx, player.team_id()).await?;

        let new_value = self.valuation.appreciate(player.market_value());
        let outcome = settlement::execute(buyer, seller, player, new_value)?;

        self.persist(&mut tx, &outcome, player_id).await?;
        tx.commit().await.map_err(TransferError::from_store)?;

        for event in &outcome.events {
            info!(?event, "trade committed");
        }

        Ok(TradeReceipt {
            message: "Player purchased successfully".to_string(),
            player_id,
            price: outcome.price,
            commission: outcome.commission,
        })
    }

    async fn lock_buyer_team(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
    ) -> TransferResult<Team> {
        let row: Option<TeamRow> = sqlx::query_as(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE user_id = $1 FOR UPDATE"
        ))
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(TransferError::from_store)?;

        row.map(TeamRow::into_team)
            .ok_or(TransferError::BuyerTeamNotFound)
    }

    async fn lock_player(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        player_id: Uuid,
    ) -> TransferResult<Player> {
        let row: Option<PlayerRow> = sqlx::query_as(
            r#"
            SELECT id, team_id, first_name, last_name, nationality,
                   position, age, market_value, is_listed, asking_price
            FROM players WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(player_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(TransferError::from_store)?;

        row.map(PlayerRow::into_player)
            .ok_or(TransferError::PlayerNotFound)
    }

    async fn lock_seller_team(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        team_id: Uuid,
    ) -> TransferResult<Team> {
        // the player's FK guarantees the row exists
        let row: TeamRow = sqlx::query_as(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE id = $1 FOR UPDATE"
        ))
        .bind(team_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(TransferError::from_store)?;

        Ok(row.into_team())
    }

    /// Writes the settled outcome back under the locks taken by the reads.
    async fn persist(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        outcome: &TradeOutcome,
        player_id: Uuid,
    ) -> TransferResult<()> {
        for team in [&outcome.buyer, &outcome.seller] {
            sqlx::query("UPDATE teams SET budget = $2, total_players = $3 WHERE id = $1")
                .bind(team.id())
                .bind(team.budget())
                .bind(team.total_players())
                .execute(&mut **tx)
                .await
                .map_err(TransferError::from_store)?;
        }

        sqlx::query(
            "UPDATE players
             SET team_id = $2, is_listed = FALSE, asking_price = NULL, market_value = $3
             WHERE id = $1",
        )
        .bind(player_id)
        .bind(outcome.player.team_id())
        .bind(outcome.player.market_value())
        .execute(&mut **tx)
        .await
        .map_err(TransferError::from_store)?;

        let record = TransferRecord::new(
            player_id,
            outcome.seller.id(),
            outcome.buyer.id(),
            outcome.price,
            outcome.seller_revenue,
            outcome.commission,
        );
        history::append(tx, &record)
            .await
            .map_err(TransferError::from_store)?;

        Ok(())
    }
}
