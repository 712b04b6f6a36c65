use sqlx::{Postgres, Transaction};

use crate::domain::transfer::TransferRecord;

/// Appends a completed trade to the audit trail
///
/// Must run inside the same transaction as the trade it records; the
/// history is append-only and nothing else ever writes to it.
pub(crate) async fn append(
    tx: &mut Transaction<'_, Postgres>,
    record: &TransferRecord,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO transfer_records
            (id, player_id, seller_team_id, buyer_team_id,
             asking_price, sale_price, commission, executed_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(record.id)
    .bind(record.player_id)
    .bind(record.seller_team_id)
    .bind(record.buyer_team_id)
    .bind(record.asking_price)
    .bind(record.sale_price)
    .bind(record.commission)
    .bind(record.executed_at)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
