use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Immutable record of a completed transfer
///
/// Written exactly once, inside the same transaction as the trade it
/// describes. Never updated or deleted; the audit trail belongs to the
/// store alone.
///
/// `sale_price` is what the seller actually received (asking price minus
/// commission); `asking_price` is what the buyer paid.
#[derive(Debug, Clone)]
pub struct TransferRecord {
    pub id: Uuid,
    pub player_id: Uuid,
    pub seller_team_id: Uuid,
    pub buyer_team_id: Uuid,
    pub asking_price: Decimal,
    pub sale_price: Decimal,
    pub commission: Decimal,
    pub executed_at: DateTime<Utc>,
}

impl TransferRecord {
    pub fn new(
        player_id: Uuid,
        seller_team_id: Uuid,
        buyer_team_id: Uuid,
        asking_price: Decimal,
        sale_price: Decimal,
        commission: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_id,
            seller_team_id,
            buyer_team_id,
            asking_price,
            sale_price,
            commission,
            executed_at: Utc::now(),
        }
    }
}

/// Receipt returned to the buyer after a successful purchase.
#[derive(Debug, Clone, Serialize)]
pub struct TradeReceipt {
    pub message: String,
    pub player_id: Uuid,
    pub price: Decimal,
    pub commission: Decimal,
}
