use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::player::Position;
use crate::domain::transfer::{TransferError, TransferResult};

/// Filters for a market catalog query
///
/// Name filters are case-insensitive substring matches; `player_name`
/// matches either the first or the last name. `max_price` is an inclusive
/// upper bound on the asking price.
#[derive(Debug, Clone, Default)]
pub struct MarketFilters {
    pub team_name: Option<String>,
    pub player_name: Option<String>,
    pub max_price: Option<Decimal>,
}

/// A listed player as shown in the catalog, joined with the selling team's
/// public name and country.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ListedPlayer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub position: Position,
    pub age: i32,
    pub market_value: Decimal,
    pub asking_price: Decimal,
    pub team_id: Uuid,
    pub team_name: String,
    pub team_country: String,
}

/// Read path over players currently for sale
///
/// A pure read: a returned listing may already be gone by the time a buy is
/// attempted, which the trade engine handles by re-validating inside its
/// own transaction.
pub struct MarketCatalog {
    pool: PgPool,
}

impl MarketCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn query(&self, filters: &MarketFilters) -> TransferResult<Vec<ListedPlayer>> {
        sqlx::query_as(
            r#"
            SELECT p.id, p.first_name, p.last_name, p.nationality, p.position,
                   p.age, p.market_value, p.asking_price,
                   t.id AS team_id, t.name AS team_name, t.country AS team_country
            FROM players p
            JOIN teams t ON t.id = p.team_id
            WHERE p.is_listed = TRUE
              AND ($1::text IS NULL OR t.name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL
                   OR p.first_name ILIKE '%' || $2 || '%'
                   OR p.last_name ILIKE '%' || $2 || '%')
              AND ($3::numeric IS NULL OR p.asking_price <= $3)
            ORDER BY p.asking_price ASC
            "#,
        )
        .bind(filters.team_name.as_deref())
        .bind(filters.player_name.as_deref())
        .bind(filters.max_price)
        .fetch_all(&self.pool)
        .await
        .map_err(TransferError::from_store)
    }
}
