use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::player::{ListingState, Player, Position};
use crate::domain::repositories::PlayerRepository;

/// Raw player row as stored in PostgreSQL
///
/// Shared with the listing manager and the trade engine, whose locked
/// reads map through the same struct.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct PlayerRow {
    pub id: Uuid,
    pub team_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub position: Position,
    pub age: i32,
    pub market_value: Decimal,
    pub is_listed: bool,
    pub asking_price: Option<Decimal>,
}

impl PlayerRow {
    pub(crate) fn into_player(self) -> Player {
        Player::from_persistence(
            self.id,
            self.team_id,
            self.first_name,
            self.last_name,
            self.nationality,
            self.position,
            self.age,
            self.market_value,
            ListingState::from_columns(self.is_listed, self.asking_price),
        )
    }
}

pub(crate) const PLAYER_COLUMNS: &str = "id, team_id, first_name, last_name, nationality, \
     position, age, market_value, is_listed, asking_price";

/// PostgreSQL implementation of PlayerRepository
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Player>, String> {
        let row: Option<PlayerRow> = sqlx::query_as(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find player by id: {}", e))?;

        Ok(row.map(PlayerRow::into_player))
    }

    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Player>, String> {
        let rows: Vec<PlayerRow> = sqlx::query_as(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE team_id = $1 ORDER BY position, last_name"
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find players by team: {}", e))?;

        Ok(rows.into_iter().map(PlayerRow::into_player).collect())
    }
}
