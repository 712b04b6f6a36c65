use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// Raw team row as stored in PostgreSQL
///
/// Shared with the trade engine, whose locked reads map through the same
/// struct.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct TeamRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub country: String,
    pub budget: Decimal,
    pub total_players: i32,
    pub is_ready: bool,
    pub created_at: DateTime<Utc>,
}

impl TeamRow {
    pub(crate) fn into_team(self) -> Team {
        Team::from_persistence(
            self.id,
            self.user_id,
            self.name,
            self.country,
            self.budget,
            self.total_players,
            self.is_ready,
            self.created_at,
        )
    }
}

pub(crate) const TEAM_COLUMNS: &str =
    "id, user_id, name, country, budget, total_players, is_ready, created_at";

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        let row: Option<TeamRow> = sqlx::query_as(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team by id: {}", e))?;

        Ok(row.map(TeamRow::into_team))
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Team>, String> {
        let row: Option<TeamRow> = sqlx::query_as(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team by user: {}", e))?;

        Ok(row.map(TeamRow::into_team))
    }
}
