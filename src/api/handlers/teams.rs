use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::transfers::PlayerResponse;
use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::team::Team;
use crate::infrastructure::repositories::{PostgresPlayerRepository, PostgresTeamRepository};

/// A team with its full roster
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub budget: Decimal,
    pub total_players: i32,
    pub is_ready: bool,
    pub players: Vec<PlayerResponse>,
}

impl TeamResponse {
    fn new(team: &Team, players: Vec<PlayerResponse>) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            country: team.country().to_string(),
            budget: team.budget(),
            total_players: team.total_players(),
            is_ready: team.is_ready(),
            players,
        }
    }
}

/// Get the calling user's team and roster
///
/// GET /api/teams/me
pub async fn get_my_team(
    State(pool): State<PgPool>,
    JwtAuth(user_id): JwtAuth,
) -> Result<Json<TeamResponse>, ApiError> {
    let team_repo = PostgresTeamRepository::new(pool.clone());
    let team = team_repo
        .find_by_user(user_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Your team not found"))?;

    let player_repo = PostgresPlayerRepository::new(pool);
    let players = player_repo
        .find_by_team(team.id())
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    let roster = players.iter().map(PlayerResponse::from).collect();

    Ok(Json(TeamResponse::new(&team, roster)))
}
