use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::domain::player::Player;
use crate::domain::transfer::TradeReceipt;
use crate::market::{ListedPlayer, ListingManager, MarketCatalog, MarketFilters, TradeEngine};

/// Query parameters for browsing the transfer market
#[derive(Debug, Deserialize)]
pub struct ListTransfersQuery {
    pub team_name: Option<String>,
    pub player_name: Option<String>,
    pub max_price: Option<Decimal>,
}

impl From<ListTransfersQuery> for MarketFilters {
    fn from(query: ListTransfersQuery) -> Self {
        Self {
            team_name: query.team_name,
            player_name: query.player_name,
            max_price: query.max_price,
        }
    }
}

/// Request body for creating a listing
#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    pub asking_price: Decimal,
}

/// Request body for buying a player
#[derive(Debug, Deserialize)]
pub struct BuyPlayerRequest {
    pub player_id: Uuid,
}

/// A player as returned by the listing endpoints and the team roster
#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub position: String,
    pub age: i32,
    pub market_value: Decimal,
    pub is_listed: bool,
    pub asking_price: Option<Decimal>,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        let (is_listed, asking_price) = player.listing().columns();
        Self {
            id: player.id(),
            team_id: player.team_id(),
            first_name: player.first_name().to_string(),
            last_name: player.last_name().to_string(),
            nationality: player.nationality().to_string(),
            position: player.position().to_string(),
            age: player.age(),
            market_value: player.market_value(),
            is_listed,
            asking_price,
        }
    }
}

/// Browse players currently for sale
///
/// GET /api/transfers
pub async fn get_transfer_list(
    State(pool): State<PgPool>,
    JwtAuth(_user_id): JwtAuth,
    Query(query): Query<ListTransfersQuery>,
) -> Result<Json<Vec<ListedPlayer>>, ApiError> {
    let catalog = MarketCatalog::new(pool);
    let listings = catalog.query(&query.into()).await?;

    Ok(Json(listings))
}

/// Put one of your players up for sale
///
/// POST /api/transfers/list/:player_id
pub async fn add_to_transfer_list(
    State(pool): State<PgPool>,
    JwtAuth(user_id): JwtAuth,
    Path(player_id): Path<Uuid>,
    Json(req): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let listings = ListingManager::new(pool);
    let player = listings.list(user_id, player_id, req.asking_price).await?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(&player))))
}

/// Withdraw one of your players from the market
///
/// DELETE /api/transfers/list/:player_id
pub async fn remove_from_transfer_list(
    State(pool): State<PgPool>,
    JwtAuth(user_id): JwtAuth,
    Path(player_id): Path<Uuid>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let listings = ListingManager::new(pool);
    let player = listings.unlist(user_id, player_id).await?;

    Ok(Json(PlayerResponse::from(&player)))
}

/// Buy a listed player
///
/// POST /api/transfers/buy
pub async fn buy_player(
    State(pool): State<PgPool>,
    JwtAuth(user_id): JwtAuth,
    Json(req): Json<BuyPlayerRequest>,
) -> Result<Json<TradeReceipt>, ApiError> {
    let engine = TradeEngine::new(pool);
    let receipt = engine.buy(user_id, req.player_id).await?;

    Ok(Json(receipt))
}
