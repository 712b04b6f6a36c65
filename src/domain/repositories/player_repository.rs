use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::player::Player;

/// Repository trait for the Player aggregate
///
/// Read-only contract, for the same reason as [`super::TeamRepository`]:
/// every player mutation flows through the listing manager or the trade
/// engine, which carry their own store access.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find a player by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Player>, String>;

    /// Find all players owned by a team
    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Player>, String>;
}
