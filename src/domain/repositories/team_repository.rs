use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::team::Team;

/// Repository trait for the Team aggregate
///
/// Read-only contract: teams are created by the roster-generation
/// collaborator and mutated only inside the trade engine's transaction,
/// so no save/delete surface is exposed here.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String>;

    /// Find the team owned by a user
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Team>, String>;
}
