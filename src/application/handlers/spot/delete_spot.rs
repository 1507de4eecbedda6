//! DeleteSpotHandler - Command handler for deleting spots.

use std::sync::Arc;

use crate::domain::foundation::{OwnedByUser, SpotId, UserId};
use crate::domain::spot::SpotError;
use crate::ports::SpotRepository;

/// Command to delete a spot.
#[derive(Debug, Clone)]
pub struct DeleteSpotCommand {
    pub spot_id: SpotId,
    pub user_id: UserId,
}

/// Handler for deleting spots.
///
/// Reviews and images cascade in storage, so no aggregate refresh is
/// needed afterwards - there is no spot left to carry stale numbers.
pub struct DeleteSpotHandler {
    spots: Arc<dyn SpotRepository>,
}

impl DeleteSpotHandler {
    pub fn new(spots: Arc<dyn SpotRepository>) -> Self {
        Self { spots }
    }

    pub async fn handle(&self, cmd: DeleteSpotCommand) -> Result<(), SpotError> {
        // 1. Locate
        let spot = self
            .spots
            .find_by_id(&cmd.spot_id)
            .await?
            .ok_or_else(|| SpotError::not_found(cmd.spot_id))?;

        // 2. Authorize
        spot.check_ownership(&cmd.user_id)?;

        // 3. Destroy
        self.spots.delete(&cmd.spot_id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemorySpotRepository, InMemoryStore};
    use crate::domain::spot::{Spot, SpotDetails};

    fn owner() -> UserId {
        UserId::new("host-1").unwrap()
    }

    async fn seeded() -> (DeleteSpotHandler, Arc<InMemorySpotRepository>, SpotId) {
        let store = InMemoryStore::new();
        let repo = Arc::new(InMemorySpotRepository::new(store));
        let spot = Spot::new(
            SpotId::new(),
            owner(),
            SpotDetails {
                address: "9 Hill Ct".to_string(),
                city: "Denver".to_string(),
                state: "CO".to_string(),
                country: "USA".to_string(),
                name: "A-Frame".to_string(),
                description: "Mountain A-frame".to_string(),
                price: 130.0,
            },
        )
        .unwrap();
        repo.save(&spot).await.unwrap();
        (DeleteSpotHandler::new(repo.clone()), repo, *spot.id())
    }

    #[tokio::test]
    async fn owner_deletes_spot() {
        let (handler, repo, spot_id) = seeded().await;

        handler
            .handle(DeleteSpotCommand {
                spot_id,
                user_id: owner(),
            })
            .await
            .unwrap();

        assert!(repo.find_by_id(&spot_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_spot_is_not_found() {
        let (handler, _, _) = seeded().await;

        let result = handler
            .handle(DeleteSpotCommand {
                spot_id: SpotId::new(),
                user_id: owner(),
            })
            .await;

        assert!(matches!(result, Err(SpotError::NotFound(_))));
    }

    #[tokio::test]
    async fn non_owner_cannot_delete() {
        let (handler, repo, spot_id) = seeded().await;

        let result = handler
            .handle(DeleteSpotCommand {
                spot_id,
                user_id: UserId::new("intruder").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(SpotError::Forbidden)));
        assert!(repo.find_by_id(&spot_id).await.unwrap().is_some());
    }
}
