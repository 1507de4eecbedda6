//! Ownership trait for user-owned resources.
//!
//! Spots and reviews each have exactly one owning user, compared by
//! identifier equality. There is no role hierarchy and no override: the
//! owner may mutate, everyone else is forbidden.
//!
//! Handlers call `check_ownership()` and propagate with `?`, so a failed
//! check ends the request before any mutation runs.

use super::{DomainError, ErrorCode, UserId};

/// Trait for resources that have a single owner.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Validates ownership, returning `Forbidden` if the user is not the owner.
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(ErrorCode::Forbidden, "Forbidden")
                .with_detail("owner_id", self.owner_id().to_string())
                .with_detail("requested_by", user_id.to_string()))
        }
    }
}
