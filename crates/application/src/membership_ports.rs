//! Membership persistence port.

use async_trait::async_trait;
use memberpoint_core::{AppResult, NonEmptyString};
use memberpoint_domain::{AccumulationAmount, Membership, MembershipId, MembershipKind, Point};

/// Input payload for inserting a membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMembership {
    /// Owning user identifier.
    pub user_id: NonEmptyString,
    /// Provider kind.
    pub kind: MembershipKind,
    /// Opening balance.
    pub point: Point,
}

/// Repository port for membership persistence.
///
/// Implementations own the `(user_id, kind)` uniqueness constraint: a
/// duplicate insert must fail with `AppError::Conflict`.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Finds the membership a user holds for one provider kind.
    async fn find_by_user_and_kind(
        &self,
        user_id: &NonEmptyString,
        kind: MembershipKind,
    ) -> AppResult<Option<Membership>>;

    /// Finds a membership by identifier.
    async fn find_by_id(&self, membership_id: MembershipId) -> AppResult<Option<Membership>>;

    /// Lists every membership of a user ordered by identifier.
    async fn list_by_user(&self, user_id: &NonEmptyString) -> AppResult<Vec<Membership>>;

    /// Inserts a membership and returns it with its assigned identifier.
    async fn create(&self, membership: NewMembership) -> AppResult<Membership>;

    /// Adds `amount` to the balance of a membership owned by `user_id`.
    ///
    /// The addition happens in a single store operation so concurrent
    /// accumulations are never lost. Returns `None` when no membership with
    /// that identifier belongs to the user.
    async fn accumulate_point(
        &self,
        user_id: &NonEmptyString,
        membership_id: MembershipId,
        amount: AccumulationAmount,
    ) -> AppResult<Option<Membership>>;

    /// Deletes a membership. Returns whether a record was removed.
    async fn delete_by_id(&self, membership_id: MembershipId) -> AppResult<bool>;
}
