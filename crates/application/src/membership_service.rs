//! Membership application service.
//!
//! Owns the membership lifecycle: registration, lookup, point accumulation
//! and removal. Every operation is scoped to the caller's user identifier.

use std::sync::Arc;

use memberpoint_core::{AppError, AppResult, NonEmptyString};
use memberpoint_domain::{AccumulationAmount, Membership, MembershipId, MembershipKind, Point};

use crate::membership_ports::{MembershipRepository, NewMembership};

mod points;
mod registration;
mod removal;
mod retrieval;


/// Identifier and kind of a freshly registered membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipRegistration {
    /// Assigned membership identifier.
    pub id: MembershipId,
    /// Registered provider kind.
    pub kind: MembershipKind,
}

/// Application service for membership management.
#[derive(Clone)]
pub struct MembershipService {
    membership_repository: Arc<dyn MembershipRepository>,
}

impl MembershipService {
    /// Creates a new membership service.
    #[must_use]
    pub fn new(membership_repository: Arc<dyn MembershipRepository>) -> Self {
        Self {
            membership_repository,
        }
    }

    /// Registers a membership for `(user_id, kind)` with an opening balance.
    pub async fn add_membership(
        &self,
        user_id: &NonEmptyString,
        kind: MembershipKind,
        point: Point,
    ) -> AppResult<MembershipRegistration> {
        self.add_membership_impl(user_id, kind, point).await
    }

    /// Returns the membership a user holds for `kind`.
    pub async fn get_membership_detail(
        &self,
        user_id: &NonEmptyString,
        kind: MembershipKind,
    ) -> AppResult<Membership> {
        self.get_membership_detail_impl(user_id, kind).await
    }

    /// Returns every membership a user holds. Empty when none exist.
    pub async fn get_membership_list(
        &self,
        user_id: &NonEmptyString,
    ) -> AppResult<Vec<Membership>> {
        self.get_membership_list_impl(user_id).await
    }

    /// Adds `amount` points to one of the caller's memberships.
    pub async fn accumulate_membership_point(
        &self,
        user_id: &NonEmptyString,
        membership_id: MembershipId,
        amount: AccumulationAmount,
    ) -> AppResult<Membership> {
        self.accumulate_membership_point_impl(user_id, membership_id, amount)
            .await
    }

    /// Removes one of the caller's memberships.
    ///
    /// Unknown identifiers and memberships owned by other users are
    /// accepted without changes.
    pub async fn remove_membership(
        &self,
        user_id: &NonEmptyString,
        membership_id: MembershipId,
    ) -> AppResult<()> {
        self.remove_membership_impl(user_id, membership_id).await
    }

    /// Loads a membership and checks that `user_id` owns it.
    async fn owned_membership(
        &self,
        user_id: &NonEmptyString,
        membership_id: MembershipId,
    ) -> AppResult<Option<Membership>> {
        let membership = self
            .membership_repository
            .find_by_id(membership_id)
            .await?;

        Ok(membership.filter(|membership| membership.is_owned_by(user_id)))
    }
}

fn membership_not_found(user_id: &NonEmptyString, detail: String) -> AppError {
    AppError::NotFound(format!(
        "membership {detail} does not exist for user '{user_id}'"
    ))
}
