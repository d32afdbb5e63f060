//! Membership entity.

use chrono::{DateTime, Utc};
use memberpoint_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::{AccumulationAmount, MembershipKind, Point};

/// Store-assigned identifier of a membership record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MembershipId(i64);

impl MembershipId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MembershipId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Persisted membership of one user with one provider kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    id: MembershipId,
    user_id: NonEmptyString,
    kind: MembershipKind,
    point: Point,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Membership {
    /// Rebuilds a membership from stored parts.
    #[must_use]
    pub fn new(
        id: MembershipId,
        user_id: NonEmptyString,
        kind: MembershipKind,
        point: Point,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            kind,
            point,
            created_at,
            updated_at,
        }
    }

    /// Returns the membership identifier.
    #[must_use]
    pub fn id(&self) -> MembershipId {
        self.id
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub fn user_id(&self) -> &NonEmptyString {
        &self.user_id
    }

    /// Returns the provider kind.
    #[must_use]
    pub fn kind(&self) -> MembershipKind {
        self.kind
    }

    /// Returns the current point balance.
    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Returns when the membership was registered.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the balance last changed.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether `user_id` owns this membership.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &NonEmptyString) -> bool {
        self.user_id == *user_id
    }

    /// Adds `amount` to the balance.
    ///
    /// The balance is left unchanged when the addition would overflow.
    pub fn accumulate(&mut self, amount: AccumulationAmount) -> AppResult<()> {
        self.point = self.point.accumulate(amount)?;
        self.updated_at = Utc::now();
        Ok(())
    }
}
