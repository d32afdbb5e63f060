//! PostgreSQL-backed membership repository.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use memberpoint_application::{MembershipRepository, NewMembership};
use memberpoint_core::{AppError, AppResult, NonEmptyString};
use memberpoint_domain::{AccumulationAmount, Membership, MembershipId, MembershipKind, Point};

/// PostgreSQL implementation of the membership repository port.
#[derive(Clone)]
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MembershipRow {
    id: i64,
    user_id: String,
    kind: String,
    point: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = AppError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let invalid = move |error: AppError| {
            AppError::Internal(format!("persisted membership '{id}' is invalid: {error}"))
        };

        Ok(Membership::new(
            MembershipId::new(id),
            NonEmptyString::new(row.user_id).map_err(invalid)?,
            MembershipKind::from_str(row.kind.as_str()).map_err(invalid)?,
            Point::new(row.point).map_err(invalid)?,
            row.created_at,
            row.updated_at,
        ))
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    has_sqlstate(error, "23505")
}

fn is_numeric_overflow(error: &sqlx::Error) -> bool {
    has_sqlstate(error, "22003")
}

fn has_sqlstate(error: &sqlx::Error, sqlstate: &str) -> bool {
    if let sqlx::Error::Database(database_error) = error
        && database_error.code().as_deref() == Some(sqlstate)
    {
        return true;
    }

    false
}

mod lookup;
mod write;


#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn find_by_user_and_kind(
        &self,
        user_id: &NonEmptyString,
        kind: MembershipKind,
    ) -> AppResult<Option<Membership>> {
        self.find_by_user_and_kind_impl(user_id, kind).await
    }

    async fn find_by_id(&self, membership_id: MembershipId) -> AppResult<Option<Membership>> {
        self.find_by_id_impl(membership_id).await
    }

    async fn list_by_user(&self, user_id: &NonEmptyString) -> AppResult<Vec<Membership>> {
        self.list_by_user_impl(user_id).await
    }

    async fn create(&self, membership: NewMembership) -> AppResult<Membership> {
        self.create_impl(membership).await
    }

    async fn accumulate_point(
        &self,
        user_id: &NonEmptyString,
        membership_id: MembershipId,
        amount: AccumulationAmount,
    ) -> AppResult<Option<Membership>> {
        self.accumulate_point_impl(user_id, membership_id, amount)
            .await
    }

    async fn delete_by_id(&self, membership_id: MembershipId) -> AppResult<bool> {
        self.delete_by_id_impl(membership_id).await
    }
}
