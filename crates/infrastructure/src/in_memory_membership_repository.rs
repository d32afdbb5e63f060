use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use memberpoint_application::{MembershipRepository, NewMembership};
use memberpoint_core::{AppError, AppResult, NonEmptyString};
use memberpoint_domain::{AccumulationAmount, Membership, MembershipId, MembershipKind};
use tokio::sync::RwLock;

#[cfg(test)]
mod tests;

#[derive(Debug, Default)]
struct MembershipTable {
    next_id: i64,
    rows: BTreeMap<MembershipId, Membership>,
}

/// In-memory membership repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryMembershipRepository {
    table: RwLock<MembershipTable>,
}

impl InMemoryMembershipRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MembershipTable::default()),
        }
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn find_by_user_and_kind(
        &self,
        user_id: &NonEmptyString,
        kind: MembershipKind,
    ) -> AppResult<Option<Membership>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|membership| membership.is_owned_by(user_id) && membership.kind() == kind)
            .cloned())
    }

    async fn find_by_id(&self, membership_id: MembershipId) -> AppResult<Option<Membership>> {
        Ok(self.table.read().await.rows.get(&membership_id).cloned())
    }

    async fn list_by_user(&self, user_id: &NonEmptyString) -> AppResult<Vec<Membership>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|membership| membership.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn create(&self, membership: NewMembership) -> AppResult<Membership> {
        let mut table = self.table.write().await;

        // Checked under the write lock so concurrent inserts cannot both pass.
        let duplicate = table.rows.values().any(|existing| {
            existing.is_owned_by(&membership.user_id) && existing.kind() == membership.kind
        });
        if duplicate {
            return Err(AppError::Conflict(format!(
                "{} membership is already registered for user '{}'",
                membership.kind, membership.user_id
            )));
        }

        table.next_id += 1;
        let id = MembershipId::new(table.next_id);
        let now = Utc::now();
        let created = Membership::new(
            id,
            membership.user_id,
            membership.kind,
            membership.point,
            now,
            now,
        );
        table.rows.insert(id, created.clone());

        Ok(created)
    }

    async fn accumulate_point(
        &self,
        user_id: &NonEmptyString,
        membership_id: MembershipId,
        amount: AccumulationAmount,
    ) -> AppResult<Option<Membership>> {
        let mut table = self.table.write().await;
        let Some(stored) = table
            .rows
            .get_mut(&membership_id)
            .filter(|stored| stored.is_owned_by(user_id))
        else {
            return Ok(None);
        };

        stored.accumulate(amount)?;
        Ok(Some(stored.clone()))
    }

    async fn delete_by_id(&self, membership_id: MembershipId) -> AppResult<bool> {
        Ok(self
            .table
            .write()
            .await
            .rows
            .remove(&membership_id)
            .is_some())
    }
}
