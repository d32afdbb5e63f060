use super::*;

impl PostgresMembershipRepository {
    pub(super) async fn find_by_user_and_kind_impl(
        &self,
        user_id: &NonEmptyString,
        kind: MembershipKind,
    ) -> AppResult<Option<Membership>> {
        let row = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT id, user_id, kind, point, created_at, updated_at
            FROM memberships
            WHERE user_id = $1 AND kind = $2
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to find {kind} membership for user '{user_id}': {error}"
            ))
        })?;

        row.map(Membership::try_from).transpose()
    }

    pub(super) async fn find_by_id_impl(
        &self,
        membership_id: MembershipId,
    ) -> AppResult<Option<Membership>> {
        let row = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT id, user_id, kind, point, created_at, updated_at
            FROM memberships
            WHERE id = $1
            "#,
        )
        .bind(membership_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to find membership '{membership_id}': {error}"
            ))
        })?;

        row.map(Membership::try_from).transpose()
    }

    pub(super) async fn list_by_user_impl(
        &self,
        user_id: &NonEmptyString,
    ) -> AppResult<Vec<Membership>> {
        let rows = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT id, user_id, kind, point, created_at, updated_at
            FROM memberships
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to list memberships for user '{user_id}': {error}"
            ))
        })?;

        rows.into_iter().map(Membership::try_from).collect()
    }
}
