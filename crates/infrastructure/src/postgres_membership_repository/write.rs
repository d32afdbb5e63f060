use tracing::debug;

use super::*;

impl PostgresMembershipRepository {
    pub(super) async fn create_impl(&self, membership: NewMembership) -> AppResult<Membership> {
        let result = sqlx::query_as::<_, MembershipRow>(
            r#"
            INSERT INTO memberships (user_id, kind, point)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, kind, point, created_at, updated_at
            "#,
        )
        .bind(membership.user_id.as_str())
        .bind(membership.kind.as_str())
        .bind(membership.point.value())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Membership::try_from(row),
            Err(error) if is_unique_violation(&error) => {
                debug!(
                    user_id = %membership.user_id,
                    kind = %membership.kind,
                    "membership insert rejected by unique constraint"
                );
                Err(AppError::Conflict(format!(
                    "{} membership is already registered for user '{}'",
                    membership.kind, membership.user_id
                )))
            }
            Err(error) => Err(AppError::Internal(format!(
                "failed to create membership: {error}"
            ))),
        }
    }

    pub(super) async fn accumulate_point_impl(
        &self,
        user_id: &NonEmptyString,
        membership_id: MembershipId,
        amount: AccumulationAmount,
    ) -> AppResult<Option<Membership>> {
        let result = sqlx::query_as::<_, MembershipRow>(
            r#"
            UPDATE memberships
            SET point = point + $3, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, kind, point, created_at, updated_at
            "#,
        )
        .bind(membership_id.as_i64())
        .bind(user_id.as_str())
        .bind(amount.value())
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(row) => row.map(Membership::try_from).transpose(),
            Err(error) if is_numeric_overflow(&error) => Err(AppError::Validation(format!(
                "accumulating {} points would overflow the balance of membership '{membership_id}'",
                amount.value()
            ))),
            Err(error) => Err(AppError::Internal(format!(
                "failed to accumulate points for membership '{membership_id}': {error}"
            ))),
        }
    }

    pub(super) async fn delete_by_id_impl(&self, membership_id: MembershipId) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM memberships
            WHERE id = $1
            "#,
        )
        .bind(membership_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to delete membership '{membership_id}': {error}"
            ))
        })?;

        Ok(result.rows_affected() > 0)
    }
}
