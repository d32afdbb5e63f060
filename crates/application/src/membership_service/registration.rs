use tracing::info;

use super::*;

impl MembershipService {
    pub(super) async fn add_membership_impl(
        &self,
        user_id: &NonEmptyString,
        kind: MembershipKind,
        point: Point,
    ) -> AppResult<MembershipRegistration> {
        // The store enforces (user_id, kind) uniqueness and reports Conflict.
        let membership = self
            .membership_repository
            .create(NewMembership {
                user_id: user_id.clone(),
                kind,
                point,
            })
            .await?;

        info!(
            user_id = %user_id,
            kind = %kind,
            membership_id = %membership.id(),
            point = point.value(),
            "membership registered"
        );

        Ok(MembershipRegistration {
            id: membership.id(),
            kind: membership.kind(),
        })
    }
}
