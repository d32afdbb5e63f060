use tracing::debug;

use super::*;

impl MembershipService {
    pub(super) async fn get_membership_detail_impl(
        &self,
        user_id: &NonEmptyString,
        kind: MembershipKind,
    ) -> AppResult<Membership> {
        debug!(user_id = %user_id, kind = %kind, "loading membership detail");

        self.membership_repository
            .find_by_user_and_kind(user_id, kind)
            .await?
            .ok_or_else(|| membership_not_found(user_id, format!("of kind {kind}")))
    }

    pub(super) async fn get_membership_list_impl(
        &self,
        user_id: &NonEmptyString,
    ) -> AppResult<Vec<Membership>> {
        debug!(user_id = %user_id, "listing memberships");

        self.membership_repository.list_by_user(user_id).await
    }
}
