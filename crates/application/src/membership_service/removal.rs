use tracing::{debug, info};

use super::*;

impl MembershipService {
    pub(super) async fn remove_membership_impl(
        &self,
        user_id: &NonEmptyString,
        membership_id: MembershipId,
    ) -> AppResult<()> {
        if self.owned_membership(user_id, membership_id).await?.is_none() {
            debug!(
                user_id = %user_id,
                membership_id = %membership_id,
                "no owned membership to remove"
            );
            return Ok(());
        }

        let removed = self
            .membership_repository
            .delete_by_id(membership_id)
            .await?;

        info!(
            user_id = %user_id,
            membership_id = %membership_id,
            removed,
            "membership removed"
        );

        Ok(())
    }
}
