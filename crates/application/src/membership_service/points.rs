use tracing::info;

use super::*;

impl MembershipService {
    pub(super) async fn accumulate_membership_point_impl(
        &self,
        user_id: &NonEmptyString,
        membership_id: MembershipId,
        amount: AccumulationAmount,
    ) -> AppResult<Membership> {
        let saved = self
            .membership_repository
            .accumulate_point(user_id, membership_id, amount)
            .await?
            .ok_or_else(|| membership_not_found(user_id, format!("'{membership_id}'")))?;

        info!(
            user_id = %user_id,
            membership_id = %membership_id,
            amount = amount.value(),
            point = saved.point().value(),
            "membership points accumulated"
        );

        Ok(saved)
    }
}
