use memberpoint_domain::{MembershipId, MembershipKind, Point};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for membership registration.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/register-membership-request.ts"
)]
pub struct RegisterMembershipRequest {
    /// Opening balance, zero or greater.
    #[ts(type = "number")]
    pub point: Point,
    /// Provider kind such as `KAKAO`.
    #[ts(type = "\"NAVER\" | \"KAKAO\" | \"LINE\"")]
    pub kind: MembershipKind,
}

/// Incoming payload for point accumulation.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/accumulate-membership-request.ts"
)]
pub struct AccumulateMembershipRequest {
    /// Points to add, greater than zero.
    #[ts(type = "number")]
    pub point: i64,
}

/// Query parameters selecting one membership by kind.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/membership-detail-query.ts"
)]
pub struct MembershipDetailQuery {
    #[ts(type = "\"NAVER\" | \"KAKAO\" | \"LINE\"")]
    pub kind_type: MembershipKind,
}

/// API representation of a freshly registered membership.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/membership-registration-response.ts"
)]
pub struct MembershipRegistrationResponse {
    #[ts(type = "number")]
    pub id: MembershipId,
    #[ts(type = "\"NAVER\" | \"KAKAO\" | \"LINE\"")]
    pub kind: MembershipKind,
}

/// API representation of a membership.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/membership-detail-response.ts"
)]
pub struct MembershipDetailResponse {
    #[ts(type = "number")]
    pub id: MembershipId,
    #[ts(type = "\"NAVER\" | \"KAKAO\" | \"LINE\"")]
    pub kind: MembershipKind,
    #[ts(type = "number")]
    pub point: Point,
    pub created_at: String,
    pub updated_at: String,
}
