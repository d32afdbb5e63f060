mod common;
mod membership;

pub use common::HealthResponse;
pub use membership::{
    AccumulateMembershipRequest, MembershipDetailQuery, MembershipDetailResponse,
    MembershipRegistrationResponse, RegisterMembershipRequest,
};
