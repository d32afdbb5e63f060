mod conversions;
mod types;

pub use types::{
    AccumulateMembershipRequest, MembershipDetailQuery, MembershipDetailResponse,
    MembershipRegistrationResponse, RegisterMembershipRequest,
};
