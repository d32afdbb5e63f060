use memberpoint_application::MembershipRegistration;
use memberpoint_domain::Membership;

use super::types::{MembershipDetailResponse, MembershipRegistrationResponse};

impl From<MembershipRegistration> for MembershipRegistrationResponse {
    fn from(registration: MembershipRegistration) -> Self {
        Self {
            id: registration.id,
            kind: registration.kind,
        }
    }
}

impl From<Membership> for MembershipDetailResponse {
    fn from(membership: Membership) -> Self {
        Self {
            id: membership.id(),
            kind: membership.kind(),
            point: membership.point(),
            created_at: membership.created_at().to_rfc3339(),
            updated_at: membership.updated_at().to_rfc3339(),
        }
    }
}
