use memberpoint_application::MembershipService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub membership_service: MembershipService,
}
