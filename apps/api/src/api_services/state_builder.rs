use std::sync::Arc;

use memberpoint_application::{MembershipRepository, MembershipService};
use memberpoint_core::AppError;
use memberpoint_infrastructure::{InMemoryMembershipRepository, PostgresMembershipRepository};
use tracing::{info, warn};

use crate::api_config::StorageBackendConfig;
use crate::state::AppState;

use super::connect_and_migrate;

pub async fn build_app_state(storage_backend: &StorageBackendConfig) -> Result<AppState, AppError> {
    let membership_repository: Arc<dyn MembershipRepository> = match storage_backend {
        StorageBackendConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = connect_and_migrate(database_url, *max_connections).await?;
            info!(max_connections, "using postgres membership store");
            Arc::new(PostgresMembershipRepository::new(pool))
        }
        StorageBackendConfig::Memory => {
            warn!("using in-memory membership store; data is lost on shutdown");
            Arc::new(InMemoryMembershipRepository::new())
        }
    };

    Ok(AppState {
        membership_service: MembershipService::new(membership_repository),
    })
}
