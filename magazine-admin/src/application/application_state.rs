use super::ApplicationEnv;
use crate::{
    repository::MagazinesRepositoryImpl,
    service::magazines_service::{MagazinesService, MagazinesServiceConfig, MagazinesServiceImpl},
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub magazines_service: Arc<dyn MagazinesService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let magazines_repository = MagazinesRepositoryImpl::new(db).await?;
    let magazines_repository = Arc::new(magazines_repository);

    tracing::info!("creating services");
    let config = MagazinesServiceConfig {
        default_page_size: env.default_page_size,
        max_page_size: env.max_page_size,
    };
    let magazines_service = MagazinesServiceImpl::new(config, magazines_repository);
    let magazines_service = Arc::new(magazines_service);

    Ok((
        ApplicationState { magazines_service },
        ApplicationStateToClose { db_client },
    ))
}
