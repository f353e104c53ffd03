pub mod handlers;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use secrecy::SecretString;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Development verification backend: the configured access codes and the
/// optional user label returned on success.
#[derive(Clone)]
pub struct VerifyState {
    pub codes: Arc<Vec<SecretString>>,
    pub user: Option<String>,
}

impl VerifyState {
    #[must_use]
    pub fn new(codes: Vec<SecretString>, user: Option<String>) -> Self {
        Self {
            codes: Arc::new(codes),
            user,
        }
    }
}

#[must_use]
pub fn router(state: VerifyState) -> Router {
    Router::new()
        .route("/verify", post(handlers::verify))
        .route("/health", get(handlers::health).options(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the development verification endpoint.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn new(port: u16, state: VerifyState) -> Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
