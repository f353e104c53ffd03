use crate::server::{self, VerifyState};
use anyhow::Result;
use secrecy::SecretString;

pub struct Args {
    pub port: u16,
    pub codes: Vec<SecretString>,
    pub user: Option<String>,
}

/// Run the development verification endpoint.
///
/// # Errors
/// Returns an error if the server fails to start.
pub async fn handle(args: Args) -> Result<()> {
    let state = VerifyState::new(args.codes, args.user);

    server::new(args.port, state).await
}
