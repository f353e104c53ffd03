use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, info_span, Instrument};
use url::Url;

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Outcome of a verification round trip that produced a usable response.
/// Transport and parse failures surface as errors instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// HTTP success with a truthy `valid` field.
    Accepted {
        user: Option<Value>,
        message: Option<String>,
    },
    /// Anything else that still carried a JSON body; `message` is the
    /// server-supplied reason when present.
    Rejected { message: Option<String> },
}

/// Judges an access code. The gate depends on this seam so the state machine
/// is testable without a network.
#[async_trait]
pub trait Verifier: Send + Sync {
    async fn verify(&self, code: &str) -> Result<Verdict>;
}

/// [`Verifier`] backed by the remote verification endpoint.
pub struct HttpVerifier {
    client: Client,
    endpoint: Url,
}

impl HttpVerifier {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: Url) -> Result<Self> {
        let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Verifier for HttpVerifier {
    async fn verify(&self, code: &str) -> Result<Verdict> {
        let span = info_span!(
            "gate.verify",
            http.method = "POST",
            url = %self.endpoint
        );
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&json!({ "code": code }))
            .send()
            .instrument(span)
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        let valid = body.get("valid").and_then(Value::as_bool).unwrap_or(false);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(ToString::to_string);

        if status.is_success() && valid {
            debug!("access code accepted");
            let user = body.get("user").cloned().filter(|user| !user.is_null());

            Ok(Verdict::Accepted { user, message })
        } else {
            debug!("access code rejected: {}", status);

            Ok(Verdict::Rejected { message })
        }
    }
}
