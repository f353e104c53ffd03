use std::time::Duration;
use url::Url;

pub const DEFAULT_SESSION_KEY: &str = "sentinel_authenticated";
pub const DEFAULT_OVERLAY_ID: &str = "sentinelOverlay";
pub const DEFAULT_FADE_DELAY: Duration = Duration::from_millis(1500);

/// Gate configuration, supplied by the embedding application. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Remote verification endpoint. `None` means "no gate configured": the
    /// gate self-authenticates immediately. An escape hatch, not a security
    /// guarantee.
    pub endpoint: Option<Url>,
    /// Session-store key for the authenticated flag.
    pub session_key: String,
    /// Identifier the surface gives the mounted overlay.
    pub overlay_id: String,
    /// Run the session/endpoint shortcuts at construction time.
    pub auto_init: bool,
    /// How long the success panel stays up before the overlay is removed.
    pub fade_delay: Duration,
    /// Emit diagnostic logs. Never affects control flow.
    pub debug: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            session_key: DEFAULT_SESSION_KEY.to_string(),
            overlay_id: DEFAULT_OVERLAY_ID.to_string(),
            auto_init: true,
            fade_delay: DEFAULT_FADE_DELAY,
            debug: false,
        }
    }
}

impl GateConfig {
    #[must_use]
    pub fn new(endpoint: Option<Url>) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }
}
