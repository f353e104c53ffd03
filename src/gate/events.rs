use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Notifications the gate emits on state transitions so the embedding
/// application can react, e.g. reveal protected content on `authenticated`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum GateEvent {
    Authenticated {
        #[serde(skip_serializing_if = "Option::is_none")]
        user: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        timestamp: DateTime<Utc>,
    },
    AuthenticationFailed {
        message: String,
        timestamp: DateTime<Utc>,
    },
    AuthenticationError {
        error: String,
        timestamp: DateTime<Utc>,
    },
    OverlayRemoved {
        timestamp: DateTime<Utc>,
    },
    Logout {
        timestamp: DateTime<Utc>,
    },
}

impl GateEvent {
    pub(crate) fn authenticated(user: Option<Value>, message: Option<String>) -> Self {
        Self::Authenticated {
            user,
            message,
            timestamp: Utc::now(),
        }
    }

    pub(crate) fn authentication_failed(message: String) -> Self {
        Self::AuthenticationFailed {
            message,
            timestamp: Utc::now(),
        }
    }

    pub(crate) fn authentication_error(error: String) -> Self {
        Self::AuthenticationError {
            error,
            timestamp: Utc::now(),
        }
    }

    pub(crate) fn overlay_removed() -> Self {
        Self::OverlayRemoved {
            timestamp: Utc::now(),
        }
    }

    pub(crate) fn logout() -> Self {
        Self::Logout {
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Authenticated { .. } => "authenticated",
            Self::AuthenticationFailed { .. } => "authenticationFailed",
            Self::AuthenticationError { .. } => "authenticationError",
            Self::OverlayRemoved { .. } => "overlayRemoved",
            Self::Logout { .. } => "logout",
        }
    }
}

pub type SubscriberId = u64;

type Callback = Box<dyn Fn(&GateEvent) + Send + Sync>;

/// Explicit observer registry on the gate instance, instead of dispatching
/// through a shared event bus.
#[derive(Default)]
pub struct Subscribers {
    next_id: SubscriberId,
    entries: Vec<(SubscriberId, Callback)>,
}

impl Subscribers {
    pub fn subscribe(
        &mut self,
        callback: impl Fn(&GateEvent) + Send + Sync + 'static,
    ) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < before
    }

    pub(crate) fn emit(&self, event: &GateEvent) {
        for (_, callback) in &self.entries {
            callback(event);
        }
    }
}
