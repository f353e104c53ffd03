pub mod config;
pub mod events;
pub mod session;
pub mod state;
pub mod surface;
pub mod view;

pub use config::GateConfig;
pub use events::{GateEvent, SubscriberId};
pub use session::{MemorySession, SessionStore};
pub use state::GateState;
pub use surface::{NullSurface, Surface};
pub use view::OverlayView;

use crate::verify::{HttpVerifier, Verdict, Verifier};
use anyhow::Result;
use events::Subscribers;
use std::sync::Arc;
use tracing::debug;

/// Access gate: blocks the embedding surface until a code is verified by the
/// remote endpoint, then stays authenticated for the rest of the session.
///
/// One instance owns one overlay and one session flag. All transitions are
/// observable through [`Gate::subscribe`].
pub struct Gate {
    config: GateConfig,
    state: GateState,
    verifier: Option<Arc<dyn Verifier>>,
    session: Box<dyn SessionStore>,
    surface: Box<dyn Surface>,
    subscribers: Subscribers,
    authenticated: bool,
    mounted: bool,
}

impl Gate {
    /// Build a gate verifying against `config.endpoint`. With `auto_init` set
    /// the session and endpoint shortcuts run immediately and the overlay is
    /// mounted when neither applies.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the surface
    /// fails to mount.
    pub fn new(
        config: GateConfig,
        session: Box<dyn SessionStore>,
        surface: Box<dyn Surface>,
    ) -> Result<Self> {
        let verifier = match config.endpoint.clone() {
            Some(endpoint) => Some(Arc::new(HttpVerifier::new(endpoint)?) as Arc<dyn Verifier>),
            None => None,
        };

        Self::with_verifier(config, verifier, session, surface)
    }

    /// Build a gate with an explicit verifier. `None` means "no gate
    /// configured" and self-authenticates on init.
    ///
    /// # Errors
    /// Returns an error if the surface fails to mount during auto-init.
    pub fn with_verifier(
        config: GateConfig,
        verifier: Option<Arc<dyn Verifier>>,
        session: Box<dyn SessionStore>,
        surface: Box<dyn Surface>,
    ) -> Result<Self> {
        let mut gate = Self {
            state: GateState::AwaitingInput,
            verifier,
            session,
            surface,
            subscribers: Subscribers::default(),
            authenticated: false,
            mounted: false,
            config,
        };

        if gate.config.auto_init {
            gate.init()?;
        }

        Ok(gate)
    }

    /// Run the construction shortcuts; mount the overlay when neither
    /// applies.
    ///
    /// # Errors
    /// Returns an error if the surface fails to mount.
    pub fn init(&mut self) -> Result<()> {
        if self.session.get(&self.config.session_key) {
            self.authenticated = true;
            self.state = GateState::Authenticated;
            self.diag("already authenticated, skipping overlay");
            return Ok(());
        }

        if self.verifier.is_none() {
            self.authenticated = true;
            self.state = GateState::Authenticated;
            self.diag("no endpoint configured, skipping overlay");
            return Ok(());
        }

        self.state = GateState::AwaitingInput;
        self.mount()
    }

    /// Submit an access code. Empty input is rejected locally without a
    /// network call; every failure path leaves the gate re-enterable.
    ///
    /// # Errors
    /// Returns an error only if the surface fails; verification failures are
    /// absorbed into [`GateState::Error`].
    pub async fn submit(&mut self, code: &str) -> Result<()> {
        if !self.state.accepts_input() {
            return Ok(());
        }

        let Some(verifier) = self.verifier.clone() else {
            return Ok(());
        };

        let code = code.trim();
        if code.is_empty() {
            self.state = GateState::Error(view::EMPTY_CODE_ERROR.to_string());
            return self.refresh();
        }

        self.diag("verifying access code");
        self.state = GateState::Verifying;
        self.refresh()?;

        match verifier.verify(code).await {
            Ok(Verdict::Accepted { user, message }) => {
                self.diag("access code verified");
                self.state = GateState::Success;
                self.refresh()?;

                self.authenticated = true;
                self.session.set(&self.config.session_key);
                self.emit(GateEvent::authenticated(user, message));

                tokio::time::sleep(self.config.fade_delay).await;
                self.remove_overlay()?;
                self.state = GateState::Authenticated;
            }
            Ok(Verdict::Rejected { message }) => {
                let message = message.unwrap_or_else(|| view::INVALID_CODE_ERROR.to_string());
                self.diag("access code rejected");
                self.state = GateState::Error(message.clone());
                self.refresh()?;
                self.emit(GateEvent::authentication_failed(message));
            }
            Err(error) => {
                self.diag("verification request failed");
                self.state = GateState::Error(view::CONNECTION_ERROR.to_string());
                self.refresh()?;
                self.emit(GateEvent::authentication_error(error.to_string()));
            }
        }

        Ok(())
    }

    /// Clear the session flag and re-enter the input flow. The overlay is
    /// mounted again if it is not currently present.
    ///
    /// # Errors
    /// Returns an error if the surface fails to mount.
    pub fn logout(&mut self) -> Result<()> {
        self.diag("logging out");
        self.session.clear(&self.config.session_key);
        self.authenticated = false;

        if !self.mounted {
            self.init()?;
        }

        self.emit(GateEvent::logout());
        Ok(())
    }

    /// Remove the overlay and injected presentation without touching the
    /// session flag. Safe to call repeatedly.
    ///
    /// # Errors
    /// Returns an error if the surface fails to unmount.
    pub fn teardown(&mut self) -> Result<()> {
        if self.mounted {
            self.surface.unmount()?;
            self.mounted = false;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.authenticated || self.session.get(&self.config.session_key)
    }

    #[must_use]
    pub const fn state(&self) -> &GateState {
        &self.state
    }

    #[must_use]
    pub const fn overlay_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub const fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn subscribe(
        &mut self,
        callback: impl Fn(&GateEvent) + Send + Sync + 'static,
    ) -> SubscriberId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn mount(&mut self) -> Result<()> {
        if self.mounted {
            return Ok(());
        }

        if let Some(view) = view::render(&self.state, &self.config) {
            self.surface.mount(&view)?;
            self.mounted = true;
        }

        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        if !self.mounted {
            return Ok(());
        }

        if let Some(view) = view::render(&self.state, &self.config) {
            self.surface.update(&view)?;
        }

        Ok(())
    }

    fn remove_overlay(&mut self) -> Result<()> {
        if self.mounted {
            self.surface.unmount()?;
            self.mounted = false;
            self.emit(GateEvent::overlay_removed());
        }

        Ok(())
    }

    fn emit(&self, event: GateEvent) {
        self.diag(event.name());
        self.subscribers.emit(&event);
    }

    fn diag(&self, message: &str) {
        if self.config.debug {
            debug!("{}", message);
        }
    }
}
