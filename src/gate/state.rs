use serde::Serialize;

/// Lifecycle of the gate. Held in memory only; the session flag is the sole
/// persisted artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GateState {
    /// Settled: no overlay, access granted.
    Authenticated,
    /// Overlay mounted, waiting for a code.
    AwaitingInput,
    /// Request in flight; controls disabled so only one submission runs at a
    /// time.
    Verifying,
    /// Inline error shown, input usable again.
    Error(String),
    /// Code accepted; success panel shown until the fade delay elapses.
    Success,
}

impl GateState {
    /// The overlay exists iff the state is not settled.
    #[must_use]
    pub const fn overlay_required(&self) -> bool {
        !matches!(self, Self::Authenticated)
    }

    /// Whether a submission is accepted in this state.
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        matches!(self, Self::AwaitingInput | Self::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_required_everywhere_but_authenticated() {
        assert!(!GateState::Authenticated.overlay_required());
        assert!(GateState::AwaitingInput.overlay_required());
        assert!(GateState::Verifying.overlay_required());
        assert!(GateState::Error("nope".to_string()).overlay_required());
        assert!(GateState::Success.overlay_required());
    }

    #[test]
    fn input_accepted_only_when_idle_or_errored() {
        assert!(GateState::AwaitingInput.accepts_input());
        assert!(GateState::Error("nope".to_string()).accepts_input());
        assert!(!GateState::Verifying.accepts_input());
        assert!(!GateState::Success.accepts_input());
        assert!(!GateState::Authenticated.accepts_input());
    }
}
