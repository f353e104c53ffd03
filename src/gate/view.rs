use crate::gate::{config::GateConfig, state::GateState};

pub const TITLE: &str = "SENTINEL SECURITY";
pub const SUBTITLE: &str = "Enter access code to continue";
pub const INPUT_PLACEHOLDER: &str = "Enter access code...";
pub const BUTTON_LABEL: &str = "Verify Access";
pub const LOADING_TEXT: &str = "Verifying access...";
pub const SUCCESS_TEXT: &str = "Access granted! Welcome.";
pub const EMPTY_CODE_ERROR: &str = "Please enter an access code";
pub const INVALID_CODE_ERROR: &str = "Invalid access code";
pub const CONNECTION_ERROR: &str =
    "Connection error. Please check your internet connection and try again.";

/// Pure description of the overlay for a given state. Platform adapters mount
/// this; nothing here performs I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub overlay_id: String,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input: InputView,
    pub button: ButtonView,
    /// Loading indicator text while a request is in flight.
    pub loading: Option<&'static str>,
    /// Inline error region.
    pub error: Option<String>,
    /// Success panel shown between acceptance and removal.
    pub success: Option<&'static str>,
    /// The surface should discourage casual dismissal (escape key, context
    /// menu). Cosmetic only; not a security control.
    pub blocking: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub placeholder: &'static str,
    pub disabled: bool,
    /// Drop any previously entered code, e.g. after a rejection.
    pub cleared: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

/// Map a gate state to its overlay description; `None` once settled.
#[must_use]
pub fn render(state: &GateState, config: &GateConfig) -> Option<OverlayView> {
    if !state.overlay_required() {
        return None;
    }

    let disabled = matches!(state, GateState::Verifying | GateState::Success);

    Some(OverlayView {
        overlay_id: config.overlay_id.clone(),
        title: TITLE,
        subtitle: SUBTITLE,
        input: InputView {
            placeholder: INPUT_PLACEHOLDER,
            disabled,
            cleared: matches!(state, GateState::Error(_)),
            focused: state.accepts_input(),
        },
        button: ButtonView {
            label: BUTTON_LABEL,
            disabled,
        },
        loading: matches!(state, GateState::Verifying).then_some(LOADING_TEXT),
        error: match state {
            GateState::Error(message) => Some(message.clone()),
            _ => None,
        },
        success: matches!(state, GateState::Success).then_some(SUCCESS_TEXT),
        blocking: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};

    fn view(state: &GateState) -> Result<OverlayView> {
        render(state, &GateConfig::default()).ok_or_else(|| anyhow!("expected an overlay"))
    }

    #[test]
    fn authenticated_renders_nothing() {
        assert!(render(&GateState::Authenticated, &GateConfig::default()).is_none());
    }

    #[test]
    fn awaiting_input_has_usable_controls() -> Result<()> {
        let view = view(&GateState::AwaitingInput)?;

        assert_eq!(view.overlay_id, "sentinelOverlay");
        assert!(!view.input.disabled);
        assert!(view.input.focused);
        assert!(!view.button.disabled);
        assert!(view.loading.is_none());
        assert!(view.error.is_none());
        assert!(view.success.is_none());
        assert!(view.blocking);
        Ok(())
    }

    #[test]
    fn verifying_disables_controls_and_shows_loading() -> Result<()> {
        let view = view(&GateState::Verifying)?;

        assert!(view.input.disabled);
        assert!(view.button.disabled);
        assert_eq!(view.loading, Some(LOADING_TEXT));
        Ok(())
    }

    #[test]
    fn error_clears_and_refocuses_input() -> Result<()> {
        let view = view(&GateState::Error("Bad code".to_string()))?;

        assert_eq!(view.error.as_deref(), Some("Bad code"));
        assert!(view.input.cleared);
        assert!(view.input.focused);
        assert!(!view.input.disabled);
        Ok(())
    }

    #[test]
    fn success_shows_panel_with_disabled_controls() -> Result<()> {
        let view = view(&GateState::Success)?;

        assert_eq!(view.success, Some(SUCCESS_TEXT));
        assert!(view.input.disabled);
        assert!(view.button.disabled);
        Ok(())
    }

    #[test]
    fn overlay_id_follows_config() -> Result<()> {
        let config = GateConfig {
            overlay_id: "customOverlay".to_string(),
            ..GateConfig::default()
        };
        let view =
            render(&GateState::AwaitingInput, &config).ok_or_else(|| anyhow!("expected overlay"))?;

        assert_eq!(view.overlay_id, "customOverlay");
        Ok(())
    }
}
