use crate::gate::{OverlayView, Surface};
use anyhow::Result;
use std::io::{self, Write};

/// Terminal rendering of the overlay description. Writes to stderr by default
/// so the embedding application keeps stdout to itself.
pub struct ConsoleSurface<W: Write + Send = io::Stderr> {
    out: W,
}

impl ConsoleSurface {
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stderr() }
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn paint(&mut self, view: &OverlayView) -> Result<()> {
        if let Some(loading) = view.loading {
            writeln!(self.out, "... {loading}")?;
        }

        if let Some(error) = &view.error {
            writeln!(self.out, "!! {error}")?;
        }

        if let Some(success) = view.success {
            writeln!(self.out, "{success}")?;
        }

        Ok(())
    }
}

impl<W: Write + Send> Surface for ConsoleSurface<W> {
    fn mount(&mut self, view: &OverlayView) -> Result<()> {
        writeln!(self.out, "==== {} ====", view.title)?;
        writeln!(self.out, "{}", view.subtitle)?;
        self.paint(view)
    }

    fn update(&mut self, view: &OverlayView) -> Result<()> {
        self.paint(view)
    }

    fn unmount(&mut self) -> Result<()> {
        writeln!(self.out, "============")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{view, GateConfig, GateState};
    use anyhow::{anyhow, Result};

    fn rendered(state: &GateState) -> Result<OverlayView> {
        view::render(state, &GateConfig::default()).ok_or_else(|| anyhow!("expected overlay"))
    }

    #[test]
    fn mount_prints_title_and_subtitle() -> Result<()> {
        let mut surface = ConsoleSurface::with_writer(Vec::new());
        surface.mount(&rendered(&GateState::AwaitingInput)?)?;

        let output = String::from_utf8(surface.into_writer())?;
        assert!(output.contains("SENTINEL SECURITY"));
        assert!(output.contains("Enter access code to continue"));
        Ok(())
    }

    #[test]
    fn update_prints_error_region() -> Result<()> {
        let mut surface = ConsoleSurface::with_writer(Vec::new());
        surface.update(&rendered(&GateState::Error("Bad code".to_string()))?)?;

        let output = String::from_utf8(surface.into_writer())?;
        assert!(output.contains("!! Bad code"));
        Ok(())
    }

    #[test]
    fn update_prints_loading_and_success() -> Result<()> {
        let mut surface = ConsoleSurface::with_writer(Vec::new());
        surface.update(&rendered(&GateState::Verifying)?)?;
        surface.update(&rendered(&GateState::Success)?)?;

        let output = String::from_utf8(surface.into_writer())?;
        assert!(output.contains("Verifying access..."));
        assert!(output.contains("Access granted! Welcome."));
        Ok(())
    }
}
