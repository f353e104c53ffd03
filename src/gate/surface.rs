use crate::gate::view::OverlayView;
use anyhow::Result;

/// Platform adapter the gate drives on every transition. Implementations own
/// presentation only; the gate owns state.
pub trait Surface: Send {
    /// Attach the overlay. Called at most once before `unmount`.
    fn mount(&mut self, view: &OverlayView) -> Result<()>;

    /// Refresh an already-mounted overlay.
    fn update(&mut self, view: &OverlayView) -> Result<()>;

    /// Remove the overlay and anything injected alongside it.
    fn unmount(&mut self) -> Result<()>;
}

/// Surface that renders nothing, for headless embeddings.
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn mount(&mut self, _view: &OverlayView) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, _view: &OverlayView) -> Result<()> {
        Ok(())
    }

    fn unmount(&mut self) -> Result<()> {
        Ok(())
    }
}
