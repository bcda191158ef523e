use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::app::capabilities::Viewport;
use crate::app::domain::{ZoomCommand, ZoomState};

pub struct ZoomController {
    state: Cell<ZoomState>,
    viewport: Rc<dyn Viewport>,
}

impl ZoomController {
    pub fn new(viewport: Rc<dyn Viewport>) -> Self {
        Self {
            state: Cell::new(ZoomState::default()),
            viewport,
        }
    }

    pub fn percent(&self) -> u32 {
        self.state.get().percent()
    }

    pub fn zoom_in(&self) {
        self.execute(ZoomCommand::In);
    }

    pub fn zoom_out(&self) {
        self.execute(ZoomCommand::Out);
    }

    pub fn zoom_reset(&self) {
        self.execute(ZoomCommand::Reset);
    }

    /// Apply `command` and re-project, even when clamping left the value unchanged.
    pub fn execute(&self, command: ZoomCommand) {
        let mut state = self.state.get();
        state.apply(command);
        self.state.set(state);
        debug!(?command, percent = state.percent(), "Zoom");
        self.apply();
    }

    pub fn apply(&self) {
        let state = self.state.get();
        self.viewport.set_font_scale(state.percent());
        self.viewport.set_zoom_label(&state.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{RecordingViewport, ViewportWrite};

    fn controller() -> (ZoomController, Rc<RecordingViewport>) {
        let viewport = Rc::new(RecordingViewport::default());
        (ZoomController::new(viewport.clone()), viewport)
    }

    #[test]
    fn test_zoom_in_fifteen_times_clamps() {
        let (zoom, viewport) = controller();
        for _ in 0..15 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.percent(), 200);
        assert_eq!(viewport.font_scale(), Some(200));
        assert_eq!(viewport.zoom_label().as_deref(), Some("200%"));
    }

    #[test]
    fn test_zoom_out_twenty_times_clamps() {
        let (zoom, viewport) = controller();
        for _ in 0..20 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.percent(), 50);
        assert_eq!(viewport.zoom_label().as_deref(), Some("50%"));
    }

    #[test]
    fn test_reset() {
        let (zoom, viewport) = controller();
        zoom.zoom_in();
        zoom.zoom_in();
        zoom.zoom_reset();
        assert_eq!(zoom.percent(), 100);
        assert_eq!(viewport.font_scale(), Some(100));
    }

    #[test]
    fn test_clamped_step_still_reapplies() {
        let (zoom, viewport) = controller();
        for _ in 0..10 {
            zoom.zoom_in();
        }
        viewport.clear();

        zoom.zoom_in();

        assert_eq!(
            viewport.writes(),
            vec![
                ViewportWrite::FontScale(200),
                ViewportWrite::ZoomLabel("200%".to_string()),
            ]
        );
    }
}
