use crate::error::OverlayResult;
use crate::render::{OverlayFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests catch invalid geometry without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub last_line_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &OverlayFrame) -> OverlayResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rect_count();
        self.last_text_count = frame.text_count();
        self.last_line_count = frame.line_count();
        self.frames_rendered += 1;
        Ok(())
    }
}
