use crate::error::PlotResult;
use crate::render::{RenderSurface, SurfaceFrame};

/// No-op surface used by tests and headless widget usage.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real host surface is wired in, and it retains the last frame for
/// assertions.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub frames_applied: usize,
    pub last_segment_count: usize,
    pub last_label_count: usize,
    pub last_frame: Option<SurfaceFrame>,
}

impl RenderSurface for NullSurface {
    fn apply(&mut self, frame: &SurfaceFrame) -> PlotResult<()> {
        frame.validate()?;
        self.frames_applied += 1;
        self.last_segment_count = frame.patch.patch_x.len() / 3;
        self.last_label_count = frame.labels.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
