use std::collections::VecDeque;
use std::time::Duration;

/// Number of frames averaged by [`FrameStats`].
pub const FRAME_WINDOW: usize = 120;

/// Rolling frame-time average for the "ms/frame (FPS)" readout.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    samples: VecDeque<f32>,
    frames: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame's duration. Non-finite or negative samples are ignored.
    pub fn record(&mut self, dt: Duration) {
        self.record_secs(dt.as_secs_f32());
    }

    pub fn record_secs(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            tracing::warn!(dt, "dropping invalid frame time sample");
            return;
        }
        if self.samples.len() == FRAME_WINDOW {
            self.samples.pop_front();
        }
        self.samples.push_back(dt);
        self.frames += 1;
    }

    /// Total frames recorded since creation.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn average_frame_ms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.samples.iter().sum();
        sum / self.samples.len() as f32 * 1000.0
    }

    /// Zero until a frame with a non-zero duration has been recorded.
    pub fn fps(&self) -> f32 {
        let ms = self.average_frame_ms();
        if ms > 0.0 { 1000.0 / ms } else { 0.0 }
    }
}
