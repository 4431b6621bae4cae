//! Advisory scanline progress notifications.

/// Receives "scanline finished" notifications from render workers.
///
/// Called concurrently from every worker; implementations must not block
/// for long. Has no influence on the rendered image.
pub trait Progress: Sync {
    /// `done` scanlines out of `total` are finished.
    fn scanline_done(&self, done: u32, total: u32);
}

/// Ignores all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn scanline_done(&self, _done: u32, _total: u32) {}
}

/// Logs progress through the `log` facade every `every` scanlines.
#[derive(Debug, Clone, Copy)]
pub struct LogProgress {
    every: u32,
}

impl LogProgress {
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(64)
    }
}

impl LogProgress {
    /// Every `every`-th scanline is reported, and always the last one.
    fn reports(&self, done: u32, total: u32) -> bool {
        done % self.every == 0 || done == total
    }
}

impl Progress for LogProgress {
    fn scanline_done(&self, done: u32, total: u32) {
        if self.reports(done, total) {
            log::info!("Line {} / {}", done, total);
        }
    }
}
