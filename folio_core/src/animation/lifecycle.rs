/// Uniform cleanup contract for every component that owns a recurring
/// resource (animation loop, timer, event subscription).
///
/// `teardown` must be unconditional and idempotent: calling it any number of
/// times leaves no live resource and never fails.
pub trait Teardown {
    fn teardown(&mut self);

    /// True while any loop, timer or listener owned by the component is live.
    fn has_active_resources(&self) -> bool;
}

/// Handle for a host-paced animation loop.
///
/// Each start bumps the generation, so a frame callback carrying an older
/// generation can be recognised as stale and dropped. At most one loop is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameLoop {
    generation: u64,
    running: bool,
}

impl FrameLoop {
    /// Starts a new loop, cancelling any previous one first.
    pub fn restart(&mut self) -> u64 {
        self.cancel();
        self.generation += 1;
        self.running = true;
        self.generation
    }

    /// Cancels the live loop, if any.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True if a frame scheduled under `generation` should still run.
    pub fn accepts(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_invalidates_previous_generation() {
        let mut frame_loop = FrameLoop::default();
        let first = frame_loop.restart();
        let second = frame_loop.restart();

        assert_ne!(first, second);
        assert!(!frame_loop.accepts(first));
        assert!(frame_loop.accepts(second));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut frame_loop = FrameLoop::default();
        let generation = frame_loop.restart();
        frame_loop.cancel();
        frame_loop.cancel();

        assert!(!frame_loop.is_running());
        assert!(!frame_loop.accepts(generation));
    }
}
