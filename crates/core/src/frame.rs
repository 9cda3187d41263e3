//! Frame scheduling for the engine.
//!
//! The host calls the engine once per display frame. Logical movement runs
//! at a slower fixed cadence: elapsed time is accumulated from frame
//! timestamps and a step fires once the accumulator reaches the tick
//! interval. After a stall the excess is dropped instead of replayed, so the
//! snake never jumps several cells in one frame.
//!
//! A frame only does work if one was requested. Cancelling the request is how
//! the engine guarantees that no further frame callback runs after
//! `stop_animation`.

/// Identifier of a scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(u64);

#[derive(Debug, Clone)]
pub struct FrameLoop {
    tick_interval_ms: u64,
    pending: Option<FrameRequest>,
    next_id: u64,
    last_timestamp_ms: Option<u64>,
    accumulator_ms: u64,
}

impl FrameLoop {
    pub fn new(tick_interval_ms: u32) -> Self {
        Self {
            tick_interval_ms: u64::from(tick_interval_ms.max(1)),
            pending: None,
            next_id: 0,
            last_timestamp_ms: None,
            accumulator_ms: 0,
        }
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    /// Schedule the next frame. Requesting while one is pending returns the
    /// existing request.
    pub fn request_frame(&mut self) -> FrameRequest {
        if let Some(request) = self.pending {
            return request;
        }
        self.next_id = self.next_id.wrapping_add(1);
        let request = FrameRequest(self.next_id);
        self.pending = Some(request);
        request
    }

    /// Drop the pending request, if any. Returns whether one was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Claim the pending request for the frame being delivered.
    pub fn begin_frame(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    /// Forget the previous timestamp and any accumulated time.
    ///
    /// Used when play (re)starts so time spent paused or idle is not counted.
    pub fn resync(&mut self) {
        self.last_timestamp_ms = None;
        self.accumulator_ms = 0;
    }

    /// Account for a frame at `now_ms`. Returns true when a logical step is due.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let elapsed = match self.last_timestamp_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_timestamp_ms = Some(now_ms);
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed);

        if self.accumulator_ms >= self.tick_interval_ms {
            self.accumulator_ms = 0;
            return true;
        }
        false
    }

    /// Keep the time base current without accumulating (paused frames).
    pub fn observe(&mut self, now_ms: u64) {
        self.last_timestamp_ms = Some(now_ms);
    }

    pub fn accumulated_ms(&self) -> u64 {
        self.accumulator_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_does_not_step() {
        let mut frames = FrameLoop::new(150);
        assert!(!frames.advance(10_000));
        assert_eq!(frames.accumulated_ms(), 0);
    }

    #[test]
    fn test_steps_once_per_interval() {
        let mut frames = FrameLoop::new(150);
        assert!(!frames.advance(0));

        let mut steps = 0;
        let mut now = 0;
        for _ in 0..60 {
            now += 16;
            if frames.advance(now) {
                steps += 1;
            }
        }
        // 960ms at 150ms per step, with excess dropped each time (10 frames per step).
        assert_eq!(steps, 6);
    }

    #[test]
    fn test_stall_produces_single_step() {
        let mut frames = FrameLoop::new(150);
        frames.advance(0);
        assert!(frames.advance(2_000));
        assert_eq!(frames.accumulated_ms(), 0);
        assert!(!frames.advance(2_016));
    }

    #[test]
    fn test_request_is_idempotent_and_cancellable() {
        let mut frames = FrameLoop::new(150);
        let first = frames.request_frame();
        assert_eq!(frames.request_frame(), first);
        assert!(frames.is_scheduled());

        assert!(frames.cancel());
        assert!(!frames.cancel());
        assert_eq!(frames.begin_frame(), None);

        let second = frames.request_frame();
        assert_ne!(first, second);
        assert_eq!(frames.begin_frame(), Some(second));
        assert!(!frames.is_scheduled());
    }

    #[test]
    fn test_resync_discards_accumulated_time() {
        let mut frames = FrameLoop::new(150);
        frames.advance(0);
        frames.advance(100);
        frames.resync();
        assert!(!frames.advance(5_000));
        assert!(!frames.advance(5_100));
        assert!(frames.advance(5_150));
    }

    #[test]
    fn test_observe_does_not_accumulate() {
        let mut frames = FrameLoop::new(150);
        frames.advance(0);
        frames.observe(1_000);
        assert!(!frames.advance(1_016));
    }
}
