/// Skips terminal flushes when nothing visible changed.
///
/// While the game is animating every frame is flushed. When it is static
/// (idle, paused, over) a frame is flushed only when the state fingerprint
/// changes, or as a keep-alive once per `min_static_interval_ms`.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Forget the last flush; the next call always renders.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, prev)) if prev != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }
}
