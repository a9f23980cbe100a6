/// Default quiet period before a search runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Holds the latest value until input has been quiet for `wait_ms`.
///
/// Time is supplied by the caller, so the same debouncer works with a real
/// clock or a test clock.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait_ms: u64) -> Self {
        Self { wait_ms, pending: None }
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    /// Replaces any pending value and restarts the timer.
    pub fn push(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms.saturating_add(self.wait_ms)));
    }

    /// Returns the pending value once its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now_ms >= deadline => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
