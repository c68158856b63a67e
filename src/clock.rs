/// Fixed-rate tick scheduler driven by an external time source (seconds).
///
/// At most one tick fires per `poll`; a slow frame does not queue up a
/// backlog of ticks.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: f64,
    last_tick_at: f64,
    running: bool,
}

impl TickClock {
    pub fn new(ticks_per_second: f64) -> Self {
        Self {
            interval: 1.0 / ticks_per_second,
            last_tick_at: 0.0,
            running: false,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts (or restarts) the clock; the first tick is due one interval after `now`.
    pub fn start(&mut self, now: f64) {
        self.last_tick_at = now;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Returns true when a tick is due at `now`.
    pub fn poll(&mut self, now: f64) -> bool {
        if !self.running || now - self.last_tick_at < self.interval {
            return false;
        }
        self.last_tick_at = now;
        true
    }
}
