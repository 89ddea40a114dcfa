use std::time::Duration;

/// Default cadence of the running simulation
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

/// Proof that a tick fired during a particular run of the ticker.
/// A token from an earlier run is rejected by [`Ticker::accepts`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickToken {
    epoch: u64,
}

/// Ticker is the single repeating task of a simulation.
///
/// It is driven by elapsed time handed in from the frame loop, so there is
/// never more than one tick source: `start` on a running ticker is a no-op
/// and `stop` drops the pending time before returning.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    epoch: u64,
    /// Time accumulated since the last tick; `None` while stopped
    elapsed: Option<Duration>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            epoch: 0,
            elapsed: None,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn is_active(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Begin a new run. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.epoch += 1;
        self.elapsed = Some(Duration::ZERO);
        true
    }

    /// End the current run. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        self.elapsed.take().is_some()
    }

    /// Change the cadence in place; the current run keeps its epoch
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Feed elapsed time, returning a token when a tick is due.
    /// At most one tick fires per call; leftover time is dropped.
    pub fn advance(&mut self, delta: Duration) -> Option<TickToken> {
        let elapsed = self.elapsed.as_mut()?;
        *elapsed += delta;
        if *elapsed < self.interval {
            return None;
        }
        *elapsed = Duration::ZERO;
        Some(TickToken { epoch: self.epoch })
    }

    /// Whether a token belongs to the run that is active right now
    pub fn accepts(&self, token: TickToken) -> bool {
        self.is_active() && token.epoch == self.epoch
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_stopped_ticker_never_fires() {
        let mut ticker = Ticker::default();
        assert!(!ticker.is_active());
        assert_eq!(ticker.advance(ms(10_000)), None);
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut ticker = Ticker::default();
        ticker.start();
        assert_eq!(ticker.advance(ms(150)), None);
        assert!(ticker.advance(ms(60)).is_some());
        assert_eq!(ticker.advance(ms(100)), None);
        assert!(ticker.advance(ms(100)).is_some());
    }

    #[test]
    fn test_double_start_keeps_single_run() {
        let mut ticker = Ticker::default();
        assert!(ticker.start());
        ticker.advance(ms(150));
        assert!(!ticker.start());
        // accumulated time survives the redundant start
        assert!(ticker.advance(ms(50)).is_some());
    }

    #[test]
    fn test_stop_discards_pending_time() {
        let mut ticker = Ticker::default();
        ticker.start();
        ticker.advance(ms(190));
        assert!(ticker.stop());
        assert!(!ticker.stop());
        ticker.start();
        assert_eq!(ticker.advance(ms(20)), None);
    }

    #[test]
    fn test_token_from_previous_run_is_rejected() {
        let mut ticker = Ticker::default();
        ticker.start();
        let token = ticker.advance(ms(200)).unwrap();
        assert!(ticker.accepts(token));

        ticker.stop();
        assert!(!ticker.accepts(token));

        ticker.start();
        assert!(!ticker.accepts(token));
    }

    #[test]
    fn test_set_interval_keeps_run() {
        let mut ticker = Ticker::default();
        ticker.start();
        let token = ticker.advance(ms(200)).unwrap();
        ticker.set_interval(ms(50));
        assert!(ticker.accepts(token));
        assert!(ticker.advance(ms(50)).is_some());
    }
}
