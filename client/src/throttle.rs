use std::time::Duration;

use tokio::time::Instant;

/// Rejects a command identical to the previous one inside `window`.
///
/// Single slot: only the last accepted body is remembered, so alternating
/// between two messages is never throttled.
#[derive(Debug, Clone)]
pub struct CommandThrottle {
    window: Duration,
    last_body: Option<String>,
    last_sent: Option<Instant>,
}

impl CommandThrottle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_body: None,
            last_sent: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn should_allow(&self, body: &str, now: Instant) -> bool {
        match (&self.last_body, self.last_sent) {
            (Some(last), Some(sent)) if last == body => {
                now.saturating_duration_since(sent) >= self.window
            }
            _ => true,
        }
    }

    pub fn record_sent(&mut self, body: &str, now: Instant) {
        self.last_body = Some(body.to_string());
        self.last_sent = Some(now);
    }

    /// Check and record in one step. Returns `false` without touching the
    /// stored state when `body` is throttled.
    pub fn try_acquire(&mut self, body: &str, now: Instant) -> bool {
        if !self.should_allow(body, now) {
            return false;
        }
        self.record_sent(body, now);
        true
    }

    pub fn reset(&mut self) {
        self.last_body = None;
        self.last_sent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(20);

    #[test]
    fn test_first_command_allowed() {
        let throttle = CommandThrottle::new(WINDOW);
        assert!(throttle.should_allow("hi", Instant::now()));
    }

    #[test]
    fn test_repeat_inside_window_rejected() {
        let mut throttle = CommandThrottle::new(WINDOW);
        let t0 = Instant::now();
        throttle.record_sent("hi", t0);

        assert!(!throttle.should_allow("hi", t0));
        assert!(!throttle.should_allow("hi", t0 + Duration::from_millis(19_999)));
    }

    #[test]
    fn test_repeat_at_window_allowed() {
        let mut throttle = CommandThrottle::new(WINDOW);
        let t0 = Instant::now();
        throttle.record_sent("hi", t0);

        assert!(throttle.should_allow("hi", t0 + WINDOW));
        assert!(throttle.should_allow("hi", t0 + Duration::from_secs(60)));
    }

    #[test]
    fn test_distinct_bodies_never_throttled() {
        let mut throttle = CommandThrottle::new(WINDOW);
        let t0 = Instant::now();

        assert!(throttle.try_acquire("hi", t0));
        assert!(throttle.try_acquire("hello", t0));
        assert!(throttle.try_acquire("hi", t0));
    }

    #[test]
    fn test_rejection_does_not_refresh_timestamp() {
        let mut throttle = CommandThrottle::new(WINDOW);
        let t0 = Instant::now();

        assert!(throttle.try_acquire("hi", t0));
        assert!(!throttle.try_acquire("hi", t0 + Duration::from_secs(15)));
        assert!(throttle.try_acquire("hi", t0 + Duration::from_secs(20)));
    }

    #[test]
    fn test_case_sensitive_comparison() {
        let mut throttle = CommandThrottle::new(WINDOW);
        let t0 = Instant::now();
        throttle.record_sent("hi", t0);
        assert!(throttle.should_allow("Hi", t0));
    }

    #[test]
    fn test_reset() {
        let mut throttle = CommandThrottle::new(WINDOW);
        let t0 = Instant::now();
        throttle.record_sent("hi", t0);
        throttle.reset();
        assert!(throttle.should_allow("hi", t0));
    }

    #[test]
    fn test_zero_window_disables_throttle() {
        let mut throttle = CommandThrottle::new(Duration::ZERO);
        let t0 = Instant::now();
        assert!(throttle.try_acquire("hi", t0));
        assert!(throttle.try_acquire("hi", t0));
    }
}
