//! Transient "Slide i/N" notice with an auto-dismiss timer

use std::time::{Duration, Instant};

/// The most recent navigation notice and when it disappears
///
/// Showing a new message replaces the old one and restarts the timer.
#[derive(Debug, Clone)]
pub struct Notice {
    duration: Duration,
    current: Option<(String, Instant)>,
}

impl Notice {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some((message.into(), now + self.duration));
    }

    /// The message, if it has not yet expired at `now`
    pub fn visible(&self, now: Instant) -> Option<&str> {
        match &self.current {
            Some((message, expires)) if now < *expires => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self::new(Duration::from_millis(900))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires() {
        let t0 = Instant::now();
        let mut notice = Notice::default();
        assert!(notice.visible(t0).is_none());

        notice.show("Slide 2/7", t0);
        assert_eq!(notice.visible(t0 + Duration::from_millis(899)), Some("Slide 2/7"));
        assert!(notice.visible(t0 + Duration::from_millis(900)).is_none());
    }

    #[test]
    fn test_new_notice_resets_timer() {
        let t0 = Instant::now();
        let mut notice = Notice::new(Duration::from_millis(900));
        notice.show("Slide 2/7", t0);
        notice.show("Slide 3/7", t0 + Duration::from_millis(600));

        let later = t0 + Duration::from_millis(1200);
        assert_eq!(notice.visible(later), Some("Slide 3/7"));
        assert!(notice.visible(t0 + Duration::from_millis(1500)).is_none());
    }

    #[test]
    fn test_clear() {
        let t0 = Instant::now();
        let mut notice = Notice::default();
        notice.show("x", t0);
        notice.clear();
        assert!(notice.visible(t0).is_none());
    }
}
