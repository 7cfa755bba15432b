use std::time::Duration;

/// Linear opacity ramp from `from` to `to`, anchored on the scheduler timeline.
///
/// A fade does not tick on its own: its value is read at a virtual time, and
/// its completion is a scheduler task owned by whoever started it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    start: Duration,
    duration: Duration,
}

impl Fade {
    pub fn new(from: f32, to: f32, start: Duration, duration: Duration) -> Self {
        Self { from, to, start, duration }
    }

    /// A fade that has already reached `value`.
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, Duration::ZERO, Duration::ZERO)
    }

    /// Progress in `[0, 1]` at `now`.
    pub fn progress_at(&self, now: Duration) -> f32 {
        if now >= self.end() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Value at `now`.
    pub fn value_at(&self, now: Duration) -> f32 {
        self.from + (self.to - self.from) * self.progress_at(now)
    }

    /// Virtual time at which the fade reaches its target.
    #[inline]
    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    #[test]
    fn fade_is_linear_between_start_and_end() {
        let fade = Fade::new(0.0, 1.0, ms(1000), ms(500));
        assert_eq!(fade.value_at(ms(0)), 0.0);
        assert_eq!(fade.value_at(ms(1000)), 0.0);
        assert!((fade.value_at(ms(1250)) - 0.5).abs() < 1e-6);
        assert_eq!(fade.value_at(ms(1500)), 1.0);
        assert_eq!(fade.value_at(ms(9000)), 1.0);
        assert_eq!(fade.end(), ms(1500));
    }

    #[test]
    fn fade_out_reaches_zero() {
        let fade = Fade::new(1.0, 0.0, ms(0), ms(2000));
        assert!((fade.value_at(ms(500)) - 0.75).abs() < 1e-6);
        assert_eq!(fade.value_at(ms(2000)), 0.0);
    }

    #[test]
    fn settled_fade_is_constant() {
        let fade = Fade::settled(0.3);
        assert_eq!(fade.value_at(Duration::ZERO), 0.3);
        assert_eq!(fade.value_at(ms(100)), 0.3);
        assert_eq!(fade.target(), 0.3);
    }
}
