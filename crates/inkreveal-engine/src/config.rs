use std::time::Duration;

use serde::Deserialize;

/// Tuning for a scratch surface and its reveal cycle.
///
/// Durations are stored in seconds so the struct reads naturally from a config
/// file:
///
/// ```toml
/// stroke_width = 50.0
/// reveal_threshold = 60.0
/// decay_grace = 3.0
/// decay_tick = 0.03
/// ```
///
/// Missing fields take the [`ScratchConfig::raw`] defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScratchConfig {
    /// Ink width in logical pixels.
    pub stroke_width: f32,
    /// Coverage percentage that must be exceeded to reveal the content.
    pub reveal_threshold: f32,
    /// Delay between the end of a stroke and the start of decay, in seconds.
    pub decay_grace: f32,
    /// Interval between decay ticks, in seconds.
    pub decay_tick: f32,
    /// How long revealed content stays before the mask resets, in seconds.
    pub reveal_hold: f32,
    /// Hidden-layer fade-in on reveal, in seconds.
    pub fade_in: f32,
    /// Hidden-layer fade-out after the mask resets, in seconds.
    pub fade_out: f32,
}

impl ScratchConfig {
    /// Defaults for a bare scratch surface (thin 10 px ink).
    pub fn raw() -> Self {
        Self {
            stroke_width: 10.0,
            reveal_threshold: 60.0,
            decay_grace: 3.0,
            decay_tick: 0.03,
            reveal_hold: 5.0,
            fade_in: 0.5,
            fade_out: 2.0,
        }
    }

    /// Defaults for the composed scratch card (wide 50 px ink).
    pub fn card() -> Self {
        Self { stroke_width: 50.0, ..Self::raw() }
    }

    pub fn stroke_width(mut self, v: f32) -> Self { self.stroke_width = v; self }
    pub fn reveal_threshold(mut self, v: f32) -> Self { self.reveal_threshold = v; self }
    pub fn decay_grace(mut self, v: Duration) -> Self { self.decay_grace = v.as_secs_f32(); self }
    pub fn decay_tick(mut self, v: Duration) -> Self { self.decay_tick = v.as_secs_f32(); self }
    pub fn reveal_hold(mut self, v: Duration) -> Self { self.reveal_hold = v.as_secs_f32(); self }
    pub fn fade_in(mut self, v: Duration) -> Self { self.fade_in = v.as_secs_f32(); self }
    pub fn fade_out(mut self, v: Duration) -> Self { self.fade_out = v.as_secs_f32(); self }

    // ── durations ─────────────────────────────────────────────────────────

    pub fn grace_duration(&self) -> Duration { secs(self.decay_grace) }
    pub fn tick_duration(&self) -> Duration { secs(self.decay_tick) }
    pub fn hold_duration(&self) -> Duration { secs(self.reveal_hold) }
    pub fn fade_in_duration(&self) -> Duration { secs(self.fade_in) }
    pub fn fade_out_duration(&self) -> Duration { secs(self.fade_out) }
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self::raw()
    }
}

/// Seconds to `Duration`; negative and non-finite values become zero.
fn secs(v: f32) -> Duration {
    if v.is_finite() && v > 0.0 {
        Duration::from_secs_f32(v)
    } else {
        Duration::ZERO
    }
}
