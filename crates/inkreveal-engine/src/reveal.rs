//! Reveal state machine.
//!
//! ```text
//!            coverage > threshold            hold elapsed              fade-out done
//!   Idle ────────────────────────▶ Revealed ──────────────▶ ResettingMask ─────────────▶ Idle
//!          (fade hidden layer in)            (clear ink,
//!                                             fade hidden layer out)
//! ```
//!
//! Only the `Idle → Revealed` edge listens to coverage. Coverage reports in any
//! other state are ignored, so crossing the threshold again while revealed or
//! resetting never restarts the sequence.

use std::time::Duration;

use crate::config::ScratchConfig;
use crate::session::TaskKind;
use crate::time::{Fade, Scheduler};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Content hidden under the cover; scratching reveals it through the ink.
    #[default]
    Idle,
    /// Full content shown for the hold period.
    Revealed,
    /// Ink wiped, hidden layer fading back out.
    ResettingMask,
}

#[derive(Debug, Clone)]
pub struct RevealController {
    state: RevealState,
    threshold: f32,
    hold: Duration,
    fade_in: Duration,
    fade_out: Duration,
    /// Opacity of the hidden full-content layer.
    fade: Fade,
    cycles: u32,
}

impl RevealController {
    pub fn new(config: &ScratchConfig) -> Self {
        Self {
            state: RevealState::Idle,
            threshold: config.reveal_threshold,
            hold: config.hold_duration(),
            fade_in: config.fade_in_duration(),
            fade_out: config.fade_out_duration(),
            fade: Fade::settled(0.0),
            cycles: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Number of completed `Idle → Revealed` transitions.
    #[inline]
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Opacity of the hidden content layer at virtual time `now`.
    pub fn hidden_opacity(&self, now: Duration) -> f32 {
        self.fade.value_at(now)
    }

    /// `true` while the hidden layer is still fading at `now`.
    pub fn is_fading(&self, now: Duration) -> bool {
        now < self.fade.end()
    }

    // ── transitions ───────────────────────────────────────────────────────

    /// Feeds a fresh coverage estimate. Returns `true` on `Idle → Revealed`.
    pub fn on_coverage(&mut self, coverage: f32, scheduler: &mut Scheduler<TaskKind>) -> bool {
        if self.state != RevealState::Idle || coverage <= self.threshold {
            return false;
        }

        let now = scheduler.now();
        self.state = RevealState::Revealed;
        self.cycles += 1;
        self.fade = Fade::new(self.fade.value_at(now), 1.0, now, self.fade_in);
        scheduler.schedule_once(TaskKind::RevealHold, self.hold);

        log::info!("revealed at {coverage:.1}% coverage (cycle {})", self.cycles);
        true
    }

    /// Hold expired: `Revealed → ResettingMask`. Returns `true` when the caller
    /// must wipe the ink.
    pub fn on_hold_elapsed(&mut self, scheduler: &mut Scheduler<TaskKind>) -> bool {
        if self.state != RevealState::Revealed {
            return false;
        }

        let now = scheduler.now();
        self.state = RevealState::ResettingMask;
        self.fade = Fade::new(self.fade.value_at(now), 0.0, now, self.fade_out);
        scheduler.schedule_once(TaskKind::FadeOutDone, self.fade_out);

        log::info!("reveal hold elapsed, resetting mask");
        true
    }

    /// Fade-out finished: `ResettingMask → Idle`. Returns `true` on the transition.
    pub fn on_fade_out_done(&mut self) -> bool {
        if self.state != RevealState::ResettingMask {
            return false;
        }
        self.state = RevealState::Idle;
        self.fade = Fade::settled(0.0);
        log::info!("back to idle");
        true
    }

    /// Abandons any running cycle and returns to `Idle` with the hidden layer gone.
    pub fn reset(&mut self, scheduler: &mut Scheduler<TaskKind>) {
        scheduler.cancel_key(TaskKind::RevealHold);
        scheduler.cancel_key(TaskKind::FadeOutDone);
        self.state = RevealState::Idle;
        self.fade = Fade::settled(0.0);
    }
}
