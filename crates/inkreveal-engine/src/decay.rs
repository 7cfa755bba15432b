//! Stroke decay.
//!
//! Finished strokes fade away on their own: after a grace period following
//! the end of a stroke, a repeating tick removes one point at a time from the
//! oldest completed stroke until none are left.
//!
//! Later stroke ends never postpone a grace period that is already pending.
//! One that expires while the user is drawing again is harmless: decay only
//! touches the completed queue, never the active stroke.

use std::time::Duration;

use crate::mask::ScratchMask;
use crate::session::TaskKind;
use crate::time::Scheduler;

/// Outcome of one decay tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecayStep {
    /// A point was removed; the mask needs a redraw.
    Eroded,
    /// Nothing is left to erode; the tick task has been cancelled.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct DecayScheduler {
    grace: Duration,
    tick: Duration,
}

impl DecayScheduler {
    pub fn new(grace: Duration, tick: Duration) -> Self {
        Self { grace, tick }
    }

    #[inline]
    pub fn grace(&self) -> Duration {
        self.grace
    }

    #[inline]
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Arms the grace period unless one is already pending or decay is
    /// running. A pending grace keeps its original deadline.
    pub fn on_stroke_end(&self, scheduler: &mut Scheduler<TaskKind>) {
        if self.is_pending(scheduler) {
            return;
        }
        scheduler.schedule_once(TaskKind::DecayGrace, self.grace);
    }

    /// Starts the repeating tick. A running tick is replaced, never doubled.
    pub fn on_grace_elapsed(&self, scheduler: &mut Scheduler<TaskKind>) {
        log::debug!("decay started");
        scheduler.schedule_repeating(TaskKind::DecayTick, self.tick);
    }

    /// Removes one point and stops ticking once the completed queue is empty.
    pub fn on_tick(&self, scheduler: &mut Scheduler<TaskKind>, mask: &mut ScratchMask) -> DecayStep {
        let eroded = mask.decay_oldest();
        if mask.store().has_completed() {
            return DecayStep::Eroded;
        }

        scheduler.cancel_key(TaskKind::DecayTick);
        log::debug!("decay exhausted");
        if eroded { DecayStep::Eroded } else { DecayStep::Exhausted }
    }

    /// Drops a pending grace period and any running tick.
    pub fn cancel(&self, scheduler: &mut Scheduler<TaskKind>) {
        scheduler.cancel_key(TaskKind::DecayGrace);
        scheduler.cancel_key(TaskKind::DecayTick);
    }

    /// `true` while a grace period or a tick is pending.
    pub fn is_pending(&self, scheduler: &Scheduler<TaskKind>) -> bool {
        scheduler.is_scheduled(TaskKind::DecayGrace) || scheduler.is_scheduled(TaskKind::DecayTick)
    }
}
