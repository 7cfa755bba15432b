//! Scratch session: the one place the stroke set is mutated.
//!
//! A session owns the mask, the virtual-time scheduler, the decay and reveal
//! controllers, and the registered listeners. Hosts feed it drag phases and
//! elapsed time; every timer reaction runs inside [`ScratchSession::advance`]
//! after the scheduler hands the fired task back, so pointer handling and
//! timer handling never interleave.

use std::time::Duration;

use crate::config::ScratchConfig;
use crate::coords::Vec2;
use crate::decay::{DecayScheduler, DecayStep};
use crate::error::StrokeError;
use crate::input::DragPhase;
use crate::listener::ScratchListener;
use crate::mask::ScratchMask;
use crate::paint::Color;
use crate::reveal::{RevealController, RevealState};
use crate::scene::{DrawList, StrokeMask, ZIndex};
use crate::time::{Fired, Scheduler};

/// What a scheduled task is for. At most one task per kind is pending.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TaskKind {
    DecayGrace,
    DecayTick,
    RevealHold,
    FadeOutDone,
}

/// State changes a host may want to react to, drained with
/// [`ScratchSession::take_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Coverage crossed the threshold; the hidden layer is fading in.
    Revealed { coverage: f32 },
    /// The hold expired and all ink was wiped.
    MaskReset,
    /// The fade-out finished; a new cycle can start.
    Idle,
    /// The grace period elapsed and completed strokes started eroding.
    DecayStarted,
    /// Decay ran out of completed strokes.
    DecayExhausted,
}

pub struct ScratchSession {
    config: ScratchConfig,
    mask: ScratchMask,
    scheduler: Scheduler<TaskKind>,
    decay: DecayScheduler,
    reveal: RevealController,
    listeners: Vec<Box<dyn ScratchListener>>,
    events: Vec<SessionEvent>,
    needs_redraw: bool,
    /// A drag is in progress, whether or not the mask still holds its stroke.
    dragging: bool,
}

impl ScratchSession {
    pub fn new(config: ScratchConfig, size: Vec2) -> Self {
        let mask = ScratchMask::new(size, config.stroke_width);
        let decay = DecayScheduler::new(config.grace_duration(), config.tick_duration());
        let reveal = RevealController::new(&config);
        Self {
            config,
            mask,
            scheduler: Scheduler::new(),
            decay,
            reveal,
            listeners: Vec::new(),
            events: Vec::new(),
            needs_redraw: true,
            dragging: false,
        }
    }

    pub fn add_listener(&mut self, listener: impl ScratchListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_ink(&mut self, ink: Color) {
        self.mask.set_ink(ink);
        self.needs_redraw = true;
    }

    // ── pointer input ─────────────────────────────────────────────────────

    /// Starts a stroke at `point`. Rejected while another stroke is active.
    pub fn begin_stroke(&mut self, point: Vec2) -> Result<(), StrokeError> {
        if let Err(e) = self.mask.on_stroke_start(point) {
            log::warn!("ignoring drag start at ({:.1}, {:.1}): {e}", point.x, point.y);
            return Err(e);
        }

        log::debug!("stroke started at ({:.1}, {:.1})", point.x, point.y);
        self.dragging = true;
        self.needs_redraw = true;
        for l in &mut self.listeners {
            l.on_scratch_start(point);
        }
        Ok(())
    }

    /// Extends the active stroke and re-evaluates the reveal threshold.
    /// Returns the new coverage.
    ///
    /// If the mask was wiped while this drag was still going, the drag carries
    /// on as a fresh stroke starting at `point`.
    pub fn move_stroke(&mut self, point: Vec2) -> Result<f32, StrokeError> {
        let coverage = if self.dragging && !self.mask.store().is_drawing() {
            log::debug!("drag outlived a mask reset, continuing as a new stroke");
            self.mask.on_stroke_start(point)?;
            self.mask.recompute_coverage()
        } else {
            match self.mask.on_stroke_point(point) {
                Ok(coverage) => coverage,
                Err(e) => {
                    log::warn!("ignoring drag move to ({:.1}, {:.1}): {e}", point.x, point.y);
                    return Err(e);
                }
            }
        };

        if self.reveal.on_coverage(coverage, &mut self.scheduler) {
            self.events.push(SessionEvent::Revealed { coverage });
        }
        self.needs_redraw = true;
        for l in &mut self.listeners {
            l.on_scratch_move(point);
        }
        Ok(coverage)
    }

    /// Finishes the drag. Returns `true` when a stroke was frozen into the
    /// completed set.
    pub fn end_stroke(&mut self) -> bool {
        let was_dragging = std::mem::replace(&mut self.dragging, false);
        let ended = self.mask.on_stroke_end();
        if ended {
            log::debug!("stroke ended, {} completed", self.mask.store().completed_len());
            self.decay.on_stroke_end(&mut self.scheduler);
        }
        if ended || was_dragging {
            for l in &mut self.listeners {
                l.on_scratch_end();
            }
        }
        ended
    }

    /// Routes one drag phase. Rejected phases are logged and dropped.
    pub fn handle_drag(&mut self, phase: DragPhase) {
        match phase {
            DragPhase::Began(p) => {
                let _ = self.begin_stroke(p);
            }
            DragPhase::Moved(p) => {
                let _ = self.move_stroke(p);
            }
            DragPhase::Ended => {
                self.end_stroke();
            }
        }
    }

    // ── time ──────────────────────────────────────────────────────────────

    /// Moves virtual time forward by `dt`, running every task that comes due.
    pub fn advance(&mut self, dt: Duration) {
        let deadline = self.scheduler.now() + dt;
        while let Some(fired) = self.scheduler.pop_due(deadline) {
            self.on_task(fired);
        }
        self.scheduler.advance_to(deadline);

        if self.reveal.is_fading(self.scheduler.now()) {
            self.needs_redraw = true;
        }
    }

    fn on_task(&mut self, fired: Fired<TaskKind>) {
        match fired.key {
            TaskKind::DecayGrace => {
                self.decay.on_grace_elapsed(&mut self.scheduler);
                self.events.push(SessionEvent::DecayStarted);
            }
            TaskKind::DecayTick => {
                if self.decay.on_tick(&mut self.scheduler, &mut self.mask) == DecayStep::Eroded {
                    self.needs_redraw = true;
                }
                if !self.scheduler.is_scheduled(TaskKind::DecayTick) {
                    self.events.push(SessionEvent::DecayExhausted);
                }
            }
            TaskKind::RevealHold => {
                if self.reveal.on_hold_elapsed(&mut self.scheduler) {
                    self.decay.cancel(&mut self.scheduler);
                    self.mask.clear();
                    self.needs_redraw = true;
                    self.events.push(SessionEvent::MaskReset);
                }
            }
            TaskKind::FadeOutDone => {
                if self.reveal.on_fade_out_done() {
                    self.needs_redraw = true;
                    self.events.push(SessionEvent::Idle);
                }
            }
        }
    }

    // ── surface ───────────────────────────────────────────────────────────

    /// Changes the surface size used as the coverage denominator.
    pub fn resize(&mut self, size: Vec2) {
        self.mask.resize(size);
        self.needs_redraw = true;
    }

    /// Drops all ink and pending timers and returns to `Idle`.
    pub fn reset(&mut self) {
        self.decay.cancel(&mut self.scheduler);
        self.reveal.reset(&mut self.scheduler);
        self.mask.clear();
        self.dragging = false;
        self.needs_redraw = true;
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &ScratchConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> RevealState {
        self.reveal.state()
    }

    #[inline]
    pub fn coverage(&self) -> f32 {
        self.mask.coverage()
    }

    /// Number of reveals so far.
    #[inline]
    pub fn cycles(&self) -> u32 {
        self.reveal.cycles()
    }

    /// Current opacity of the hidden content layer.
    pub fn hidden_opacity(&self) -> f32 {
        self.reveal.hidden_opacity(self.scheduler.now())
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    #[inline]
    pub fn mask(&self) -> &ScratchMask {
        &self.mask
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_decaying(&self) -> bool {
        self.decay.is_pending(&self.scheduler)
    }

    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns and clears the redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }

    // ── rendering ─────────────────────────────────────────────────────────

    pub fn render_ink(&self, list: &mut DrawList, z: ZIndex) {
        self.mask.render(list, z);
    }

    pub fn ink_mask(&self) -> StrokeMask {
        self.mask.mask_paths()
    }
}
