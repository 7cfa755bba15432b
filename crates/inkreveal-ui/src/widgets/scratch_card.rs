use std::time::Duration;

use inkreveal_engine::coords::{Rect, Vec2};
use inkreveal_engine::input::{DragPhase, DragTracker};
use inkreveal_engine::paint::Color;
use inkreveal_engine::scene::StrokeMask;
use inkreveal_engine::{RevealState, ScratchConfig, ScratchListener, ScratchSession, SessionEvent};

use crate::constraints::Constraints;
use crate::content::{self, ContentFactory, ContentLayer, SetupError};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A scratch-to-reveal card.
///
/// Paints, back to front:
/// 1. the cover, a solid colour hiding everything
/// 2. the masked content, visible only through the scratched ink
/// 3. the hidden content, at the reveal fade opacity
///
/// Dragging across the card lays down ink. Once coverage passes the
/// configured threshold the hidden layer fades in, stays for the hold period,
/// then the ink is wiped and the layer fades back out.
///
/// # Example
/// ```rust,ignore
/// let card = ScratchCard::new(&mut |layer: ContentLayer| Some(prize(layer).into()))?
///     .cover(Color::from_srgb_u8(90, 90, 100, 255))
///     .effects(Sparkles::default())
///     .on_scratch(|p| log::trace!("scratch at {p:?}"));
/// ```
pub struct ScratchCard {
    session: ScratchSession,
    tracker: DragTracker,
    masked: Element,
    hidden: Element,
    cover: Color,
    size: Option<Vec2>,
    on_start: Option<Box<dyn FnMut(Vec2)>>,
    on_scratch: Option<Box<dyn FnMut(Vec2)>>,
    on_end: Option<Box<dyn FnMut()>>,
    on_session_event: Option<Box<dyn FnMut(&SessionEvent)>>,
}

impl ScratchCard {
    /// Card with [`ScratchConfig::card`] tuning.
    pub fn new(factory: &mut impl ContentFactory) -> Result<Self, SetupError> {
        Self::with_config(ScratchConfig::card(), factory)
    }

    /// Requests the masked layer, then the hidden layer, from `factory`.
    pub fn with_config(config: ScratchConfig, factory: &mut impl ContentFactory) -> Result<Self, SetupError> {
        let masked = content::require(factory, ContentLayer::Masked)?;
        let hidden = content::require(factory, ContentLayer::Hidden)?;

        Ok(Self {
            session: ScratchSession::new(config, Vec2::zero()),
            tracker: DragTracker::new(Rect::default()),
            masked,
            hidden,
            cover: Color::from_straight(0.55, 0.55, 0.6, 1.0),
            size: None,
            on_start: None,
            on_scratch: None,
            on_end: None,
            on_session_event: None,
        })
    }

    pub fn cover(mut self, v: Color) -> Self { self.cover = v; self }

    /// Preferred size. Without one the card takes all the space offered.
    pub fn size(mut self, w: f32, h: f32) -> Self { self.size = Some(Vec2::new(w, h)); self }

    /// Colour of the ink stroke geometry.
    pub fn ink(mut self, v: Color) -> Self {
        self.session.set_ink(v);
        self
    }

    /// Plugs a visual-effect adapter (particles, haptics) into the gesture.
    pub fn effects(mut self, listener: impl ScratchListener + 'static) -> Self {
        self.session.add_listener(listener);
        self
    }

    pub fn on_start(mut self, f: impl FnMut(Vec2) + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn on_scratch(mut self, f: impl FnMut(Vec2) + 'static) -> Self {
        self.on_scratch = Some(Box::new(f));
        self
    }

    pub fn on_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    /// Called from [`Widget::update`] for every reveal and decay transition.
    pub fn on_session_event(mut self, f: impl FnMut(&SessionEvent) + 'static) -> Self {
        self.on_session_event = Some(Box::new(f));
        self
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn session(&self) -> &ScratchSession {
        &self.session
    }

    #[inline]
    pub fn state(&self) -> RevealState {
        self.session.state()
    }

    #[inline]
    pub fn coverage(&self) -> f32 {
        self.session.coverage()
    }

    /// Keeps drag bounds and the coverage denominator in step with layout.
    fn sync_bounds(&mut self, rect: Rect) {
        if self.tracker.bounds() != rect {
            self.tracker.set_bounds(rect);
        }
        if self.session.mask().size() != rect.size {
            log::debug!("scratch surface resized to {}x{}", rect.size.x, rect.size.y);
            self.session.resize(rect.size);
        }
    }

    /// Ink strokes moved from surface space into scene space.
    fn ink_mask(&self, origin: Vec2) -> StrokeMask {
        self.session
            .ink_mask()
            .into_iter()
            .map(|path| path.translated(origin))
            .collect()
    }
}

impl Widget for ScratchCard {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.size.unwrap_or(constraints.max))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.push_clip(rect);
        painter.fill_rect(rect, self.cover);

        let ink = self.ink_mask(rect.origin);
        if !ink.is_empty() {
            painter.push_mask(ink);
            self.masked.paint(painter, rect);
            painter.pop_mask();
        }

        let opacity = self.session.hidden_opacity();
        if opacity > 0.0 {
            painter.push_opacity(opacity);
            self.hidden.paint(painter, rect);
            painter.pop_opacity();
        }

        painter.pop_clip();
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        self.sync_bounds(rect);

        let Some(phase) = self.tracker.apply_event(&event.into()) else {
            return EventResult::Ignored;
        };

        match phase {
            DragPhase::Began(p) => {
                if let (Ok(()), Some(f)) = (self.session.begin_stroke(p), &mut self.on_start) {
                    f(p);
                }
            }
            DragPhase::Moved(p) => {
                if let (Ok(_), Some(f)) = (self.session.move_stroke(p), &mut self.on_scratch) {
                    f(p);
                }
            }
            DragPhase::Ended => {
                self.session.end_stroke();
                if let Some(f) = &mut self.on_end {
                    f();
                }
            }
        }
        EventResult::Consumed
    }

    fn update(&mut self, dt: Duration) {
        self.session.advance(dt);
        for event in self.session.take_events() {
            log::debug!("scratch card: {event:?}");
            if let Some(f) = &mut self.on_session_event {
                f(&event);
            }
        }
    }
}
