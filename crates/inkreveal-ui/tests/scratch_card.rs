use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use inkreveal_engine::scene::{DrawCmd, DrawItem, DrawList};
use inkreveal_ui::prelude::*;

const CARD: Rect = Rect::new(20.0, 30.0, 100.0, 100.0);

fn red() -> Color { Color::from_straight(1.0, 0.0, 0.0, 1.0) }
fn green() -> Color { Color::from_straight(0.0, 1.0, 0.0, 1.0) }

fn ms(v: u64) -> Duration { Duration::from_millis(v) }

fn factory() -> impl FnMut(ContentLayer) -> Option<Element> {
    |layer| {
        let color = match layer {
            ContentLayer::Masked => red(),
            ContentLayer::Hidden => green(),
        };
        Some(Swatch::new(color).into())
    }
}

fn card() -> ScratchCard {
    match ScratchCard::new(&mut factory()) {
        Ok(card) => card,
        Err(e) => panic!("card setup failed: {e}"),
    }
}

/// Scene position of a card-local point.
fn at(x: f32, y: f32) -> Vec2 {
    Vec2::new(CARD.origin.x + x, CARD.origin.y + y)
}

/// Four discs of 50 px ink on 100×100: 78.5 % coverage, crossing 60 % on the last.
const STROKE: [(f32, f32); 4] = [(10.0, 10.0), (40.0, 10.0), (70.0, 10.0), (10.0, 40.0)];

fn scratch(card: &mut ScratchCard, points: &[(f32, f32)]) {
    let (x, y) = points[0];
    card.on_event(&UiEvent::Press { pos: at(x, y) }, CARD);
    for &(x, y) in &points[1..] {
        card.on_event(&UiEvent::Move { pos: at(x, y) }, CARD);
    }
}

fn paint(card: &ScratchCard) -> DrawList {
    let mut list = DrawList::new();
    card.paint(&mut Painter::new(&mut list), CARD);
    list
}

fn rect_color(item: &DrawItem) -> Color {
    match &item.cmd {
        DrawCmd::Rect(cmd) => cmd.color,
        other => panic!("expected a rect, got {other:?}"),
    }
}

// ── construction ──────────────────────────────────────────────────────────

#[test]
fn factory_is_asked_for_masked_then_hidden() {
    let mut calls = Vec::new();
    let mut f = |layer: ContentLayer| -> Option<Element> {
        calls.push(layer);
        Some(Swatch::new(red()).into())
    };
    assert!(ScratchCard::new(&mut f).is_ok());
    assert_eq!(calls, vec![ContentLayer::Masked, ContentLayer::Hidden]);
}

#[test]
fn missing_masked_content_fails_setup() {
    let mut f = |_: ContentLayer| -> Option<Element> { None };
    assert_eq!(
        ScratchCard::new(&mut f).err(),
        Some(SetupError::MissingContent { layer: ContentLayer::Masked })
    );
}

#[test]
fn missing_hidden_content_fails_setup() {
    let mut f = |layer: ContentLayer| -> Option<Element> {
        (layer == ContentLayer::Masked).then(|| Swatch::new(red()).into())
    };
    let err = ScratchCard::new(&mut f).err();
    assert_eq!(err, Some(SetupError::MissingContent { layer: ContentLayer::Hidden }));
    assert_eq!(
        err.map(|e| e.to_string()).as_deref(),
        Some("content factory returned nothing for the hidden layer")
    );
}

#[test]
fn card_uses_wide_ink_by_default() {
    assert_eq!(card().session().config().stroke_width, 50.0);
    let thin = ScratchCard::with_config(ScratchConfig::raw(), &mut factory()).ok();
    assert_eq!(thin.map(|c| c.session().config().stroke_width), Some(10.0));
}

// ── painting ──────────────────────────────────────────────────────────────

#[test]
fn untouched_card_paints_only_the_cover() {
    let cover = Color::from_straight(0.2, 0.2, 0.2, 1.0);
    let card = card().cover(cover);
    let list = paint(&card);
    assert_eq!(list.len(), 1);
    assert_eq!(rect_color(&list.items()[0]), cover);
    assert_eq!(list.items()[0].clip_rect, Some(CARD));
}

#[test]
fn scratched_content_is_drawn_through_the_ink() {
    let mut card = card();
    scratch(&mut card, &STROKE[..2]);
    let list = paint(&card);

    assert_eq!(list.len(), 2);
    let masked = &list.items()[1];
    assert_eq!(rect_color(masked), red());

    let id = masked.mask.expect("masked layer has a mask");
    let mask = list.mask(id).expect("mask registered");
    assert_eq!(mask.len(), 1);
    assert_eq!(mask[0].points, vec![at(10.0, 10.0), at(40.0, 10.0)]);
    assert_eq!(mask[0].width, 50.0);
}

// ── gesture ───────────────────────────────────────────────────────────────

#[test]
fn closures_mirror_the_drag_in_local_coordinates() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (a, b, c) = (log.clone(), log.clone(), log.clone());
    let mut card = card()
        .on_start(move |p| a.borrow_mut().push(format!("start {} {}", p.x, p.y)))
        .on_scratch(move |p| b.borrow_mut().push(format!("scratch {} {}", p.x, p.y)))
        .on_end(move || c.borrow_mut().push("end".to_string()));

    scratch(&mut card, &STROKE[..2]);
    card.on_event(&UiEvent::Release { pos: at(40.0, 10.0) }, CARD);

    assert_eq!(*log.borrow(), vec!["start 10 10", "scratch 40 10", "end"]);
    assert_eq!(card.session().mask().store().completed_len(), 1);
}

#[test]
fn press_outside_the_card_is_ignored() {
    let started = Rc::new(RefCell::new(false));
    let flag = started.clone();
    let mut card = card().on_start(move |_| *flag.borrow_mut() = true);

    let result = card.on_event(&UiEvent::Press { pos: Vec2::new(5.0, 5.0) }, CARD);
    assert_eq!(result, EventResult::Ignored);
    assert!(!*started.borrow());
}

#[test]
fn focus_loss_ends_the_stroke() {
    let mut card = card();
    scratch(&mut card, &STROKE[..2]);
    assert!(card.on_event(&UiEvent::FocusLost, CARD).is_consumed());
    assert!(!card.session().mask().store().is_drawing());
}

#[test]
fn effects_slot_receives_the_gesture() {
    #[derive(Default)]
    struct Counter(Rc<RefCell<(u32, u32, u32)>>);

    impl ScratchListener for Counter {
        fn on_scratch_start(&mut self, _: Vec2) { self.0.borrow_mut().0 += 1; }
        fn on_scratch_move(&mut self, _: Vec2) { self.0.borrow_mut().1 += 1; }
        fn on_scratch_end(&mut self) { self.0.borrow_mut().2 += 1; }
    }

    let counts = Rc::new(RefCell::new((0, 0, 0)));
    let mut card = card().effects(Counter(counts.clone()));
    scratch(&mut card, &STROKE);
    card.on_event(&UiEvent::Leave, CARD);
    assert_eq!(*counts.borrow(), (1, 3, 1));
}

// ── reveal ────────────────────────────────────────────────────────────────

#[test]
fn scratching_past_the_threshold_reveals() {
    let mut card = card();
    scratch(&mut card, &STROKE[..3]);
    assert_eq!(card.state(), RevealState::Idle);
    assert!(card.coverage() < 60.0);

    scratch_more(&mut card, STROKE[3]);
    assert_eq!(card.state(), RevealState::Revealed);
    assert!((card.coverage() - 78.54).abs() < 0.01);
}

fn scratch_more(card: &mut ScratchCard, (x, y): (f32, f32)) {
    card.on_event(&UiEvent::Move { pos: at(x, y) }, CARD);
}

#[test]
fn hidden_layer_fades_in_after_reveal() {
    let mut card = card();
    scratch(&mut card, &STROKE);
    card.update(ms(250));

    let list = paint(&card);
    let hidden = list
        .items()
        .iter()
        .find(|item| item.mask.is_none() && rect_color(item) == green())
        .expect("hidden layer painted");
    assert!((hidden.opacity - 0.5).abs() < 1e-5);
}

#[test]
fn full_cycle_is_reported_through_session_events() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut card = card().on_session_event(move |e| sink.borrow_mut().push(e.clone()));

    scratch(&mut card, &STROKE);
    card.on_event(&UiEvent::Release { pos: at(10.0, 40.0) }, CARD);

    card.update(ms(5000));
    assert_eq!(card.state(), RevealState::ResettingMask);
    assert!(card.session().mask().store().is_empty());

    card.update(ms(2000));
    assert_eq!(card.state(), RevealState::Idle);
    // Nothing scratched, nothing revealed: back to the bare cover.
    assert_eq!(paint(&card).len(), 1);

    let seen = seen.borrow();
    assert!(matches!(seen.first(), Some(SessionEvent::Revealed { .. })));
    assert!(seen.contains(&SessionEvent::MaskReset));
    assert_eq!(seen.last(), Some(&SessionEvent::Idle));
}

// ── scene ─────────────────────────────────────────────────────────────────

#[test]
fn scene_frames_drive_the_card() {
    let ended = Rc::new(RefCell::new(0));
    let counter = ended.clone();
    let mut root: Element = card()
        .on_end(move || *counter.borrow_mut() += 1)
        .into();

    let viewport = Vec2::new(100.0, 100.0);
    let mut scene = UiScene::new();

    let press = UiInput { mouse_pos: Vec2::new(10.0, 10.0), mouse_down: true, ..Default::default() };
    let drag = UiInput { mouse_pos: Vec2::new(60.0, 10.0), ..Default::default() };
    let release = UiInput { mouse_pos: Vec2::new(60.0, 10.0), mouse_up: true, ..Default::default() };

    let _ = scene.frame(&mut root, viewport, &press, ms(16));
    let list = scene.frame(&mut root, viewport, &drag, ms(16));
    // Cover plus masked content.
    assert_eq!(list.len(), 2);

    let _ = scene.frame(&mut root, viewport, &release, ms(16));
    assert_eq!(*ended.borrow(), 1);
}

#[test]
fn scene_lays_out_a_sized_card() {
    let started = Rc::new(RefCell::new(0));
    let counter = started.clone();
    let mut root: Element = card()
        .size(40.0, 30.0)
        .on_start(move |_| *counter.borrow_mut() += 1)
        .into();

    let viewport = Vec2::new(100.0, 100.0);
    let mut scene = UiScene::new();

    // Inside the viewport but outside the 40×30 card.
    let miss = UiInput { mouse_pos: Vec2::new(60.0, 10.0), mouse_down: true, ..Default::default() };
    let list = scene.frame(&mut root, viewport, &miss, ms(16));
    assert_eq!(list.len(), 1);
    match &list.items()[0].cmd {
        DrawCmd::Rect(cmd) => assert_eq!(cmd.rect, Rect::new(0.0, 0.0, 40.0, 30.0)),
        other => panic!("expected the cover rect, got {other:?}"),
    }
    assert_eq!(*started.borrow(), 0);

    let hit = UiInput { mouse_pos: Vec2::new(20.0, 10.0), mouse_down: true, ..Default::default() };
    let _ = scene.frame(&mut root, viewport, &hit, ms(16));
    assert_eq!(*started.borrow(), 1);
}
