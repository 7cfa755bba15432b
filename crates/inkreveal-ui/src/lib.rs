//! InkReveal UI: retained widget layer on top of `inkreveal-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use inkreveal_ui::prelude::*;
//!
//! let mut factory = |layer: ContentLayer| Some(Swatch::new(prize_color(layer)).into());
//! let mut root: Element = ScratchCard::new(&mut factory)?
//!     .on_end(|| log::info!("lifted"))
//!     .into();
//!
//! let mut scene = UiScene::new();
//! // In your frame callback:
//! let draw_list = scene.frame(&mut root, viewport, &input, dt);
//! // Pass draw_list to your renderer.
//! ```

pub mod constraints;
pub mod content;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

pub use content::{ContentFactory, ContentLayer, SetupError};

/// Everything needed to build and host a scratch card.
pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::content::{ContentFactory, ContentLayer, SetupError};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{scratch_card::ScratchCard, swatch::Swatch};

    pub use inkreveal_engine::coords::{Rect, Vec2};
    pub use inkreveal_engine::paint::Color;
    pub use inkreveal_engine::{RevealState, ScratchConfig, ScratchListener, SessionEvent};
}
