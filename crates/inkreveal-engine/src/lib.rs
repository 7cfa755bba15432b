//! InkReveal engine crate.
//!
//! This crate owns the platform-free pieces of the scratch-to-reveal widget:
//! stroke tracking, the ink mask, coverage estimation, decay and reveal timing.
//! Higher layers (`inkreveal-ui`, hosts) feed it pointer events and elapsed
//! time and read back draw lists and state.

pub mod config;
pub mod coords;
pub mod decay;
pub mod error;
pub mod geom;
pub mod input;
pub mod listener;
pub mod logging;
pub mod mask;
pub mod paint;
pub mod reveal;
pub mod scene;
pub mod session;
pub mod stroke;
pub mod time;

pub use config::ScratchConfig;
pub use error::StrokeError;
pub use listener::ScratchListener;
pub use reveal::RevealState;
pub use session::{ScratchSession, SessionEvent};
