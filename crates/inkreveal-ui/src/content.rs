//! Content supplied by the host.
//!
//! A scratch card shows the same content twice: once drawn through the ink
//! (what the user scratches free) and once as a hidden full layer that fades
//! in on reveal. Both are built by a [`ContentFactory`] at construction time.

use std::fmt;

use thiserror::Error;

use crate::widget::Element;

/// Which of the two content layers is being requested.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContentLayer {
    /// Drawn through the ink mask; visible only where the user scratched.
    Masked,
    /// Drawn unmasked at the reveal fade opacity.
    Hidden,
}

impl fmt::Display for ContentLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentLayer::Masked => f.write_str("masked"),
            ContentLayer::Hidden => f.write_str("hidden"),
        }
    }
}

/// Builds the content shown under the scratch cover.
///
/// Called once per [`ContentLayer`]. Each call must return a fresh element;
/// returning `None` aborts construction with [`SetupError::MissingContent`].
///
/// Closures `FnMut(ContentLayer) -> Option<Element>` implement this trait.
pub trait ContentFactory {
    fn content(&mut self, layer: ContentLayer) -> Option<Element>;
}

impl<F> ContentFactory for F
where
    F: FnMut(ContentLayer) -> Option<Element>,
{
    fn content(&mut self, layer: ContentLayer) -> Option<Element> {
        self(layer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("content factory returned nothing for the {layer} layer")]
    MissingContent { layer: ContentLayer },
}

/// Asks `factory` for `layer`, turning a missing element into an error.
pub(crate) fn require(factory: &mut dyn ContentFactory, layer: ContentLayer) -> Result<Element, SetupError> {
    factory.content(layer).ok_or(SetupError::MissingContent { layer })
}
