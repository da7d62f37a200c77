pub mod console;

pub use console::ConsoleRenderer;

use crate::request::InteractionState;

/// Sink for state transitions. Implementations repaint the whole view on
/// every call; there is no diffing contract.
pub trait Renderer: Send + Sync {
    fn render(&self, state: &InteractionState);
}
