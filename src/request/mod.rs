pub mod controller;
pub mod state;

pub use controller::RequestController;
pub use state::InteractionState;
