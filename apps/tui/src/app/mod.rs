// Application state, queued requests and key handling

pub mod actions;
pub mod input;
pub mod load;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen};
