//! Reusable UI components

mod button;
mod input;
mod status_line;

pub use button::*;
pub use input::*;
pub use status_line::*;
