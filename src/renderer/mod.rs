//! Rendering output
//!
//! The core never calls a graphics API. Each frame it emits a list of
//! `DrawCommand`s that an external renderer turns into pixels.

pub mod command;
pub mod shapes;

pub use command::{DrawCommand, TextAnchor, colors};
pub use shapes::frame;
