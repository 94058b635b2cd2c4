//! Diagram construction and lifecycle
//!
//! Everything that happens after graph elements exist lives here: picking a
//! layout for the node count, styling nodes and edges from the active theme,
//! driving the render/export lifecycle, and writing exported artifacts out.

mod controller;
mod export;
mod layout;
mod style;

pub use controller::*;
pub use export::*;
pub use layout::*;
pub use style::*;
