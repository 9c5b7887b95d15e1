pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_lightbox_keys;
pub use pointer::{wire_drag_handlers, DragWiring};
