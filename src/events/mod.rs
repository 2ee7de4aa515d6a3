pub mod listener;
pub mod pointer;

pub use listener::Listener;
pub use pointer::wire_pointer_handlers;
