//! Platform-agnostic model of the showcase carousel.
//!
//! Nothing here touches the DOM. The web frontend feeds pointer input and
//! frame times in, and applies the resulting offsets and styles.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod gesture;
pub mod item;
pub mod lifecycle;
pub mod pointer;
pub mod reveal;
pub mod track;
pub mod viewport;

pub use carousel::{Carousel, Cursor, InputOutcome};
pub use config::CarouselConfig;
pub use driver::{AutoScrollDriver, DriverState};
pub use error::{ConfigError, TriggerParseError};
pub use gesture::{DragSession, GestureMachine, GestureState};
pub use item::{display_sequence, Item};
pub use lifecycle::{EffectScope, PluginSlot};
pub use pointer::{local_x, PointerBackend, PointerInput, PointerPhase, PointerSource};
pub use reveal::{
    Easing, Edge, Reveal, RevealPlayback, RevealStyle, TriggerMode, TriggerSpec, TriggerStart,
};
pub use track::{TrackRing, VisibleSlot, VisibleWindow};
pub use viewport::{TriggerGate, ViewportEntry, ViewportObserver};
