// Shared motion and layout tuning constants used by the web frontend.

// Auto-scroll
pub const AUTO_SCROLL_DURATION_SEC: f64 = 40.0; // seconds per full cycle (one copy of the list)

// Dragging
pub const DRAG_SENSITIVITY: f64 = 2.0; // scroll px per pointer px

// Layout fallback used before the track has been measured
pub const VIEWPORT_FALLBACK_WIDTH: f64 = 1280.0;

// Reveal: section title
pub const TITLE_REVEAL_DURATION_SEC: f64 = 1.0;
pub const TITLE_REVEAL_OFFSET_Y: f64 = 50.0;
pub const TITLE_REVEAL_START: &str = "top 80%";

// Reveal: cards
pub const CARD_REVEAL_DURATION_SEC: f64 = 0.8;
pub const CARD_REVEAL_OFFSET_Y: f64 = 30.0;
pub const CARD_REVEAL_SCALE_FROM: f64 = 0.95;
pub const CARD_REVEAL_STAGGER_SEC: f64 = 0.1;
pub const CARD_REVEAL_START: &str = "top 75%";

// Driver ticks larger than this are treated as a stall (tab in background)
pub const MAX_TICK_SEC: f64 = 0.25;
