// DOM hooks and tolerances used by the web frontend.

// Element that receives the section markup when no id is given
pub const HOST_ID: &str = "showcase";

// Class names the stylesheet keys off
pub const TITLE_CLASS: &str = "showcase-title";
pub const CONTAINER_CLASS: &str = "showcase-container";
pub const TRACK_CLASS: &str = "showcase-track";
pub const CARD_CLASS: &str = "showcase-card";

// Attribute updated when the card at the left edge changes
pub const LEADING_ATTR: &str = "data-leading";

// Attribute listing the source items inside the container, left to right
pub const VISIBLE_ATTR: &str = "data-visible";

// Half-width seam drift (px) above which a doubled track would visibly jump
pub const SEAM_DRIFT_WARN_PX: f64 = 0.5;
