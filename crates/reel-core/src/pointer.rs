//! Input-device abstraction: mouse and touch both reduce to `PointerInput`.

/// Device that produced an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
    Cancel,
}

/// Device-independent gesture input. `x` is relative to the track's left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down { x: f64 },
    Move { x: f64 },
    Up,
    Leave,
    Cancel,
}

const MOUSE_EVENTS: &[(&str, PointerPhase)] = &[
    ("mousedown", PointerPhase::Down),
    ("mousemove", PointerPhase::Move),
    ("mouseup", PointerPhase::Up),
    ("mouseleave", PointerPhase::Leave),
];

const TOUCH_EVENTS: &[(&str, PointerPhase)] = &[
    ("touchstart", PointerPhase::Down),
    ("touchmove", PointerPhase::Move),
    ("touchend", PointerPhase::Up),
    ("touchcancel", PointerPhase::Cancel),
];

impl PointerSource {
    /// DOM event names this source listens to, with their phase.
    pub const fn events(self) -> &'static [(&'static str, PointerPhase)] {
        match self {
            Self::Mouse => MOUSE_EVENTS,
            Self::Touch => TOUCH_EVENTS,
        }
    }

    pub fn phase_for(self, event_name: &str) -> Option<PointerPhase> {
        self.events()
            .iter()
            .find(|(name, _)| *name == event_name)
            .map(|&(_, phase)| phase)
    }
}

impl PointerPhase {
    /// Attach a position. Down and Move without a position (an empty touch
    /// list) produce nothing.
    pub fn with_x(self, x: Option<f64>) -> Option<PointerInput> {
        match self {
            Self::Down => x.map(|x| PointerInput::Down { x }),
            Self::Move => x.map(|x| PointerInput::Move { x }),
            Self::Up => Some(PointerInput::Up),
            Self::Leave => Some(PointerInput::Leave),
            Self::Cancel => Some(PointerInput::Cancel),
        }
    }
}

/// Track-relative x of a page-space pointer position.
#[inline]
pub fn local_x(page_x: f64, track_offset_left: f64) -> f64 {
    page_x - track_offset_left
}

/// One input device feeding the gesture state machine.
///
/// Each backend only knows how to read a page-space x coordinate from its
/// native event type; phase mapping and coordinate conversion are shared.
pub trait PointerBackend {
    type Event;

    fn source(&self) -> PointerSource;

    /// Page-space x of the primary contact, if the event carries one.
    fn page_x(&self, ev: &Self::Event) -> Option<f64>;

    fn decode(
        &self,
        event_name: &str,
        ev: &Self::Event,
        track_offset_left: f64,
    ) -> Option<PointerInput> {
        let phase = self.source().phase_for(event_name)?;
        let x = match phase {
            PointerPhase::Down | PointerPhase::Move => {
                self.page_x(ev).map(|px| local_x(px, track_offset_left))
            }
            _ => None,
        };
        phase.with_x(x)
    }
}
