//! Carousel track controller.
//!
//! Owns the scroll offset and arbitrates between its two writers: the
//! auto-scroll driver while idle, and the drag session while a gesture is in
//! progress. Starting a gesture always stops the driver before the first drag
//! write; the driver is re-armed by the next `tick()` after the gesture ends.

use crate::config::CarouselConfig;
use crate::driver::{AutoScrollDriver, DriverState};
use crate::gesture::{GestureMachine, GestureState};
use crate::item::{display_sequence, Item};
use crate::pointer::PointerInput;
use crate::track::{TrackRing, VisibleWindow};
use std::time::Duration;

/// Cursor affordance shown over the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

impl Cursor {
    #[inline]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// What the host should do after feeding one input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputOutcome {
    /// New raw offset, if the input moved the track.
    pub offset: Option<f64>,
    /// Suppress the browser's default scroll/selection handling.
    pub prevent_default: bool,
    /// New cursor affordance, if it changed.
    pub cursor: Option<Cursor>,
}

pub struct Carousel {
    items: Vec<Item>,
    display: Vec<Item>,
    ring: TrackRing,
    gesture: GestureMachine,
    driver: AutoScrollDriver,
    offset: f64,
    torn_down: bool,
}

impl Carousel {
    pub fn new(items: Vec<Item>, config: &CarouselConfig) -> Self {
        let display = display_sequence(&items);
        let ring = TrackRing::new(items.len(), config.viewport_fallback_width);
        Self {
            items,
            display,
            ring,
            gesture: GestureMachine::new(config.drag_sensitivity),
            driver: AutoScrollDriver::new(config.auto_scroll_duration),
            offset: 0.0,
            torn_down: false,
        }
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items in track order: the list followed by its duplicate.
    #[inline]
    pub fn display_sequence(&self) -> &[Item] {
        &self.display
    }

    #[inline]
    pub fn ring(&self) -> &TrackRing {
        &self.ring
    }

    /// Raw scroll offset as last written.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Offset mapped onto the ring; this is what gets rendered.
    #[inline]
    pub fn render_offset(&self) -> f64 {
        self.ring.wrap(self.offset)
    }

    #[inline]
    pub fn state(&self) -> GestureState {
        self.gesture.state()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[inline]
    pub fn driver_state(&self) -> DriverState {
        self.driver.state()
    }

    #[inline]
    pub fn is_auto_scrolling(&self) -> bool {
        self.driver.is_running()
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn cursor(&self) -> Cursor {
        if self.is_dragging() {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        }
    }

    /// Arm the driver from the current offset. No-op while dragging or after
    /// teardown, and when already running.
    pub fn start_auto_scroll(&mut self) {
        if self.torn_down || self.is_dragging() || self.driver.is_running() {
            return;
        }
        self.driver.start(self.offset, &self.ring);
        log::debug!("[carousel] auto-scroll armed at {:.1}", self.render_offset());
    }

    /// Cancel the driver if it is running, keeping the current offset.
    pub fn stop_auto_scroll(&mut self) {
        if self.driver.stop() {
            log::debug!("[carousel] auto-scroll stopped at {:.1}", self.render_offset());
        }
    }

    pub fn on_gesture_start(&mut self, pointer_x: f64) -> InputOutcome {
        if self.torn_down {
            return InputOutcome::default();
        }
        self.stop_auto_scroll();
        if self.gesture.begin(pointer_x, self.offset) {
            log::debug!("[carousel] drag begin x={:.1}", pointer_x);
        }
        InputOutcome {
            cursor: Some(Cursor::Grabbing),
            ..InputOutcome::default()
        }
    }

    pub fn on_gesture_move(&mut self, pointer_x: f64) -> InputOutcome {
        if self.torn_down {
            return InputOutcome::default();
        }
        match self.gesture.drag_to(pointer_x) {
            Some(offset) => {
                self.offset = offset;
                InputOutcome {
                    offset: Some(offset),
                    prevent_default: true,
                    cursor: None,
                }
            }
            None => InputOutcome::default(),
        }
    }

    pub fn on_gesture_end(&mut self) -> InputOutcome {
        if self.gesture.end() {
            log::debug!("[carousel] drag end at {:.1}", self.offset);
            InputOutcome {
                cursor: Some(Cursor::Grab),
                ..InputOutcome::default()
            }
        } else {
            InputOutcome::default()
        }
    }

    /// Feed one device-independent input.
    pub fn handle(&mut self, input: PointerInput) -> InputOutcome {
        match input {
            PointerInput::Down { x } => self.on_gesture_start(x),
            PointerInput::Move { x } => self.on_gesture_move(x),
            PointerInput::Up | PointerInput::Leave | PointerInput::Cancel => {
                self.on_gesture_end()
            }
        }
    }

    /// Idle check plus one driver step. Returns the new offset if the driver
    /// moved the track.
    pub fn tick(&mut self, dt: Duration) -> Option<f64> {
        if self.torn_down || self.is_dragging() {
            return None;
        }
        self.start_auto_scroll();
        let offset = self.driver.tick(dt, &self.ring)?;
        self.offset = offset;
        Some(offset)
    }

    /// Accept a freshly measured cycle width. Returns true if it changed.
    pub fn set_cycle_width(&mut self, width: f64) -> bool {
        let changed = self.ring.set_cycle_width(width);
        if changed {
            log::debug!("[carousel] cycle width {:.1}px", width);
        }
        changed
    }

    /// Source item at the viewport's left edge.
    pub fn leading_index(&self) -> usize {
        self.ring.index_at(self.offset)
    }

    pub fn visible_window(&self, viewport_width: f64) -> VisibleWindow {
        self.ring.visible_window(self.offset, viewport_width)
    }

    /// Release the driver and drop any gesture. Nothing mutates the offset
    /// afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.driver.release();
        self.gesture.end();
        self.torn_down = true;
        log::debug!("[carousel] torn down");
    }
}
