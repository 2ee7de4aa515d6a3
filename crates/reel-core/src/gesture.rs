//! Two-state gesture machine: Auto and Dragging.

/// Anchor recorded when a gesture begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub anchor_pointer_x: f64,
    pub anchor_scroll_offset: f64,
}

impl DragSession {
    /// Offset for a pointer at `pointer_x`, amplified by `sensitivity`.
    #[inline]
    pub fn offset_for(&self, pointer_x: f64, sensitivity: f64) -> f64 {
        self.anchor_scroll_offset - (pointer_x - self.anchor_pointer_x) * sensitivity
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    Auto,
    Dragging(DragSession),
}

#[derive(Clone, Debug)]
pub struct GestureMachine {
    state: GestureState,
    sensitivity: f64,
}

impl GestureMachine {
    pub fn new(sensitivity: f64) -> Self {
        Self {
            state: GestureState::Auto,
            sensitivity,
        }
    }

    #[inline]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    #[inline]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn session(&self) -> Option<DragSession> {
        match self.state {
            GestureState::Dragging(s) => Some(s),
            GestureState::Auto => None,
        }
    }

    /// Enter Dragging anchored at `pointer_x` / `current_offset`.
    ///
    /// A second begin without an end re-anchors the session. Returns true
    /// only for the Auto -> Dragging transition.
    pub fn begin(&mut self, pointer_x: f64, current_offset: f64) -> bool {
        let was_auto = self.state == GestureState::Auto;
        self.state = GestureState::Dragging(DragSession {
            anchor_pointer_x: pointer_x,
            anchor_scroll_offset: current_offset,
        });
        was_auto
    }

    /// New offset for a move to `pointer_x`, or None outside a gesture.
    pub fn drag_to(&self, pointer_x: f64) -> Option<f64> {
        self.session().map(|s| s.offset_for(pointer_x, self.sensitivity))
    }

    /// Return to Auto. Returns true if a gesture was in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = GestureState::Auto;
        was_dragging
    }
}
