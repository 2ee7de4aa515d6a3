//! Circular track geometry.
//!
//! The track is modelled as a ring of `len` equally spaced slots whose total
//! circumference is the cycle width: the distance between the first card and
//! its duplicate. Any scroll offset maps onto the ring with `mod cycle_width`,
//! so no seam has to line up for the loop to stay continuous.

use smallvec::SmallVec;

/// A slot of the ring that intersects the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleSlot {
    /// Index into the source item list.
    pub item_index: usize,
    /// Left edge relative to the viewport's left edge, in px.
    pub x: f64,
}

pub type VisibleWindow = SmallVec<[VisibleSlot; 8]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackRing {
    len: usize,
    cycle_width: f64,
}

impl TrackRing {
    pub fn new(len: usize, cycle_width: f64) -> Self {
        let mut ring = Self {
            len,
            cycle_width: 0.0,
        };
        ring.set_cycle_width(cycle_width);
        ring
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn cycle_width(&self) -> f64 {
        self.cycle_width
    }

    /// Width of one card plus its gap.
    #[inline]
    pub fn slot_width(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            self.cycle_width / self.len as f64
        }
    }

    /// Update the measured cycle width. Non-finite or non-positive
    /// measurements (detached or hidden element) are ignored, as is any width
    /// for an empty ring. Returns true if the width changed.
    pub fn set_cycle_width(&mut self, width: f64) -> bool {
        if self.len == 0 || !width.is_finite() || width <= 0.0 || width == self.cycle_width {
            return false;
        }
        self.cycle_width = width;
        true
    }

    /// Map any offset onto the ring, in `(-cycle_width, 0]`.
    pub fn wrap(&self, offset: f64) -> f64 {
        if self.cycle_width <= 0.0 || !offset.is_finite() {
            return 0.0;
        }
        let r = (-offset).rem_euclid(self.cycle_width);
        if r == 0.0 || r >= self.cycle_width {
            0.0
        } else {
            -r
        }
    }

    /// Distance travelled into the current cycle, in `[0, cycle_width)`.
    #[inline]
    fn position(&self, offset: f64) -> f64 {
        -self.wrap(offset)
    }

    /// Item whose slot starts at or before the viewport's left edge.
    pub fn index_at(&self, offset: f64) -> usize {
        let slot = self.slot_width();
        if slot <= 0.0 {
            return 0;
        }
        ((self.position(offset) / slot).floor() as usize) % self.len
    }

    /// Slots intersecting a viewport `viewport_width` px wide.
    ///
    /// A viewport wider than one cycle shows every item at least once; the
    /// window stops after `len` slots so each item appears exactly once.
    pub fn visible_window(&self, offset: f64, viewport_width: f64) -> VisibleWindow {
        let mut out = VisibleWindow::new();
        let slot = self.slot_width();
        if slot <= 0.0 || !viewport_width.is_finite() || viewport_width <= 0.0 {
            return out;
        }
        let pos = self.position(offset);
        let first = (pos / slot).floor() as usize;
        let mut x = first as f64 * slot - pos;
        let cap = self.len.min(((viewport_width / slot).ceil() as usize).saturating_add(1));
        for k in first..first + cap {
            if x >= viewport_width {
                break;
            }
            out.push(VisibleSlot {
                item_index: k % self.len,
                x,
            });
            x += slot;
        }
        out
    }

    /// Difference between half of a doubled track's width and the ring's
    /// cycle width. Non-zero means a half-width loop would visibly jump.
    #[inline]
    pub fn seam_drift(&self, doubled_track_width: f64) -> f64 {
        doubled_track_width / 2.0 - self.cycle_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_stays_in_half_open_range() {
        let ring = TrackRing::new(8, 800.0);
        assert_eq!(ring.wrap(0.0), 0.0);
        assert_eq!(ring.wrap(-800.0), 0.0);
        assert_eq!(ring.wrap(-10.0), -10.0);
        assert_eq!(ring.wrap(10.0), -790.0);
        assert_eq!(ring.wrap(-1610.0), -10.0);
    }

    #[test]
    fn index_wraps_modulo_len() {
        let ring = TrackRing::new(4, 400.0);
        assert_eq!(ring.index_at(0.0), 0);
        assert_eq!(ring.index_at(-150.0), 1);
        assert_eq!(ring.index_at(-399.0), 3);
        assert_eq!(ring.index_at(-400.0), 0);
        assert_eq!(ring.index_at(50.0), 3);
    }

    #[test]
    fn visible_window_covers_viewport() {
        let ring = TrackRing::new(4, 400.0);
        let win = ring.visible_window(-150.0, 250.0);
        let idx: Vec<usize> = win.iter().map(|s| s.item_index).collect();
        assert_eq!(idx, vec![1, 2, 3]);
        assert_eq!(win[0].x, -50.0);
        assert_eq!(win[2].x, 150.0);
    }

    #[test]
    fn visible_window_never_exceeds_one_cycle() {
        let ring = TrackRing::new(4, 400.0);
        let win = ring.visible_window(-150.0, 1e7);
        let idx: Vec<usize> = win.iter().map(|s| s.item_index).collect();
        assert_eq!(idx, vec![1, 2, 3, 0]);

        let wide = TrackRing::new(100_000, 1e7);
        assert_eq!(wide.visible_window(0.0, 1e7).len(), 100_000);
        assert_eq!(wide.visible_window(-50.0, 1000.0).len(), 11);
        assert_eq!(ring.visible_window(0.0, f64::MAX).len(), 4);
    }

    #[test]
    fn unmeasured_ring_is_inert() {
        let mut ring = TrackRing::new(4, 0.0);
        assert_eq!(ring.wrap(-123.0), 0.0);
        assert!(ring.visible_window(0.0, 500.0).is_empty());
        assert!(!ring.set_cycle_width(f64::NAN));
        assert!(ring.set_cycle_width(400.0));
        assert_eq!(ring.slot_width(), 100.0);
    }
}
