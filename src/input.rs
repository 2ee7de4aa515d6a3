// Pure helpers shared by the pointer handlers and the frame loop.

/// CSS transform for a horizontal track offset.
#[inline]
pub fn translate_x_css(offset: f64) -> String {
    format!("translate3d({:.2}px, 0px, 0px)", offset)
}

/// Distance between the first card and its duplicate, i.e. one full cycle.
/// None until layout has placed the duplicate to the right of the original.
#[inline]
pub fn measured_cycle_width(first_left: f64, duplicate_left: f64) -> Option<f64> {
    let w = duplicate_left - first_left;
    (w.is_finite() && w > 0.0).then_some(w)
}

#[inline]
pub fn seam_drift_exceeds(drift: f64, tolerance: f64) -> bool {
    drift.is_finite() && drift.abs() > tolerance
}

/// Index of the duplicate of card 0 in a doubled sequence of `display_len`.
#[inline]
pub fn duplicate_index(display_len: usize) -> Option<usize> {
    let n = display_len / 2;
    (n > 0).then_some(n)
}

/// Attribute value listing the source items currently on screen, in order.
pub fn visible_items_attr(indices: impl IntoIterator<Item = usize>) -> String {
    let mut out = String::new();
    for (n, i) in indices.into_iter().enumerate() {
        if n > 0 {
            out.push(' ');
        }
        out.push_str(&i.to_string());
    }
    out
}
