// Host-side tests for the pointer abstraction: both devices must drive the
// carousel identically.

use reel_core::catalog::showcase_items;
use reel_core::{
    local_x, Carousel, CarouselConfig, PointerBackend, PointerInput, PointerPhase, PointerSource,
};

/// Stand-in for a mouse event: always carries a position.
struct FakeMouse;
/// Stand-in for a touch event: the list of active contacts' page x.
struct FakeTouch;

impl PointerBackend for FakeMouse {
    type Event = f64;
    fn source(&self) -> PointerSource {
        PointerSource::Mouse
    }
    fn page_x(&self, ev: &f64) -> Option<f64> {
        Some(*ev)
    }
}

impl PointerBackend for FakeTouch {
    type Event = Vec<f64>;
    fn source(&self) -> PointerSource {
        PointerSource::Touch
    }
    fn page_x(&self, ev: &Vec<f64>) -> Option<f64> {
        ev.first().copied()
    }
}

#[test]
fn event_tables_map_to_phases() {
    assert_eq!(PointerSource::Mouse.phase_for("mousedown"), Some(PointerPhase::Down));
    assert_eq!(PointerSource::Mouse.phase_for("mouseleave"), Some(PointerPhase::Leave));
    assert_eq!(PointerSource::Touch.phase_for("touchmove"), Some(PointerPhase::Move));
    assert_eq!(PointerSource::Touch.phase_for("touchcancel"), Some(PointerPhase::Cancel));
    assert_eq!(PointerSource::Mouse.phase_for("touchstart"), None);
    assert_eq!(PointerSource::Touch.phase_for("click"), None);
}

#[test]
fn decode_converts_to_track_space() {
    let origin = 40.0;
    assert_eq!(
        FakeMouse.decode("mousedown", &140.0, origin),
        Some(PointerInput::Down { x: 100.0 })
    );
    assert_eq!(
        FakeTouch.decode("touchmove", &vec![90.0, 500.0], origin),
        Some(PointerInput::Move { x: 50.0 })
    );
    assert_eq!(local_x(140.0, origin), 100.0);
}

#[test]
fn touch_end_without_contacts_still_releases() {
    assert_eq!(FakeTouch.decode("touchend", &vec![], 0.0), Some(PointerInput::Up));
    assert_eq!(FakeTouch.decode("touchstart", &vec![], 0.0), None);
}

#[test]
fn mouse_and_touch_produce_identical_offsets() {
    let origin = 12.0;
    let path = [200.0, 180.0, 150.0, 230.0];

    let mut by_mouse = Carousel::new(showcase_items(), &CarouselConfig::default());
    let mut by_touch = Carousel::new(showcase_items(), &CarouselConfig::default());

    let down_m = FakeMouse.decode("mousedown", &path[0], origin).unwrap();
    let down_t = FakeTouch.decode("touchstart", &vec![path[0]], origin).unwrap();
    by_mouse.handle(down_m);
    by_touch.handle(down_t);

    for &px in &path[1..] {
        let m = FakeMouse.decode("mousemove", &px, origin).unwrap();
        let t = FakeTouch.decode("touchmove", &vec![px], origin).unwrap();
        let om = by_mouse.handle(m);
        let ot = by_touch.handle(t);
        assert_eq!(om, ot);
        assert_eq!(by_mouse.offset(), by_touch.offset());
    }
    // 230 - 200 = 30px right, doubled
    assert_eq!(by_mouse.offset(), -60.0);

    by_mouse.handle(FakeMouse.decode("mouseleave", &0.0, origin).unwrap());
    by_touch.handle(FakeTouch.decode("touchcancel", &vec![], origin).unwrap());
    assert!(!by_mouse.is_dragging());
    assert!(!by_touch.is_dragging());
}
