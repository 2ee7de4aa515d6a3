//! Mounting the showcase section: markup, carousel wiring, reveals and the
//! frame loop, all owned by one `ShowcaseMount`.

use crate::constants::{LEADING_ATTR, SEAM_DRIFT_WARN_PX, VISIBLE_ATTR};
use crate::dom::{self, SectionRefs};
use crate::events::{wire_pointer_handlers, Listener};
use crate::frame::FrameLoop;
use crate::input;
use crate::observer::IntersectionViewport;
use crate::reveal::RevealGroup;
use reel_core::catalog::showcase_items;
use reel_core::{Carousel, CarouselConfig, EffectScope, PluginSlot, Reveal, ViewportObserver};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static VIEWPORT: PluginSlot<IntersectionViewport> = PluginSlot::new();
}

type Board = Rc<RefCell<Vec<RevealGroup>>>;

/// A mounted section. Dropping it tears the carousel down first, then
/// removes every listener, observer and frame request it registered.
pub struct ShowcaseMount {
    carousel: Rc<RefCell<Carousel>>,
    scope: EffectScope,
}

impl Drop for ShowcaseMount {
    fn drop(&mut self) {
        self.carousel.borrow_mut().teardown();
        log::info!("[mount] showcase unmounted ({} effects)", self.scope.len());
    }
}

fn read_config(host: &web::HtmlElement) -> CarouselConfig {
    match CarouselConfig::from_attributes(|name| host.get_attribute(name)) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[mount] {e}; using defaults");
            CarouselConfig::default()
        }
    }
}

/// Measure one cycle as the distance from card 0 to its duplicate.
fn measure(carousel: &RefCell<Carousel>, section: &SectionRefs) {
    let Some(dup) = input::duplicate_index(section.cards.len()) else {
        return;
    };
    let (Some(first), Some(copy)) = (section.cards.first(), section.cards.get(dup)) else {
        return;
    };
    let Some(cycle) =
        input::measured_cycle_width(first.offset_left() as f64, copy.offset_left() as f64)
    else {
        log::debug!("[carousel] track not laid out yet");
        return;
    };
    let mut c = carousel.borrow_mut();
    c.set_cycle_width(cycle);
    let drift = c.ring().seam_drift(section.track.scroll_width() as f64);
    if input::seam_drift_exceeds(drift, SEAM_DRIFT_WARN_PX) {
        log::warn!(
            "[carousel] half-width seam off by {:.1}px; looping on measured cycle {:.1}px",
            drift,
            cycle
        );
    }
}

fn wire_reveals(
    scope: &mut EffectScope,
    section: &SectionRefs,
    board: &Board,
) -> anyhow::Result<()> {
    let title = RevealGroup::new("title", Reveal::title()?, vec![section.title.clone()]);
    let cards = RevealGroup::new("cards", Reveal::cards()?, section.cards.clone());
    let title_target: web::Element = section.title.clone().unchecked_into();
    let cards_target: web::Element = section.container.clone().unchecked_into();

    let viewport = match VIEWPORT.with(|slot| slot.acquire(IntersectionViewport::install)) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[reveal] {e}; showing content without reveals");
            title.show_all();
            cards.show_all();
            return Ok(());
        }
    };

    scope.hold("viewport", viewport.clone());
    let mut groups = board.borrow_mut();
    let wiring = [
        ("reveal:title", title, title_target),
        ("reveal:cards", cards, cards_target),
    ];
    for (key, group, target) in wiring {
        let index = groups.len();
        let trigger = group.reveal().trigger;
        group.prime();
        groups.push(group);

        let weak: Weak<RefCell<Vec<RevealGroup>>> = Rc::downgrade(board);
        let registration = viewport.register(
            &target,
            &trigger,
            Box::new(move || {
                if let Some(board) = weak.upgrade() {
                    if let Some(g) = board.borrow_mut().get_mut(index) {
                        g.trigger();
                    }
                }
            }),
        )?;
        scope.hold(key, registration);
    }
    Ok(())
}

fn wire_frame_loop(
    scope: &mut EffectScope,
    carousel: Weak<RefCell<Carousel>>,
    section: Rc<SectionRefs>,
    board: Board,
) -> anyhow::Result<()> {
    let mut leading: Option<usize> = None;
    let mut visible = String::new();
    let frame_loop = FrameLoop::start(move |dt| {
        if let Some(carousel) = carousel.upgrade() {
            let mut c = carousel.borrow_mut();
            let track = &section.track;
            if c.tick(dt).is_some() {
                dom::set_style(track, "transform", &input::translate_x_css(c.render_offset()));
            }
            let now = c.leading_index();
            if leading != Some(now) {
                leading = Some(now);
                _ = track.set_attribute(LEADING_ATTR, &now.to_string());
            }
            let window = c.visible_window(section.container.client_width() as f64);
            let on_screen = input::visible_items_attr(window.iter().map(|s| s.item_index));
            if on_screen != visible {
                _ = track.set_attribute(VISIBLE_ATTR, &on_screen);
                visible = on_screen;
            }
        }
        for group in board.borrow_mut().iter_mut() {
            group.advance(dt);
        }
    })?;
    scope.hold("frame", frame_loop);
    Ok(())
}

fn wire_resize(
    scope: &mut EffectScope,
    carousel: Weak<RefCell<Carousel>>,
    section: Rc<SectionRefs>,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let listener = Listener::new(&window, "resize", true, move |_ev| {
        if let Some(c) = carousel.upgrade() {
            measure(&c, &section);
        }
    })?;
    scope.hold("resize", listener);
    Ok(())
}

/// Render the section into `#host_id` and start it.
pub fn mount(document: &web::Document, host_id: &str) -> anyhow::Result<ShowcaseMount> {
    let host: web::HtmlElement = document
        .get_element_by_id(host_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{host_id}"))?
        .dyn_into()
        .map_err(|e| dom::js_err(e.into()))?;

    let config = read_config(&host);
    let carousel = Rc::new(RefCell::new(Carousel::new(showcase_items(), &config)));
    let section = Rc::new(dom::build_section(
        document,
        &host,
        carousel.borrow().display_sequence(),
    )?);
    measure(&carousel, &section);

    let mut scope = EffectScope::new();
    let board: Board = Rc::new(RefCell::new(Vec::new()));

    let pointer = wire_pointer_handlers(&section.track, Rc::downgrade(&carousel))?;
    scope.hold("pointer", pointer);
    wire_reveals(&mut scope, &section, &board)?;
    wire_frame_loop(&mut scope, Rc::downgrade(&carousel), section.clone(), board)?;
    wire_resize(&mut scope, Rc::downgrade(&carousel), section)?;

    {
        let c = carousel.borrow();
        log::info!(
            "[mount] showcase mounted: {} items, cycle {:.1}px, {:.0}s per cycle",
            c.items().len(),
            c.ring().cycle_width(),
            config.auto_scroll_duration.as_secs_f64()
        );
    }
    Ok(ShowcaseMount { carousel, scope })
}
