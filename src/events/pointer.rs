use crate::dom;
use crate::events::Listener;
use crate::input;
use reel_core::{Carousel, PointerBackend, PointerSource};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct MouseBackend;

impl PointerBackend for MouseBackend {
    type Event = web::MouseEvent;

    fn source(&self) -> PointerSource {
        PointerSource::Mouse
    }

    fn page_x(&self, ev: &web::MouseEvent) -> Option<f64> {
        Some(ev.page_x() as f64)
    }
}

pub struct TouchBackend;

impl PointerBackend for TouchBackend {
    type Event = web::TouchEvent;

    fn source(&self) -> PointerSource {
        PointerSource::Touch
    }

    fn page_x(&self, ev: &web::TouchEvent) -> Option<f64> {
        ev.touches().get(0).map(|t| t.page_x() as f64)
    }
}

/// Attach both backends to the track. Handlers hold only a weak reference to
/// the carousel and do nothing once it is gone.
pub fn wire_pointer_handlers(
    track: &web::HtmlElement,
    carousel: Weak<RefCell<Carousel>>,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = wire_backend(MouseBackend, track, carousel.clone())?;
    listeners.extend(wire_backend(TouchBackend, track, carousel)?);
    Ok(listeners)
}

fn wire_backend<B>(
    backend: B,
    track: &web::HtmlElement,
    carousel: Weak<RefCell<Carousel>>,
) -> anyhow::Result<Vec<Listener>>
where
    B: PointerBackend + 'static,
    B::Event: JsCast,
{
    let backend = Rc::new(backend);
    let source = backend.source();
    let mut out = Vec::with_capacity(source.events().len());
    for &(name, _) in source.events() {
        let backend = backend.clone();
        let carousel = carousel.clone();
        let track_for_handler = track.clone();
        let listener = Listener::new(track, name, false, move |ev: web::Event| {
            let Some(carousel) = carousel.upgrade() else {
                return;
            };
            if !track_for_handler.is_connected() {
                return;
            }
            let Some(native) = ev.dyn_ref::<B::Event>() else {
                return;
            };
            let origin = track_for_handler.offset_left() as f64;
            let Some(pointer) = backend.decode(name, native, origin) else {
                return;
            };
            let (outcome, render_offset) = {
                let mut c = carousel.borrow_mut();
                let outcome = c.handle(pointer);
                (outcome, c.render_offset())
            };
            if outcome.prevent_default {
                ev.prevent_default();
            }
            if let Some(cursor) = outcome.cursor {
                dom::set_style(&track_for_handler, "cursor", cursor.as_css());
            }
            if outcome.offset.is_some() {
                dom::set_style(
                    &track_for_handler,
                    "transform",
                    &input::translate_x_css(render_offset),
                );
            }
        })?;
        out.push(listener);
    }
    log::debug!("[carousel] wired {:?} backend ({} events)", source, out.len());
    Ok(out)
}
