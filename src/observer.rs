//! `IntersectionObserver` behind the core viewport contract.

use crate::dom::js_err;
use reel_core::{TriggerGate, TriggerSpec, ViewportEntry, ViewportObserver};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Process-wide scroll-trigger service. One instance is shared by every
/// mounted section; see `lib.rs` for the slot that owns it.
pub struct IntersectionViewport {
    live: Rc<Cell<usize>>,
}

impl IntersectionViewport {
    /// Fails when the browser has no `IntersectionObserver`.
    pub fn install() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .map_err(js_err)?;
        if !supported {
            anyhow::bail!("IntersectionObserver unavailable");
        }
        log::info!("[reveal] viewport service installed");
        Ok(Self {
            live: Rc::new(Cell::new(0)),
        })
    }
}

impl Drop for IntersectionViewport {
    fn drop(&mut self) {
        log::info!("[reveal] viewport service released");
    }
}

/// Observation of one element. Disconnects when dropped.
pub struct ObserverRegistration {
    observer: web::IntersectionObserver,
    live: Rc<Cell<usize>>,
    _callback: ObserverCallback,
}

impl Drop for ObserverRegistration {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.live.set(self.live.get().saturating_sub(1));
        log::debug!("[reveal] observer disconnected, {} left", self.live.get());
    }
}

impl ViewportObserver for IntersectionViewport {
    type Target = web::Element;
    type Registration = ObserverRegistration;
    type Error = anyhow::Error;

    fn register(
        &self,
        target: &web::Element,
        trigger: &TriggerSpec,
        mut callback: Box<dyn FnMut()>,
    ) -> anyhow::Result<ObserverRegistration> {
        let mut gate = TriggerGate::new(trigger.mode);
        let on_entries = move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let seen = ViewportEntry {
                    is_intersecting: entry.is_intersecting(),
                };
                if gate.admit(seen) {
                    callback();
                }
                if gate.is_spent() {
                    observer.disconnect();
                    break;
                }
            }
        };
        let closure: ObserverCallback = Closure::wrap(
            Box::new(on_entries) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>
        );

        let init = web::IntersectionObserverInit::new();
        init.set_root_margin(&trigger.start.root_margin());
        init.set_threshold(&JsValue::from_f64(trigger.start.threshold()));
        let observer =
            web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .map_err(js_err)?;
        observer.observe(target);
        self.live.set(self.live.get() + 1);

        Ok(ObserverRegistration {
            observer,
            live: self.live.clone(),
            _callback: closure,
        })
    }
}
