// Host-side tests for mount lifecycle helpers and the viewport contract.

use reel_core::{
    EffectScope, PluginSlot, Reveal, TriggerGate, TriggerSpec, ViewportEntry, ViewportObserver,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct Service {
    dropped: Rc<Cell<bool>>,
}

impl Drop for Service {
    fn drop(&mut self) {
        self.dropped.set(true);
    }
}

#[test]
fn plugin_initializes_once_per_live_period() {
    let slot: PluginSlot<Service> = PluginSlot::new();
    let dropped = Rc::new(Cell::new(false));

    let make = || {
        Ok::<_, ()>(Service {
            dropped: dropped.clone(),
        })
    };
    let a = slot.acquire(make).unwrap();
    let b = slot.acquire(make).unwrap();
    assert!(Rc::ptr_eq(&a, &b));
    assert_eq!(slot.initializations(), 1);

    drop(a);
    assert!(slot.is_live());
    drop(b);
    assert!(!slot.is_live());
    assert!(dropped.get());

    let _c = slot.acquire(make).unwrap();
    assert_eq!(slot.initializations(), 2);
}

#[test]
fn plugin_init_failure_is_not_cached() {
    let slot: PluginSlot<u8> = PluginSlot::new();
    assert_eq!(slot.acquire(|| Err("unsupported")), Err("unsupported"));
    assert_eq!(slot.initializations(), 0);
    assert_eq!(*slot.acquire(|| Ok::<_, ()>(7)).unwrap(), 7);
}

#[test]
fn effect_scope_registers_each_key_once() {
    let runs = Rc::new(Cell::new(0));
    let mut scope = EffectScope::new();
    for _ in 0..3 {
        let runs = runs.clone();
        scope.register("reveal:title", move || {
            runs.set(runs.get() + 1);
            None::<fn()>
        });
    }
    assert_eq!(runs.get(), 1);
    assert_eq!(scope.len(), 1);
}

#[test]
fn effect_scope_cleans_up_in_reverse() {
    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let mut scope = EffectScope::new();
        for key in ["pointer", "viewport", "frame"] {
            let log = log.clone();
            scope.register(key, move || Some(move || log.borrow_mut().push(key)));
        }
        assert!(log.borrow().is_empty());
    }
    assert_eq!(*log.borrow(), vec!["frame", "viewport", "pointer"]);
}

#[test]
fn effect_scope_hold_drops_value_on_unmount() {
    let service_dropped = Rc::new(Cell::new(false));
    let mut scope = EffectScope::new();
    scope.hold(
        "service",
        Service {
            dropped: service_dropped.clone(),
        },
    );
    assert!(!service_dropped.get());
    drop(scope);
    assert!(service_dropped.get());
}

/// In-memory observer: the test drives observations by hand.
#[derive(Default)]
struct FakeViewport {
    targets: RefCell<Vec<(u32, TriggerGate, Box<dyn FnMut()>)>>,
}

impl FakeViewport {
    fn observe(&self, target: u32, entry: ViewportEntry) {
        for (t, gate, cb) in self.targets.borrow_mut().iter_mut() {
            if *t == target && gate.admit(entry) {
                cb();
            }
        }
    }
}

impl ViewportObserver for FakeViewport {
    type Target = u32;
    type Registration = u32;
    type Error = ();

    fn register(
        &self,
        target: &u32,
        trigger: &TriggerSpec,
        callback: Box<dyn FnMut()>,
    ) -> Result<u32, ()> {
        self.targets
            .borrow_mut()
            .push((*target, TriggerGate::new(trigger.mode), callback));
        Ok(*target)
    }
}

#[test]
fn reveal_callback_fires_once_per_mount() {
    let viewport = FakeViewport::default();
    let fired = Rc::new(Cell::new(0));
    let trigger = Reveal::cards().unwrap().trigger;

    let mut scope = EffectScope::new();
    for _ in 0..2 {
        let fired = fired.clone();
        let vp = &viewport;
        scope.register("reveal:cards", move || {
            let _reg = vp
                .register(&1, &trigger, Box::new(move || fired.set(fired.get() + 1)))
                .ok()?;
            None::<fn()>
        });
    }
    assert_eq!(viewport.targets.borrow().len(), 1);

    let seen = ViewportEntry { is_intersecting: true };
    viewport.observe(1, seen);
    viewport.observe(1, ViewportEntry { is_intersecting: false });
    viewport.observe(1, seen);
    assert_eq!(fired.get(), 1);
}
