//! Mount/unmount helpers: shared one-time initialization and per-mount
//! effect registration with guaranteed cleanup.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Lazily created, shared instance of `T`.
///
/// Every mount calls `acquire`; the first creates the instance and later ones
/// share it. The instance is dropped when the last handle goes away, and the
/// next `acquire` initializes a fresh one. Intended to live in a
/// `thread_local!`.
pub struct PluginSlot<T> {
    current: RefCell<Weak<T>>,
    inits: Cell<usize>,
}

impl<T> Default for PluginSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PluginSlot<T> {
    pub fn new() -> Self {
        Self {
            current: RefCell::new(Weak::new()),
            inits: Cell::new(0),
        }
    }

    pub fn acquire<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<Rc<T>, E> {
        if let Some(live) = self.current.borrow().upgrade() {
            return Ok(live);
        }
        let fresh = Rc::new(init()?);
        *self.current.borrow_mut() = Rc::downgrade(&fresh);
        self.inits.set(self.inits.get() + 1);
        Ok(fresh)
    }

    /// Whether an instance is currently alive.
    pub fn is_live(&self) -> bool {
        self.current.borrow().strong_count() > 0
    }

    /// How many times `init` has run.
    #[inline]
    pub fn initializations(&self) -> usize {
        self.inits.get()
    }
}

type Cleanup = Box<dyn FnOnce()>;

/// Effects registered for one mount. Each key registers at most once;
/// cleanups run in reverse registration order when the scope is dropped.
#[derive(Default)]
pub struct EffectScope {
    keys: Vec<&'static str>,
    cleanups: Vec<Cleanup>,
}

impl EffectScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `effect` unless `key` is already registered in this scope.
    /// Returns true if the effect ran.
    pub fn register<F, C>(&mut self, key: &'static str, effect: F) -> bool
    where
        F: FnOnce() -> Option<C>,
        C: FnOnce() + 'static,
    {
        if self.keys.contains(&key) {
            log::debug!("[mount] effect {key} already registered");
            return false;
        }
        self.keys.push(key);
        if let Some(cleanup) = effect() {
            self.cleanups.push(Box::new(cleanup));
        }
        true
    }

    /// Keep `value` alive until the scope drops.
    pub fn hold<T: 'static>(&mut self, key: &'static str, value: T) -> bool {
        self.register(key, move || Some(move || drop(value)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Drop for EffectScope {
    fn drop(&mut self) {
        while let Some(cleanup) = self.cleanups.pop() {
            cleanup();
        }
    }
}
