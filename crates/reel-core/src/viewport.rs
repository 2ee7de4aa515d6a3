//! Contract for "run this when an element enters the viewport".

use crate::reveal::{TriggerMode, TriggerSpec};

/// One observation reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportEntry {
    pub is_intersecting: bool,
}

/// Decides which observations fire the callback.
///
/// `Once` admits the first entry only; `EveryEntry` admits each transition
/// from outside to inside.
#[derive(Clone, Debug)]
pub struct TriggerGate {
    mode: TriggerMode,
    inside: bool,
    fired: u32,
}

impl TriggerGate {
    pub fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            inside: false,
            fired: 0,
        }
    }

    pub fn admit(&mut self, entry: ViewportEntry) -> bool {
        let entered = entry.is_intersecting && !self.inside;
        self.inside = entry.is_intersecting;
        if !entered || self.is_spent() {
            return false;
        }
        self.fired += 1;
        true
    }

    #[inline]
    pub fn fired(&self) -> u32 {
        self.fired
    }

    /// No further observation can fire; the host may stop observing.
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.mode == TriggerMode::Once && self.fired > 0
    }
}

/// Scroll-position observation service.
///
/// `register` arranges for `callback` to run each time the gate built from
/// `trigger.mode` admits an observation of `target`. Dropping the returned
/// registration stops observing.
pub trait ViewportObserver {
    type Target;
    type Registration;
    type Error;

    fn register(
        &self,
        target: &Self::Target,
        trigger: &TriggerSpec,
        callback: Box<dyn FnMut()>,
    ) -> Result<Self::Registration, Self::Error>;
}
