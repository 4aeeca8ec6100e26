use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// A broadcast channel for host window resize notifications.
///
/// One hub stands for one host window; clones share the same listener set. Every mounted
/// list holds exactly one [`ResizeSubscription`] and polls it, so no state is shared
/// between lists beyond the listener registry itself.
///
/// The hub is single-threaded (`!Send`), matching the host's UI loop.
#[derive(Clone, Debug, Default)]
pub struct ResizeHub {
    inner: Rc<RefCell<HubInner>>,
}

#[derive(Debug, Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<Listener>,
}

#[derive(Debug)]
struct Listener {
    id: u64,
    pending: Rc<Cell<bool>>,
}

impl ResizeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listener. The returned guard deregisters it when dropped.
    pub fn subscribe(&self) -> ResizeSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id = inner.next_id.wrapping_add(1);

        let pending = Rc::new(Cell::new(false));
        inner.listeners.push(Listener {
            id,
            pending: Rc::clone(&pending),
        });
        vdebug!(id, listeners = inner.listeners.len(), "ResizeHub::subscribe");

        ResizeSubscription {
            id,
            pending,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Marks every live subscription as having a pending resize.
    pub fn notify_resize(&self) {
        let inner = self.inner.borrow();
        vtrace!(listeners = inner.listeners.len(), "ResizeHub::notify_resize");
        for listener in &inner.listeners {
            listener.pending.set(true);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// A registered resize listener.
///
/// Dropping the guard removes the listener from its hub; this happens exactly once,
/// whether the owner is unmounted normally or unwinds out of a failed mount.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    pending: Rc<Cell<bool>>,
    hub: Weak<RefCell<HubInner>>,
}

impl ResizeSubscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Returns whether a resize was broadcast since the last call, and clears the flag.
    pub fn take_pending(&self) -> bool {
        self.pending.replace(false)
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let Some(hub) = self.hub.upgrade() else {
            return;
        };
        let mut inner = hub.borrow_mut();
        inner.listeners.retain(|l| l.id != self.id);
        vdebug!(
            id = self.id,
            listeners = inner.listeners.len(),
            "ResizeSubscription released"
        );
    }
}
