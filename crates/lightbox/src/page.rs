//! The page root shared by everything rendered on a page: its scroll flag and
//! its document-level keyboard listeners. Both are handed out as guards that
//! undo themselves on drop.

use crate::Key;
use std::{cell::RefCell, fmt, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Auto,
    Hidden,
}

type Listener = Rc<RefCell<dyn FnMut(&Key)>>;

#[derive(Default)]
struct PageState {
    overflow: Overflow,
    /// Value to restore once the last scroll lock is released.
    saved_overflow: Option<Overflow>,
    scroll_locks: usize,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

#[derive(Clone, Default)]
pub struct PageRoot {
    inner: Rc<RefCell<PageState>>,
}

impl fmt::Debug for PageRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("PageRoot")
            .field("overflow", &state.overflow)
            .field("scroll_locks", &state.scroll_locks)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl PageRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overflow(&self) -> Overflow {
        self.inner.borrow().overflow
    }

    /// Direct write, as any other part of the page might do. While a lock is
    /// held the write is remembered and applied when the last lock goes away.
    pub fn set_overflow(&self, overflow: Overflow) {
        let mut state = self.inner.borrow_mut();
        if state.scroll_locks > 0 {
            state.saved_overflow = Some(overflow);
        } else {
            state.overflow = overflow;
        }
    }

    pub fn scroll_lock_count(&self) -> usize {
        self.inner.borrow().scroll_locks
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn lock_scroll(&self) -> ScrollLock {
        let mut state = self.inner.borrow_mut();
        if state.scroll_locks == 0 {
            state.saved_overflow = Some(state.overflow);
        }
        state.scroll_locks += 1;
        state.overflow = Overflow::Hidden;

        ScrollLock { page: self.clone() }
    }

    pub fn subscribe_keys<F>(&self, listener: F) -> KeySubscription
    where
        F: FnMut(&Key) + 'static,
    {
        let mut state = self.inner.borrow_mut();
        let id = state.next_listener_id;
        state.next_listener_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        state.listeners.push((id, listener));

        KeySubscription {
            page: self.clone(),
            id,
        }
    }

    /// Deliver a key press to every listener subscribed at the time of the call.
    pub fn dispatch_key(&self, key: &Key) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            (listener.borrow_mut())(key);
        }
    }

    fn release_scroll_lock(&self) {
        let mut state = self.inner.borrow_mut();
        state.scroll_locks = state.scroll_locks.saturating_sub(1);
        if state.scroll_locks == 0 {
            state.overflow = state.saved_overflow.take().unwrap_or_default();
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Held while page scrolling is suppressed.
#[must_use = "the scroll lock is released as soon as it is dropped"]
#[derive(Debug)]
pub struct ScrollLock {
    page: PageRoot,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.page.release_scroll_lock();
    }
}

/// Held while a document-level key listener is installed.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
#[derive(Debug)]
pub struct KeySubscription {
    page: PageRoot,
    id: u64,
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        self.page.unsubscribe(self.id);
    }
}
