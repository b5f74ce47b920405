use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

thread_local! {
    static CURRENT_SCOPE: RefCell<Option<Weak<ScopeInner>>> = const { RefCell::new(None) };
}

/// Ownership region for cleanups. Disposing a scope disposes its children
/// first, then runs its own disposers in registration order.
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    disposers: RefCell<Vec<(DisposerId, Box<dyn FnOnce()>)>>,
    next_disposer: Cell<u64>,
    children: RefCell<Vec<Scope>>,
    disposed: Cell<bool>,
}

/// Handle for withdrawing a disposer that no longer has anything to clean up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisposerId(u64);

/// Weak token answering "is the owning scope still mounted?".
#[derive(Clone)]
pub struct Liveness(Weak<ScopeInner>);

impl Liveness {
    pub fn is_alive(&self) -> bool {
        self.0.upgrade().is_some_and(|s| !s.disposed.get())
    }

    pub(crate) fn scope(&self) -> Option<Scope> {
        self.0.upgrade().map(|inner| Scope { inner })
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                disposers: RefCell::new(Vec::new()),
                next_disposer: Cell::new(0),
                children: RefCell::new(Vec::new()),
                disposed: Cell::new(false),
            }),
        }
    }

    /// A scope disposed together with this one.
    pub fn child(&self) -> Scope {
        let child = Scope::new();
        if self.inner.disposed.get() {
            child.inner.disposed.set(true);
        } else {
            self.inner.children.borrow_mut().push(child.clone());
        }
        child
    }

    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        struct Restore(Option<Weak<ScopeInner>>);
        impl Drop for Restore {
            fn drop(&mut self) {
                let prev = self.0.take();
                CURRENT_SCOPE.with(|current| *current.borrow_mut() = prev);
            }
        }
        let prev =
            CURRENT_SCOPE.with(|current| current.replace(Some(Rc::downgrade(&self.inner))));
        let _restore = Restore(prev);
        f()
    }

    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) -> DisposerId {
        let id = DisposerId(self.inner.next_disposer.get());
        self.inner.next_disposer.set(id.0 + 1);
        if self.inner.disposed.get() {
            // Late registration on a dead scope: clean up right away.
            disposer();
            return id;
        }
        self.inner
            .disposers
            .borrow_mut()
            .push((id, Box::new(disposer)));
        id
    }

    /// Drop a disposer without running it. False if it already ran.
    pub fn remove_disposer(&self, id: DisposerId) -> bool {
        let removed = {
            let mut disposers = self.inner.disposers.borrow_mut();
            disposers
                .iter()
                .position(|(d, _)| *d == id)
                .map(|at| disposers.remove(at))
        };
        removed.is_some()
    }

    /// Disposers still waiting for this scope to end.
    pub fn pending_disposers(&self) -> usize {
        self.inner.disposers.borrow().len()
    }

    pub fn liveness(&self) -> Liveness {
        Liveness(Rc::downgrade(&self.inner))
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    pub fn ptr_eq(&self, other: &Scope) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn dispose(self) {
        self.inner.dispose();
    }
}

impl ScopeInner {
    fn dispose(&self) {
        self.disposed.set(true);
        let children = std::mem::take(&mut *self.children.borrow_mut());
        for child in children {
            child.dispose();
        }
        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        for (_, disposer) in disposers {
            disposer();
        }
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("disposers", &self.pending_disposers())
            .field("children", &self.inner.children.borrow().len())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

pub fn current_scope() -> Option<Scope> {
    CURRENT_SCOPE.with(|current| {
        current
            .borrow()
            .as_ref()
            .and_then(|weak| weak.upgrade().map(|inner| Scope { inner }))
    })
}

/// Scoped effect that auto-cleans up
pub fn scoped_effect<F>(f: F)
where
    F: FnOnce() -> Box<dyn FnOnce()> + 'static,
{
    if let Some(scope) = current_scope() {
        let cleanup = f();
        scope.add_disposer(cleanup);
    } else {
        // No scope: run now, cleanup is dropped.
        let _ = f();
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        if !self.disposed.get() {
            self.dispose();
        }
    }
}
