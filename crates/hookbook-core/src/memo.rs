//! Single-slot memoization.
//!
//! A `MemoCell` keeps the last dependency value and the last output. Asking
//! again with equal dependencies hands back the *same* `Rc`, so downstream
//! code can compare results by identity. Anything else recomputes and evicts
//! the previous entry.
//!
//! Equality is whatever `PartialEq` says for the dependency type: value
//! equality for plain data, identity for `ByRef` handles.

use std::cell::RefCell;
use std::rc::Rc;

use crate::remember;

pub struct MemoCell<D, T: ?Sized> {
    last: Option<(D, Rc<T>)>,
    recomputes: usize,
}

impl<D, T: ?Sized> Default for MemoCell<D, T> {
    fn default() -> Self {
        Self {
            last: None,
            recomputes: 0,
        }
    }
}

impl<D: PartialEq, T> MemoCell<D, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached(&self, deps: &D) -> Option<Rc<T>> {
        match &self.last {
            Some((last, out)) if last == deps => Some(out.clone()),
            _ => None,
        }
    }

    pub fn store(&mut self, deps: D, out: Rc<T>) {
        self.recomputes += 1;
        self.last = Some((deps, out));
    }

    pub fn get_or_compute(&mut self, deps: D, compute: impl FnOnce(&D) -> T) -> Rc<T> {
        if let Some(hit) = self.cached(&deps) {
            return hit;
        }
        let out = Rc::new(compute(&deps));
        self.store(deps, out.clone());
        out
    }

    /// How many times the cell has (re)computed its output.
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }
}

/// Dependency compared by pointer identity instead of by value.
pub struct ByRef<T: ?Sized>(pub Rc<T>);

impl<T: ?Sized> ByRef<T> {
    pub fn new(rc: &Rc<T>) -> Self {
        Self(rc.clone())
    }
}

impl<T: ?Sized> Clone for ByRef<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: ?Sized> PartialEq for ByRef<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> std::fmt::Debug for ByRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ByRef({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Memoized derivation bound to the current composition slot.
pub fn remember_memo<D, T>(deps: D, compute: impl FnOnce(&D) -> T) -> Rc<T>
where
    D: PartialEq + 'static,
    T: 'static,
{
    let cell = remember(|| RefCell::new(MemoCell::<D, T>::new()));
    let hit = cell.borrow().cached(&deps);
    if let Some(hit) = hit {
        return hit;
    }
    // compute may compose children, so no borrow is held across it
    let out = Rc::new(compute(&deps));
    let mut cell = cell.borrow_mut();
    cell.store(deps, out.clone());
    log::trace!(
        "remember_memo<{}>: recompute #{}",
        std::any::type_name::<T>(),
        cell.recomputes()
    );
    out
}

/// Keeps the first `f` handed in for as long as `deps` stay equal, so the
/// returned function has a stable identity across frames.
pub fn remember_callback<D, F>(deps: D, f: Rc<F>) -> Rc<F>
where
    D: PartialEq + 'static,
    F: ?Sized + 'static,
{
    let kept = remember_memo(deps, move |_| f);
    (*kept).clone()
}
