//! Mutable cells that live outside change detection.
//!
//! Writing to a `Ref` or a `NodeRef` never requests a frame. They are the
//! escape hatch for imperative work: counters that mint ids, handles to
//! rendered elements, values read on demand.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{ViewId, remember};

pub struct Ref<T>(Rc<RefCell<T>>);

impl<T> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Ref<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn current(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().clone()
    }

    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    pub fn replace(&self, value: T) -> T {
        self.0.replace(value)
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Ref").field(&self.0.borrow()).finish()
    }
}

pub fn remember_ref<T: 'static>(init: impl FnOnce() -> T) -> Ref<T> {
    remember(|| Ref::new(init())).as_ref().clone()
}

/// Handle to a rendered element. Bound to the element's view id when the
/// frame is stamped; for uncontrolled text fields it also owns the text.
#[derive(Clone, Default)]
pub struct NodeRef(Rc<RefCell<Element>>);

#[derive(Default, Debug)]
struct Element {
    id: Option<ViewId>,
    value: String,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<ViewId> {
        self.0.borrow().id
    }

    pub(crate) fn bind(&self, id: ViewId) {
        self.0.borrow_mut().id = Some(id);
    }

    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.0.borrow_mut().value = value.into();
    }

    pub fn clear(&self) {
        self.0.borrow_mut().value.clear();
    }

    /// Move input focus to the element. False if it is not in a frame yet.
    /// Focus stays with the element while it remains in the tree.
    pub fn focus(&self) -> bool {
        if self.id().is_none() {
            log::warn!("focus() on an element that has not been mounted");
            return false;
        }
        crate::runtime::request_focus(self);
        true
    }

    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let e = self.0.borrow();
        f.debug_struct("NodeRef")
            .field("id", &e.id)
            .field("value", &e.value)
            .finish()
    }
}

pub fn remember_node_ref() -> NodeRef {
    remember(NodeRef::new).as_ref().clone()
}
