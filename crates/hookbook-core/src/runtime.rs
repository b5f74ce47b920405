use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

use futures::executor::{LocalPool, LocalSpawner};
use web_time::Instant;

use crate::assets::AssetLoader;
use crate::scope::{Scope, current_scope};
use crate::semantics::Role;
use crate::timer::{Clock, SystemClock, Timers};
use crate::{Callback, NodeRef, TextCallback, View, ViewId, ViewKind};

thread_local! {
    static CURRENT: RefCell<Option<Rc<Runtime>>> = const { RefCell::new(None) };
}

/// Positional slot storage for one group of `remember` calls.
#[derive(Default)]
pub struct SlotTable {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
}

#[derive(Default)]
pub struct Composer {
    pub active: SlotTable,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
    parked: HashMap<String, SlotTable>,
    pending_effects: Vec<Box<dyn FnOnce()>>,
}

/// Per-scheduler state: slots, timers, tasks, clock and the root scope.
///
/// Installed as the thread's current runtime while the scheduler composes,
/// dispatches events, fires timers or polls tasks.
pub struct Runtime {
    composer: RefCell<Composer>,
    frame_requested: Rc<Cell<bool>>,
    pub(crate) timers: RefCell<Timers>,
    pool: RefCell<LocalPool>,
    pub(crate) spawner: LocalSpawner,
    clock: Rc<dyn Clock>,
    loader: RefCell<Option<Rc<dyn AssetLoader>>>,
    focus_request: RefCell<Option<NodeRef>>,
    root: RefCell<Scope>,
}

impl Runtime {
    fn new(clock: Rc<dyn Clock>) -> Rc<Self> {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Rc::new(Self {
            composer: RefCell::new(Composer::default()),
            frame_requested: Rc::new(Cell::new(false)),
            timers: RefCell::new(Timers::default()),
            pool: RefCell::new(pool),
            spawner,
            clock,
            loader: RefCell::new(None),
            focus_request: RefCell::new(None),
            root: RefCell::new(Scope::new()),
        })
    }

    pub fn current() -> Option<Rc<Runtime>> {
        CURRENT.with(|c| c.borrow().clone())
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub(crate) fn asset_loader(&self) -> Option<Rc<dyn AssetLoader>> {
        self.loader.borrow().clone()
    }

    fn root_scope(&self) -> Scope {
        self.root.borrow().clone()
    }

    fn enter<R>(self: &Rc<Self>, f: impl FnOnce() -> R) -> R {
        struct Restore(Option<Rc<Runtime>>);
        impl Drop for Restore {
            fn drop(&mut self) {
                let prev = self.0.take();
                CURRENT.with(|c| *c.borrow_mut() = prev);
            }
        }
        let prev = CURRENT.with(|c| c.replace(Some(self.clone())));
        let _restore = Restore(prev);
        f()
    }
}

/// Frame flag of the current runtime, or a dead handle outside of one.
pub(crate) fn frame_flag() -> Weak<Cell<bool>> {
    Runtime::current()
        .map(|rt| Rc::downgrade(&rt.frame_requested))
        .unwrap_or_default()
}

pub(crate) fn request_focus(node: &NodeRef) {
    match Runtime::current() {
        Some(rt) => *rt.focus_request.borrow_mut() = Some(node.clone()),
        None => log::warn!("focus request for {node:?} outside of a runtime; ignored"),
    }
}

/// Queue `f` to run once the current frame's view tree has been built. It
/// runs in the scope that queued it.
pub fn after_commit(f: impl FnOnce() + 'static) {
    let scope = current_scope();
    let f = move || match scope {
        Some(scope) => scope.run(f),
        None => f(),
    };
    match Runtime::current() {
        Some(rt) => rt.composer.borrow_mut().pending_effects.push(Box::new(f)),
        None => f(),
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let Some(rt) = Runtime::current() else {
        log::warn!("remember called outside of composition; value will not persist");
        return Rc::new(init());
    };

    let cursor = {
        let mut c = rt.composer.borrow_mut();
        let cursor = c.active.cursor;
        c.active.cursor += 1;
        if let Some(slot) = c.active.slots.get(cursor) {
            if let Some(rc) = slot.downcast_ref::<Rc<T>>() {
                return rc.clone();
            }
            // replace (else panics)
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 If this is due to conditional composition, prefer remember_with_key.",
                cursor
            );
        }
        cursor
    };

    // init may itself touch the runtime, so it runs without the composer borrowed.
    let rc: Rc<T> = Rc::new(init());
    let mut c = rt.composer.borrow_mut();
    if cursor < c.active.slots.len() {
        c.active.slots[cursor] = Box::new(rc.clone());
    } else {
        c.active.slots.push(Box::new(rc.clone()));
    }
    rc
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let Some(rt) = Runtime::current() else {
        log::warn!("remember_with_key('{key}') called outside of composition");
        return Rc::new(init());
    };

    if let Some(existing) = rt.composer.borrow().keyed_slots.get(&key) {
        if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
            return rc.clone();
        }
        log::warn!(
            "remember_with_key: key '{}' reused with a different type; replacing.",
            key
        );
    }

    let rc: Rc<T> = Rc::new(init());
    rt.composer
        .borrow_mut()
        .keyed_slots
        .insert(key, Box::new(rc.clone()));
    rc
}

/// Compose `f` against its own slot table, so positional `remember` calls in
/// it never shift the slots of its siblings (even if `f` unwinds).
pub fn slot_group<R>(key: &str, f: impl FnOnce() -> R) -> R {
    let Some(rt) = Runtime::current() else {
        return f();
    };

    struct Restore {
        rt: Rc<Runtime>,
        key: String,
        outer: Option<SlotTable>,
    }
    impl Drop for Restore {
        fn drop(&mut self) {
            if let Some(outer) = self.outer.take() {
                let mut c = self.rt.composer.borrow_mut();
                let inner = std::mem::replace(&mut c.active, outer);
                c.parked.insert(std::mem::take(&mut self.key), inner);
            }
        }
    }

    let outer = {
        let mut c = rt.composer.borrow_mut();
        let mut inner = c.parked.remove(key).unwrap_or_default();
        inner.cursor = 0;
        std::mem::replace(&mut c.active, inner)
    };
    let _restore = Restore {
        rt: rt.clone(),
        key: key.to_string(),
        outer: Some(outer),
    };
    f()
}

/// A `slot_group` that also owns a child of the current scope. Effects,
/// tasks and liveness tokens created while composing `f`, or from the
/// event handlers it returns, belong to that child.
pub fn scope_group(key: &str, f: impl FnOnce() -> View) -> View {
    slot_group(key, || {
        let Some(parent) = current_scope() else {
            return f();
        };
        let scope = remember(|| parent.child());
        let view = scope.run(f);
        run_handlers_in(view, &scope)
    })
}

fn run_handlers_in(mut v: View, scope: &Scope) -> View {
    fn wrap(cb: &mut Option<Callback>, scope: &Scope) {
        if let Some(inner) = cb.take() {
            let scope = scope.clone();
            *cb = Some(Rc::new(move || scope.run(|| inner())));
        }
    }
    fn wrap_text(cb: &mut Option<TextCallback>, scope: &Scope) {
        if let Some(inner) = cb.take() {
            let scope = scope.clone();
            *cb = Some(Rc::new(move |text: String| scope.run(|| inner(text))));
        }
    }

    match &mut v.kind {
        ViewKind::Button { on_click, .. } => wrap(on_click, scope),
        ViewKind::TextField {
            on_change,
            on_submit,
            ..
        } => {
            wrap_text(on_change, scope);
            wrap_text(on_submit, scope);
        }
        _ => {}
    }
    v.children = std::mem::take(&mut v.children)
        .into_iter()
        .map(|c| run_handlers_in(c, scope))
        .collect();
    v
}

/// Frame: the stamped view tree plus what input dispatch needs.
pub struct Frame {
    pub root: View,
    pub hit_regions: Vec<HitRegion>,
    pub focus_chain: Vec<ViewId>,
    pub focused: Option<ViewId>,
}

impl Frame {
    pub fn find(&self, id: ViewId) -> Option<&View> {
        fn walk(v: &View, id: ViewId) -> Option<&View> {
            if v.id == id {
                return Some(v);
            }
            v.children.iter().find_map(|c| walk(c, id))
        }
        walk(&self.root, id)
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&View> {
        fn walk<'a>(v: &'a View, tag: &str) -> Option<&'a View> {
            if v.modifier.test_tag.as_deref() == Some(tag) {
                return Some(v);
            }
            v.children.iter().find_map(|c| walk(c, tag))
        }
        walk(&self.root, tag)
    }
}

#[derive(Clone)]
pub struct HitRegion {
    pub id: ViewId,
    pub role: Role,
    /// Button text or text field hint.
    pub label: String,
    pub test_tag: Option<String>,
    pub on_click: Option<Callback>,
    pub on_text_change: Option<TextCallback>,
    pub on_text_submit: Option<TextCallback>,
    /// Set for uncontrolled text fields.
    pub node_ref: Option<NodeRef>,
    pub focusable: bool,
}

/// The element holding input focus. View ids are preorder positions that
/// shift whenever views appear above the element, so focus is carried by
/// the element and its id looked up again on every frame.
#[derive(Clone, Debug)]
pub enum FocusTarget {
    Node(NodeRef),
    Tag(String),
    Id(ViewId),
}

impl FocusTarget {
    /// Best handle for a hit region: its element, else its tag.
    pub fn of(hit: &HitRegion) -> Self {
        match (&hit.node_ref, &hit.test_tag) {
            (Some(node), _) => Self::Node(node.clone()),
            (None, Some(tag)) => Self::Tag(tag.clone()),
            (None, None) => Self::Id(hit.id),
        }
    }
}

pub struct Scheduler {
    runtime: Rc<Runtime>,
    focus: Option<FocusTarget>,
    focused: Option<ViewId>,
    frames: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock))
    }

    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        Self {
            runtime: Runtime::new(clock),
            focus: None,
            focused: None,
            frames: 0,
        }
    }

    pub fn set_asset_loader(&self, loader: Rc<dyn AssetLoader>) {
        *self.runtime.loader.borrow_mut() = Some(loader);
    }

    pub fn now(&self) -> Instant {
        self.runtime.now()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// True once any signal written since the last `compose` asked for a frame.
    pub fn needs_frame(&self) -> bool {
        self.runtime.frame_requested.get()
    }

    pub fn active_timers(&self) -> usize {
        self.runtime.timers.borrow().len()
    }

    /// Id of the focused view in the last composed frame.
    pub fn focused(&self) -> Option<ViewId> {
        self.focused
    }

    /// Move focus to `hit` now. Later frames follow the same element even
    /// when its id changes.
    pub fn focus(&mut self, hit: &HitRegion) {
        self.focus = Some(FocusTarget::of(hit));
        self.focused = Some(hit.id);
    }

    pub fn compose<F>(&mut self, build_root: F) -> Frame
    where
        F: FnOnce(&mut Scheduler) -> View,
    {
        let rt = self.runtime.clone();
        let scope = rt.root_scope();
        rt.frame_requested.set(false);
        rt.composer.borrow_mut().active.cursor = 0;

        let root = rt.enter(|| scope.run(|| build_root(self)));
        self.frames += 1;

        let mut stamp = Stamp::default();
        let root = stamp.visit(root);

        // Post-mount effects see a bound tree.
        let effects = std::mem::take(&mut rt.composer.borrow_mut().pending_effects);
        if !effects.is_empty() {
            log::trace!("frame {}: running {} effect(s)", self.frames, effects.len());
            rt.enter(|| {
                scope.run(|| {
                    for effect in effects {
                        effect();
                    }
                })
            });
        }

        if let Some(node) = rt.focus_request.take() {
            self.focus = Some(FocusTarget::Node(node));
        }
        self.focused = self.focus.as_ref().and_then(|t| stamp.resolve(t));
        if self.focused.is_none() && self.focus.take().is_some() {
            log::debug!("focused element left the tree; focus cleared");
        }

        Frame {
            root,
            focus_chain: stamp
                .hits
                .iter()
                .filter(|h| h.focusable)
                .map(|h| h.id)
                .collect(),
            hit_regions: stamp.hits,
            focused: self.focused,
        }
    }

    /// Run an event handler (click, text change) inside this runtime.
    pub fn dispatch<R>(&self, f: impl FnOnce() -> R) -> R {
        let rt = self.runtime.clone();
        let scope = rt.root_scope();
        let out = rt.enter(|| scope.run(f));
        // Focus moves on the next compose, once the tree is rebuilt.
        if rt.focus_request.borrow().is_some() {
            rt.frame_requested.set(true);
        }
        out
    }

    /// Fire every timer tick that is due. Returns the number of ticks fired.
    pub fn advance_timers(&self) -> usize {
        let rt = self.runtime.clone();
        let now = rt.now();
        let due = rt.timers.borrow_mut().due(now);
        if due.is_empty() {
            return 0;
        }
        let scope = rt.root_scope();
        let mut fired = 0;
        rt.enter(|| {
            scope.run(|| {
                for (_, key) in due {
                    // A tick may cancel a timer that still has ticks queued.
                    let callback = rt.timers.borrow().callback(key);
                    if let Some(cb) = callback {
                        cb();
                        fired += 1;
                    }
                }
            })
        });
        log::trace!("fired {fired} timer tick(s)");
        fired
    }

    /// Poll spawned tasks until none can make progress.
    pub fn pump_tasks(&self) {
        let rt = self.runtime.clone();
        let scope = rt.root_scope();
        rt.enter(|| scope.run(|| rt.pool.borrow_mut().run_until_stalled()));
    }

    /// Tear the tree down: effect cleanups, timers and outstanding tasks.
    /// The next `compose` mounts from scratch.
    pub fn unmount(&mut self) {
        let rt = self.runtime.clone();
        let scope = std::mem::replace(&mut *rt.root.borrow_mut(), Scope::new());
        rt.enter(|| scope.dispose());
        // Drain aborted tasks so their futures are dropped now.
        rt.pool.borrow_mut().run_until_stalled();
        *rt.composer.borrow_mut() = Composer::default();
        self.focus = None;
        self.focused = None;
        *rt.focus_request.borrow_mut() = None;
        log::debug!(
            "unmounted; {} timer(s) still registered",
            rt.timers.borrow().len()
        );
    }
}

/// Preorder id assignment plus hit-region collection.
#[derive(Default)]
struct Stamp {
    next: ViewId,
    ids: HashSet<ViewId>,
    bound: Vec<(NodeRef, ViewId)>,
    hits: Vec<HitRegion>,
}

impl Stamp {
    fn visit(&mut self, mut v: View) -> View {
        self.next += 1;
        v.id = self.next;
        self.ids.insert(v.id);

        if let Some(node_ref) = &v.modifier.node_ref {
            node_ref.bind(v.id);
            self.bound.push((node_ref.clone(), v.id));
        }

        match &v.kind {
            ViewKind::Button { text, on_click } => self.hits.push(HitRegion {
                id: v.id,
                role: Role::Button,
                label: text.clone(),
                test_tag: v.modifier.test_tag.clone(),
                on_click: on_click.clone(),
                on_text_change: None,
                on_text_submit: None,
                node_ref: None,
                focusable: true,
            }),
            ViewKind::TextField {
                hint,
                on_change,
                on_submit,
                ..
            } => self.hits.push(HitRegion {
                id: v.id,
                role: Role::TextField,
                label: hint.clone(),
                test_tag: v.modifier.test_tag.clone(),
                on_click: None,
                on_text_change: on_change.clone(),
                on_text_submit: on_submit.clone(),
                node_ref: v.modifier.node_ref.clone(),
                focusable: true,
            }),
            _ => {}
        }

        let mut keys = HashSet::new();
        for child in &v.children {
            if let Some(key) = child.modifier.key
                && !keys.insert(key)
            {
                log::warn!("duplicate sibling key {key} under view {}", v.id);
            }
        }

        v.children = std::mem::take(&mut v.children)
            .into_iter()
            .map(|c| self.visit(c))
            .collect();
        v
    }

    fn resolve(&self, target: &FocusTarget) -> Option<ViewId> {
        match target {
            FocusTarget::Node(node) => self
                .bound
                .iter()
                .find(|(n, _)| n.ptr_eq(node))
                .map(|(_, id)| *id),
            FocusTarget::Tag(tag) => self
                .hits
                .iter()
                .find(|h| h.test_tag.as_deref() == Some(tag.as_str()))
                .map(|h| h.id),
            FocusTarget::Id(id) => self.ids.contains(id).then_some(*id),
        }
    }
}
