use crate::{Dispose, after_commit, remember, scoped_effect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Post-mount effect, re-run (after cleaning up the previous run) whenever
/// `key` changes. The last cleanup runs on unmount.
pub fn disposable_effect<K: PartialEq + Clone + 'static>(
    key: K,
    effect: impl FnOnce() -> Dispose + 'static,
) {
    // Slot-based (like Compose). For branch-stability wrap the caller in a slot_group.
    let last_key = remember(|| RefCell::new(None::<K>));
    let cleanup_slot: Rc<RefCell<Option<Dispose>>> = remember(|| RefCell::new(None));
    let installed = remember(|| Cell::new(false));

    // Install a single unmount disposer for this callsite.
    if !installed.get() {
        installed.set(true);
        let cleanup_slot = cleanup_slot.clone();
        scoped_effect(move || {
            Box::new(move || {
                let d = cleanup_slot.borrow_mut().take();
                if let Some(d) = d {
                    d.run();
                }
            })
        });
    }

    // Key change: cleanup previous + run new effect once the tree is built
    let changed = last_key.borrow().as_ref() != Some(&key);
    if changed {
        *last_key.borrow_mut() = Some(key);
        after_commit(move || {
            let previous = cleanup_slot.borrow_mut().take();
            if let Some(d) = previous {
                d.run();
            }
            let d = effect();
            *cleanup_slot.borrow_mut() = Some(d);
        });
    }
}

/// Runs once per mount; the returned `Dispose` runs on unmount.
pub fn mount_effect(effect: impl FnOnce() -> Dispose + 'static) {
    disposable_effect((), effect);
}
