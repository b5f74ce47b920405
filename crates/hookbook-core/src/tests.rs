#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use crate::*;

    fn empty() -> View {
        View::new(0, ViewKind::Column)
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
        assert_eq!(sig.version(), 2);
    }

    #[test]
    fn test_signal_write_requests_frame() {
        let mut s = Scheduler::new();
        let holder: Rc<RefCell<Option<Signal<i32>>>> = Rc::default();
        let h = holder.clone();
        s.compose(move |_| {
            let count = remember(|| signal(0));
            *h.borrow_mut() = Some(count.as_ref().clone());
            empty()
        });
        assert!(!s.needs_frame());

        let count = holder.borrow().clone().unwrap();
        count.set(5);
        assert!(s.needs_frame());
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        let liveness = scope.liveness();
        assert!(liveness.is_alive());
        scope.dispose();
        assert!(*cleaned_up.borrow());
        assert!(!liveness.is_alive());
    }

    #[test]
    fn test_key_based_remember() {
        let mut s = Scheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for init in [42, 100] {
            let seen = seen.clone();
            s.compose(move |_| {
                let v = remember_with_key("test", || init);
                seen.borrow_mut().push(*v);
                empty()
            });
        }
        // Not 100, because key exists
        assert_eq!(*seen.borrow(), vec![42, 42]);
    }

    #[test]
    fn test_slot_groups_keep_their_own_slots() {
        let mut s = Scheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for with_extra in [false, true] {
            let seen = seen.clone();
            s.compose(move |_| {
                slot_group("a", || {
                    if with_extra {
                        let _ = remember(|| "extra");
                    }
                });
                let b = slot_group("b", || remember(|| 7));
                seen.borrow_mut().push(*b);
                empty()
            });
        }
        assert_eq!(*seen.borrow(), vec![7, 7]);
    }

    #[test]
    fn test_memo_cell_single_slot() {
        let mut cell = MemoCell::<u32, u32>::new();
        let a = cell.get_or_compute(1, |d| d * 10);
        let b = cell.get_or_compute(1, |_| unreachable!());
        assert!(Rc::ptr_eq(&a, &b));

        let c = cell.get_or_compute(2, |d| d * 10);
        assert_eq!(*c, 20);
        // Only the latest entry is kept.
        let d = cell.get_or_compute(1, |d| d * 10);
        assert!(!Rc::ptr_eq(&a, &d));
        assert_eq!(cell.recomputes(), 3);
    }

    #[test]
    fn test_by_ref_compares_identity() {
        let list = Rc::new(vec![1, 2, 3]);
        let same = ByRef::new(&list);
        assert_eq!(ByRef::new(&list), same);
        assert_ne!(ByRef(Rc::new(vec![1, 2, 3])), same);
    }

    #[test]
    fn test_fresh_closure_defeats_callback_memo() {
        type Cmp = dyn Fn(i32, i32) -> bool;
        let mut s = Scheduler::new();
        let ids = Rc::new(RefCell::new(Vec::<(Rc<Cmp>, Rc<Cmp>)>::new()));
        for _ in 0..2 {
            let ids = ids.clone();
            s.compose(move |_| {
                let stable = remember_callback((), Rc::new(|a: i32, b: i32| a < b) as Rc<Cmp>);
                let fresh: Rc<Cmp> = Rc::new(|a: i32, b: i32| a < b);
                ids.borrow_mut().push((stable, fresh));
                empty()
            });
        }
        let ids = ids.borrow();
        assert!(Rc::ptr_eq(&ids[0].0, &ids[1].0));
        assert!(!Rc::ptr_eq(&ids[0].1, &ids[1].1));
    }

    struct Counter;
    impl StateHolder for Counter {
        type State = i32;
        type Action = i32;
        fn initial_state() -> i32 {
            0
        }
        fn reduce(state: &i32, by: i32) -> i32 {
            state + by
        }
    }

    #[test]
    fn test_dispatch_swaps_state() {
        let d = Dispatch::<Counter>::new(Counter::initial_state());
        let before = d.state();
        d.dispatch(3);
        let after = d.state();
        assert_eq!(*after, 3);
        assert!(!Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_ref_does_not_request_frame() {
        let mut s = Scheduler::new();
        let holder: Rc<RefCell<Option<Ref<u32>>>> = Rc::default();
        let h = holder.clone();
        s.compose(move |_| {
            *h.borrow_mut() = Some(remember_ref(|| 1));
            empty()
        });
        let r = holder.borrow().clone().unwrap();
        s.dispatch(|| r.set(9));
        assert_eq!(r.current(), 9);
        assert!(!s.needs_frame());
    }

    #[test]
    fn test_mount_effect_runs_once_and_cleans_up() {
        let clock = ManualClock::new();
        let mut s = Scheduler::with_clock(Rc::new(clock.clone()));
        let runs = Rc::new(Cell::new(0));
        let cleanups = Rc::new(Cell::new(0));
        let build = {
            let runs = runs.clone();
            let cleanups = cleanups.clone();
            move |_: &mut Scheduler| {
                let runs = runs.clone();
                let cleanups = cleanups.clone();
                mount_effect(move || {
                    runs.set(runs.get() + 1);
                    on_unmount(move || cleanups.set(cleanups.get() + 1))
                });
                empty()
            }
        };
        s.compose(build.clone());
        s.compose(build.clone());
        s.compose(build.clone());
        assert_eq!(runs.get(), 1);
        assert_eq!(cleanups.get(), 0);

        s.unmount();
        assert_eq!(cleanups.get(), 1);

        // Mounting again starts over.
        s.compose(build);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_disposable_effect_reruns_on_key_change() {
        let mut s = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::<String>::new()));
        for key in [1, 1, 2] {
            let log = log.clone();
            s.compose(move |_| {
                let log = log.clone();
                disposable_effect(key, move || {
                    log.borrow_mut().push(format!("run {key}"));
                    on_unmount(move || log.borrow_mut().push(format!("clean {key}")))
                });
                empty()
            });
        }
        assert_eq!(*log.borrow(), vec!["run 1", "clean 1", "run 2"]);
    }

    #[test]
    fn test_interval_reads_latest_value() {
        let clock = ManualClock::new();
        let mut s = Scheduler::with_clock(Rc::new(clock.clone()));
        let holder: Rc<RefCell<Option<Signal<u32>>>> = Rc::default();
        let h = holder.clone();
        s.compose(move |_| {
            let ticks = remember(|| signal(0u32));
            *h.borrow_mut() = Some(ticks.as_ref().clone());
            mount_effect({
                let ticks = ticks.as_ref().clone();
                move || interval(Duration::from_secs(1), move || ticks.update(|t| *t += 1))
            });
            empty()
        });
        assert_eq!(s.active_timers(), 1);

        clock.advance(Duration::from_millis(3500));
        assert_eq!(s.advance_timers(), 3);
        assert_eq!(holder.borrow().as_ref().unwrap().get(), 3);

        s.unmount();
        assert_eq!(s.active_timers(), 0);
        clock.advance(Duration::from_secs(5));
        assert_eq!(s.advance_timers(), 0);
    }

    #[test]
    fn test_scoped_task_skips_completion_after_unmount() {
        let mut s = Scheduler::new();
        let assets = Rc::new(StaticAssets::new().with("n.json", "[1,2]"));
        s.set_asset_loader(assets.clone());
        let out = Rc::new(RefCell::new(None::<Vec<u8>>));

        let o = out.clone();
        s.compose(move |_| {
            let o = o.clone();
            mount_effect(move || {
                spawn_scoped(fetch_json::<Vec<u8>>("/n.json"), move |r| {
                    *o.borrow_mut() = r.ok();
                })
                .expect("runtime is active");
                Dispose::noop()
            });
            empty()
        });
        s.unmount();
        s.pump_tasks();
        assert_eq!(*out.borrow(), None);
    }

    #[test]
    fn test_finished_task_releases_its_abort_handle() {
        let s = Scheduler::new();
        s.set_asset_loader(Rc::new(StaticAssets::new().with("n.json", "[1]")));
        let pending = || s.dispatch(|| current_scope().map(|scope| scope.pending_disposers()));
        let before = pending().expect("dispatch runs in the root scope");

        let done = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let done = done.clone();
            s.dispatch(move || {
                spawn_scoped(fetch_json::<Vec<u8>>("/n.json"), move |_| {
                    done.set(done.get() + 1)
                })
                .expect("runtime is active");
            });
        }
        assert_eq!(pending(), Some(before + 3));

        s.pump_tasks();
        assert_eq!(done.get(), 3);
        assert_eq!(pending(), Some(before));
    }

    #[test]
    fn test_child_scope_disposed_with_parent() {
        let parent = Scope::new();
        let child = parent.child();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (scope, name) in [(&parent, "parent"), (&child, "child")] {
            let order = order.clone();
            scope.add_disposer(move || order.borrow_mut().push(name));
        }
        let child_alive = child.liveness();

        let dropped = child.add_disposer(|| unreachable!("removed before dispose"));
        assert!(child.remove_disposer(dropped));
        assert!(!child.remove_disposer(dropped));

        parent.dispose();
        assert!(!child_alive.is_alive());
        assert_eq!(*order.borrow(), vec!["child", "parent"]);
    }

    #[test]
    fn test_scope_group_owns_its_effects_and_handlers() {
        let mut s = Scheduler::new();
        let seen: Rc<RefCell<Vec<(&'static str, Scope)>>> = Rc::default();
        let build = {
            let seen = seen.clone();
            move |_: &mut Scheduler| {
                let seen = seen.clone();
                scope_group("pair", move || {
                    let here = current_scope().expect("group has a scope");
                    seen.borrow_mut().push(("compose", here));
                    mount_effect({
                        let seen = seen.clone();
                        move || {
                            seen.borrow_mut().push(("effect", current_scope().unwrap()));
                            Dispose::noop()
                        }
                    });
                    let on_click: Callback = Rc::new(move || {
                        seen.borrow_mut().push(("click", current_scope().unwrap()))
                    });
                    View::new(
                        0,
                        ViewKind::Button {
                            text: "go".into(),
                            on_click: Some(on_click),
                        },
                    )
                })
            }
        };
        let frame = s.compose(build.clone());
        let click = frame.hit_regions[0].on_click.clone().unwrap();
        s.dispatch(|| click());
        s.compose(build);

        let root = s.dispatch(|| current_scope().unwrap());
        let seen = seen.borrow();
        let names: Vec<&str> = seen.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["compose", "effect", "click", "compose"]);
        let group = &seen[0].1;
        assert!(!group.ptr_eq(&root));
        assert!(seen.iter().all(|(_, scope)| scope.ptr_eq(group)));

        let alive = group.liveness();
        s.unmount();
        assert!(!alive.is_alive());
    }

    #[test]
    fn test_fetch_json_decodes() {
        let mut s = Scheduler::new();
        let assets = Rc::new(StaticAssets::new().with("n.json", "[1,2]"));
        s.set_asset_loader(assets.clone());
        let out = Rc::new(RefCell::new(None));

        let o = out.clone();
        s.compose(move |_| {
            let o = o.clone();
            mount_effect(move || {
                spawn_scoped(fetch_json::<Vec<u8>>("/n.json"), move |r| {
                    *o.borrow_mut() = Some(r);
                })
                .expect("runtime is active");
                Dispose::noop()
            });
            empty()
        });
        s.pump_tasks();
        assert_eq!(*out.borrow(), Some(Ok(vec![1, 2])));
        assert_eq!(assets.requests(), vec!["n.json".to_string()]);
    }

    #[test]
    fn test_fetch_without_loader_fails() {
        let s = Scheduler::new();
        let out = Rc::new(RefCell::new(None));
        let o = out.clone();
        s.dispatch(move || {
            spawn_scoped(fetch_json::<Vec<u8>>("x.json"), move |r| {
                *o.borrow_mut() = Some(r);
            })
            .expect("runtime is active");
        });
        s.pump_tasks();
        assert_eq!(*out.borrow(), Some(Err(FetchError::NoLoader)));
    }

    #[test]
    fn test_node_ref_focus_applies_after_mount() {
        let mut s = Scheduler::new();
        let frame = s.compose(|_| {
            let input = remember_node_ref();
            mount_effect({
                let input = input.clone();
                move || {
                    assert!(input.focus());
                    Dispose::noop()
                }
            });
            View::new(0, ViewKind::Column).with_children(vec![
                View::new(
                    0,
                    ViewKind::TextField {
                        value: None,
                        hint: String::new(),
                        on_change: None,
                        on_submit: None,
                    },
                )
                .modifier(Modifier::new().node_ref(input).test_tag("field")),
            ])
        });
        let field = frame.find_by_tag("field").expect("field is in the frame");
        assert_eq!(frame.focused, Some(field.id));
        assert_eq!(frame.focus_chain, vec![field.id]);
    }

    fn field(tag: &str) -> View {
        View::new(
            0,
            ViewKind::TextField {
                value: None,
                hint: String::new(),
                on_change: None,
                on_submit: None,
            },
        )
        .modifier(Modifier::new().test_tag(tag))
    }

    #[test]
    fn test_focus_follows_element_when_views_are_inserted_above() {
        let mut s = Scheduler::new();
        let input = NodeRef::new();
        for extra in [0, 3, 1] {
            let input = input.clone();
            let frame = s.compose(move |_| {
                mount_effect({
                    let input = input.clone();
                    move || {
                        input.focus();
                        Dispose::noop()
                    }
                });
                let mut children: Vec<View> =
                    (0..extra).map(|i| field(&format!("extra.{i}"))).collect();
                children.push(field("other"));
                children.push(
                    field("target").modifier(Modifier::new().node_ref(input).test_tag("target")),
                );
                View::new(0, ViewKind::Column).with_children(children)
            });
            let target = frame.find_by_tag("target").expect("target is in the frame");
            assert_eq!(frame.focused, Some(target.id), "{extra} view(s) above");
            assert_eq!(s.focused(), Some(target.id));
        }
    }

    #[test]
    fn test_focus_by_hit_follows_tag_and_clears_when_gone() {
        let mut s = Scheduler::new();
        let frame = s.compose(|_| View::new(0, ViewKind::Column).with_children(vec![field("b")]));
        let hit = frame.hit_regions[0].clone();
        s.focus(&hit);

        let frame = s.compose(|_| {
            View::new(0, ViewKind::Column).with_children(vec![field("a"), field("b")])
        });
        let b = frame.find_by_tag("b").expect("b is in the frame");
        assert_eq!(frame.focused, Some(b.id));
        assert_ne!(b.id, hit.id);

        let frame = s.compose(|_| View::new(0, ViewKind::Column).with_children(vec![field("a")]));
        assert_eq!(frame.focused, None);
        let frame = s.compose(|_| View::new(0, ViewKind::Column).with_children(vec![field("b")]));
        assert_eq!(frame.focused, None);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));
    }
}
