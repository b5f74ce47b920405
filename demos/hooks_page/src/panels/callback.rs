use std::cmp::Ordering;
use std::rc::Rc;

use hookbook_core::*;
use hookbook_ui::*;

use crate::ui::Section;

pub type SortFn = dyn Fn(&str, &str) -> Ordering;

pub const NAMES: [&str; 4] = ["John", "Paul", "George", "Ringo"];

/// Case-insensitive order, ties broken by byte order. No dependencies, so the
/// same `Rc` comes back every frame.
///
/// When to stabilise a callback like this:
/// 1. it is handed to a nested component, which may key a cache on it;
/// 2. it is created inside a reusable `use_*` function, whose callers may do
///    anything with it, so its identity has to hold across frames.
pub fn use_sort_function() -> Rc<SortFn> {
    // Building it fresh makes a new `Rc` every frame, and `use_sorted` below
    // sees a new dependency and sorts again each time:
    //
    // let sort: Rc<SortFn> = Rc::new(|a: &str, b: &str| a.cmp(b));
    remember_callback(
        (),
        Rc::new(|a: &str, b: &str| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        }) as Rc<SortFn>,
    )
}

/// Sorted copy of `list`, cached on the identity of both inputs.
pub fn use_sorted(list: &Rc<Vec<String>>, sort: &Rc<SortFn>) -> Rc<Vec<String>> {
    // recomputes only when `list` or `sort` is a different allocation
    remember_memo((ByRef::new(list), ByRef::new(sort)), |(list, sort)| {
        log::debug!("sorting {} names", list.0.len());
        let mut out = list.0.as_ref().clone();
        out.sort_by(|a, b| (sort.0)(a.as_str(), b.as_str()));
        out
    })
}

fn SortedList(list: &Rc<Vec<String>>, sort: &Rc<SortFn>) -> View {
    let sorted = use_sorted(list, sort);
    Text(sorted.join(", ")).modifier(Modifier::new().test_tag("callback.sorted"))
}

pub fn Callback() -> View {
    let names = remember(|| NAMES.map(String::from).to_vec());
    let renders = remember(|| signal(0u32));
    let sort = use_sort_function();

    Section(
        "remember_callback: stable function",
        Column(Modifier::new()).child((
            // SortedList's internals are not ours to know; hand it stable refs
            slot_group("sorted-list", || SortedList(&names, &sort)),
            Button(format!("Re-render ({})", renders.get()), {
                let renders = renders.as_ref().clone();
                move || renders.update(|n| *n += 1)
            })
            .modifier(Modifier::new().test_tag("callback.rerender")),
        )),
    )
}
