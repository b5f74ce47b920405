use std::rc::Rc;

use hookbook_core::*;
use hookbook_ui::*;

use crate::ui::Section;

pub const NUMBERS: [i64; 3] = [10, 20, 30];
pub const NAMES: [&str; 4] = ["John", "Paul", "George", "Ringo"];

#[derive(Clone, Debug)]
pub struct Derived {
    pub total1: Rc<i64>,
    pub sorted_names: Rc<Vec<String>>,
    pub total2: i64,
}

/// `total1` and `sorted_names` only recompute when their source list is a
/// different allocation. `total2` is cheap and computed every frame.
///
/// `remember_memo` is a single-slot cache: it compares the deps with the ones
/// it saw last frame and reuses the last result when they match. It does not
/// keep results for older inputs. It is also unrelated to skipping a whole
/// component's frame; it only caches one value.
pub fn use_derivations(
    numbers: &Rc<Vec<i64>>,
    names: &Rc<Vec<String>>,
    count1: i64,
    count2: i64,
) -> Derived {
    // Plain code reruns on every frame, which adds up with thousands of
    // numbers:
    //
    // let total1 = numbers.iter().sum::<i64>();
    //
    // Whatever the closure reads goes in the deps.
    let total1 = remember_memo(ByRef::new(numbers), |n| n.0.iter().sum::<i64>());

    // Worth caching when
    // 1. the work is expensive, or
    // 2. it builds a collection, whose identity should hold between frames.
    //
    // The list is shared, so `names.sort()` is rejected: it needs `&mut`.
    // Sorting a copy leaves the remembered list in its original order.
    let sorted_names = remember_memo(ByRef::new(names), |n| {
        let mut sorted = n.0.as_ref().clone();
        sorted.sort();
        sorted
    });

    Derived {
        total1,
        sorted_names,
        // A sum of two scalars: cheaper than the cache that would hold it.
        total2: count1 + count2,
    }
}

pub fn Memo() -> View {
    let numbers = remember(|| NUMBERS.to_vec());
    let names = remember(|| NAMES.map(String::from).to_vec());
    let count1 = remember(|| signal(0i64));
    let count2 = remember(|| signal(0i64));

    let d = use_derivations(&numbers, &names, count1.get(), count2.get());

    let bump = |count: &Signal<i64>| {
        let count = count.clone();
        move || count.update(|c| *c += 1)
    };

    Section(
        "remember_memo: derived values",
        Column(Modifier::new()).child((
            Text(format!("total1: {}", d.total1)).modifier(Modifier::new().test_tag("memo.total1")),
            Text(format!("names: {}", names.join(", ")))
                .modifier(Modifier::new().test_tag("memo.names")),
            Text(format!("sortedNames: {}", d.sorted_names.join(", ")))
                .modifier(Modifier::new().test_tag("memo.sorted")),
            Row(Modifier::new()).child((
                Button(format!("Count1: {}", count1.get()), bump(count1.as_ref()))
                    .modifier(Modifier::new().test_tag("memo.count1")),
                Button(format!("Count2: {}", count2.get()), bump(count2.as_ref()))
                    .modifier(Modifier::new().test_tag("memo.count2")),
            )),
            Text(format!("total2: {}", d.total2)).modifier(Modifier::new().test_tag("memo.total2")),
        )),
    )
}
