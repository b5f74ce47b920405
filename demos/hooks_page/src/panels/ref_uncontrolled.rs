use std::rc::Rc;

use hookbook_core::*;
use hookbook_ui::*;

use crate::ui::Section;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub name: String,
}

/// The input's text and the id counter live in refs; only the list is state.
pub fn RefUncontrolledInput() -> View {
    // bound to the text field below, which owns its own text
    let input = remember_node_ref();
    // bumping this never redraws anything
    let next_id = remember_ref(|| 1u64);
    let names = remember(|| signal(Vec::<Entry>::new()));

    let add: Rc<dyn Fn()> = Rc::new({
        let input = input.clone();
        let names = names.as_ref().clone();
        move || {
            // read the text out of the element itself
            let name = input.value();
            // take the current id and leave the next one behind
            let id = next_id.with_mut(|n| std::mem::replace(n, *n + 1));
            names.update(|list| list.push(Entry { id, name }));
            input.clear();
        }
    });

    let rows: Vec<View> = names.with(|list| {
        list.iter()
            .map(|e| {
                Text(format!("{} - {}", e.id, e.name)).modifier(
                    Modifier::new()
                        .key(e.id)
                        .test_tag(format!("refs.row.{}", e.id)),
                )
            })
            .collect()
    });

    Section(
        "remember_ref: uncontrolled input",
        Column(Modifier::new()).child((
            Row(Modifier::new()).child((
                UncontrolledTextField("name", &input, Modifier::new().test_tag("refs.input"))
                    .on_submit({
                        let add = add.clone();
                        move |_| add()
                    }),
                Button("Add Name", move || add()).modifier(Modifier::new().test_tag("refs.add")),
            )),
            Column(Modifier::new().test_tag("refs.list")).child(rows),
        )),
    )
}
