use hookbook_core::*;
use hookbook_ui::*;

use crate::ui::Section;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameEntry {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamesForm {
    pub name: String,
    pub names: Vec<NameEntry>,
    pub next_id: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NamesAction {
    SetName(String),
    /// Append and clear the input.
    AddName(String),
}

pub struct NamesReducer;

impl StateHolder for NamesReducer {
    type State = NamesForm;
    type Action = NamesAction;

    fn initial_state() -> NamesForm {
        NamesForm {
            name: String::new(),
            names: Vec::new(),
            next_id: 1,
        }
    }

    // Build a new form from the old one. Readers tell states apart by the
    // `Rc` holding them, so each transition has to produce a fresh value.
    fn reduce(state: &NamesForm, action: NamesAction) -> NamesForm {
        match action {
            NamesAction::SetName(name) => NamesForm {
                name,
                ..state.clone()
            },
            NamesAction::AddName(name) => {
                let mut names = state.names.clone();
                names.push(NameEntry {
                    id: state.next_id,
                    name,
                });
                NamesForm {
                    name: String::new(),
                    names,
                    next_id: state.next_id + 1,
                }
            }
        }
    }
}

pub fn ReducerSimple() -> View {
    let (state, dispatch) = remember_reducer::<NamesReducer>();

    let rows: Vec<View> = state
        .names
        .iter()
        .map(|e| {
            Text(e.name.clone()).modifier(
                Modifier::new()
                    .key(e.id)
                    .test_tag(format!("reducer.row.{}", e.id)),
            )
        })
        .collect();

    Section(
        "remember_reducer: form",
        Column(Modifier::new()).child((
            TextField(state.name.clone(), "name", Modifier::new().test_tag("reducer.name"), {
                let dispatch = dispatch.clone();
                move |text| dispatch.dispatch(NamesAction::SetName(text))
            }),
            Text(format!("name: {}", state.name)).modifier(Modifier::new().test_tag("reducer.live")),
            Button("Add Name", move || {
                // the handler outlives this frame, so read the latest state
                let name = dispatch.state().name.clone();
                dispatch.dispatch(NamesAction::AddName(name));
            })
            .modifier(Modifier::new().test_tag("reducer.add")),
            Text("names:"),
            Column(Modifier::new().padding(2.0).test_tag("reducer.list")).child(rows),
        )),
    )
}
