use hookbook_core::*;
use hookbook_ui::*;

use crate::ui::Section;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FullName {
    pub first: String,
    pub last: String,
}

/// Partial update. Only the fields that are set replace the current ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FullNamePatch {
    pub first: Option<String>,
    pub last: Option<String>,
}

impl FullNamePatch {
    pub fn first(v: impl Into<String>) -> Self {
        Self {
            first: Some(v.into()),
            ..Self::default()
        }
    }

    pub fn last(v: impl Into<String>) -> Self {
        Self {
            last: Some(v.into()),
            ..Self::default()
        }
    }
}

pub struct FullNameReducer;

impl StateHolder for FullNameReducer {
    type State = FullName;
    type Action = FullNamePatch;

    fn initial_state() -> FullName {
        FullName::default()
    }

    // One action for every field: whatever the patch carries wins, the rest
    // is kept. Each input just dispatches the field it owns.
    fn reduce(state: &FullName, patch: FullNamePatch) -> FullName {
        FullName {
            first: patch.first.unwrap_or_else(|| state.first.clone()),
            last: patch.last.unwrap_or_else(|| state.last.clone()),
        }
    }
}

pub fn ReducerMerge() -> View {
    let (name, dispatch) = remember_reducer::<FullNameReducer>();

    let field = |value: &str, hint: &str, tag: &str, patch: fn(String) -> FullNamePatch| {
        let dispatch = dispatch.clone();
        TextField(value, hint, Modifier::new().test_tag(tag), move |text| {
            dispatch.dispatch(patch(text))
        })
    };

    Section(
        "remember_reducer: merged patch",
        Column(Modifier::new()).child((
            field(&name.first, "first", "merge.first", FullNamePatch::first),
            field(&name.last, "last", "merge.last", FullNamePatch::last),
            Text(format!("first: {} last: {}", name.first, name.last))
                .modifier(Modifier::new().test_tag("merge.summary")),
        )),
    )
}
