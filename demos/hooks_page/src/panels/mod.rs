//! One panel per hook. Each file is also the text shown beside its panel, so
//! tests for these live in `tests/panels.rs`.
#![allow(non_snake_case)]

pub mod callback;
pub mod effect_fetch;
pub mod effect_timer;
pub mod memo;
pub mod reducer_merge;
pub mod reducer_simple;
pub mod ref_focus;
pub mod ref_uncontrolled;

pub use callback::Callback;
pub use effect_fetch::EffectFetch;
pub use effect_timer::EffectTimer;
pub use memo::Memo;
pub use reducer_merge::ReducerMerge;
pub use reducer_simple::ReducerSimple;
pub use ref_focus::RefFocus;
pub use ref_uncontrolled::RefUncontrolledInput;

use hookbook_core::View;

use crate::snippets::Snippet;

/// Compose the live example for `snippet`.
pub fn render(snippet: Snippet) -> View {
    match snippet {
        Snippet::EffectFetch => EffectFetch(),
        Snippet::EffectTimer => EffectTimer(),
        Snippet::RefFocus => RefFocus(),
        Snippet::RefUncontrolledInput => RefUncontrolledInput(),
        Snippet::Memo => Memo(),
        Snippet::Callback => Callback(),
        Snippet::ReducerSimple => ReducerSimple(),
        Snippet::ReducerMerge => ReducerMerge(),
    }
}
