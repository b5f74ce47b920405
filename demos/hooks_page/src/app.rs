#![allow(non_snake_case)]

use hookbook_core::*;
use hookbook_ui::*;

use crate::panels;
use crate::snippets::Snippet;
use crate::ui::{PanelCrashed, TopBar};

pub const TITLE: &str = "Hooks, in Rust";

/// Root builder for the page, or for a single panel when `only` is set.
pub fn page(only: Option<Snippet>) -> impl FnMut(&mut Scheduler) -> View + 'static {
    move |_| compose_page(only)
}

/// The whole page.
pub fn app(_s: &mut Scheduler) -> View {
    compose_page(None)
}

fn compose_page(only: Option<Snippet>) -> View {
    with_theme(Theme::default(), || {
        let pairs: Vec<View> = Snippet::ALL
            .into_iter()
            .filter(|s| only.is_none_or(|o| o == *s))
            .map(Pair)
            .collect();

        Column(Modifier::new().background(theme().background)).child((
            Header(),
            Column(Modifier::new()).child(pairs),
        ))
    })
}

fn Header() -> View {
    TopBar().child((
        Image("teacher.png", "teacher", Modifier::new()),
        Heading(TITLE),
        Image("hook.png", "hook", Modifier::new()),
    ))
}

/// A live panel followed by its source. Each pair keeps its own slots and
/// its own scope, and a panel that panics is replaced without touching its
/// neighbours.
fn Pair(snippet: Snippet) -> View {
    scope_group(snippet.name(), || {
        Column(Modifier::new().test_tag(snippet.name())).child((
            ErrorBoundary(snippet.name(), PanelCrashed, || panels::render(snippet)),
            CodeBlock(snippet.source(), snippet.language()),
        ))
    })
}
