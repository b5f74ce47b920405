#![allow(non_snake_case)]

use hookbook_core::prelude::*;
use hookbook_ui::*;

/// A titled panel with consistent spacing.
pub fn Section(title: &str, body: View) -> View {
    Column(Modifier::new().padding(1.0)).child((
        Heading(title),
        Surface(
            Modifier::new().padding(2.0).background(theme().surface),
            body,
        ),
    ))
}

/// Page header strip.
pub fn TopBar() -> View {
    Row(Modifier::new().padding(1.0).background(theme().surface))
}

/// Inline failure message inside a panel.
pub fn ErrorLine(message: impl AsRef<str>) -> View {
    Text(format!("error: {}", message.as_ref()))
        .color(theme().error)
        .italic()
}

/// Stand-in for a panel that panicked while composing.
pub fn PanelCrashed(info: ErrorInfo) -> View {
    Section(
        &info.component,
        ErrorLine(format!("panel crashed: {}", info.message))
            .modifier(Modifier::new().test_tag(format!("{}.crashed", info.component))),
    )
}
