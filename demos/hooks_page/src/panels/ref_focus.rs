use hookbook_core::*;
use hookbook_ui::*;

use crate::ui::Section;

/// Moves focus into its input once, right after the input exists.
///
/// Writing to a ref never asks for a frame. The usual ref is a handle to a
/// rendered element, read and written through its methods.
pub fn RefFocus() -> View {
    let input = remember_node_ref();

    // Focusing from the body is too early: on the first frame the handle is
    // not bound to an element yet.
    //
    // input.focus();
    //
    // Effects run once the tree is built and every handle is bound.
    mount_effect({
        let input = input.clone();
        move || {
            input.focus();
            Dispose::noop()
        }
    });

    Section(
        "remember_node_ref: focus on mount",
        UncontrolledTextField("type here", &input, Modifier::new().test_tag("focus.input")),
    )
}
