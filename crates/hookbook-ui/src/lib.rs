#![allow(non_snake_case)]
//! Widgets, children tuples and text styling.

pub mod boundary;
pub mod code;
pub mod highlight;

pub use boundary::{ErrorBoundary, ErrorInfo};
pub use code::CodeBlock;
pub use highlight::{HighlightedLine, Language, Token, TokenKind, highlight, tokenize};

use std::rc::Rc;

use hookbook_core::*;

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

/// Children are laid out on one line.
pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: theme().on_surface,
            style: FontStyle::empty(),
        },
    )
}

/// Section title.
pub fn Heading(text: impl Into<String>) -> View {
    let text = text.into();
    Text(text.clone())
        .color(theme().primary)
        .bold()
        .semantics(Semantics::new(Role::Heading).label(text))
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Button {
            text: text.clone(),
            on_click: Some(Rc::new(on_click)),
        },
    )
    .semantics(Semantics::new(Role::Button).label(text))
}

/// Controlled text field: shows `value` and reports every edit to `on_change`.
pub fn TextField(
    value: impl Into<String>,
    hint: impl Into<String>,
    modifier: Modifier,
    on_change: impl Fn(String) + 'static,
) -> View {
    View::new(
        0,
        ViewKind::TextField {
            value: Some(value.into()),
            hint: hint.into(),
            on_change: Some(Rc::new(on_change)),
            on_submit: None,
        },
    )
    .modifier(modifier)
    .semantics(Semantics::new(Role::TextField))
}

/// Uncontrolled text field. The text lives in `node_ref` and is read on
/// demand; typing never asks for a frame.
pub fn UncontrolledTextField(hint: impl Into<String>, node_ref: &NodeRef, modifier: Modifier) -> View {
    View::new(
        0,
        ViewKind::TextField {
            value: None,
            hint: hint.into(),
            on_change: None,
            on_submit: None,
        },
    )
    .modifier(modifier.node_ref(node_ref.clone()))
    .semantics(Semantics::new(Role::TextField))
}

pub fn Image(src: impl Into<String>, alt: impl Into<String>, modifier: Modifier) -> View {
    let handle = ImageHandle {
        src: src.into(),
        alt: alt.into(),
    };
    let label = handle.alt.clone();
    View::new(0, ViewKind::Image { handle })
        .modifier(modifier)
        .semantics(Semantics::new(Role::Image).label(label))
}

pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn bold(self) -> View;
    fn italic(self) -> View;
    fn dim(self) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = c;
        }
        self
    }
    fn bold(self) -> View {
        with_font_style(self, FontStyle::BOLD)
    }
    fn italic(self) -> View {
        with_font_style(self, FontStyle::ITALIC)
    }
    fn dim(self) -> View {
        with_font_style(self, FontStyle::DIM)
    }
}

fn with_font_style(mut v: View, add: FontStyle) -> View {
    if let ViewKind::Text { style, .. } = &mut v.kind {
        *style |= add;
    }
    v
}

/// Builders for text fields.
pub trait TextFieldExt {
    /// Called with the field's text when the user presses Enter.
    fn on_submit(self, f: impl Fn(String) + 'static) -> View;
}

impl TextFieldExt for View {
    fn on_submit(mut self, f: impl Fn(String) + 'static) -> View {
        if let ViewKind::TextField { on_submit, .. } = &mut self.kind {
            *on_submit = Some(Rc::new(f));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_children_flatten_in_order() {
        let v = Column(Modifier::new()).child((
            Text("a"),
            None::<View>,
            vec![Text("b"), Text("c")],
            Some(Text("d")),
        ));
        assert_eq!(v.text_content(), "a\nb\nc\nd");
    }

    #[test]
    fn test_text_style_only_touches_text() {
        let t = Text("x").bold().italic().color(Color::BLACK);
        match t.kind {
            ViewKind::Text { color, style, .. } => {
                assert_eq!(color, Color::BLACK);
                assert_eq!(style, FontStyle::BOLD | FontStyle::ITALIC);
            }
            other => panic!("unexpected {other:?}"),
        }

        let b = Button("go", || {}).bold();
        assert!(matches!(b.kind, ViewKind::Button { .. }));
    }

    #[test]
    fn test_uncontrolled_field_reads_from_node_ref() {
        let input = NodeRef::new();
        let field = UncontrolledTextField("name", &input, Modifier::new());
        input.set_value("Ada");
        assert_eq!(field.text_content(), "Ada");
        assert!(
            field
                .modifier
                .node_ref
                .as_ref()
                .is_some_and(|r| r.ptr_eq(&input))
        );
    }

    #[test]
    fn test_heading_uses_theme_primary() {
        let dark = Theme::default();
        let h = Heading("useEffect");
        match h.kind {
            ViewKind::Text { color, style, .. } => {
                assert_eq!(color, dark.primary);
                assert!(style.contains(FontStyle::BOLD));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(h.semantics.map(|s| s.role), Some(Role::Heading));
    }
}
