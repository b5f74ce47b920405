use crate::{Color, Modifier};
use bitflags::bitflags;
use smallvec::SmallVec;
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type TextCallback = Rc<dyn Fn(String)>;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontStyle: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const DIM = 1 << 3;
    }
}

/// A piece of text with one color and style.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRun {
    pub text: String,
    pub color: Color,
    pub style: FontStyle,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            style: FontStyle::empty(),
        }
    }

    pub fn styled(mut self, style: FontStyle) -> Self {
        self.style |= style;
        self
    }
}

pub type Runs = SmallVec<[StyledRun; 4]>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageHandle {
    pub src: String,
    pub alt: String,
}

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    Text {
        text: String,
        color: Color,
        style: FontStyle,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
    /// `value: None` means uncontrolled: the text lives in the field's `NodeRef`.
    TextField {
        value: Option<String>,
        hint: String,
        on_change: Option<TextCallback>,
        on_submit: Option<TextCallback>,
    },
    Image {
        handle: ImageHandle,
    },
    Code {
        language: String,
        lines: Vec<Runs>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Text { text, color, style } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("style", style)
                .finish(),
            ViewKind::Button { text, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::TextField { value, hint, .. } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("hint", hint)
                .finish(),
            ViewKind::Image { handle } => f.debug_struct("Image").field("handle", handle).finish(),
            ViewKind::Code { language, lines } => f
                .debug_struct("Code")
                .field("language", language)
                .field("lines", &lines.len())
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Concatenated text content of this subtree, one line per leaf.
    pub fn text_content(&self) -> String {
        fn walk(v: &View, out: &mut Vec<String>) {
            match &v.kind {
                ViewKind::Text { text, .. } | ViewKind::Button { text, .. } => {
                    out.push(text.clone())
                }
                ViewKind::TextField { value: Some(value), .. } => out.push(value.clone()),
                ViewKind::TextField { value: None, .. } => {
                    if let Some(node_ref) = &v.modifier.node_ref {
                        out.push(node_ref.value());
                    }
                }
                ViewKind::Image { handle } => out.push(handle.alt.clone()),
                ViewKind::Code { lines, .. } => out.extend(
                    lines
                        .iter()
                        .map(|runs| runs.iter().map(|r| r.text.as_str()).collect::<String>()),
                ),
                ViewKind::Surface | ViewKind::Box | ViewKind::Row | ViewKind::Column => {}
            }
            for c in &v.children {
                walk(c, out);
            }
        }
        let mut out = Vec::new();
        walk(self, &mut out);
        out.join("\n")
    }
}

/// Renderable scene: terminal-style lines of styled runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub clear_color: Color,
    pub lines: Vec<SceneLine>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneLine {
    pub indent: usize,
    pub runs: Runs,
    pub background: Option<Color>,
}

impl SceneLine {
    pub fn plain_text(&self) -> String {
        let mut s = " ".repeat(self.indent);
        for run in &self.runs {
            s.push_str(&run.text);
        }
        s
    }
}

impl Scene {
    pub fn to_plain_string(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.plain_text().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
