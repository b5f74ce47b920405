//! View tree -> terminal scene.
//!
//! Block views (`Column`, `Box`, `Surface`) stack their children, indented by
//! the container's padding. A `Row` flattens everything under it onto a single
//! line. Code blocks get a line-number gutter.

use hookbook_core::view::Runs;
use hookbook_core::*;
use smallvec::smallvec;

pub fn paint(root: &View, focused: Option<ViewId>) -> Scene {
    let mut p = Painter {
        lines: Vec::new(),
        focused,
        theme: theme(),
    };
    p.block(root, 0);
    Scene {
        clear_color: p.theme.background,
        lines: p.lines,
    }
}

struct Painter {
    lines: Vec<SceneLine>,
    focused: Option<ViewId>,
    theme: Theme,
}

fn padding(v: &View) -> usize {
    v.modifier.padding.map_or(0, |p| p.max(0.0).round() as usize)
}

impl Painter {
    fn push(&mut self, indent: usize, runs: Runs, background: Option<Color>) {
        self.lines.push(SceneLine {
            indent,
            runs,
            background,
        });
    }

    fn block(&mut self, v: &View, indent: usize) {
        let inner = indent + padding(v);
        match &v.kind {
            ViewKind::Row => {
                let mut runs = Runs::new();
                for c in &v.children {
                    self.inline(c, &mut runs);
                }
                self.push(inner, runs, v.modifier.background);
                return;
            }
            ViewKind::Surface | ViewKind::Box | ViewKind::Column => {}
            ViewKind::Text {
                text, color, style, ..
            } => {
                for part in text.split('\n') {
                    self.push(
                        indent,
                        smallvec![StyledRun::new(part, *color).styled(*style)],
                        v.modifier.background,
                    );
                }
            }
            ViewKind::Code { lines, .. } => {
                let width = lines.len().to_string().len();
                for (n, runs) in lines.iter().enumerate() {
                    let mut line: Runs = smallvec![StyledRun::new(
                        format!("{:>width$} | ", n + 1),
                        self.theme.muted
                    )];
                    line.extend(runs.iter().cloned());
                    self.push(inner, line, Some(self.theme.code_background));
                }
            }
            ViewKind::Button { .. } | ViewKind::TextField { .. } | ViewKind::Image { .. } => {
                let mut runs = Runs::new();
                self.leaf(v, &mut runs);
                self.push(indent, runs, v.modifier.background);
            }
        }
        for c in &v.children {
            self.block(c, inner);
        }
    }

    fn inline(&self, v: &View, out: &mut Runs) {
        match &v.kind {
            ViewKind::Row | ViewKind::Column | ViewKind::Box | ViewKind::Surface => {
                for c in &v.children {
                    self.inline(c, out);
                }
            }
            ViewKind::Code { .. } => log::debug!("code block inside a row is not painted"),
            _ => {
                if !out.is_empty() {
                    out.push(StyledRun::new(" ", self.theme.on_surface));
                }
                self.leaf(v, out);
            }
        }
    }

    fn leaf(&self, v: &View, out: &mut Runs) {
        let focused = self.focused == Some(v.id);
        match &v.kind {
            ViewKind::Text {
                text, color, style, ..
            } => out.push(StyledRun::new(text.replace('\n', " "), *color).styled(*style)),
            ViewKind::Button { text, .. } => {
                let mut style = FontStyle::BOLD;
                if focused {
                    style |= FontStyle::UNDERLINE;
                }
                out.push(StyledRun::new(format!("[ {text} ]"), self.theme.primary).styled(style));
            }
            ViewKind::TextField { value, hint, .. } => {
                let current = match value {
                    Some(value) => value.clone(),
                    None => v
                        .modifier
                        .node_ref
                        .as_ref()
                        .map(NodeRef::value)
                        .unwrap_or_default(),
                };
                let caret = if focused { "_" } else { "" };
                out.push(StyledRun::new("[", self.theme.outline));
                if current.is_empty() && !focused {
                    out.push(
                        StyledRun::new(hint.clone(), self.theme.muted)
                            .styled(FontStyle::DIM | FontStyle::ITALIC),
                    );
                } else {
                    let color = if focused {
                        self.theme.focus
                    } else {
                        self.theme.on_surface
                    };
                    out.push(StyledRun::new(format!("{current}{caret}"), color));
                }
                out.push(StyledRun::new("]", self.theme.outline));
            }
            ViewKind::Image { handle } => out.push(
                StyledRun::new(format!("[image: {}]", handle.alt), self.theme.muted)
                    .styled(FontStyle::ITALIC),
            ),
            ViewKind::Code { .. }
            | ViewKind::Row
            | ViewKind::Column
            | ViewKind::Box
            | ViewKind::Surface => {}
        }
    }
}
