use std::io::Write;

use colored::Colorize;
use hookbook_core::{FontStyle, RenderBackend, Scene, StyledRun};

/// Keeps the last frame as plain text. Used by tests and `--color never`
/// pipelines that post-process the output.
#[derive(Debug, Default)]
pub struct PlainBackend {
    columns: u16,
    last: String,
    frames: usize,
}

impl PlainBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl RenderBackend for PlainBackend {
    fn configure_surface(&mut self, columns: u16) {
        self.columns = columns;
    }

    fn frame(&mut self, scene: &Scene) -> std::io::Result<()> {
        self.last = scene.to_plain_string();
        self.frames += 1;
        Ok(())
    }
}

/// Writes frames to a terminal with 24-bit colors. Whether escapes are emitted
/// follows `colored`'s global switch (`NO_COLOR`, `CLICOLOR_FORCE`, or
/// `colored::control::set_override`).
pub struct AnsiBackend<W: Write> {
    out: W,
    columns: u16,
}

impl<W: Write> AnsiBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out, columns: 80 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled(run: &StyledRun) -> String {
        let c = run.color;
        let mut s = run.text.truecolor(c.0, c.1, c.2);
        if run.style.contains(FontStyle::BOLD) {
            s = s.bold();
        }
        if run.style.contains(FontStyle::ITALIC) {
            s = s.italic();
        }
        if run.style.contains(FontStyle::UNDERLINE) {
            s = s.underline();
        }
        if run.style.contains(FontStyle::DIM) {
            s = s.dimmed();
        }
        s.to_string()
    }
}

impl<W: Write> RenderBackend for AnsiBackend<W> {
    fn configure_surface(&mut self, columns: u16) {
        self.columns = columns.max(1);
    }

    fn frame(&mut self, scene: &Scene) -> std::io::Result<()> {
        let rule = "-".repeat(usize::from(self.columns));
        writeln!(self.out, "{}", rule.dimmed())?;
        for line in &scene.lines {
            let mut text = " ".repeat(line.indent);
            for run in &line.runs {
                text.push_str(&Self::styled(run));
            }
            match line.background {
                Some(bg) if colored::control::SHOULD_COLORIZE.should_colorize() => {
                    writeln!(self.out, "{}", text.on_truecolor(bg.0, bg.1, bg.2))?
                }
                _ => writeln!(self.out, "{text}")?,
            }
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookbook_core::{Color, SceneLine};
    use smallvec::smallvec;

    fn scene() -> Scene {
        Scene {
            clear_color: Color::BLACK,
            lines: vec![SceneLine {
                indent: 2,
                runs: smallvec![
                    StyledRun::new("count", Color::WHITE).styled(FontStyle::BOLD),
                    StyledRun::new(" = 3", Color::WHITE),
                ],
                background: None,
            }],
        }
    }

    #[test]
    fn test_plain_backend_keeps_last_frame() {
        let mut b = PlainBackend::new();
        b.frame(&scene()).unwrap();
        b.frame(&scene()).unwrap();
        assert_eq!(b.last(), "  count = 3");
        assert_eq!(b.frames(), 2);
    }

    #[test]
    fn test_ansi_backend_without_color() {
        colored::control::set_override(false);
        let mut b = AnsiBackend::new(Vec::new());
        b.configure_surface(4);
        b.frame(&scene()).unwrap();
        let out = String::from_utf8(b.into_inner()).unwrap();
        assert_eq!(out, "----\n  count = 3\n");
    }
}
