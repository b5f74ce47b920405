use hookbook_core::*;

use crate::highlight::{Language, highlight};

/// Read-only source listing. Pure: the same text and tag always produce the
/// same view. An unknown `language` renders as plain text.
pub fn CodeBlock(text: &str, language: &str) -> View {
    let lang = Language::from_tag(language);
    let lines = highlight(text, lang);
    View::new(
        0,
        ViewKind::Code {
            language: lang.name().to_string(),
            lines,
        },
    )
    .modifier(
        Modifier::new()
            .padding(1.0)
            .background(theme().code_background),
    )
    .semantics(Semantics::new(Role::Code).label(lang.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(v: &View) -> Vec<String> {
        match &v.kind {
            ViewKind::Code { lines, .. } => lines
                .iter()
                .map(|runs| runs.iter().map(|r| r.text.as_str()).collect())
                .collect(),
            other => panic!("not a code block: {other:?}"),
        }
    }

    #[test]
    fn test_code_block_is_deterministic() {
        let src = "fn add(a: i32) -> i32 {\n    a + 1\n}\n";
        let a = CodeBlock(src, "rust");
        let b = CodeBlock(src, "rust");
        assert_eq!(lines_of(&a), lines_of(&b));
        assert_eq!(
            lines_of(&a),
            vec!["fn add(a: i32) -> i32 {", "    a + 1", "}"]
        );
        match (&a.kind, &b.kind) {
            (ViewKind::Code { lines: la, .. }, ViewKind::Code { lines: lb, .. }) => {
                assert_eq!(la, lb)
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_unsupported_language_degrades() {
        let v = CodeBlock("SELECT 1;", "sql");
        match &v.kind {
            ViewKind::Code { language, lines } => {
                assert_eq!(language, "text");
                assert_eq!(lines.len(), 1);
                assert_eq!(lines[0].len(), 1);
            }
            other => panic!("not a code block: {other:?}"),
        }
    }
}
