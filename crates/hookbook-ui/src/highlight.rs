//! Syntax highlighting for code blocks.
//!
//! A small single-pass tokenizer per language, no grammar. Good enough to tell
//! keywords, literals and comments apart in short snippets. Unknown languages
//! fall back to plain text; nothing here can fail.

use hookbook_core::{Color, FontStyle, StyledRun};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Rust,
    JavaScript,
    Json,
    Plain,
}

impl Language {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "rust" | "rs" => Language::Rust,
            "javascript" | "js" | "jsx" => Language::JavaScript,
            "json" => Language::Json,
            "" | "text" | "plain" => Language::Plain,
            other => {
                log::debug!("no highlighter for language '{other}', showing plain text");
                Language::Plain
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::JavaScript => "javascript",
            Language::Json => "json",
            Language::Plain => "text",
        }
    }

    fn has_comments(self) -> bool {
        matches!(self, Language::Rust | Language::JavaScript)
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Language::Rust => &[
                "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else",
                "enum", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
                "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct",
                "super", "trait", "true", "type", "unsafe", "use", "where", "while",
            ],
            Language::JavaScript => &[
                "async", "await", "break", "case", "catch", "class", "const", "continue",
                "default", "delete", "do", "else", "export", "extends", "false", "finally", "for",
                "from", "function", "if", "import", "in", "instanceof", "let", "new", "null",
                "of", "return", "switch", "this", "throw", "true", "try", "typeof", "undefined",
                "var", "void", "while", "yield",
            ],
            Language::Json => &["true", "false", "null"],
            Language::Plain => &[],
        }
    }
}

const RUST_PRIMITIVES: &[&str] = &[
    "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "isize", "str", "u8", "u16", "u32",
    "u64", "usize",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    String,
    Number,
    Comment,
    Punctuation,
    Ident,
    Type,
    Macro,
    Whitespace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Split `src` into tokens. Concatenating the token texts gives back `src`.
pub fn tokenize(src: &str, lang: Language) -> Vec<Token<'_>> {
    if lang == Language::Plain {
        return vec![Token {
            kind: TokenKind::Ident,
            text: src,
        }];
    }

    let mut out = Vec::new();
    let mut i = 0;
    while i < src.len() {
        let rest = &src[i..];
        let Some(c) = rest.chars().next() else {
            break;
        };

        let (kind, len) = if c.is_whitespace() {
            (TokenKind::Whitespace, take_while(rest, char::is_whitespace))
        } else if lang.has_comments() && rest.starts_with("//") {
            (TokenKind::Comment, rest.find('\n').unwrap_or(rest.len()))
        } else if lang.has_comments() && rest.starts_with("/*") {
            let len = rest[2..].find("*/").map_or(rest.len(), |end| end + 4);
            (TokenKind::Comment, len)
        } else if c == '"' || (lang == Language::JavaScript && (c == '\'' || c == '`')) {
            (TokenKind::String, quoted_len(rest, c))
        } else if c == '\'' && lang == Language::Rust {
            match char_literal_len(rest) {
                Some(len) => (TokenKind::String, len),
                // lifetime
                None => (TokenKind::Punctuation, 1),
            }
        } else if c.is_ascii_digit() || (c == '-' && lang == Language::Json) {
            (TokenKind::Number, number_len(rest))
        } else if c.is_alphabetic() || c == '_' || c == '$' {
            let len = take_while(rest, |ch| ch.is_alphanumeric() || ch == '_' || ch == '$');
            let after = &rest[len..];
            if lang == Language::Rust && after.starts_with('!') && !after.starts_with("!=") {
                (TokenKind::Macro, len + 1)
            } else {
                (classify(&rest[..len], lang), len)
            }
        } else {
            (TokenKind::Punctuation, c.len_utf8())
        };

        out.push(Token {
            kind,
            text: &rest[..len],
        });
        i += len;
    }
    out
}

fn classify(word: &str, lang: Language) -> TokenKind {
    if lang.keywords().contains(&word) {
        TokenKind::Keyword
    } else if lang == Language::Json {
        // bare words are not valid JSON; show them as-is
        TokenKind::Ident
    } else if word.starts_with(|c: char| c.is_uppercase())
        || (lang == Language::Rust && RUST_PRIMITIVES.contains(&word))
    {
        TokenKind::Type
    } else {
        TokenKind::Ident
    }
}

fn take_while(s: &str, f: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !f(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Length of a quoted literal starting at `s[0] == quote`, escapes included.
/// Unterminated literals run to the end of the input.
fn quoted_len(s: &str, quote: char) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return i + c.len_utf8();
        }
    }
    s.len()
}

/// `'a'`, `'\n'`, `'\u{1F600}'`. `None` for lifetimes like `'static`.
fn char_literal_len(s: &str) -> Option<usize> {
    let body = &s[1..];
    let first = body.chars().next()?;
    if first == '\\' {
        let escaped = body[1..].chars().next()?;
        let after = 1 + escaped.len_utf8();
        let close = body[after..].find('\'')?;
        (close <= 8).then_some(1 + after + close + 1)
    } else {
        let after = first.len_utf8();
        body[after..].starts_with('\'').then_some(1 + after + 1)
    }
}

fn number_len(s: &str) -> usize {
    let sign = usize::from(s.starts_with('-'));
    let mut len = sign + take_while(&s[sign..], |c| c.is_ascii_alphanumeric() || c == '_');
    let rest = &s[len..];
    if rest.starts_with('.') && rest[1..].starts_with(|c: char| c.is_ascii_digit()) {
        len += 1 + take_while(&rest[1..], |c| c.is_ascii_alphanumeric() || c == '_');
    }
    len
}

/// One rendered source line.
pub type HighlightedLine = SmallVec<[StyledRun; 4]>;

fn paint(kind: TokenKind) -> (Color, FontStyle) {
    match kind {
        TokenKind::Keyword => (Color::from_hex("#C678DD"), FontStyle::BOLD),
        TokenKind::String => (Color::from_hex("#98C379"), FontStyle::empty()),
        TokenKind::Number => (Color::from_hex("#D19A66"), FontStyle::empty()),
        TokenKind::Comment => (Color::from_hex("#7F848E"), FontStyle::ITALIC),
        TokenKind::Type => (Color::from_hex("#E5C07B"), FontStyle::empty()),
        TokenKind::Macro => (Color::from_hex("#61AFEF"), FontStyle::empty()),
        TokenKind::Punctuation => (Color::from_hex("#ABB2BF"), FontStyle::empty()),
        TokenKind::Ident | TokenKind::Whitespace => {
            (Color::from_hex("#DCDFE4"), FontStyle::empty())
        }
    }
}

/// Highlight `text` into one run list per source line.
pub fn highlight(text: &str, lang: Language) -> Vec<HighlightedLine> {
    let mut lines = vec![HighlightedLine::new()];
    for token in tokenize(text, lang) {
        let (color, style) = paint(token.kind);
        for (i, piece) in token.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(HighlightedLine::new());
            }
            let piece = piece.strip_suffix('\r').unwrap_or(piece);
            if piece.is_empty() {
                continue;
            }
            if let Some(line) = lines.last_mut() {
                line.push(StyledRun::new(piece, color).styled(style));
            }
        }
    }
    if text.ends_with('\n') && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}
