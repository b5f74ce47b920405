//! Each panel's own source, embedded at build time.

use clap::ValueEnum;

/// The examples on the page, in page order. Asking for a snippet that does
/// not exist does not compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Snippet {
    EffectFetch,
    EffectTimer,
    RefFocus,
    RefUncontrolledInput,
    Memo,
    Callback,
    ReducerSimple,
    ReducerMerge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedText {
    pub name: &'static str,
    pub text: &'static str,
}

impl Snippet {
    pub const ALL: [Snippet; 8] = [
        Snippet::EffectFetch,
        Snippet::EffectTimer,
        Snippet::RefFocus,
        Snippet::RefUncontrolledInput,
        Snippet::Memo,
        Snippet::Callback,
        Snippet::ReducerSimple,
        Snippet::ReducerMerge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Snippet::EffectFetch => "effect-fetch",
            Snippet::EffectTimer => "effect-timer",
            Snippet::RefFocus => "ref-focus",
            Snippet::RefUncontrolledInput => "ref-uncontrolled-input",
            Snippet::Memo => "memo",
            Snippet::Callback => "callback",
            Snippet::ReducerSimple => "reducer-simple",
            Snippet::ReducerMerge => "reducer-merge",
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            Snippet::EffectFetch => include_str!("panels/effect_fetch.rs"),
            Snippet::EffectTimer => include_str!("panels/effect_timer.rs"),
            Snippet::RefFocus => include_str!("panels/ref_focus.rs"),
            Snippet::RefUncontrolledInput => include_str!("panels/ref_uncontrolled.rs"),
            Snippet::Memo => include_str!("panels/memo.rs"),
            Snippet::Callback => include_str!("panels/callback.rs"),
            Snippet::ReducerSimple => include_str!("panels/reducer_simple.rs"),
            Snippet::ReducerMerge => include_str!("panels/reducer_merge.rs"),
        }
    }

    pub fn language(self) -> &'static str {
        "rust"
    }

    pub fn named_text(self) -> NamedText {
        NamedText {
            name: self.name(),
            text: self.source(),
        }
    }
}

/// Source text for `snippet`.
pub fn get(snippet: Snippet) -> &'static str {
    snippet.source()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_match_the_cli_spelling() {
        for s in Snippet::ALL {
            let parsed = Snippet::from_str(s.name(), false).expect("every name parses");
            assert_eq!(parsed, s);
        }
    }

    #[test]
    fn every_snippet_is_distinct_source() {
        let texts: HashSet<_> = Snippet::ALL.iter().map(|s| s.named_text().text).collect();
        assert_eq!(texts.len(), Snippet::ALL.len());
        assert!(get(Snippet::Memo).contains("remember_memo"));
        assert!(get(Snippet::EffectTimer).contains("interval("));
    }

    #[test]
    fn shown_sources_keep_the_wrong_way_next_to_the_right_one() {
        let cases = [
            (Snippet::EffectFetch, r#"// load("/names.json""#),
            (Snippet::EffectFetch, "// disposable_effect(picked.get()"),
            (Snippet::EffectTimer, "// interval(TICK"),
            (Snippet::RefFocus, "// input.focus();"),
            (Snippet::Memo, "// let total1 = numbers.iter()"),
            (Snippet::Callback, "// let sort: Rc<SortFn> = Rc::new("),
        ];
        for (snippet, commented) in cases {
            let source = get(snippet);
            assert!(source.contains(commented), "{}: {commented}", snippet.name());
        }
        for snippet in Snippet::ALL {
            let comments = get(snippet)
                .lines()
                .filter(|l| l.trim_start().starts_with("//"))
                .count();
            assert!(comments >= 2, "{} has no explanation", snippet.name());
        }
    }
}
