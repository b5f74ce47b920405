use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::snippets::Snippet;

#[derive(Parser, Debug)]
#[command(name = "hooks-page", version, about = "A page of hook examples, painted in the terminal")]
pub struct Cli {
    /// Directory holding names.json and the per-name records
    #[arg(long, env = "HOOKBOOK_ASSETS", default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))]
    pub assets: PathBuf,

    /// When to emit ANSI colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Read commands from stdin (click, type, wait, ...) instead of painting once
    #[arg(short, long)]
    pub interactive: bool,

    /// How long to let timers and reads run before the one-shot paint
    #[arg(long, default_value_t = 0)]
    pub settle_ms: u64,

    /// Show only one example
    #[arg(long, value_enum)]
    pub panel: Option<Snippet>,

    /// Width of the frame rule
    #[arg(long, default_value_t = 80)]
    pub columns: u16,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => {}
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "hooks-page",
            "--color",
            "never",
            "--panel",
            "ref-uncontrolled-input",
            "--settle-ms",
            "1500",
        ]);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.panel, Some(Snippet::RefUncontrolledInput));
        assert_eq!(cli.settle_ms, 1500);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_rejects_unknown_panel() {
        assert!(Cli::try_parse_from(["hooks-page", "--panel", "use-state"]).is_err());
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
