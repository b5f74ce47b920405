//! Line-oriented interactive session: read a command, apply it, repaint.

use std::io::BufRead;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use hookbook_core::RenderBackend;

use crate::{App, PlatformError};

const HELP: &str = "\
commands:
  click <tag|label>     press a button (or focus a field)
  type <tag> <text>     replace a field's text
  submit <tag>          press Enter in a field
  wait [secs]           let time pass (default 1)
  show                  repaint
  help                  this text
  quit                  leave";

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Click(String),
    Type { target: String, text: String },
    Submit(String),
    Wait(Duration),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = PlatformError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));
        let usage = |u: &str| PlatformError::BadCommand(format!("usage: {u}"));

        match word {
            "click" | "c" if rest.is_empty() => Err(usage("click <tag|label>")),
            "click" | "c" => Ok(Command::Click(rest.to_string())),
            "type" | "t" => {
                let (target, text) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(t, x)| (t, x.trim_start()));
                if target.is_empty() {
                    return Err(usage("type <tag> <text>"));
                }
                Ok(Command::Type {
                    target: target.to_string(),
                    text: text.to_string(),
                })
            }
            "submit" | "enter" if rest.is_empty() => Err(usage("submit <tag>")),
            "submit" | "enter" => Ok(Command::Submit(rest.to_string())),
            "wait" | "w" => {
                let secs: f64 = if rest.is_empty() {
                    1.0
                } else {
                    rest.parse()
                        .map_err(|_| PlatformError::BadCommand(format!("not seconds: {rest}")))?
                };
                if !secs.is_finite() || secs < 0.0 {
                    return Err(PlatformError::BadCommand(format!("not seconds: {rest}")));
                }
                Ok(Command::Wait(Duration::from_secs_f64(secs)))
            }
            "" | "show" | "s" => Ok(Command::Show),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(PlatformError::BadCommand(format!(
                "unknown command '{other}' (try 'help')"
            ))),
        }
    }
}

/// Paint the app, then apply commands from `input` until `quit` or EOF.
/// Bad commands and missing targets are reported and skipped.
pub fn run_terminal_session(
    app: &mut App,
    backend: &mut dyn RenderBackend,
    input: impl BufRead,
) -> anyhow::Result<()> {
    app.pump()?;
    app.render(backend).context("painting first frame")?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        log::debug!("command: {command:?}");

        let outcome = match command {
            Command::Quit => break,
            Command::Help => {
                eprintln!("{HELP}");
                continue;
            }
            Command::Show => app.pump().map(|_| ()),
            Command::Click(target) => app.click(&target),
            Command::Type { target, text } => app.input(&target, &text),
            Command::Submit(target) => app.submit(&target),
            Command::Wait(d) => app.advance(d).map(|_| ()),
        };
        if let Err(e) = outcome {
            eprintln!("{e}");
        }
        app.render(backend).context("painting frame")?;
    }

    app.unmount();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "click inc".parse::<Command>().unwrap(),
            Command::Click("inc".into())
        );
        assert_eq!(
            "click Add Name".parse::<Command>().unwrap(),
            Command::Click("Add Name".into())
        );
        assert_eq!(
            "type name  Mary Ann".parse::<Command>().unwrap(),
            Command::Type {
                target: "name".into(),
                text: "Mary Ann".into()
            }
        );
        assert_eq!(
            "type name".parse::<Command>().unwrap(),
            Command::Type {
                target: "name".into(),
                text: String::new()
            }
        );
        assert_eq!(
            "wait 2.5".parse::<Command>().unwrap(),
            Command::Wait(Duration::from_millis(2500))
        );
        assert_eq!("".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_reject_bad_commands() {
        for bad in ["click", "wait soon", "wait -1", "dance"] {
            assert!(
                matches!(bad.parse::<Command>(), Err(PlatformError::BadCommand(_))),
                "{bad}"
            );
        }
    }
}
