use std::str::FromStr;

use pictor::style::StylePreset;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything not starting with `:`. Kept untrimmed; validation happens
    /// in the composer.
    Generate(String),
    Style(StylePreset),
    Styles,
    History,
    /// Export a history entry, `0` being the latest.
    Save(usize),
    Clear,
    Help,
    Quit,
}

pub const HELP: &str = "\
Type a description to generate an image. Commands:
  :style <name>   switch style preset (see :styles)
  :styles         list style presets
  :history        list recent generations
  :save [index]   write a history entry as PNG (default: latest)
  :clear          clear the history
  :help           show this help
  :quit           leave";

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some(rest) = line.trim_start().strip_prefix(':') else {
            return Ok(Command::Generate(line.to_string()));
        };

        let (name, arg) = match rest.trim().split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest.trim(), ""),
        };

        match name {
            "style" if arg.is_empty() => Err("usage: :style <name>".into()),
            "style" => arg
                .parse::<StylePreset>()
                .map(Command::Style)
                .map_err(|err| err.to_string()),
            "styles" => Ok(Command::Styles),
            "history" | "h" => Ok(Command::History),
            "save" if arg.is_empty() => Ok(Command::Save(0)),
            "save" => arg
                .parse::<usize>()
                .map(Command::Save)
                .map_err(|_| format!("not a history index: `{arg}`")),
            "clear" => Ok(Command::Clear),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command `:{other}`, try :help")),
        }
    }
}
