//! Line-oriented action scripts for the headless driver.
//!
//! One command per line; `#` starts a comment.
//!
//! ```text
//! split right
//! stack
//! stack up
//! focus left
//! resize right 2
//! float https://example.com
//! profile mail
//! loaded https://example.com/after-click
//! tick
//! ```

use lattice_common::{Action, Direction, StackStep};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: {message}")]
    BadArgument { line: usize, message: String },
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(Action),
    /// A key combination, resolved through the floating key bindings.
    Key(String),
    /// The focused pane (floating or tiled) reports it loaded a URL on its
    /// own, as a link click would.
    Loaded(String),
    /// One render tick for the resize watchers.
    Tick,
}

pub fn parse(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        commands.push(parse_line(idx + 1, line)?);
    }
    Ok(commands)
}

fn parse_line(line: usize, text: &str) -> Result<Command, ScriptError> {
    let mut words = text.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();
    let bad = |message: String| ScriptError::BadArgument { line, message };

    let action = match (command, args.as_slice()) {
        ("split", [dir]) => Action::Split(direction(line, dir)?),
        ("close", []) => Action::ClosePane,
        ("stack", []) => Action::AddToStack,
        ("stack", ["up"]) => Action::NavigateStack(StackStep::Up),
        ("stack", ["down"]) => Action::NavigateStack(StackStep::Down),
        ("focus", ["next"]) => Action::FocusNext,
        ("focus", ["prev"]) => Action::FocusPrev,
        ("focus", [dir]) => Action::Focus(direction(line, dir)?),
        ("resize", [dir]) => Action::Resize {
            direction: direction(line, dir)?,
            steps: 1,
        },
        ("resize", [dir, steps]) => Action::Resize {
            direction: direction(line, dir)?,
            steps: steps
                .parse()
                .map_err(|_| bad(format!("invalid step count `{steps}`")))?,
        },
        ("swap", [dir]) => Action::SwapPane(direction(line, dir)?),
        ("consume", [dir]) => Action::ConsumeOrExpel(direction(line, dir)?),
        ("tab", ["new"]) => Action::NewTab,
        ("tab", ["close"]) => Action::CloseTab,
        ("tab", ["next"]) => Action::NextTab,
        ("tab", ["prev"]) => Action::PrevTab,
        ("float", []) => Action::ToggleFloatingPane,
        ("float", [url]) => Action::OpenFloatingUrl((*url).to_string()),
        ("float-hide", []) => Action::CloseFloatingPane,
        ("float-release", []) => Action::ReleaseFloatingPane,
        ("profile", [name]) => Action::OpenFloatingProfile((*name).to_string()),
        ("omnibox", []) => Action::ToggleOmnibox,
        ("navigate", [url]) => Action::Navigate((*url).to_string()),
        ("key", [binding]) => return Ok(Command::Key((*binding).to_string())),
        ("loaded", [url]) => return Ok(Command::Loaded((*url).to_string())),
        ("tick", []) => return Ok(Command::Tick),
        (
            "split" | "close" | "stack" | "focus" | "resize" | "swap" | "consume" | "tab" | "float"
            | "float-hide" | "float-release" | "profile" | "omnibox" | "navigate" | "key" | "loaded"
            | "tick",
            _,
        ) => return Err(bad(format!("wrong arguments for `{command}`"))),
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            })
        }
    };
    Ok(Command::Action(action))
}

fn direction(line: usize, word: &str) -> Result<Direction, ScriptError> {
    match word {
        "left" => Ok(Direction::Left),
        "right" => Ok(Direction::Right),
        "up" => Ok(Direction::Up),
        "down" => Ok(Direction::Down),
        other => Err(ScriptError::BadArgument {
            line,
            message: format!("unknown direction `{other}`"),
        }),
    }
}
