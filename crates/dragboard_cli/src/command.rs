//! Line command parsing.

use dragboard_core::ProjectStatus;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static ADD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:add)\s+([^|]*)\|([^|]*)\|([^|]*)$").expect("valid add regex")
});
static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:move)\s+([0-9A-Fa-f-]+)\s+(?i)(active|finished)$")
        .expect("valid move regex")
});
static DRAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:drag)\s+([0-9A-Fa-f-]+)$").expect("valid drag regex"));
static TARGET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(over|leave|drop)\s+(active|finished)$").expect("valid target regex")
});

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
        description: String,
        people: String,
    },
    /// Full gesture: start on the card, drag over the view, drop.
    Move { id_prefix: String, to: ProjectStatus },
    Drag { id_prefix: String },
    Over(ProjectStatus),
    Leave(ProjectStatus),
    Drop(ProjectStatus),
    Cancel,
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized command `{}`; type `help`", self.0)
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
commands:
  add <title> | <description> | <people>   create a project through the form
  move <id> <active|finished>              drag a card and drop it on a view
  drag <id>                                start dragging a card
  over <active|finished>                   drag over a view
  leave <active|finished>                  drag off a view
  drop <active|finished>                   release over a view
  cancel                                   abandon the current drag
  show                                     print the rendered document
  json                                     print the store as JSON
  help | quit";

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let command = match line.to_ascii_lowercase().as_str() {
        "cancel" => Some(Command::Cancel),
        "show" => Some(Command::Show),
        "json" => Some(Command::Json),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    };
    if command.is_some() {
        return Ok(command);
    }

    if let Some(caps) = ADD_RE.captures(line) {
        return Ok(Some(Command::Add {
            title: caps[1].trim().to_string(),
            description: caps[2].trim().to_string(),
            people: caps[3].trim().to_string(),
        }));
    }
    if let Some(caps) = MOVE_RE.captures(line) {
        return Ok(Some(Command::Move {
            id_prefix: caps[1].to_ascii_lowercase(),
            to: parse_status(&caps[2])?,
        }));
    }
    if let Some(caps) = DRAG_RE.captures(line) {
        return Ok(Some(Command::Drag {
            id_prefix: caps[1].to_ascii_lowercase(),
        }));
    }
    if let Some(caps) = TARGET_RE.captures(line) {
        let kind = parse_status(&caps[2])?;
        return Ok(Some(match caps[1].to_ascii_lowercase().as_str() {
            "over" => Command::Over(kind),
            "leave" => Command::Leave(kind),
            _ => Command::Drop(kind),
        }));
    }
    Err(ParseError(line.to_string()))
}

fn parse_status(value: &str) -> Result<ProjectStatus, ParseError> {
    value
        .parse::<ProjectStatus>()
        .map_err(|_| ParseError(value.to_string()))
}
