//! Typed command surface for the chat boundary.
//!
//! Parses the text of one command invocation (everything after the bot's
//! trigger prefix) into a [`Command`], including the few per-command
//! options the surface recognizes. Positional arguments keep their spaces;
//! option values are single tokens.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Pos { system: Option<String> },
    Whereis { character: String },
    Cache { api_call: String },
    Whoat { all: bool, system: String },
    Ship { all: bool, shiptype: String },
    Chars { username: String },
    Price { location: Option<String>, type_name: String },
    Markets,
    Evetime,
    LocationId { name: String },
    LocationName { id: i64 },
    TypeId { name: String },
    TypeName { id: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Not one of ours; the host should let other handlers try it.
    #[error("unrecognized command")]
    Unrecognized,
    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl Command {
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let input = input.trim();
        let (name, rest) = match input.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (input, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "pos" => Ok(Command::Pos {
                system: optional_text(rest),
            }),
            "whereis" => Ok(Command::Whereis {
                character: required_text(rest, "whereis <character>")?,
            }),
            "cache" => Ok(Command::Cache {
                api_call: required_text(rest, "cache <apiCallName>")?,
            }),
            "whoat" => {
                let (all, rest) = take_all_flag(rest);
                Ok(Command::Whoat {
                    all,
                    system: required_text(&rest, "whoat [--all] <system>")?,
                })
            }
            "ship" => {
                let (all, rest) = take_all_flag(rest);
                Ok(Command::Ship {
                    all,
                    shiptype: required_text(&rest, "ship [--all] <shiptype>")?,
                })
            }
            "chars" => Ok(Command::Chars {
                username: required_text(rest, "chars <username>")?,
            }),
            "price" => {
                let (location, rest) = take_location_option(rest);
                Ok(Command::Price {
                    location,
                    type_name: required_text(&rest, "price [--location=<name>] <typeName>")?,
                })
            }
            "markets" => Ok(Command::Markets),
            "evetime" | "status" => Ok(Command::Evetime),
            "locationid" => Ok(Command::LocationId {
                name: required_text(rest, "locationid <name>")?,
            }),
            "locationname" => Ok(Command::LocationName {
                id: required_id(rest, "locationname <id>")?,
            }),
            "typeid" => Ok(Command::TypeId {
                name: required_text(rest, "typeid <name>")?,
            }),
            "typename" => Ok(Command::TypeName {
                id: required_id(rest, "typename <id>")?,
            }),
            _ => Err(CommandError::Unrecognized),
        }
    }

    /// Commands reading corporation data require a full-access channel.
    pub fn requires_full_access(&self) -> bool {
        matches!(
            self,
            Command::Pos { .. }
                | Command::Whereis { .. }
                | Command::Cache { .. }
                | Command::Whoat { .. }
                | Command::Ship { .. }
                | Command::Chars { .. }
        )
    }
}

fn optional_text(rest: &str) -> Option<String> {
    let rest = rest.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

fn required_text(rest: &str, usage: &'static str) -> Result<String, CommandError> {
    optional_text(rest).ok_or(CommandError::Usage(usage))
}

fn required_id(rest: &str, usage: &'static str) -> Result<i64, CommandError> {
    rest.trim().parse().map_err(|_| CommandError::Usage(usage))
}

/// Strip a leading `--all` flag.
fn take_all_flag(rest: &str) -> (bool, String) {
    match rest.strip_prefix("--all") {
        Some(remainder) if remainder.is_empty() || remainder.starts_with(char::is_whitespace) => {
            (true, remainder.trim().to_string())
        }
        _ => (false, rest.to_string()),
    }
}

/// Strip a leading `--location=<name>` or `--location <name>` option; the
/// value is one token.
fn take_location_option(rest: &str) -> (Option<String>, String) {
    let Some(remainder) = rest.strip_prefix("--location") else {
        return (None, rest.to_string());
    };

    let value_and_rest = if let Some(after_equals) = remainder.strip_prefix('=') {
        after_equals
    } else if remainder.starts_with(char::is_whitespace) {
        remainder.trim_start()
    } else {
        return (None, rest.to_string());
    };

    let mut parts = value_and_rest.splitn(2, char::is_whitespace);
    let value = parts.next().unwrap_or("").to_string();
    let rest = parts.next().unwrap_or("").trim().to_string();

    ((!value.is_empty()).then_some(value), rest)
}
