//! Line commands accepted on stdin.
//!
//! One command per line. The verb is case-insensitive; arguments are
//! passed through as typed (`rename` keeps inner spaces).

use std::str::FromStr;

use idlepet_types::CareAction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Earn one tap's worth of currency.
    Tap,
    /// Apply a care action.
    Act(CareAction),
    /// Buy one unit of the upgrade with this id.
    Buy(String),
    /// Rename the pet. An empty name falls back to the default.
    Rename(String),
    /// Start over, keeping the pet's name.
    Reset,
    /// Persist immediately.
    Save,
    /// Print the current snapshot.
    Status,
    /// Print the shop listing.
    Shop,
    /// Print the command list.
    Help,
    /// Save and exit.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    /// The line was blank.
    #[error("empty command")]
    Empty,

    /// The verb is not a known command.
    #[error("unknown command: {0}")]
    Unknown(String),

    /// The command needs an argument that was not given.
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));
        let verb = verb.to_ascii_lowercase();

        match verb.as_str() {
            "" => Err(ParseCommandError::Empty),
            "tap" => Ok(Self::Tap),
            "buy" if rest.is_empty() => Err(ParseCommandError::MissingArgument("buy")),
            "buy" => Ok(Self::Buy(rest.to_owned())),
            "rename" => Ok(Self::Rename(rest.to_owned())),
            "reset" => Ok(Self::Reset),
            "save" => Ok(Self::Save),
            "status" => Ok(Self::Status),
            "shop" => Ok(Self::Shop),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => other
                .parse::<CareAction>()
                .map(Self::Act)
                .map_err(|e| ParseCommandError::Unknown(e.0)),
        }
    }
}

/// One-line usage summary printed by `help`.
pub const USAGE: &str =
    "commands: tap | feed | play | nap | clean | buy <id> | rename <name> | reset | save | status | shop | quit";
