//! Chat command parsing.
//!
//! Turns a prefixed message such as `~league invite "Chess Club" <@1> <@2>` into a
//! typed `Command`. Command words are case-insensitive. League names in `invite` are a
//! single argument and must be double-quoted when they contain spaces; every other
//! subcommand takes the rest of the message as the name.

use crate::error::command::CommandError;

/// A recognised bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    League(LeagueCommand),
    Timezone { city: String },
}

/// Subcommands of `league`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueCommand {
    /// `league` with no subcommand.
    Usage,
    Info { name: String },
    Create { name: String },
    Invite { name: String, members: Vec<u64> },
    Remove { member: u64, name: String },
    Accept { name: String },
    Decline { name: String },
    Invitations,
}

/// Parses a message into a command.
///
/// # Arguments
/// - `prefix` - Command prefix, e.g. `~`
/// - `content` - Raw message content
///
/// # Returns
/// - `Ok(Some(Command))` - The message is a well-formed command
/// - `Ok(None)` - The message is not addressed to the bot
/// - `Err(CommandError)` - The message is a bot command with bad arguments
pub fn parse(prefix: &str, content: &str) -> Result<Option<Command>, CommandError> {
    let Some(body) = content.trim_start().strip_prefix(prefix) else {
        return Ok(None);
    };

    let (word, rest) = split_word(body);
    match word.to_lowercase().as_str() {
        "league" => parse_league(rest).map(|cmd| Some(Command::League(cmd))),
        "timezone" | "tz" => {
            let city = rest.trim();
            if city.is_empty() {
                return Err(CommandError::MissingArgument("city"));
            }
            Ok(Some(Command::Timezone {
                city: city.to_string(),
            }))
        }
        _ => Ok(None),
    }
}

fn parse_league(input: &str) -> Result<LeagueCommand, CommandError> {
    let (subcommand, rest) = split_word(input);

    let command = match subcommand.to_lowercase().as_str() {
        "" => LeagueCommand::Usage,
        "info" | "information" => LeagueCommand::Info {
            name: rest_as_name(rest)?,
        },
        "create" | "make" => LeagueCommand::Create {
            name: rest_as_name(rest)?,
        },
        "invite" | "add" => {
            let mut args = tokenize(rest)?.into_iter();
            let name = args
                .next()
                .ok_or(CommandError::MissingArgument("league name"))?;
            let members = args
                .map(|arg| parse_member(&arg))
                .collect::<Result<Vec<_>, _>>()?;
            if members.is_empty() {
                return Err(CommandError::MissingArgument("members"));
            }
            LeagueCommand::Invite { name, members }
        }
        "remove" | "rem" => {
            let (member, name) = split_word(rest);
            if member.is_empty() {
                return Err(CommandError::MissingArgument("member"));
            }
            LeagueCommand::Remove {
                member: parse_member(member)?,
                name: rest_as_name(name)?,
            }
        }
        "accept" => LeagueCommand::Accept {
            name: rest_as_name(rest)?,
        },
        "decline" => LeagueCommand::Decline {
            name: rest_as_name(rest)?,
        },
        "invitations" | "invites" => LeagueCommand::Invitations,
        other => return Err(CommandError::UnknownSubcommand(other.to_string())),
    };

    Ok(command)
}

/// Splits off the first whitespace-delimited word.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], &input[end..]),
        None => (input, ""),
    }
}

/// Reads the remainder of the message as a league name, unquoting it if quoted.
fn rest_as_name(rest: &str) -> Result<String, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(CommandError::MissingArgument("league name"));
    }

    match rest.strip_prefix('"') {
        Some(quoted) => quoted
            .strip_suffix('"')
            .map(str::to_string)
            .ok_or_else(|| CommandError::UnterminatedQuote(rest.to_string())),
        None => Ok(rest.to_string()),
    }
}

/// Splits arguments on whitespace, keeping double-quoted runs together.
fn tokenize(input: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(CommandError::UnterminatedQuote(input.trim().to_string()));
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Reads a member from a mention (`<@id>`, `<@!id>`) or a raw user ID.
fn parse_member(arg: &str) -> Result<u64, CommandError> {
    let id = arg
        .strip_prefix("<@")
        .and_then(|mention| mention.strip_suffix('>'))
        .map(|mention| mention.strip_prefix('!').unwrap_or(mention))
        .unwrap_or(arg);

    id.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| CommandError::InvalidMember(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn league(content: &str) -> LeagueCommand {
        match parse("~", content) {
            Ok(Some(Command::League(cmd))) => cmd,
            other => panic!("expected league command, got {other:?}"),
        }
    }

    #[test]
    fn ignores_messages_without_prefix_or_unknown_command() {
        assert_eq!(parse("~", "league info Chess"), Ok(None));
        assert_eq!(parse("~", "~help"), Ok(None));
        assert_eq!(parse("~", "~leagues info Chess"), Ok(None));
        assert_eq!(parse("~", ""), Ok(None));
    }

    #[test]
    fn bare_league_is_usage() {
        assert_eq!(league("~league"), LeagueCommand::Usage);
        assert_eq!(league("~league   "), LeagueCommand::Usage);
    }

    #[test]
    fn command_words_are_case_insensitive() {
        assert_eq!(
            league("~LEAGUE Info Chess"),
            LeagueCommand::Info {
                name: "Chess".to_string()
            }
        );
    }

    #[test]
    fn info_and_create_take_rest_of_message_as_name() {
        assert_eq!(
            league("~league information Chess Club"),
            LeagueCommand::Info {
                name: "Chess Club".to_string()
            }
        );
        assert_eq!(
            league("~league make \"Chess Club\""),
            LeagueCommand::Create {
                name: "Chess Club".to_string()
            }
        );
    }

    #[test]
    fn invite_reads_quoted_name_and_mentions() {
        assert_eq!(
            league("~league add \"Chess Club\" <@11> <@!12> 13"),
            LeagueCommand::Invite {
                name: "Chess Club".to_string(),
                members: vec![11, 12, 13],
            }
        );
    }

    #[test]
    fn invite_requires_members() {
        assert_eq!(
            parse("~", "~league invite Chess"),
            Err(CommandError::MissingArgument("members"))
        );
        assert_eq!(
            parse("~", "~league invite"),
            Err(CommandError::MissingArgument("league name"))
        );
    }

    #[test]
    fn invite_rejects_invalid_members() {
        assert_eq!(
            parse("~", "~league invite Chess @someone"),
            Err(CommandError::InvalidMember("@someone".to_string()))
        );
        assert_eq!(
            parse("~", "~league invite Chess <@0>"),
            Err(CommandError::InvalidMember("<@0>".to_string()))
        );
    }

    #[test]
    fn invite_rejects_unterminated_quote() {
        assert!(matches!(
            parse("~", "~league invite \"Chess Club <@1>"),
            Err(CommandError::UnterminatedQuote(_))
        ));
    }

    #[test]
    fn remove_takes_member_then_name() {
        assert_eq!(
            league("~league rem <@22> Chess Club"),
            LeagueCommand::Remove {
                member: 22,
                name: "Chess Club".to_string()
            }
        );
        assert_eq!(
            parse("~", "~league remove <@22>"),
            Err(CommandError::MissingArgument("league name"))
        );
    }

    #[test]
    fn parses_invitation_responses() {
        assert_eq!(
            league("~league accept Chess"),
            LeagueCommand::Accept {
                name: "Chess".to_string()
            }
        );
        assert_eq!(
            league("~league decline Chess"),
            LeagueCommand::Decline {
                name: "Chess".to_string()
            }
        );
        assert_eq!(league("~league invitations"), LeagueCommand::Invitations);
    }

    #[test]
    fn unknown_subcommand_is_an_error() {
        assert_eq!(
            parse("~", "~league delete Chess"),
            Err(CommandError::UnknownSubcommand("delete".to_string()))
        );
    }

    #[test]
    fn timezone_takes_city_with_spaces() {
        assert_eq!(
            parse("~", "~tz  New York "),
            Ok(Some(Command::Timezone {
                city: "New York".to_string()
            }))
        );
        assert_eq!(
            parse("~", "~timezone"),
            Err(CommandError::MissingArgument("city"))
        );
    }

    #[test]
    fn supports_multi_character_prefix() {
        assert_eq!(
            parse("lb!", "lb!league invitations"),
            Ok(Some(Command::League(LeagueCommand::Invitations)))
        );
    }
}
