//! Embeds the bot answers commands with.
//!
//! Green embeds report success, red embeds report anything the member has to fix.
//! Errors that are not meant for the member get `failure`, which carries no details.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serenity::all::CreateEmbed;

use crate::model::{
    league::{InviteOutcome, League, LeagueSummary},
    timezone::TimezoneName,
};

const GREEN: u32 = 0x2ecc71;
const RED: u32 = 0xe74c3c;

fn mention(user_id: u64) -> String {
    format!("<@{}>", user_id)
}

fn mention_lines(user_ids: &[u64]) -> String {
    user_ids
        .iter()
        .map(|id| mention(*id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// League owner and leaderboard, highest score first.
pub fn league_info(summary: &LeagueSummary) -> CreateEmbed {
    let members = summary
        .leaderboard
        .iter()
        .enumerate()
        .map(|(rank, entry)| format!("{}. {} ({})", rank + 1, mention(entry.user_id), entry.score))
        .collect::<Vec<_>>()
        .join("\n");

    CreateEmbed::new()
        .title(&summary.league.name)
        .description("Information about the following league.")
        .color(GREEN)
        .field("Owner", mention(summary.league.owner_id), false)
        .field("Members", members, false)
}

pub fn league_created(league: &League) -> CreateEmbed {
    CreateEmbed::new()
        .title("League created")
        .description(format!("Your league, {}, has been created!", league.name))
        .color(GREEN)
}

/// Lists who was invited and, when any, who already had an invitation or membership.
pub fn invitations_sent(name: &str, outcome: &InviteOutcome) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Invitations have been sent!")
        .color(GREEN);

    embed = if outcome.invited.is_empty() {
        embed.description(format!("Nobody new was invited to the league '{}'.", name))
    } else {
        embed.description(format!(
            "Invitations to the league '{}' were sent to:\n{}",
            name,
            mention_lines(&outcome.invited)
        ))
    };

    if !outcome.skipped.is_empty() {
        embed = embed.field(
            "Already invited or in the league",
            mention_lines(&outcome.skipped),
            false,
        );
    }

    embed
}

pub fn member_removed(name: &str, member_id: u64) -> CreateEmbed {
    CreateEmbed::new()
        .title("Success!")
        .description(format!(
            "{} was removed from the league {}!",
            mention(member_id),
            name
        ))
        .color(GREEN)
}

pub fn not_owner(name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Are you trying to break me?")
        .description(format!("You aren't the owner of the league {}!", name))
        .color(RED)
}

pub fn invitation_accepted(league: &League) -> CreateEmbed {
    CreateEmbed::new()
        .title("Welcome!")
        .description(format!("You have joined the league {}!", league.name))
        .color(GREEN)
}

pub fn invitation_declined(name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Invitation declined")
        .description(format!("You declined the invitation to the league {}.", name))
        .color(GREEN)
}

pub fn pending_invitations(names: &[String]) -> CreateEmbed {
    let description = if names.is_empty() {
        "You have no pending invitations.".to_string()
    } else {
        names.join("\n")
    };

    CreateEmbed::new()
        .title("Pending invitations")
        .description(description)
        .color(GREEN)
}

pub fn usage(prefix: &str) -> CreateEmbed {
    let commands = [
        "league info <name>",
        "league create <name>",
        "league invite \"<name>\" <members...>",
        "league remove <member> <name>",
        "league accept <name>",
        "league decline <name>",
        "league invitations",
        "timezone <city>",
    ];

    CreateEmbed::new()
        .title("League commands")
        .description(
            commands
                .iter()
                .map(|command| format!("`{}{}`", prefix, command))
                .collect::<Vec<_>>()
                .join("\n"),
        )
        .color(GREEN)
}

/// Timezone of a city with the current local time there.
///
/// Names the offline index knows but chrono-tz does not are shown without a time.
pub fn timezone(city: &str, timezone: &TimezoneName, now: DateTime<Utc>) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("Timezone of {}", city))
        .description(timezone.as_str())
        .color(GREEN);

    if let Ok(tz) = timezone.as_str().parse::<Tz>() {
        let local = now.with_timezone(&tz);
        embed = embed.field(
            "Local time",
            local.format("%Y-%m-%d %H:%M (%Z)").to_string(),
            false,
        );
    }

    embed
}

/// A problem the member can fix, shown with its message.
pub fn user_error(message: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title("Something's wrong")
        .description(message)
        .color(RED)
}

pub fn failure() -> CreateEmbed {
    CreateEmbed::new()
        .title("Something went wrong")
        .description("The command could not be completed. Please try again later.")
        .color(RED)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::{json, Value};

    use super::*;
    use crate::model::league::LeaderboardEntry;

    fn to_json(embed: CreateEmbed) -> Value {
        serde_json::to_value(embed).unwrap()
    }

    fn league() -> League {
        League {
            id: 1,
            guild_id: 100,
            name: "Chess".to_string(),
            owner_id: 1,
            jobs: Default::default(),
            latest: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn league_info_lists_owner_and_ranked_members() {
        let summary = LeagueSummary {
            league: league(),
            leaderboard: vec![
                LeaderboardEntry {
                    user_id: 2,
                    score: 5,
                },
                LeaderboardEntry {
                    user_id: 1,
                    score: 0,
                },
            ],
        };

        let embed = to_json(league_info(&summary));

        assert_eq!(embed["title"], "Chess");
        assert_eq!(embed["color"], GREEN);
        assert_eq!(embed["fields"][0]["value"], "<@1>");
        assert_eq!(embed["fields"][1]["value"], "1. <@2> (5)\n2. <@1> (0)");
    }

    #[test]
    fn not_owner_is_red() {
        let embed = to_json(not_owner("Chess"));

        assert_eq!(embed["title"], "Are you trying to break me?");
        assert_eq!(embed["description"], "You aren't the owner of the league Chess!");
        assert_eq!(embed["color"], RED);
    }

    #[test]
    fn invitations_sent_reports_skipped_members() {
        let outcome = InviteOutcome {
            invited: vec![11, 12],
            skipped: vec![13],
        };

        let embed = to_json(invitations_sent("Chess", &outcome));

        assert_eq!(
            embed["description"],
            "Invitations to the league 'Chess' were sent to:\n<@11>\n<@12>"
        );
        assert_eq!(embed["fields"][0]["value"], "<@13>");
    }

    #[test]
    fn invitations_sent_without_skips_has_no_fields() {
        let outcome = InviteOutcome {
            invited: vec![11],
            skipped: Vec::new(),
        };

        let embed = to_json(invitations_sent("Chess", &outcome));

        assert!(embed.get("fields").map_or(true, |fields| fields == &json!([])));
    }

    #[test]
    fn timezone_shows_local_time() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();

        let embed = to_json(timezone(
            "Tokyo",
            &TimezoneName("Asia/Tokyo".to_string()),
            now,
        ));

        assert_eq!(embed["description"], "Asia/Tokyo");
        assert_eq!(embed["fields"][0]["value"], "2026-01-15 21:00 (JST)");
    }

    #[test]
    fn timezone_unknown_to_chrono_tz_has_no_time() {
        let embed = to_json(timezone(
            "Nowhere",
            &TimezoneName("Mars/Olympus_Mons".to_string()),
            Utc::now(),
        ));

        assert!(embed.get("fields").map_or(true, |fields| fields == &json!([])));
    }

    #[test]
    fn usage_uses_prefix() {
        let embed = to_json(usage("!"));

        assert!(embed["description"]
            .as_str()
            .unwrap()
            .starts_with("`!league info <name>`"));
    }
}
