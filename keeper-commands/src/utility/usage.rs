use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::{CommandMeta, find_command};
use keeper_core::Context;

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    aliases: &[],
    desc: "Show usage syntax for a specific command.",
    category: "utility",
    usage: "!usage <command>",
};

/// Show usage for a specific command.
///
/// Inputs:
/// - required command name or alias: `!usage <command>`.
///
/// Error behavior:
/// - missing argument returns this command's usage.
/// - unknown command returns a short not-found message.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, rest: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;
    let out = usage_reply(rest);
    http.create_message(msg.channel_id).content(&out).await?;

    Ok(())
}

fn usage_reply(rest: Option<&str>) -> String {
    let Some(raw_name) = rest.and_then(|value| value.split_whitespace().next()) else {
        return format!("Usage: `{}`", META.usage);
    };

    match find_command(raw_name) {
        Some(command) => format!("Usage: `{}`", command.usage),
        None => format!(
            "Unknown command: `{}`",
            raw_name.trim_start_matches('!').to_ascii_lowercase()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_shows_own_usage() {
        assert_eq!(usage_reply(None), "Usage: `!usage <command>`");
    }

    #[test]
    fn resolves_aliases() {
        assert!(usage_reply(Some("guilds")).starts_with("Usage: `!servers"));
        assert_eq!(usage_reply(Some("!PING extra")), "Usage: `!ping`");
    }

    #[test]
    fn unknown_command() {
        assert_eq!(usage_reply(Some("!Nope")), "Unknown command: `nope`");
    }
}
