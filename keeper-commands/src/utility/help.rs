use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::{COMMANDS, CommandMeta};
use keeper_core::Context;
use keeper_utils::embed::build_embed;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    aliases: &["commands"],
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help",
};

/// Render the command catalog grouped by category.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let http = &ctx.http;
    let embed = build_embed("Available Commands", help_description())?;
    http.create_message(msg.channel_id).embeds(&[embed]).await?;

    Ok(())
}

fn help_description() -> String {
    let mut commands: Vec<&CommandMeta> = COMMANDS.iter().collect();
    commands.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    let mut sections: Vec<String> = Vec::new();
    for command in commands {
        let header = format!("**{}**", command.category);
        if sections.last().is_none_or(|section| !section.starts_with(&header)) {
            sections.push(header);
        }

        if let Some(section) = sections.last_mut() {
            section.push_str(&format!("\n`{}` - {}", command.usage, command.desc));
        }
    }

    sections.join("\n\n")
}
