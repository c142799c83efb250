use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::EmbedBuilder;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// Build a standard embed with consistent styling.
pub fn build_embed(title: &str, description: impl Into<String>) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description)
        .validate()?
        .build();

    Ok(embed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_styled_embed() {
        let embed = build_embed("Available Commands", "- `!ping`").unwrap();
        assert_eq!(embed.title.as_deref(), Some("Available Commands"));
        assert_eq!(embed.description.as_deref(), Some("- `!ping`"));
        assert_eq!(embed.color, Some(DEFAULT_EMBED_COLOR));
    }

    #[test]
    fn rejects_oversized_description() {
        assert!(build_embed("Too long", "x".repeat(5000)).is_err());
    }
}
