use std::collections::HashSet;
use std::env;

use anyhow::{Context as _, bail};

/// Bot configuration read from the process environment.
///
/// `DISCORD_TOKEN` and `BOT_OWNER_IDS` are required. `ALLOWED_GUILD_IDS`
/// restricts which guilds get initialized; without it every guild does.
pub struct Config {
    pub token: String,
    pub owner_ids: HashSet<u64>,
    pub allowed_guild_ids: Option<HashSet<u64>>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let token = lookup("DISCORD_TOKEN")
            .filter(|value| !value.trim().is_empty())
            .context("DISCORD_TOKEN is not set")?;

        let raw_owners = lookup("BOT_OWNER_IDS").context("BOT_OWNER_IDS is not set")?;
        let owner_ids = parse_id_list(&raw_owners).context("invalid BOT_OWNER_IDS")?;
        if owner_ids.is_empty() {
            bail!("BOT_OWNER_IDS must name at least one user id");
        }

        let allowed_guild_ids = lookup("ALLOWED_GUILD_IDS")
            .filter(|value| !value.trim().is_empty())
            .map(|raw| parse_id_list(&raw))
            .transpose()
            .context("invalid ALLOWED_GUILD_IDS")?;

        Ok(Self {
            token,
            owner_ids,
            allowed_guild_ids,
        })
    }

    /// Whether a joined guild should have its state loaded.
    pub fn allows_guild(&self, guild_id: u64) -> bool {
        self.allowed_guild_ids
            .as_ref()
            .is_none_or(|allowed| allowed.contains(&guild_id))
    }
}

/// Parse a comma or whitespace separated list of snowflake ids.
pub fn parse_id_list(raw: &str) -> anyhow::Result<HashSet<u64>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let id = part
                .parse::<u64>()
                .with_context(|| format!("`{part}` is not a numeric id"))?;
            if id == 0 {
                bail!("id `{part}` must be non-zero");
            }
            Ok(id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn parses_mixed_separators() {
        let ids = parse_id_list("1, 2,3\n4  5").unwrap();
        assert_eq!(ids, HashSet::from([1, 2, 3, 4, 5]));
    }

    #[test]
    fn rejects_non_numeric_and_zero_ids() {
        assert!(parse_id_list("12,abc").is_err());
        assert!(parse_id_list("0").is_err());
        assert!(parse_id_list("-4").is_err());
    }

    #[test]
    fn loads_required_and_optional_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("BOT_OWNER_IDS", "100,200"),
            ("ALLOWED_GUILD_IDS", "7"),
        ]))
        .unwrap();

        assert_eq!(config.token, "token");
        assert_eq!(config.owner_ids, HashSet::from([100, 200]));
        assert!(config.allows_guild(7));
        assert!(!config.allows_guild(8));
    }

    #[test]
    fn missing_allowlist_allows_every_guild() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("BOT_OWNER_IDS", "100"),
            ("ALLOWED_GUILD_IDS", "  "),
        ]))
        .unwrap();

        assert!(config.allowed_guild_ids.is_none());
        assert!(config.allows_guild(12345));
    }

    #[test]
    fn requires_token_and_owners() {
        assert!(Config::from_lookup(lookup_from(&[("BOT_OWNER_IDS", "1")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "token")])).is_err());
        assert!(
            Config::from_lookup(lookup_from(&[
                ("DISCORD_TOKEN", "token"),
                ("BOT_OWNER_IDS", " , "),
            ]))
            .is_err()
        );
    }
}
