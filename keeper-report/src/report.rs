use std::collections::HashSet;
use std::fmt;

use crate::filter::filter_guilds;
use crate::format::{NO_MATCHES_MESSAGE, format_guild_lines};
use crate::guild::{Guild, QueryOptions};

/// Guild counts shown when no listing was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuildSummary {
    pub total: usize,
    pub initialized: usize,
    pub uninitialized: usize,
}

impl GuildSummary {
    /// Count joined guilds and how many of them are initialized.
    pub fn count(guilds: &[Guild], initialized: &HashSet<String>) -> Self {
        let total = guilds.len();
        let initialized = guilds
            .iter()
            .filter(|guild| initialized.contains(&guild.id))
            .count();

        Self {
            total,
            initialized,
            uninitialized: total - initialized,
        }
    }
}

impl fmt::Display for GuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "I am on **{} total servers**, of which **{} are initialized** and **{} are not initialized**",
            self.total, self.initialized, self.uninitialized
        )
    }
}

/// Outcome of a guild query, before it is turned into message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Summary(GuildSummary),
    Listing(Vec<String>),
    NoMatches,
}

impl Report {
    /// Message text: the summary sentence, the no-match notice, or one line per guild.
    pub fn into_text(self) -> String {
        match self {
            Self::Summary(summary) => summary.to_string(),
            Self::Listing(lines) => lines.join("\n"),
            Self::NoMatches => NO_MATCHES_MESSAGE.to_owned(),
        }
    }
}

/// Build the report for a guild snapshot.
///
/// A listing is produced when any flag or a non-empty search is set,
/// otherwise only the counts are reported.
pub fn generate_report(
    guilds: &[Guild],
    initialized: &HashSet<String>,
    options: &QueryOptions,
) -> anyhow::Result<Report> {
    if !options.wants_list() {
        return Ok(Report::Summary(GuildSummary::count(guilds, initialized)));
    }

    let filtered = filter_guilds(guilds, initialized, options)?;
    if filtered.is_empty() {
        return Ok(Report::NoMatches);
    }

    Ok(Report::Listing(format_guild_lines(filtered, initialized)))
}

/// Build the report for a guild snapshot and render it to message text.
pub fn generate(
    guilds: &[Guild],
    initialized: &HashSet<String>,
    options: &QueryOptions,
) -> anyhow::Result<String> {
    generate_report(guilds, initialized, options).map(Report::into_text)
}
