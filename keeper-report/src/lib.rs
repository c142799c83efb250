//! Summary and listing reports over the guilds the bot has joined.
//!
//! Everything here is synchronous and works on owned snapshots handed in by
//! the caller, so identical inputs always render identical text.

/// Guild snapshot and query option types.
pub mod guild;
/// Filtering of a guild snapshot by query options.
pub mod filter;
/// Sorting and line rendering for guild listings.
pub mod format;
/// Case-insensitive fuzzy search patterns.
pub mod matcher;
/// Mode selection and report rendering.
pub mod report;

pub use filter::filter_guilds;
pub use format::{NO_MATCHES_MESSAGE, format_guild_lines};
pub use guild::{Guild, QueryOptions};
pub use matcher::SearchMatcher;
pub use report::{GuildSummary, Report, generate, generate_report};
