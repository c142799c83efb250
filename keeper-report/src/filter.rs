use std::collections::HashSet;

use crate::guild::{Guild, QueryOptions};
use crate::matcher::SearchMatcher;

/// Narrow a guild snapshot down to the guilds selected by `options`.
///
/// Input order is preserved. The `initialized`, `uninitialized` and search
/// filters are applied one after another, so `initialized` together with
/// `uninitialized` always yields an empty result. `all` never filters.
pub fn filter_guilds<'a>(
    guilds: &'a [Guild],
    initialized: &HashSet<String>,
    options: &QueryOptions,
) -> anyhow::Result<Vec<&'a Guild>> {
    let mut filtered: Vec<&Guild> = guilds.iter().collect();

    if options.initialized {
        filtered.retain(|guild| initialized.contains(&guild.id));
    }

    if options.uninitialized {
        filtered.retain(|guild| !initialized.contains(&guild.id));
    }

    if let Some(search) = options.search() {
        let matcher = SearchMatcher::new(search)?;
        filtered.retain(|guild| matcher.matches_guild(guild));
    }

    Ok(filtered)
}
