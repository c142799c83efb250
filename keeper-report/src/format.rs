use std::collections::HashSet;

use crate::guild::Guild;

/// Sent instead of a listing when the filters leave nothing.
pub const NO_MATCHES_MESSAGE: &str = "No servers matched the filters";

/// Render one display line per guild, sorted by name.
///
/// Sorting ignores case and is stable, so guilds with the same lowercased
/// name keep their snapshot order. Ids are right-padded to the longest id in
/// `guilds` so the names line up.
pub fn format_guild_lines(mut guilds: Vec<&Guild>, initialized: &HashSet<String>) -> Vec<String> {
    guilds.sort_by_key(|guild| guild.name.to_lowercase());

    let longest_id = guilds
        .iter()
        .map(|guild| guild.id.chars().count())
        .max()
        .unwrap_or(0);

    guilds
        .into_iter()
        .map(|guild| format_guild_line(guild, longest_id, initialized.contains(&guild.id)))
        .collect()
}

fn format_guild_line(guild: &Guild, id_width: usize, is_initialized: bool) -> String {
    let state = if is_initialized {
        "initialized"
    } else {
        "not initialized"
    };

    format!(
        "`{:<id_width$}` **{}** ({}) ({} members)",
        guild.id, guild.name, state, guild.member_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_initialized() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn renders_state_and_member_count() {
        let guilds = [Guild::new("1", "Zeta", 1234567), Guild::new("2", "Alpha", 0)];
        let initialized: HashSet<String> = ["2".to_owned()].into();

        let lines = format_guild_lines(guilds.iter().collect(), &initialized);

        assert_eq!(
            lines,
            [
                "`2` **Alpha** (initialized) (0 members)",
                "`1` **Zeta** (not initialized) (1234567 members)",
            ]
        );
    }

    #[test]
    fn sorts_case_insensitively() {
        let guilds = [
            Guild::new("1", "bravo", 1),
            Guild::new("2", "Charlie", 1),
            Guild::new("3", "alpha", 1),
            Guild::new("4", "Alpine", 1),
        ];

        let lines = format_guild_lines(guilds.iter().collect(), &no_initialized());
        let order: Vec<&str> = lines.iter().map(|line| &line[1..2]).collect();

        assert_eq!(order, ["3", "4", "1", "2"]);
    }

    #[test]
    fn equal_names_keep_snapshot_order() {
        let guilds = [
            Guild::new("first", "Same Name", 1),
            Guild::new("b", "Between", 1),
            Guild::new("second", "same name", 1),
            Guild::new("third", "SAME NAME", 1),
        ];

        let lines = format_guild_lines(guilds.iter().collect(), &no_initialized());

        assert!(lines[0].contains("**Between**"));
        assert!(lines[1].starts_with("`first "));
        assert!(lines[2].starts_with("`second"));
        assert!(lines[3].starts_with("`third "));
    }

    #[test]
    fn pads_ids_to_the_longest_id() {
        let guilds = [
            Guild::new("abc", "One", 1),
            Guild::new("abcdefg", "Two", 1),
            Guild::new("abcde", "Three", 1),
        ];

        let lines = format_guild_lines(guilds.iter().collect(), &no_initialized());

        for line in &lines {
            let id_field = line.split('`').nth(1).unwrap();
            assert_eq!(id_field.chars().count(), 7);
        }
        assert!(lines.iter().any(|line| line.starts_with("`abc    ` **One**")));
    }

    #[test]
    fn pads_by_characters_not_bytes() {
        let guilds = [Guild::new("é", "Accent", 1), Guild::new("abc", "Plain", 1)];

        let lines = format_guild_lines(guilds.iter().collect(), &no_initialized());

        assert_eq!(lines[0], "`é  ` **Accent** (not initialized) (1 members)");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(format_guild_lines(Vec::new(), &no_initialized()).is_empty());
    }
}
