use regex::{Regex, RegexBuilder};

use crate::guild::Guild;

/// Fuzzy, case-insensitive search pattern.
///
/// Every character of the input must appear in the haystack in the same
/// order, with anything allowed in between (`"abc"` matches `"Alpha Beta Corp"`).
/// Input characters are always literals, never pattern syntax.
#[derive(Clone, Debug)]
pub struct SearchMatcher {
    pattern: Regex,
}

impl SearchMatcher {
    /// Compile a matcher from raw search text.
    pub fn new(search: &str) -> Result<Self, regex::Error> {
        let source = search
            .chars()
            .map(|token| regex::escape(&token.to_string()))
            .collect::<Vec<_>>()
            .join(".*?");

        let pattern = RegexBuilder::new(&source).case_insensitive(true).build()?;

        Ok(Self { pattern })
    }

    /// Whether the search characters occur in order within `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.pattern.is_match(haystack)
    }

    /// Match against a guild's id and name.
    pub fn matches_guild(&self, guild: &Guild) -> bool {
        self.is_match(&guild.search_haystack())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(search: &str) -> SearchMatcher {
        SearchMatcher::new(search).expect("escaped search should compile")
    }

    #[test]
    fn matches_ordered_subsequence() {
        let abc = matcher("abc");
        assert!(abc.is_match("Alpha Beta Corp"));
        assert!(abc.is_match("abc"));
        assert!(!abc.is_match("Corp Beta Alpha"));
        assert!(!abc.is_match("Alpha Beta"));
    }

    #[test]
    fn ignores_case_in_both_directions() {
        assert!(matcher("ZETA").is_match("zeta"));
        assert!(matcher("zeta").is_match("ZeTa"));
    }

    #[test]
    fn metacharacters_are_literals() {
        let dot = matcher(".");
        assert!(!dot.is_match("no dots here"));
        assert!(dot.is_match("v1.2"));

        let star = matcher("a*");
        assert!(!star.is_match("a"));
        assert!(star.is_match("a * b"));

        let group = matcher("(x)");
        assert!(group.is_match("f(x) = 1"));
        assert!(!group.is_match("x"));

        assert!(matcher("[]^$|?+{}\\").is_match("[]^$|?+{}\\"));
    }

    #[test]
    fn handles_non_ascii_characters() {
        let search = matcher("çé");
        assert!(search.is_match("Le Café Français Été"));
        assert!(!search.is_match("Cafe"));
        assert!(matcher("日本").is_match("日の本"));
    }

    #[test]
    fn searches_guild_id_and_name() {
        let guild = Guild::new("81384788765712384", "Discord API", 10);
        assert!(matcher("8138").matches_guild(&guild));
        assert!(matcher("4 disc").matches_guild(&guild));
        assert!(matcher("api").matches_guild(&guild));
        assert!(!matcher("apix").matches_guild(&guild));
    }
}
