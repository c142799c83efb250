/// A joined guild as seen by the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub member_count: u64,
}

impl Guild {
    pub fn new(id: impl Into<String>, name: impl Into<String>, member_count: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            member_count,
        }
    }

    /// Text the search pattern runs against, so both id and name are searchable.
    pub fn search_haystack(&self) -> String {
        format!("{} {}", self.id, self.name)
    }
}

/// Flags and search text accepted by the `servers` command.
///
/// The flags are independent; setting both `initialized` and `uninitialized`
/// is legal and narrows the listing to nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub all: bool,
    pub initialized: bool,
    pub uninitialized: bool,
    pub search: Option<String>,
}

impl QueryOptions {
    /// Set the search text. Empty or whitespace-only input counts as no search.
    pub fn with_search(mut self, raw: Option<&str>) -> Self {
        self.search = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned);
        self
    }

    /// Search text, if any was given.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|value| !value.is_empty())
    }

    /// Whether a listing was requested instead of the summary sentence.
    pub fn wants_list(&self) -> bool {
        self.all || self.initialized || self.uninitialized || self.search().is_some()
    }
}
