use std::sync::Arc;

use twilight_http::Client;

/// Environment-driven bot configuration.
pub mod config;
/// Insertion-ordered view of every guild the bot has joined.
pub mod directory;
/// Gateway guild events applied to the directory and registry.
pub mod lifecycle;
/// Per-guild state registry deciding which guilds are initialized.
pub mod registry;

pub use config::Config;
pub use directory::GuildDirectory;
pub use registry::{GuildRegistry, GuildState};

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub config: Arc<Config>,
    pub guilds: GuildDirectory,
    pub registry: GuildRegistry,
}

impl Context {
    /// Create a new application context with empty guild views.
    pub fn new(http: Arc<Client>, config: Config) -> Self {
        Self {
            http,
            config: Arc::new(config),
            guilds: GuildDirectory::default(),
            registry: GuildRegistry::default(),
        }
    }
}
