/// Owner-only overview of the guilds the bot is in.
pub mod servers;
