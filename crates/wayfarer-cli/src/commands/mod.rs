// Handlers for CLI subcommands. main.rs parses arguments and dispatches here.

pub mod biomes;
pub mod route;
pub mod settlements;
