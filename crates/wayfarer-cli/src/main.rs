use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfarer_cli::dataset::DataSources;
use wayfarer_cli::output::OutputFormat;
use wayfarer_lib::{Mount, RoutePreference, ShipType, WalkingPace};

mod commands;

use commands::route::RouteCommandArgs;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plan overland and sea journeys between settlements"
)]
struct Cli {
    /// Route dataset (JSON). Defaults to $WAYFARER_ROUTES, then routes.json
    /// in the platform data directory.
    #[arg(long, global = true)]
    routes: Option<PathBuf>,

    /// CSV of biome multipliers overriding the built-in table. Defaults to
    /// $WAYFARER_BIOMES when set.
    #[arg(long, global = true)]
    biomes: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a journey between two settlements.
    Route(RouteArgs),
    /// List settlements known to the dataset.
    Settlements,
    /// Show the biome difficulty multipliers in effect.
    Biomes,
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Starting settlement name.
    #[arg(long = "from")]
    from: String,
    /// Region of the starting settlement, when the name is ambiguous.
    #[arg(long = "from-region")]
    from_region: Option<String>,
    /// Destination settlement name.
    #[arg(long = "to")]
    to: String,
    /// Region of the destination settlement, when the name is ambiguous.
    #[arg(long = "to-region")]
    to_region: Option<String>,
    /// Which kinds of route may be used.
    #[arg(long, value_enum, default_value_t = PreferenceArg::Mixed)]
    prefer: PreferenceArg,
    /// Biome no land leg may cross (repeatable).
    #[arg(long = "avoid-biome")]
    avoid_biome: Vec<String>,
    /// Number of travelers in the party.
    #[arg(long, default_value_t = 1)]
    travelers: u32,
    /// Walking pace on land.
    #[arg(long, value_enum, default_value_t = PaceArg::Normal)]
    pace: PaceArg,
    /// Mount for land legs.
    #[arg(long, value_enum)]
    mount: Option<MountArg>,
    /// Vessel for sea legs.
    #[arg(long, value_enum)]
    ship: Option<ShipArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PreferenceArg {
    Mixed,
    Land,
    Sea,
}

impl From<PreferenceArg> for RoutePreference {
    fn from(value: PreferenceArg) -> Self {
        match value {
            PreferenceArg::Mixed => RoutePreference::Mixed,
            PreferenceArg::Land => RoutePreference::LandOnly,
            PreferenceArg::Sea => RoutePreference::SeaOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PaceArg {
    Slow,
    Normal,
    Fast,
}

impl From<PaceArg> for WalkingPace {
    fn from(value: PaceArg) -> Self {
        match value {
            PaceArg::Slow => WalkingPace::Slow,
            PaceArg::Normal => WalkingPace::Normal,
            PaceArg::Fast => WalkingPace::Fast,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MountArg {
    RidingHorse,
    Warhorse,
}

impl From<MountArg> for Mount {
    fn from(value: MountArg) -> Self {
        match value {
            MountArg::RidingHorse => Mount::RidingHorse,
            MountArg::Warhorse => Mount::Warhorse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShipArg {
    Rowboat,
    Keelboat,
    Longship,
    Galley,
    SailingShip,
}

impl From<ShipArg> for ShipType {
    fn from(value: ShipArg) -> Self {
        match value {
            ShipArg::Rowboat => ShipType::Rowboat,
            ShipArg::Keelboat => ShipType::Keelboat,
            ShipArg::Longship => ShipType::Longship,
            ShipArg::Galley => ShipType::Galley,
            ShipArg::SailingShip => ShipType::SailingShip,
        }
    }
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        RouteCommandArgs {
            from: args.from,
            from_region: args.from_region,
            to: args.to,
            to_region: args.to_region,
            preference: args.prefer.into(),
            avoid_biomes: args.avoid_biome,
            travelers: args.travelers,
            pace: args.pace.into(),
            mount: args.mount.map(Mount::from),
            ship: args.ship.map(ShipType::from),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let sources = DataSources {
        routes: cli.routes,
        biomes: cli.biomes,
    };

    match cli.command {
        Command::Route(args) => {
            commands::route::handle_route_command(&sources, cli.format, &args.into())
        }
        Command::Settlements => commands::settlements::handle_settlements(&sources, cli.format),
        Command::Biomes => commands::biomes::handle_biomes(&sources, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
