use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campuspaths_cli::commands::{
    buildings::handle_buildings, interactive::handle_interactive, load_campus_map,
    route::handle_route,
};
use campuspaths_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus building lookups and walking routes")]
struct Cli {
    /// Directory holding campus_buildings.csv and campus_paths.csv.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format for listings and routes.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every building, sorted by long name.
    Buildings,
    /// Compute the shortest walking route between two buildings.
    Route {
        /// Short name of the starting building.
        #[arg(long = "from")]
        from: String,
        /// Short name of the destination building.
        #[arg(long = "to")]
        to: String,
    },
    /// Start the menu-driven prompt loop.
    Interactive,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let map = load_campus_map(cli.data_dir.as_deref())?;

    match cli.command {
        Command::Buildings => handle_buildings(&map, cli.format),
        Command::Route { from, to } => handle_route(&map, &from, &to, cli.format),
        Command::Interactive => handle_interactive(&map),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
