use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use starhop_cli::output::OutputFormat;
use starhop_lib::DEFAULT_JUMP_RANGE_LY;

mod commands;

use commands::{
    neighbours::handle_neighbours_command, reach::handle_reach_command,
    route::handle_route_command, GlobalOptions,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hop-count routing between solar systems")]
struct Cli {
    /// Dataset file or directory containing SolarSystem_Cycle2.txt.
    #[arg(long, global = true, env = "STARHOP_DATA_PATH")]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a minimum-hop route between two systems.
    Route {
        /// Starting system name.
        #[arg(long = "from")]
        from: String,
        /// Destination system name.
        #[arg(long = "to")]
        to: String,
        /// Maximum distance of a single jump, in light-years.
        #[arg(long = "jump-range", default_value_t = DEFAULT_JUMP_RANGE_LY)]
        jump_range: f64,
    },
    /// List systems within a radius of a system, nearest first.
    Neighbours {
        /// System to search around.
        #[arg(long)]
        system: String,
        /// Search radius in light-years.
        #[arg(long, default_value_t = 10.0)]
        radius: f64,
        /// Show at most this many systems.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Count the systems reachable from a system with a given jump range.
    Reach {
        /// Starting system name.
        #[arg(long)]
        system: String,
        /// Maximum distance of a single jump, in light-years.
        #[arg(long = "jump-range", default_value_t = DEFAULT_JUMP_RANGE_LY)]
        jump_range: f64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = GlobalOptions {
        data: cli.data,
        format: cli.format,
    };

    match cli.command {
        Command::Route {
            from,
            to,
            jump_range,
        } => handle_route_command(&options, &from, &to, jump_range),
        Command::Neighbours {
            system,
            radius,
            limit,
        } => handle_neighbours_command(&options, &system, radius, limit),
        Command::Reach { system, jump_range } => {
            handle_reach_command(&options, &system, jump_range)
        }
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
