use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{graph::GraphArgs, matrix::MatrixArgs, points::PointsArgs, route::RouteArgs};

mod graph;
mod matrix;
mod points;
mod records_args;
mod route;
mod schema;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every point named in the records
    Points {
        #[command(flatten)]
        args: PointsArgs,
    },
    /// Shortest route between two points
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Summary and adjacency list of the usable road network
    Graph {
        #[command(flatten)]
        args: GraphArgs,
    },
    /// Distance table between points
    Matrix {
        #[command(flatten)]
        args: MatrixArgs,
    },
    /// JSON schema of a segment record
    Schema,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Points { args } => points::run(args)?,
        Commands::Route { args } => route::run(args)?,
        Commands::Graph { args } => graph::run(args)?,
        Commands::Matrix { args } => matrix::run(args)?,
        Commands::Schema => schema::run()?,
    }

    Ok(())
}
