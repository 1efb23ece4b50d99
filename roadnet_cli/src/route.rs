use clap::Args;
use roadnet_routing::{
    route_query::{RouteOutcome, evaluate_route},
    routing::routing_algorithm::RoutingAlgorithm,
};
use tracing::info;

use crate::records_args::RecordsArgs;

#[derive(Args)]
pub struct RouteArgs {
    #[command(flatten)]
    records: RecordsArgs,

    /// Start point
    #[arg(short, long, default_value = "")]
    from: String,

    /// End point
    #[arg(short, long, default_value = "")]
    to: String,

    /// "dijkstra" (binary heap) or "linear-scan"
    #[arg(short, long, default_value_t = RoutingAlgorithm::Dijkstra)]
    algorithm: RoutingAlgorithm,

    /// Print the path result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: RouteArgs) -> anyhow::Result<()> {
    let records = args.records.load()?;

    info!(
        from = args.from.as_str(),
        to = args.to.as_str(),
        algorithm = %args.algorithm,
        "Searching route"
    );
    let outcome = evaluate_route(&records, &args.from, &args.to, args.algorithm);

    if args.json {
        print_json(&outcome)?;
    } else {
        println!("{outcome}");
    }

    Ok(())
}

fn print_json(outcome: &RouteOutcome) -> anyhow::Result<()> {
    let value = match outcome {
        RouteOutcome::Found(result) => serde_json::to_value(result)?,
        other => serde_json::json!({
            "path": [],
            "distance": null,
            "message": other.to_string(),
        }),
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
