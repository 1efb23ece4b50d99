use clap::Args;
use comfy_table::Table;
use roadnet_routing::{
    distance_matrix::DistanceMatrix, graph_builder::build_graph, node_id::NodeId,
    points::distinct_points,
};

use crate::records_args::RecordsArgs;

#[derive(Args)]
pub struct MatrixArgs {
    #[command(flatten)]
    records: RecordsArgs,

    /// Points to include, comma separated (default: every point)
    #[arg(short, long, value_delimiter = ',')]
    points: Vec<String>,

    /// Print the matrix as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: MatrixArgs) -> anyhow::Result<()> {
    let records = args.records.load()?;
    let graph = build_graph(&records);

    let points: Vec<NodeId> = if args.points.is_empty() {
        distinct_points(&records)
    } else {
        args.points.into_iter().map(NodeId::from).collect()
    };

    let matrix = DistanceMatrix::compute(&graph, &points);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    let mut table = Table::new();
    let mut header = vec![String::new()];
    header.extend(points.iter().map(NodeId::to_string));
    table.set_header(header);

    for (index, point) in points.iter().enumerate() {
        let mut row = vec![point.to_string()];
        row.extend(matrix.row(index).iter().map(|distance| distance.to_string()));
        table.add_row(row);
    }

    println!("{table}");

    Ok(())
}
