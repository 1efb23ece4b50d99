use clap::Args;
use comfy_table::Table;
use roadnet_routing::{graph::Graph, graph_builder::GraphBuilder};

use crate::records_args::RecordsArgs;

#[derive(Args)]
pub struct GraphArgs {
    #[command(flatten)]
    records: RecordsArgs,
}

pub fn run(args: GraphArgs) -> anyhow::Result<()> {
    let records = args.records.load()?;

    let mut builder = GraphBuilder::new();
    builder.add_records(&records);
    let accepted = builder.accepted_count();
    let rejected = builder.rejected_count();
    let graph = builder.build();

    println!(
        "records: {} accepted, {} rejected; nodes: {}; edges: {}",
        accepted,
        rejected,
        graph.node_count(),
        graph.edge_count()
    );

    let mut table = Table::new();
    table.set_header(vec!["Point", "Neighbours"]);
    for node in graph.nodes() {
        let neighbours = graph
            .edges_from(node.as_str())
            .map(|edges| {
                edges
                    .map(|(to, weight)| format!("{to} ({weight})"))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        table.add_row(vec![node.to_string(), neighbours]);
    }

    println!("{table}");

    Ok(())
}
