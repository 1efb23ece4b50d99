use clap::Args;
use comfy_table::Table;
use roadnet_routing::points::distinct_points;

use crate::records_args::RecordsArgs;

#[derive(Args)]
pub struct PointsArgs {
    #[command(flatten)]
    records: RecordsArgs,
}

pub fn run(args: PointsArgs) -> anyhow::Result<()> {
    let records = args.records.load()?;
    let points = distinct_points(&records);

    let mut table = Table::new();
    table.set_header(vec!["#", "Point"]);
    for (index, point) in points.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), point.to_string()]);
    }

    println!("{table}");

    Ok(())
}
