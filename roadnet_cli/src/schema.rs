use roadnet_routing::segment_record::SegmentRecord;

pub fn run() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(Vec<SegmentRecord>);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
