use roadnet_routing::segment_record::SegmentRecord;

pub const ROMANIA_CITIES: [&str; 20] = [
    "Arad",
    "Bucharest",
    "Craiova",
    "Dobreta",
    "Eforie",
    "Fagaras",
    "Giurgiu",
    "Hirsova",
    "Iasi",
    "Lugoj",
    "Mehadia",
    "Neamt",
    "Oradea",
    "Pitesti",
    "Rimnicu Vilcea",
    "Sibiu",
    "Timisoara",
    "Urziceni",
    "Vaslui",
    "Zerind",
];

// https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
pub fn romania_segments() -> Vec<(&'static str, &'static str, f64)> {
    vec![
        ("Oradea", "Zerind", 71.0),
        ("Oradea", "Sibiu", 151.0),
        ("Zerind", "Arad", 75.0),
        ("Arad", "Sibiu", 140.0),
        ("Arad", "Timisoara", 118.0),
        ("Timisoara", "Lugoj", 111.0),
        ("Lugoj", "Mehadia", 70.0),
        ("Mehadia", "Dobreta", 75.0),
        ("Dobreta", "Craiova", 120.0),
        ("Craiova", "Rimnicu Vilcea", 146.0),
        ("Craiova", "Pitesti", 138.0),
        ("Rimnicu Vilcea", "Pitesti", 97.0),
        ("Rimnicu Vilcea", "Sibiu", 80.0),
        ("Sibiu", "Fagaras", 99.0),
        ("Fagaras", "Bucharest", 211.0),
        ("Pitesti", "Bucharest", 101.0),
        ("Bucharest", "Giurgiu", 90.0),
        ("Bucharest", "Urziceni", 85.0),
        ("Urziceni", "Hirsova", 98.0),
        ("Hirsova", "Eforie", 86.0),
        ("Urziceni", "Vaslui", 142.0),
        ("Vaslui", "Iasi", 92.0),
        ("Iasi", "Neamt", 87.0),
    ]
}

/// Romania road map with every segment operational.
pub fn romania_records() -> Vec<SegmentRecord> {
    romania_segments()
        .into_iter()
        .map(|(start, end, distance)| SegmentRecord::new(start, end, distance).with_status("o"))
        .collect()
}

/// Romania road map with the segments between the given pairs closed.
pub fn romania_records_with_closed(closed: &[(&str, &str)]) -> Vec<SegmentRecord> {
    romania_segments()
        .into_iter()
        .map(|(start, end, distance)| {
            let is_closed = closed
                .iter()
                .any(|&(a, b)| (a == start && b == end) || (a == end && b == start));
            SegmentRecord::new(start, end, distance).with_status(if is_closed { "c" } else { "O" })
        })
        .collect()
}
