//! Generates a random polygon, triangulates it and prints the diagonals.
//!
//! Usage: `cargo run --example triangulate -- [seed]`
//! Set `RUST_LOG=trigon=trace` to follow every clipped ear.

use trigon::generation::{GeneratorParams, RandomPolygon};
use trigon::Result;

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("trigon=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);

    let params = GeneratorParams {
        max_vertices: 12,
        ..GeneratorParams::default()
    };
    let mut polygon = RandomPolygon::new(params).with_seed(seed).execute()?;

    println!(
        "seed {seed}: {} vertices, {}, area {:.1}",
        polygon.vertex_count(),
        if polygon.is_clockwise() { "clockwise" } else { "counter-clockwise" },
        polygon.area().abs()
    );
    for (_, vertex) in polygon.iter_vertexes() {
        println!("  v{} ({}, {})", vertex.index, vertex.point.x, vertex.point.y);
    }

    let diagonals = polygon.triangulate()?.to_vec();
    for diagonal in diagonals {
        let from = polygon.vertex(diagonal.from)?.index;
        let to = polygon.vertex(diagonal.to)?.index;
        println!("  diagonal v{from} - v{to}");
    }
    Ok(())
}
