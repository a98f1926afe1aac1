use loka_exponential::{IndexMapping, Mapping, MappingConfig};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    println!("=== Exponential Bucket Demo ===\n");

    let test_values = [0.003, 0.75, 1.0, 15.0, 42.5, 1000.0, 1e9];

    for scale in [-2, 0, 1, 3] {
        let mapping = match MappingConfig::for_scale(scale).build() {
            Ok(mapping) => mapping,
            Err(error) => {
                eprintln!("Scale {scale}: {error}");
                continue;
            }
        };

        println!("--- {mapping} ---");

        for value in test_values {
            match mapping.bucket_of(value) {
                Ok(bucket) => println!(
                    "Value: {value:>12.3} → Index: {:>5} [{:.6e}, {:.6e})",
                    bucket.index, bucket.lower, bucket.upper
                ),
                Err(error) => println!("Value: {value:>12.3} → {error}"),
            }
        }

        println!();
    }

    println!("=== Edges ===");
    for scale in [-10, 20] {
        let mapping = Mapping::new(scale).expect("Failed to build mapping");
        let top = mapping.map_to_index(f64::MAX);

        println!("{mapping}: top index {top}");
        println!("  lower_boundary({top}) = {:?}", mapping.lower_boundary(top));
        println!("  lower_boundary({}) = {:?}", top + 1, mapping.lower_boundary(top + 1));
    }

    match MappingConfig::for_scale(42).build() {
        Ok(mapping) => println!("Unexpectedly built {mapping}"),
        Err(error) => println!("Scale 42: {error}"),
    }

    println!("\n=== Performance ===");
    benchmark_map_to_index();
}

fn benchmark_map_to_index() {
    let iterations = 1_000_000;

    for scale in [0, 20] {
        let mapping = Mapping::new(scale).expect("Failed to build mapping");
        let start = Instant::now();
        let mut checksum = 0i64;

        for i in 0..iterations {
            checksum += mapping.map_to_index(1.0 + i as f64) as i64;
        }

        let elapsed = start.elapsed();
        println!(
            "{mapping}: {iterations} lookups in {elapsed:?} ({:.1} ns/op, checksum {checksum})",
            elapsed.as_nanos() as f64 / iterations as f64
        );
    }
}
