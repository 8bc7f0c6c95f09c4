use schedule_exporter::egytrains::{EgytrainsClient, EgytrainsConfig};
use schedule_exporter::export::{Exporter, ExporterConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default info level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Optional overrides from the environment
    let mut egytrains_config = EgytrainsConfig::new();
    if let Ok(base_url) = std::env::var("EGYTRAINS_BASE_URL") {
        egytrains_config = egytrains_config.with_base_url(base_url);
    }

    let mut exporter_config = ExporterConfig::new();
    if let Ok(path) = std::env::var("STATIONS_FILE") {
        exporter_config = exporter_config.with_stations_path(path);
    }
    if let Ok(path) = std::env::var("OUTPUT_FILE") {
        exporter_config = exporter_config.with_output_path(path);
    }

    // Create the egytrains client
    let client = match EgytrainsClient::new(egytrains_config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create egytrains client: {e}");
            std::process::exit(1);
        }
    };

    let output_path = exporter_config.output_path.clone();
    let exporter = Exporter::new(client, exporter_config);

    println!("Starting station schedule export...");

    match exporter.run().await {
        Ok(summary) => {
            println!(
                "Exported {} rows from {} stations ({} skipped) to {}",
                summary.rows_written,
                summary.stations_processed,
                summary.stations_skipped,
                output_path.display()
            );
            println!(
                "Process completed in {:.2} seconds.",
                summary.elapsed.as_secs_f64()
            );
        }
        Err(e) => {
            eprintln!("Export failed: {e}");
            std::process::exit(1);
        }
    }
}
