//! Build the deep-sky-object database end to end: download the OpenNGC catalog,
//! normalize it, and write the parsed records as JSON.
//!
//! ```bash
//! cargo run --example build_catalog --features progress
//! ```

use std::time::Instant;

use camino::Utf8Path;

use skycat::{
    download_catalog, CatalogPipeline, ConsoleProgress, JsonFileSink, RecordSink, SkycatError,
};

const OPENNGC_URL: &str =
    "https://raw.githubusercontent.com/mattiaverga/OpenNGC/refs/heads/master/database_files/NGC.csv";

#[tokio::main]
async fn main() -> Result<(), SkycatError> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .expect("logger spec")
        .start()
        .expect("logger start");

    let started = Instant::now();
    let csv_path = Utf8Path::new("downloads/openngc_db.csv");
    let out_path = Utf8Path::new("out/openngc_db_parsed.json");

    println!("step 1: downloading the OpenNGC database file");
    download_catalog(OPENNGC_URL, csv_path).await?;

    println!("step 2: parsing and normalizing the catalog");
    let mut pipeline = CatalogPipeline::new(csv_path);
    let mut progress = ConsoleProgress::new();
    let records = pipeline.run(&mut progress)?;

    println!("step 3: saving results to {out_path}");
    JsonFileSink::new(out_path).persist(&records)?;

    println!(
        "database built: {} objects in {:.2}s",
        records.len(),
        started.elapsed().as_secs_f32()
    );
    Ok(())
}
