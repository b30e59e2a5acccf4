use anyhow::Result;
use packlist::config::{self, Config};
use packlist::domain::models::Document;
use packlist::domain::storage::StorageBackend;
use packlist::infrastructure::build_backend;

#[tokio::main]
async fn main() -> Result<()> {
    match config::config_path() {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: (no home directory, using defaults)"),
    }
    let config = Config::load();

    let backend = build_backend(&config.storage)?;
    println!("Backend: {}", backend.describe());

    println!("Reading stored document...");
    let Some(raw) = backend.read().await? else {
        println!("Nothing stored yet: the app will start from the default templates.");
        return Ok(());
    };
    println!("Read {} bytes", raw.len());

    match Document::from_json(&raw) {
        Ok(doc) => {
            println!("SUCCESS: document parses");
            println!("  Categories: {}", doc.templates.len());
            for (name, items) in &doc.templates {
                println!("    {name} ({} items)", items.len());
            }
            if doc.current_trip.is_empty() {
                println!("  Current trip: none");
            } else {
                println!(
                    "  Current trip: {}/{} packed",
                    doc.packed_count(),
                    doc.total_count()
                );
            }
        }
        Err(e) => {
            println!("FAILURE: stored content is not a valid document: {e}");
            println!("The app will start from the default templates and overwrite it on the next change.");
        }
    }

    Ok(())
}
