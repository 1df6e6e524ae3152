use anyhow::Context;
use clap::Parser;
use venuekit::{
    default_config_path, init_logging, CliArgs, EditorSettings, JsonFileStore, LayoutReport,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = CliArgs::parse();
    tracing::info!("VenueKit {} (built {})", venuekit::VERSION, venuekit::BUILD_DATE);

    let settings = match &args.settings {
        Some(path) => EditorSettings::load_from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => EditorSettings::load_or_default(&default_config_path()?)?,
    };

    let file = JsonFileStore::read_file(&args.layout)
        .await
        .with_context(|| format!("failed to load layout {}", args.layout.display()))?;
    let venue_id = file.metadata.venue_id.clone();
    let mut document = file.into_document();
    let dropped = document.sanitize();
    if dropped > 0 {
        tracing::warn!("Sanitized {} invalid items in {}", dropped, args.layout.display());
    }

    let report = LayoutReport::from_document(venue_id, &document, &settings.fit);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    let short = report.insufficient().count();
    if short > 0 {
        tracing::warn!("{} section(s) are too small for their seats", short);
    }

    Ok(())
}
