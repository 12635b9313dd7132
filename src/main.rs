mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SearchArgs};
use housing_filter::config::AppConfig;
use housing_filter::filter::{self, format_price, FilterSpec};
use housing_filter::models::{
    BuildingHeight, ConstructionStatus, Facing, FloorBand, FurnishedStatus, ListedBy, ListingType,
    OwnershipType, ParkingType, PropertyType, ViewType, ADDITIONAL_ROOM_OPTIONS, AMENITY_OPTIONS,
    DOCUMENT_OPTIONS,
};
use housing_filter::preferences::{self, FsPreferences};
use housing_filter::sources::{ApiSource, JsonFileSource, PropertySource};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Search(args) => search(&config, &args).await,
        Command::Saved => show_saved(&config),
        Command::Options => {
            print_options();
            Ok(())
        }
    }
}

fn preference_store(config: &AppConfig) -> Result<FsPreferences> {
    let dir = config
        .preferences_dir()
        .context("Could not determine a preferences directory")?;
    Ok(FsPreferences::new(dir))
}

async fn search(config: &AppConfig, args: &SearchArgs) -> Result<()> {
    let listing_type = if args.rent {
        ListingType::Rent
    } else {
        ListingType::Sale
    };
    let mut spec = FilterSpec::for_listing(listing_type);

    if args.load {
        let store = preference_store(config)?;
        match preferences::load_search(&store, &config.search_key, &spec) {
            Ok(Some(saved)) => spec = saved,
            Ok(None) => warn!("No saved search found"),
            Err(e) => warn!("Failed to load saved search: {e}"),
        }
        // The saved blob may come from the other marketplace.
        spec.listing_type = listing_type;
    }
    args.apply_to(&mut spec);

    if args.save {
        let store = preference_store(config)?;
        preferences::save_search(&store, &config.search_key, &spec)
            .context("Failed to save search")?;
    }

    let source: Box<dyn PropertySource> =
        match args.file.clone().or_else(|| config.properties_file.clone()) {
            Some(path) => Box::new(JsonFileSource::new(path)),
            None => Box::new(ApiSource::new(config.api_url.clone())?),
        };
    info!("Loading listings from {}", source.source_name());
    let properties = source
        .fetch(listing_type)
        .await
        .context("Failed to load listings")?;

    let matches = filter::apply_refs(&properties, &spec);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    for (i, property) in matches.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, format_price(property.price));
        println!(
            "   {} · {} bed · {} bath",
            property.property_type, property.bedrooms, property.bathrooms
        );
        println!("   {}, {}", property.location, property.city);
        println!("   ID: {}", property.id);
        println!();
    }
    println!("{} listings found matching your criteria", matches.len());

    let preview = spec.price_per_area();
    if preview.area > 0 {
        let per_area = |value: Option<i64>| {
            value.map_or_else(|| "-".to_string(), |v| format!("{}/sq.ft", format_price(v as f64)))
        };
        println!(
            "Price per area at {} sq.ft: min {}, max {}",
            preview.area,
            per_area(preview.min),
            per_area(preview.max)
        );
    }

    Ok(())
}

fn show_saved(config: &AppConfig) -> Result<()> {
    let store = preference_store(config)?;
    match preferences::read_saved(&store, &config.search_key)
        .context("Failed to read saved search")?
    {
        Some(saved) => {
            if let Some(at) = saved.saved_at {
                println!("Saved at {}", at.format("%Y-%m-%d %H:%M UTC"));
            }
            println!("{}", serde_json::to_string_pretty(&saved.fields)?);
        }
        None => println!("No saved search found."),
    }
    Ok(())
}

fn print_group(name: &str, labels: impl IntoIterator<Item = impl std::fmt::Display>) {
    let joined: Vec<String> = labels.into_iter().map(|l| l.to_string()).collect();
    println!("{name}: {}", joined.join(" | "));
}

fn print_options() {
    print_group("type", PropertyType::ALL);
    print_group("status", ConstructionStatus::ALL);
    print_group("listed-by", ListedBy::ALL);
    print_group("furnished", FurnishedStatus::ALL);
    print_group("ownership", OwnershipType::ALL);
    print_group("facing / exit-facing", Facing::ALL);
    print_group("floor", FloorBand::ALL);
    print_group("height", BuildingHeight::ALL);
    print_group("parking-type", ParkingType::ALL);
    print_group("view", ViewType::ALL);
    print_group("amenity", AMENITY_OPTIONS);
    print_group("room", ADDITIONAL_ROOM_OPTIONS);
    print_group("document", DOCUMENT_OPTIONS);
}
