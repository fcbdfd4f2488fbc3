use clap::ValueEnum;
use hbnb::dto::StatsDto;
use hbnb::models::{Place, Review};
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Bundled output configuration passed to all print functions
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// The output format
    pub format: OutputFormat,
    /// When true, print minimal output (just IDs)
    pub quiet: bool,
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: could not encode output: {}", e),
    }
}

/// Prints a list of places in the specified format
pub fn print_places(places: &[Place], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if places.is_empty() {
                if !config.quiet {
                    println!("No places found.");
                }
                return;
            }
            if config.quiet {
                for place in places {
                    println!("{}", place.get_id());
                }
                return;
            }
            let max_id = places.iter().map(|p| p.get_id().len()).max().unwrap_or(2);
            println!("{:<width$}  {:>6}  NAME", "ID", "PRICE", width = max_id);
            for place in places {
                println!(
                    "{:<width$}  {:>6}  {}",
                    place.get_id(),
                    place.get_details().price_by_night,
                    place.get_name(),
                    width = max_id,
                );
            }
        }
        OutputFormat::Json => print_json(places),
    }
}

/// Prints a single place in the specified format
pub fn print_place(place: &Place, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", place.get_id());
                return;
            }
            let details = place.get_details();
            println!("ID:        {}", place.get_id());
            println!("Name:      {}", place.get_name());
            println!("City:      {}", place.get_city_id());
            println!("Owner:     {}", place.get_user_id());
            if let Some(description) = details.description {
                println!("About:     {}", description);
            }
            println!("Rooms:     {} ({} bathrooms)", details.number_rooms, details.number_bathrooms);
            println!("Guests:    {}", details.max_guest);
            println!("Price:     {}/night", details.price_by_night);
            if let (Some(lat), Some(lon)) = (details.latitude, details.longitude) {
                println!("Location:  {}, {}", lat, lon);
            }
            println!("Updated:   {}", place.get_updated_at());
        }
        OutputFormat::Json => print_json(place),
    }
}

/// Prints a list of reviews in the specified format
pub fn print_reviews(reviews: &[Review], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if reviews.is_empty() {
                if !config.quiet {
                    println!("No reviews found.");
                }
                return;
            }
            for review in reviews {
                if config.quiet {
                    println!("{}", review.get_id());
                } else {
                    println!("{}  {}", review.get_id(), review.get_text());
                }
            }
        }
        OutputFormat::Json => print_json(reviews),
    }
}

/// Prints a single review in the specified format
pub fn print_review(review: &Review, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", review.get_id());
                return;
            }
            println!("ID:      {}", review.get_id());
            println!("Place:   {}", review.get_place_id());
            println!("Author:  {}", review.get_user_id());
            println!("Text:    {}", review.get_text());
            println!("Updated: {}", review.get_updated_at());
        }
        OutputFormat::Json => print_json(review),
    }
}

/// Prints the object counts in the specified format
pub fn print_stats(stats: &StatsDto, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            println!("cities:  {}", stats.cities);
            println!("places:  {}", stats.places);
            println!("reviews: {}", stats.reviews);
            println!("users:   {}", stats.users);
        }
        OutputFormat::Json => print_json(stats),
    }
}

/// Prints a confirmation that an object was deleted
pub fn print_deleted(kind: &str, id: &str, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human if !config.quiet => println!("Deleted {} {}", kind, id),
        OutputFormat::Human => {}
        OutputFormat::Json => print_json(&serde_json::json!({})),
    }
}
