use clap::{Args, Subcommand};
use serde_json::{json, Map, Value};

use crate::client::HbnbClient;
use crate::output::{self, OutputConfig};

/// Place management commands
#[derive(Subcommand, Debug)]
pub enum PlaceCommands {
    /// List the places of a city
    List {
        /// The city whose places to list
        #[clap(long)]
        city_id: String,
    },
    /// Show a place
    Get {
        /// The place ID
        id: String,
    },
    /// Create a place in a city
    Create {
        /// The city to list the place under
        #[clap(long)]
        city_id: String,
        /// The owner of the place
        #[clap(long)]
        user_id: String,
        /// The display name of the place
        #[clap(long)]
        name: String,
        #[command(flatten)]
        details: PlaceFields,
    },
    /// Update a place
    Update {
        /// The place ID
        id: String,
        /// New display name
        #[clap(long)]
        name: Option<String>,
        /// Move the place to another city
        #[clap(long)]
        city_id: Option<String>,
        #[command(flatten)]
        details: PlaceFields,
    },
    /// Delete a place and its reviews
    Delete {
        /// The place ID
        id: String,
    },
}

/// Optional descriptive fields shared by create and update
#[derive(Args, Debug, Default)]
pub struct PlaceFields {
    #[clap(long)]
    pub description: Option<String>,
    #[clap(long)]
    pub number_rooms: Option<i32>,
    #[clap(long)]
    pub number_bathrooms: Option<i32>,
    #[clap(long)]
    pub max_guest: Option<i32>,
    #[clap(long)]
    pub price_by_night: Option<i32>,
    #[clap(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,
    #[clap(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,
}

impl PlaceFields {
    /// Adds the fields that were given on the command line to a request body
    fn write_into(self, body: &mut Map<String, Value>) {
        if let Some(v) = self.description {
            body.insert("description".to_string(), json!(v));
        }
        if let Some(v) = self.number_rooms {
            body.insert("number_rooms".to_string(), json!(v));
        }
        if let Some(v) = self.number_bathrooms {
            body.insert("number_bathrooms".to_string(), json!(v));
        }
        if let Some(v) = self.max_guest {
            body.insert("max_guest".to_string(), json!(v));
        }
        if let Some(v) = self.price_by_night {
            body.insert("price_by_night".to_string(), json!(v));
        }
        if let Some(v) = self.latitude {
            body.insert("latitude".to_string(), json!(v));
        }
        if let Some(v) = self.longitude {
            body.insert("longitude".to_string(), json!(v));
        }
    }
}

/// Executes a place command
pub async fn execute(
    client: &HbnbClient,
    cmd: PlaceCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        PlaceCommands::List { city_id } => {
            let places = client.list_places(&city_id).await?;
            output::print_places(&places, config);
        }
        PlaceCommands::Get { id } => {
            let place = client.get_place(&id).await?;
            output::print_place(&place, config);
        }
        PlaceCommands::Create { city_id, user_id, name, details } => {
            let mut body = Map::new();
            body.insert("user_id".to_string(), json!(user_id));
            body.insert("name".to_string(), json!(name));
            details.write_into(&mut body);

            let place = client.create_place(&city_id, &Value::Object(body)).await?;
            output::print_place(&place, config);
        }
        PlaceCommands::Update { id, name, city_id, details } => {
            let mut body = Map::new();
            if let Some(name) = name {
                body.insert("name".to_string(), json!(name));
            }
            if let Some(city_id) = city_id {
                body.insert("city_id".to_string(), json!(city_id));
            }
            details.write_into(&mut body);

            let place = client.update_place(&id, &Value::Object(body)).await?;
            output::print_place(&place, config);
        }
        PlaceCommands::Delete { id } => {
            client.delete_place(&id).await?;
            output::print_deleted("place", &id, config);
        }
    }
    Ok(())
}
