use clap::Subcommand;
use serde_json::json;

use crate::client::HbnbClient;
use crate::output::{self, OutputConfig};

/// Review management commands
#[derive(Subcommand, Debug)]
pub enum ReviewCommands {
    /// List the reviews of a place
    List {
        /// The place whose reviews to list
        #[clap(long)]
        place_id: String,
    },
    /// Show a review
    Get {
        /// The review ID
        id: String,
    },
    /// Review a place
    Create {
        /// The place being reviewed
        #[clap(long)]
        place_id: String,
        /// The author of the review
        #[clap(long)]
        user_id: String,
        /// The body of the review
        #[clap(long)]
        text: String,
    },
    /// Change the text of a review
    Update {
        /// The review ID
        id: String,
        /// The new body of the review
        #[clap(long)]
        text: String,
    },
    /// Delete a review
    Delete {
        /// The review ID
        id: String,
    },
}

/// Executes a review command
pub async fn execute(
    client: &HbnbClient,
    cmd: ReviewCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ReviewCommands::List { place_id } => {
            let reviews = client.list_reviews(&place_id).await?;
            output::print_reviews(&reviews, config);
        }
        ReviewCommands::Get { id } => {
            let review = client.get_review(&id).await?;
            output::print_review(&review, config);
        }
        ReviewCommands::Create { place_id, user_id, text } => {
            let body = json!({"user_id": user_id, "text": text});
            let review = client.create_review(&place_id, &body).await?;
            output::print_review(&review, config);
        }
        ReviewCommands::Update { id, text } => {
            let review = client.update_review(&id, &json!({"text": text})).await?;
            output::print_review(&review, config);
        }
        ReviewCommands::Delete { id } => {
            client.delete_review(&id).await?;
            output::print_deleted("review", &id, config);
        }
    }
    Ok(())
}
