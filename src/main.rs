use cart_meals::providers::InlineImage;
use cart_meals::server::AppState;
use cart_meals::{AppConfig, InMemoryStore, MealSuggestionService, ProductSearch};
use clap::{Parser, Subcommand};
use log::{error, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "cart-meals", version, about = "Shopping lists with AI meal suggestions")]
struct Cli {
    /// Override the configured provider (google, openai, anthropic)
    #[arg(long, global = true)]
    provider: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Address to bind, e.g. 0.0.0.0:8080
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print meal suggestions for the given ingredients as JSON
    Suggest {
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// Print the grocery items read from a shopping list photo
    ReadImage { path: PathBuf },
    /// Search shopping results and print them as JSON
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load()?;
    if let Some(provider) = cli.provider {
        config.default_provider = provider;
    }

    let service = MealSuggestionService::from_config(&config, Arc::new(InMemoryStore::new()))?;

    match cli.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| config.server.bind.clone());
            let mut state = AppState::new(service);
            match ProductSearch::new(&config.search) {
                Ok(search) => state = state.with_search(search),
                Err(e) => warn!("Product search disabled: {}", e),
            }
            cart_meals::server::serve(&addr, state).await?;
        }
        Command::Suggest { ingredients } => {
            let meals = service.suggest(&ingredients).await?;
            println!("{}", serde_json::to_string_pretty(&meals)?);
        }
        Command::ReadImage { path } => {
            let image = InlineImage {
                mime_type: mime_type_for(&path).to_string(),
                data: tokio::fs::read(&path).await?,
            };
            for item in service.read_image(image).await? {
                println!("{}", item);
            }
        }
        Command::Search { query } => {
            let search = ProductSearch::new(&config.search).map_err(|e| e.to_string())?;
            let products = search.search(&query.join(" ")).await?;
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
    }

    Ok(())
}

fn mime_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
