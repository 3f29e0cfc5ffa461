use anyhow::Result;
use clap::Parser;

use kittychat::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env so GROQ_API_KEY can live next to the project
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    kittychat::run_repl(&cli).await
}
