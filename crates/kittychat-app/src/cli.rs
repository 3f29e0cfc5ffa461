use clap::Parser;

/// CLI arguments for kittychat
#[derive(Parser, Debug)]
#[command(name = "kittychat")]
#[command(about = "Kitty Chat - a kawaii chat companion in your terminal")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Override the model name sent with every request
    #[arg(long, value_name = "MODEL", env = "KITTYCHAT_MODEL")]
    pub model: Option<String>,

    /// Override the chat completions endpoint URL (e.g. a local
    /// OpenAI-compatible server)
    #[arg(long, value_name = "URL", env = "KITTYCHAT_API_URL")]
    pub api_url: Option<String>,

    /// Override the maximum output tokens per reply
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Show the request configuration at startup
    #[arg(short, long)]
    pub verbose: bool,
}
