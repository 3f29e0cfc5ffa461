use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use kittychat_api::{ClientConfig, GroqClient};
use kittychat_chat::Conversation;

use crate::cli::Cli;
use crate::cue;

/// Run the interactive chat loop
pub async fn run_repl(cli: &Cli) -> Result<()> {
    let config = build_config(cli);

    println!("{}", "💖 KITTY CHAT 💖".bright_magenta().bold());
    println!(
        "{}",
        "Escribí 'exit' o 'quit' para salir, '/reset' para empezar de nuevo\n".bright_black()
    );

    if config.api_key.is_none() {
        println!(
            "{}",
            "⚠️  No encontré GROQ_API_KEY en el entorno. ¿Creaste el archivo .env?".yellow()
        );
    }

    if cli.verbose {
        println!("{}", format!("🔧 URL: {}", config.api_url).bright_black());
        println!("{}", format!("🔧 Modelo: {}", config.model).bright_black());
        println!(
            "{}",
            format!(
                "🔧 Ventana de historial: {} turnos",
                config.history_window
            )
            .bright_black()
        );
    }

    let client = GroqClient::new(config);
    let mut conversation = Conversation::new();

    // Show the canned greeting the conversation starts with
    if let Some(greeting) = conversation.visible().next() {
        print_assistant_turn(&greeting.content);
    }

    let mut rl = DefaultEditor::new()?;
    loop {
        let line = match rl.readline("► ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }
        if input == "/reset" {
            conversation.reset();
            println!("{}", "✨ Conversación reiniciada".bright_magenta());
            if let Some(greeting) = conversation.visible().next() {
                print_assistant_turn(&greeting.content);
            }
            continue;
        }

        let _ = rl.add_history_entry(input);
        conversation.push_user(input);

        println!("{}", "🐱 Escribiendo...".bright_black());
        let reply = client.reply(conversation.messages()).await;
        print_assistant_turn(&reply);
        conversation.push_assistant(reply);
    }

    println!("{}", "¡Chau! 😺💖".bright_magenta());
    Ok(())
}

fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }
    if let Some(api_url) = &cli.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.max_tokens = max_tokens;
    }
    config
}

fn print_assistant_turn(text: &str) {
    let cue = cue::classify(text);
    println!(
        "{} {}",
        format!("{} KITTY AI:", cue.emoji()).bright_magenta().bold(),
        text
    );
}
