// Logging module - request logging for persistent debugging
pub mod request_logger;

use std::path::PathBuf;

use anyhow::{Context, Result};

pub use request_logger::{log_request_to_file, write_request_log};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = if max_chars >= 3 { max_chars - 3 } else { 0 };
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the base kittychat directory (~/.kittychat)
pub fn get_kittychat_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let kittychat_dir = PathBuf::from(home_dir).join(".kittychat");

    if !kittychat_dir.exists() {
        std::fs::create_dir_all(&kittychat_dir)
            .context("Failed to create kittychat directory")?;
    }

    Ok(kittychat_dir)
}

/// Get or create the logs directory (~/.kittychat/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_kittychat_dir()?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir)
            .context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}

#[cfg(test)]
mod tests {
    use super::safe_truncate;

    #[test]
    fn test_safe_truncate_short_string_unchanged() {
        assert_eq!(safe_truncate("hola", 10), "hola");
    }

    #[test]
    fn test_safe_truncate_respects_char_boundaries() {
        // Multibyte content must not panic or split a char
        let s = "😺💖✨😺💖✨😺💖✨";
        let out = safe_truncate(s, 6);
        assert_eq!(out, "😺💖✨...");
    }
}
