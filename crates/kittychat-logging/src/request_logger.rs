use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use kittychat_models::ChatRequest;

use crate::{get_logs_dir, safe_truncate};

/// Cap on the logged request body, in characters. Long histories would
/// otherwise make the dump files unwieldy.
const MAX_LOGGED_BODY_CHARS: usize = 5000;

/// Log HTTP request to a file under ~/.kittychat/logs for persistent debugging
pub fn log_request_to_file(url: &str, request: &ChatRequest, api_key: &str) -> Result<PathBuf> {
    let logs_dir = get_logs_dir()?;
    write_request_log(&logs_dir, url, request, api_key)
}

/// Write the request dump into the given directory, returning the file path
pub fn write_request_log(
    logs_dir: &Path,
    url: &str,
    request: &ChatRequest,
    api_key: &str,
) -> Result<PathBuf> {
    let timestamp = chrono::Utc::now().format("%Y%m%d-%H%M%S%.3f");
    let model_name = request.model.replace('/', "-");
    let filename = format!("req-{}-{}.txt", timestamp, model_name);
    let file_path = logs_dir.join(filename);

    let mut log_content = String::new();
    log_content.push_str("HTTP REQUEST LOG\n");
    log_content.push_str("================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", timestamp));
    log_content.push_str(&format!("Model: {}\n\n", request.model));

    // Parse URL to show host and port
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        log_content.push_str(&format!("URL: {}\n", url));
        log_content.push_str(&format!(
            "Host: {}\n",
            parsed_url.host_str().unwrap_or("unknown")
        ));
        log_content.push_str(&format!(
            "Port: {}\n",
            parsed_url.port().map(|p| p.to_string()).unwrap_or_else(|| {
                if parsed_url.scheme() == "https" {
                    "443 (default)".to_string()
                } else {
                    "80 (default)".to_string()
                }
            })
        ));
        log_content.push_str(&format!("Scheme: {}\n\n", parsed_url.scheme()));
    } else {
        log_content.push_str(&format!("URL: {}\n\n", url));
    }

    log_content.push_str("Headers:\n");
    log_content.push_str("  Content-Type: application/json\n");
    // Never log the full key
    log_content.push_str(&format!(
        "  Authorization: Bearer {}***\n\n",
        &api_key.chars().take(10).collect::<String>()
    ));

    log_content.push_str("Request Body:\n");
    match serde_json::to_string_pretty(&request) {
        Ok(json) => {
            if json.chars().count() > MAX_LOGGED_BODY_CHARS {
                log_content.push_str(&safe_truncate(&json, MAX_LOGGED_BODY_CHARS));
                log_content.push_str(&format!(
                    "\n... (truncated, total {} bytes)\n",
                    json.len()
                ));
            } else {
                log_content.push_str(&json);
                log_content.push('\n');
            }
        }
        Err(e) => {
            log_content.push_str(&format!("Error serializing request: {}\n", e));
        }
    }

    fs::write(&file_path, log_content)?;
    Ok(file_path)
}
