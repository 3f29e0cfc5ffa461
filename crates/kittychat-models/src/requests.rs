use serde::Serialize;

use super::types::Message;

/// Chat completions API request structure
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_all_sampling_fields() {
        let request = ChatRequest {
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.6,
            max_tokens: 200,
            messages: vec![Message::system("sos una gatita")],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama-3.1-8b-instant");
        assert_eq!(value["temperature"], 0.6);
        assert_eq!(value["max_tokens"], 200);
        assert_eq!(value["messages"][0]["role"], "system");
    }
}
