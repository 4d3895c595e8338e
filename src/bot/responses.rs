use std::collections::HashMap;

/// Bảng câu trả lời mẫu, đứng thay cho backend sinh câu trả lời thật.
pub struct ResponseTable {
    entries: HashMap<String, String>,
    default_reply: String,
}

impl ResponseTable {
    /// Bảng builtin với các câu trả lời cố định.
    pub fn builtin() -> Self {
        let entries = HashMap::from([
            (
                "hello".to_string(),
                "Hi there! How can I help you today?".to_string(),
            ),
            (
                "how are you".to_string(),
                "I'm doing well, thank you for asking!".to_string(),
            ),
            (
                "help".to_string(),
                "I can help you with various tasks. Just let me know what you need!".to_string(),
            ),
        ]);

        Self {
            entries,
            default_reply: "I understand. Is there anything specific you'd like to know?"
                .to_string(),
        }
    }

    /// Tra theo bản lowercase của input (không trim), rơi về câu mặc định nếu không khớp.
    pub fn lookup(&self, input: &str) -> &str {
        self.entries
            .get(&input.to_lowercase())
            .unwrap_or(&self.default_reply)
    }
}
