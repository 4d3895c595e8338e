use chrono::{DateTime, Utc};

use crate::common::{ChatMessage, Role};

/// Debug event để hiển thị hoạt động gần đây của widget
#[derive(Debug, Clone)]
pub struct DebugEvent {
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    pub message: String,
}

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    pub bot_typing: bool,
    pub debug_events: Vec<DebugEvent>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input_text: String::new(),
            bot_typing: false,
            debug_events: Vec::new(),
        }
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        let (event_type, summary) = match message.role {
            Role::User => ("MESSAGE_SENT", format!("User: {}", message.content)),
            Role::Bot => ("REPLY_RECEIVED", format!("Bot: {}", message.content)),
        };
        self.add_debug_event(event_type.to_string(), summary);
        self.messages.push(message);
    }

    pub fn set_typing(&mut self, typing: bool) {
        if typing && !self.bot_typing {
            self.add_debug_event(
                "TYPING_STARTED".to_string(),
                "Bot is composing a reply".to_string(),
            );
        }
        self.bot_typing = typing;
    }

    pub fn message_count(&self, role: Role) -> usize {
        self.messages
            .iter()
            .filter(|message| message.role == role)
            .count()
    }

    pub fn add_debug_event(&mut self, event_type: String, message: String) {
        let event = DebugEvent {
            timestamp: Utc::now(),
            event_type,
            message,
        };
        self.debug_events.push(event);

        // Giữ tối đa 100 events để không chiếm quá nhiều bộ nhớ
        if self.debug_events.len() > 100 {
            self.debug_events.remove(0);
        }
    }
}
