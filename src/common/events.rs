use super::types::ChatMessage;

/// Sự kiện từ engine trả lời gửi lên UI.
#[derive(Debug, Clone)]
pub enum BotEvent {
    /// Tin nhắn người dùng vừa gửi, echo lại để UI hiển thị ngay
    UserMessage(ChatMessage),
    /// Bot bắt đầu "gõ" câu trả lời
    TypingStarted,
    /// Câu trả lời mô phỏng sau khoảng delay
    BotReply(ChatMessage),
}
