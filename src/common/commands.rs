/// Lệnh UI gửi xuống engine trả lời.
#[derive(Debug, Clone)]
pub enum BotCommand {
    SendMessage(String),
}
