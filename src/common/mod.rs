pub mod commands;
pub mod events;
pub mod types;

pub use commands::BotCommand;
pub use events::BotEvent;
pub use types::{ChatMessage, Role};
