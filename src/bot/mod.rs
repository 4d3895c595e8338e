pub mod responder;
pub mod responses;

pub use responder::{BotResponder, DEFAULT_REPLY_DELAY_MS, ReplyHook};
pub use responses::ResponseTable;
