use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::common::{BotCommand, BotEvent, ChatMessage, Role};

use super::responses::ResponseTable;

/// Độ trễ mặc định trước khi bot trả lời (ms).
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// Hook cho bên nhúng: nhận text của mỗi câu trả lời mô phỏng sau khi nó được tạo.
pub type ReplyHook = Arc<dyn Fn(&str) + Send + Sync>;

pub struct BotResponder {
    event_sender: mpsc::Sender<BotEvent>,
    command_receiver: mpsc::Receiver<BotCommand>,
    responses: ResponseTable,
    reply_delay: Duration,
    reply_hook: Option<ReplyHook>,
}

impl BotResponder {
    pub fn new(
        event_sender: mpsc::Sender<BotEvent>,
        command_receiver: mpsc::Receiver<BotCommand>,
        responses: ResponseTable,
        reply_delay: Duration,
        reply_hook: Option<ReplyHook>,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
            responses,
            reply_delay,
            reply_hook,
        }
    }

    pub async fn run(mut self) {
        log::info!("Responder event loop started");

        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command).await;
        }

        log::info!("Command channel closed, responder stopped");
    }

    async fn handle_command(&mut self, command: BotCommand) {
        match command {
            BotCommand::SendMessage(content) => self.handle_send(content).await,
        }
    }

    async fn handle_send(&mut self, content: String) {
        // Tin nhắn rỗng hoặc toàn whitespace: bỏ qua trong im lặng
        if content.trim().is_empty() {
            return;
        }

        let user_msg = ChatMessage {
            id: Uuid::new_v4().to_string(),
            content: content.clone(),
            role: Role::User,
            timestamp: Utc::now().timestamp(),
        };

        if let Err(err) = self
            .event_sender
            .send(BotEvent::UserMessage(user_msg))
            .await
        {
            log::warn!("Failed to notify UI about user message: {err:?}");
            return;
        }

        let _ = self.event_sender.send(BotEvent::TypingStarted).await;

        // Tra bảng theo nguyên văn input (lookup tự lowercase, không trim)
        let reply_text = self.responses.lookup(&content).to_string();

        // Mỗi lần gửi có một timer one-shot riêng; timer đang chờ không bị hủy
        let event_sender = self.event_sender.clone();
        let reply_delay = self.reply_delay;
        let reply_hook = self.reply_hook.clone();

        tokio::spawn(async move {
            tokio::time::sleep(reply_delay).await;

            let reply = ChatMessage {
                id: Uuid::new_v4().to_string(),
                content: reply_text,
                role: Role::Bot,
                timestamp: Utc::now().timestamp(),
            };

            let reply_content = reply.content.clone();
            if let Err(err) = event_sender.send(BotEvent::BotReply(reply)).await {
                log::warn!("Failed to deliver bot reply: {err:?}");
                return;
            }

            if let Some(hook) = reply_hook.as_ref() {
                hook(&reply_content);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tokio::time::timeout;

    use super::*;

    const TEST_DELAY: Duration = Duration::from_millis(20);
    const RECV_TIMEOUT: Duration = Duration::from_secs(2);

    fn spawn_responder(
        hook: Option<ReplyHook>,
    ) -> (mpsc::Sender<BotCommand>, mpsc::Receiver<BotEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(16);
        let responder = BotResponder::new(
            event_tx,
            cmd_rx,
            ResponseTable::builtin(),
            TEST_DELAY,
            hook,
        );
        tokio::spawn(responder.run());
        (cmd_tx, event_rx)
    }

    async fn next_event(event_rx: &mut mpsc::Receiver<BotEvent>) -> BotEvent {
        timeout(RECV_TIMEOUT, event_rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event channel closed")
    }

    async fn next_reply(event_rx: &mut mpsc::Receiver<BotEvent>) -> ChatMessage {
        loop {
            if let BotEvent::BotReply(message) = next_event(event_rx).await {
                return message;
            }
        }
    }

    #[tokio::test]
    async fn send_emits_user_message_typing_then_reply() {
        let (cmd_tx, mut event_rx) = spawn_responder(None);
        cmd_tx
            .send(BotCommand::SendMessage("hello".into()))
            .await
            .unwrap();

        match next_event(&mut event_rx).await {
            BotEvent::UserMessage(message) => {
                assert_eq!(message.role, Role::User);
                assert_eq!(message.content, "hello");
            }
            other => panic!("expected user message first, got {other:?}"),
        }

        assert!(matches!(
            next_event(&mut event_rx).await,
            BotEvent::TypingStarted
        ));

        match next_event(&mut event_rx).await {
            BotEvent::BotReply(message) => {
                assert_eq!(message.role, Role::Bot);
                assert_eq!(message.content, "Hi there! How can I help you today?");
            }
            other => panic!("expected bot reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn uppercase_input_matches_table_entry() {
        let (cmd_tx, mut event_rx) = spawn_responder(None);
        cmd_tx
            .send(BotCommand::SendMessage("HELP".into()))
            .await
            .unwrap();

        let reply = next_reply(&mut event_rx).await;
        assert_eq!(
            reply.content,
            "I can help you with various tasks. Just let me know what you need!"
        );
    }

    #[tokio::test]
    async fn unknown_input_gets_default_reply() {
        let (cmd_tx, mut event_rx) = spawn_responder(None);
        cmd_tx
            .send(BotCommand::SendMessage("xyz".into()))
            .await
            .unwrap();

        let reply = next_reply(&mut event_rx).await;
        assert_eq!(
            reply.content,
            "I understand. Is there anything specific you'd like to know?"
        );
    }

    #[tokio::test]
    async fn whitespace_only_input_is_ignored() {
        let (cmd_tx, mut event_rx) = spawn_responder(None);
        cmd_tx
            .send(BotCommand::SendMessage("   ".into()))
            .await
            .unwrap();
        // Gửi tiếp một tin hợp lệ: sự kiện đầu tiên phải thuộc về tin này
        cmd_tx
            .send(BotCommand::SendMessage("hello".into()))
            .await
            .unwrap();

        match next_event(&mut event_rx).await {
            BotEvent::UserMessage(message) => assert_eq!(message.content, "hello"),
            other => panic!("whitespace send leaked an event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn reply_hook_receives_reply_text() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let hook: ReplyHook = Arc::new(move |text| {
            sink.lock().unwrap().push(text.to_string());
        });

        let (cmd_tx, mut event_rx) = spawn_responder(Some(hook));
        cmd_tx
            .send(BotCommand::SendMessage("hello".into()))
            .await
            .unwrap();
        let _ = next_reply(&mut event_rx).await;

        // Hook chạy ngay sau khi event được gửi; chờ tới khi nó kịp ghi nhận
        for _ in 0..50 {
            if !seen.lock().unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let recorded = seen.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0], "Hi there! How can I help you today?");
    }

    #[tokio::test]
    async fn overlapping_sends_each_get_a_reply() {
        let (cmd_tx, mut event_rx) = spawn_responder(None);
        cmd_tx
            .send(BotCommand::SendMessage("hello".into()))
            .await
            .unwrap();
        cmd_tx
            .send(BotCommand::SendMessage("how are you".into()))
            .await
            .unwrap();

        let first = next_reply(&mut event_rx).await;
        let second = next_reply(&mut event_rx).await;
        let mut contents = vec![first.content, second.content];
        contents.sort();

        assert_eq!(
            contents,
            [
                "Hi there! How can I help you today?",
                "I'm doing well, thank you for asking!"
            ]
        );
    }
}
