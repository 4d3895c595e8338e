mod bot;
mod common;
mod config;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;

use bot::{BotResponder, ReplyHook, ResponseTable};
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "rust_assistant_chat",
    version,
    about = "Chat widget with a simulated assistant"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    run_widget(app_config).await
}

async fn run_widget(app_config: config::AppConfig) -> Result<(), eframe::Error> {
    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Bot
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Bot -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // Bên nhúng nhận text của mỗi câu trả lời mô phỏng; ở đây chỉ ghi log
    let reply_hook: ReplyHook = Arc::new(|reply| {
        log::info!("Chatbot message: {reply}");
    });

    // 2. Khởi chạy responder (Chạy ngầm)
    let reply_delay = Duration::from_millis(app_config.reply_delay_ms);
    tokio::spawn(async move {
        let responder = BotResponder::new(
            event_tx,
            cmd_rx,
            ResponseTable::builtin(),
            reply_delay,
            Some(reply_hook),
        );
        responder.run().await;
    });

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let window_title = app_config.window_title.clone();

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!(
                "Chat widget started (reply delay {}ms)",
                reply_delay.as_millis()
            );

            Ok(Box::new(ChatApp::new(cc, cmd_tx.clone(), event_receiver)))
        }),
    )
}
