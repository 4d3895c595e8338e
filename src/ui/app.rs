use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{BotCommand, BotEvent};

use super::components::{chat_area, debug_panel, input_bar};
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<BotCommand>,
    event_receiver: mpsc::Receiver<BotEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<BotCommand>,
        event_receiver: mpsc::Receiver<BotEvent>,
    ) -> Self {
        Self {
            state: AppState::new(),
            command_sender,
            event_receiver,
        }
    }

    fn handle_bot_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                BotEvent::UserMessage(message) => self.state.push_message(message),
                BotEvent::TypingStarted => self.state.set_typing(true),
                BotEvent::BotReply(message) => {
                    self.state.push_message(message);
                    self.state.set_typing(false);
                }
            }
        }
    }

    fn send_command(&mut self, payload: String) {
        if let Err(err) = self
            .command_sender
            .try_send(BotCommand::SendMessage(payload))
        {
            log::warn!("Failed to send command to responder: {err}");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_bot_events();

        egui::SidePanel::right("debug_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                debug_panel::render(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("AI Assistant");
            ui.separator();
            chat_area::render(ui, &self.state.messages, self.state.bot_typing);

            ui.separator();
            if let Some(content) = input_bar::render(ui, &mut self.state.input_text) {
                self.send_command(content);
            }
        });

        ctx.request_repaint();
    }
}
