use chrono::{DateTime, Local};
use eframe::egui;

use crate::common::{ChatMessage, Role};

pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage], bot_typing: bool) {
    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                render_row(ui, message);
            }

            if bot_typing {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new("Assistant is typing...").weak());
                });
            }
        });
}

fn render_row(ui: &mut egui::Ui, message: &ChatMessage) {
    let (label, color) = match message.role {
        Role::User => ("You", egui::Color32::LIGHT_BLUE),
        Role::Bot => ("Assistant", egui::Color32::LIGHT_GREEN),
    };

    ui.horizontal(|ui| {
        ui.colored_label(color, format!("{label}:"));
        ui.label(&message.content);
        ui.label(egui::RichText::new(format_time(message.timestamp)).weak());
    });
}

/// Đổi unix timestamp sang giờ local dạng HH:MM
fn format_time(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|time| time.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_default()
}
