use eframe::egui;

use crate::common::Role;
use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("Debug Info");
    ui.separator();

    // Bộ đếm tin nhắn theo vai trò
    ui.horizontal(|ui| {
        ui.label("User messages:");
        ui.label(format!("{}", state.message_count(Role::User)));
    });
    ui.horizontal(|ui| {
        ui.label("Bot replies:");
        ui.label(format!("{}", state.message_count(Role::Bot)));
    });
    ui.horizontal(|ui| {
        ui.label("Bot typing:");
        ui.label(if state.bot_typing { "yes" } else { "no" });
    });

    ui.separator();

    // Hiển thị log events gần đây
    ui.label("Recent Events:");
    egui::ScrollArea::vertical()
        .max_height(200.0)
        .show(ui, |ui| {
            for event in state.debug_events.iter().rev().take(20) {
                let time_str = event.timestamp.format("%H:%M:%S");
                let color = match event.event_type.as_str() {
                    "MESSAGE_SENT" => egui::Color32::LIGHT_BLUE,
                    "REPLY_RECEIVED" => egui::Color32::GREEN,
                    "TYPING_STARTED" => egui::Color32::YELLOW,
                    _ => egui::Color32::WHITE,
                };

                ui.horizontal(|ui| {
                    ui.colored_label(color, format!("[{}]", time_str));
                    ui.label(&event.message);
                });
            }
        });
}
