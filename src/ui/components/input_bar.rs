use eframe::egui;

pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> Option<String> {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.text_edit_singleline(input_text);
        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    if send {
        return take_outgoing(input_text);
    }

    None
}

/// Lấy nội dung để gửi. Input rỗng hoặc toàn whitespace thì không gửi và giữ nguyên ô nhập.
fn take_outgoing(input_text: &mut String) -> Option<String> {
    if input_text.trim().is_empty() {
        return None;
    }

    let message = input_text.clone();
    input_text.clear();
    Some(message)
}
