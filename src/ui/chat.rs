/// Chat window rendering. Drawing only: user intent comes back as
/// [`PanelAction`]s for the app to apply to the shell.
use crate::chat::{ChatMessage, Conversation};
use eframe::egui;

pub const CHAT_WINDOW_WIDTH: f32 = 380.0;
pub const CHAT_WINDOW_HEIGHT: f32 = 600.0;
const BUBBLE_WIDTH_RATIO: f32 = 0.85;

const BRAND_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const ASSISTANT_FILL: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Submit,
    ToggleLanguage,
    ToggleRecording,
    Close,
}

/// Draws the chat window for `conversation` and returns what the user did
/// this frame. `scroll_to_end` jumps to the newest message.
pub fn show(
    ctx: &egui::Context,
    title: &str,
    conversation: &mut Conversation,
    scroll_to_end: bool,
) -> Vec<PanelAction> {
    let mut actions = Vec::new();

    egui::Window::new(title)
        .id(egui::Id::new("krishi_chat_window"))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .fixed_size([CHAT_WINDOW_WIDTH, CHAT_WINDOW_HEIGHT])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            draw_header(ui, title, &mut actions);
            ui.separator();

            // Leave room below the messages for the input row and footer
            let footer_height = 96.0;
            let messages_height = (ui.available_height() - footer_height).max(120.0);
            draw_messages(ui, conversation, messages_height, scroll_to_end);

            ui.separator();
            draw_input_row(ui, conversation, &mut actions);

            if conversation.is_recording() {
                ui.vertical_centered(|ui| {
                    ui.colored_label(egui::Color32::from_rgb(220, 38, 38), "● ● ●  Recording... Speak now");
                });
            }

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "Language: {} • Crop-specific AI guidance",
                        conversation.language().label()
                    ))
                    .small()
                    .color(MUTED_TEXT),
                );
            });
        });

    actions
}

fn draw_header(ui: &mut egui::Ui, title: &str, actions: &mut Vec<PanelAction>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("🤖").size(22.0));
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(format!("{title} ✨")).strong());
            ui.label(egui::RichText::new("Expert Farming Assistant").small().color(BRAND_GREEN));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").on_hover_text("Close").clicked() {
                actions.push(PanelAction::Close);
            }
            if ui.button("🌐").on_hover_text("Switch Language").clicked() {
                actions.push(PanelAction::ToggleLanguage);
            }
        });
    });
}

fn draw_messages(ui: &mut egui::Ui, conversation: &Conversation, height: f32, scroll_to_end: bool) {
    egui::ScrollArea::vertical()
        .id_salt("krishi_chat_messages")
        .max_height(height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in conversation.messages() {
                draw_bubble(ui, message);
                ui.add_space(8.0);
            }

            if conversation.is_thinking() {
                let typing = conversation
                    .language()
                    .pick("Krishi Sakhi is typing...", "കൃഷി സഖി ടൈപ്പ് ചെയ്യുന്നു...");
                ui.label(egui::RichText::new(format!("⏳ {typing}")).italics().color(MUTED_TEXT));
            }

            if scroll_to_end {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}

fn draw_bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let (layout, fill, text_color) = if message.is_user() {
        (egui::Layout::right_to_left(egui::Align::TOP), BRAND_GREEN, egui::Color32::WHITE)
    } else {
        (
            egui::Layout::left_to_right(egui::Align::TOP),
            ASSISTANT_FILL,
            egui::Color32::from_rgb(17, 24, 39),
        )
    };
    let max_width = ui.available_width() * BUBBLE_WIDTH_RATIO;

    ui.with_layout(layout, |ui| {
        egui::Frame::NONE
            .fill(fill)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&message.text).size(13.0).color(text_color));
                    ui.label(
                        egui::RichText::new(message.time_label())
                            .small()
                            .color(text_color.gamma_multiply(0.7)),
                    );
                });
            });
    });
}

fn draw_input_row(ui: &mut egui::Ui, conversation: &mut Conversation, actions: &mut Vec<PanelAction>) {
    ui.horizontal(|ui| {
        let placeholder = conversation.placeholder();
        let response = ui.add(
            egui::TextEdit::singleline(&mut conversation.input)
                .hint_text(placeholder)
                .desired_width(ui.available_width() - 80.0),
        );
        // Enter sends, same as the ➤ button
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions.push(PanelAction::Submit);
        }

        let mic = if conversation.is_recording() { "🔇" } else { "🎤" };
        if ui.button(mic).clicked() {
            actions.push(PanelAction::ToggleRecording);
        }

        if ui
            .add_enabled(conversation.can_submit(), egui::Button::new("➤").fill(BRAND_GREEN))
            .clicked()
        {
            actions.push(PanelAction::Submit);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::farm::FarmContext;
    use crate::language::Language;

    #[test]
    fn idle_frame_produces_no_actions() {
        let ctx = egui::Context::default();
        let mut conversation = Conversation::start(&FarmContext::default(), Language::Malayalam);
        conversation.input = "rice".to_string();
        let mut actions = Vec::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            actions = show(ctx, "Krishi Sakhi AI", &mut conversation, true);
        });

        assert!(actions.is_empty());
        assert_eq!(conversation.input, "rice");
    }
}
