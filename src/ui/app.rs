/// Main application structure: a farm overview with the chat on top of it
use super::chat::{self, PanelAction};
use super::fonts;
use crate::chat::{ChatShell, Wake};
use crate::config::Config;
use eframe::egui;
use std::sync::Arc;

pub struct KrishiApp {
    pub config: Config,
    pub shell: ChatShell,
    seen_messages: usize,
}

impl KrishiApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        fonts::install_malayalam(&cc.egui_ctx, config.malayalam_font.as_deref());

        // Timer tasks repaint the UI when they post an event
        let ctx = cc.egui_ctx.clone();
        let wake: Wake = Arc::new(move || ctx.request_repaint());
        let mut shell = ChatShell::new(config.farm_context(), config.timing(), config.language, wake);
        shell.open();

        Self {
            config,
            shell,
            seen_messages: 0,
        }
    }

    fn draw_farm_overview(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let context = self.shell.context();
            ui.heading(format!("🌾 {}", context.farmer_name));
            ui.add_space(8.0);

            if context.current_crops.is_empty() {
                ui.label("No crops added yet.");
            }
            for crop in &context.current_crops {
                let planted = crop.planting_date.as_deref().unwrap_or("date unknown");
                ui.label(format!("• {} ({}), planted {}", crop.name, crop.status, planted));
            }

            ui.add_space(16.0);
            if !self.shell.is_open() && ui.button(format!("💬 Ask {}", self.config.assistant_name)).clicked() {
                self.shell.open();
            }
        });
    }

    fn draw_chat(&mut self, ctx: &egui::Context) {
        let title = self.config.assistant_name.clone();
        let Some(conversation) = self.shell.conversation_mut() else {
            self.seen_messages = 0;
            return;
        };

        // Scroll down only when a message was added since the last frame
        let count = conversation.messages().len();
        let scroll_to_end = count != self.seen_messages;
        self.seen_messages = count;

        for action in chat::show(ctx, &title, conversation, scroll_to_end) {
            match action {
                PanelAction::Submit => {
                    self.shell.submit();
                }
                PanelAction::ToggleLanguage => self.shell.toggle_language(),
                PanelAction::ToggleRecording => self.shell.toggle_recording(),
                PanelAction::Close => self.shell.close(),
            }
        }
    }

    fn check_close_chat(&mut self, ctx: &egui::Context) {
        if self.shell.is_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.shell.close();
        }
    }
}

impl eframe::App for KrishiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply replies and voice captures whose timers have fired
        if self.shell.pump() > 0 {
            ctx.request_repaint();
        }

        // Farm overview underneath, chat window on top
        self.draw_farm_overview(ctx);
        self.draw_chat(ctx);

        // Esc closes the chat
        self.check_close_chat(ctx);
    }
}
