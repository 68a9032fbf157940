use eframe::egui;
use std::path::Path;
use std::sync::Arc;

const MALAYALAM_FONT: &str = "malayalam";

/// egui's bundled fonts have no Malayalam glyphs, so an external font is
/// appended as a fallback to every family when one is configured.
pub fn install_malayalam(ctx: &egui::Context, path: Option<&Path>) {
    let Some(path) = path else {
        log::info!("🔤 No Malayalam font configured, Malayalam text may not render");
        return;
    };

    match std::fs::read(path) {
        Ok(bytes) => {
            let mut fonts = egui::FontDefinitions::default();
            fonts
                .font_data
                .insert(MALAYALAM_FONT.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts.families.entry(family).or_default().push(MALAYALAM_FONT.to_owned());
            }
            ctx.set_fonts(fonts);
            log::info!("🔤 Malayalam font loaded from {}", path.display());
        }
        Err(e) => {
            log::warn!("⚠️ Cannot read Malayalam font {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_font_is_not_fatal() {
        let ctx = egui::Context::default();
        install_malayalam(&ctx, Some(Path::new("/definitely/not/here.ttf")));
        install_malayalam(&ctx, None);
    }
}
