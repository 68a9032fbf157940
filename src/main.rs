use anyhow::Context;
use eframe::NativeOptions;
use krishi_sakhi::config::Config;
use krishi_sakhi::logger;
use krishi_sakhi::ui::KrishiApp;

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    logger::init(&config.log_dir)?;
    log::info!("🚀 Krishi Sakhi started");

    // Timers for the chat are tokio tasks spawned from the UI thread
    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let _guard = rt.enter();

    log::info!(
        "📁 Configuration loaded (language: {}, context file: {:?})",
        config.language,
        config.context_file
    );
    let app_name = config.assistant_name.clone();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app_name.clone())
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(KrishiApp::new(cc, config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI loop failed: {e}"))
}
