/// Logging setup: appends to `<log_dir>/krishi_sakhi.log`
use anyhow::{Context, Result};
use log::LevelFilter;
use std::io::Write;
use std::path::Path;

pub const LOG_FILE: &str = "krishi_sakhi.log";

pub fn init(log_dir: &Path) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // GUI crates are far too chatty at info
        builder.filter_module("eframe", LevelFilter::Warn);
        builder.filter_module("egui", LevelFilter::Warn);
        builder.filter_module("wgpu", LevelFilter::Warn);
    }

    // [HH:MM:SS LEVEL] target - message
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("cannot create log directory {}", log_dir.display()))?;

    let log_path = log_dir.join(LOG_FILE);
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("cannot open log file {}", log_path.display()))?;

    builder
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;

    log::info!("Logging initialised ✓");
    Ok(())
}
