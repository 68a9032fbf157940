use crate::chat::Timing;
use crate::farm::{FarmContext, DEFAULT_FARMER_NAME};
use crate::language::Language;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub assistant_name: String,
    pub farmer_name: String,
    pub context_file: Option<PathBuf>,
    pub language: Language,
    pub thinking_delay: Duration,
    pub voice_delay: Duration,
    pub malayalam_font: Option<PathBuf>,
    pub log_dir: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }
}

impl Config {
    /// Builds the config from any key/value source. Unparsable values fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let farmer_name = lookup("KRISHI_FARMER_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FARMER_NAME.to_string());

        let language = lookup("KRISHI_LANGUAGE")
            .and_then(|v| v.parse::<Language>().ok())
            .unwrap_or_default();

        let millis = |key: &str, default: u64| {
            Duration::from_millis(lookup(key).and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default))
        };
        let defaults = Timing::default();
        let thinking_delay = millis("KRISHI_THINKING_DELAY_MS", defaults.thinking_delay.as_millis() as u64);
        let voice_delay = millis("KRISHI_VOICE_DELAY_MS", defaults.voice_delay.as_millis() as u64);

        Self {
            assistant_name: "Krishi Sakhi AI".to_string(),
            farmer_name,
            context_file: lookup("KRISHI_CONTEXT_FILE").map(PathBuf::from),
            language,
            thinking_delay,
            voice_delay,
            malayalam_font: lookup("KRISHI_MALAYALAM_FONT").map(PathBuf::from),
            log_dir: lookup("KRISHI_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            // tall enough for a phone-sized chat panel
            window_width: 420.0,
            window_height: 640.0,
        }
    }

    pub fn timing(&self) -> Timing {
        Timing {
            thinking_delay: self.thinking_delay,
            voice_delay: self.voice_delay,
        }
    }

    /// Farm data for the chat. A broken context file is logged and replaced
    /// by an empty farm so the assistant still opens.
    pub fn farm_context(&self) -> FarmContext {
        let mut context = match &self.context_file {
            Some(path) => FarmContext::load(path).unwrap_or_else(|e| {
                log::error!("❌ Farm context unavailable, starting empty: {:#}", e);
                FarmContext::default()
            }),
            None => FarmContext::default(),
        };

        if context.farmer_name == DEFAULT_FARMER_NAME {
            context.farmer_name = self.farmer_name.clone();
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = config(&[]);
        assert_eq!(cfg.farmer_name, "Farmer");
        assert_eq!(cfg.language, Language::English);
        assert_eq!(cfg.timing(), Timing::default());
        assert_eq!(cfg.log_dir, PathBuf::from("logs"));
        assert!(cfg.context_file.is_none());
        assert!(cfg.malayalam_font.is_none());
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("KRISHI_FARMER_NAME", "Meera Thomas"),
            ("KRISHI_LANGUAGE", "malayalam"),
            ("KRISHI_THINKING_DELAY_MS", "250"),
            ("KRISHI_VOICE_DELAY_MS", "1500"),
            ("KRISHI_LOG_DIR", "/tmp/krishi"),
        ]);
        assert_eq!(cfg.farmer_name, "Meera Thomas");
        assert_eq!(cfg.language, Language::Malayalam);
        assert_eq!(cfg.thinking_delay, Duration::from_millis(250));
        assert_eq!(cfg.voice_delay, Duration::from_millis(1500));
        assert_eq!(cfg.log_dir, PathBuf::from("/tmp/krishi"));
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config(&[
            ("KRISHI_LANGUAGE", "klingon"),
            ("KRISHI_THINKING_DELAY_MS", "soon"),
            ("KRISHI_FARMER_NAME", "   "),
        ]);
        assert_eq!(cfg.language, Language::English);
        assert_eq!(cfg.thinking_delay, Duration::from_millis(800));
        assert_eq!(cfg.farmer_name, "Farmer");
    }

    #[test]
    fn context_file_wins_over_configured_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"farmerName": "Ravi", "currentCrops": [{{"name": "Rice"}}]}}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cfg = config(&[("KRISHI_CONTEXT_FILE", &path), ("KRISHI_FARMER_NAME", "Meera")]);
        let context = cfg.farm_context();
        assert_eq!(context.farmer_name, "Ravi");
        assert_eq!(context.current_crops[0].name, "Rice");
    }

    #[test]
    fn configured_name_fills_missing_one() {
        let cfg = config(&[("KRISHI_FARMER_NAME", "Meera")]);
        assert_eq!(cfg.farm_context().farmer_name, "Meera");
    }

    #[test]
    fn broken_context_file_gives_empty_farm() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let context = config(&[("KRISHI_CONTEXT_FILE", &path)]).farm_context();
        assert!(context.current_crops.is_empty());
        assert_eq!(context.farmer_name, "Farmer");
    }
}
