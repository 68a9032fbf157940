use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two languages the assistant speaks. English is the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Malayalam,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Malayalam,
            Language::Malayalam => Language::English,
        }
    }

    /// Picks the variant of a bilingual pair written for this language.
    pub fn pick<T>(self, english: T, malayalam: T) -> T {
        match self {
            Language::English => english,
            Language::Malayalam => malayalam,
        }
    }

    pub fn label(self) -> &'static str {
        self.pick("🇬🇧 English", "🇮🇳 മലയാളം")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pick("english", "malayalam"))
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "malayalam" | "ml" => Ok(Language::Malayalam),
            other => Err(anyhow::anyhow!("unknown language: {other}")),
        }
    }
}
