//! Krishi Sakhi: a bilingual (English/Malayalam) farming assistant chat.
//!
//! [`ai::KrishiSakhi`] answers questions from static crop knowledge,
//! [`chat::ChatShell`] runs the conversation with its typing delay, and
//! [`ui`] draws it with egui.

pub mod ai;
pub mod chat;
pub mod config;
pub mod farm;
pub mod language;
pub mod logger;
pub mod ui;

pub use ai::KrishiSakhi;
pub use config::Config;
pub use farm::{CropRecord, FarmContext};
pub use language::Language;
